//! Path Arithmetic Tests

use alias_resolver::path::{
    clean_path, is_local_relative_path, is_rooted, normalize_separators, relative,
    to_relative_import, CleanPath, PathRoot,
};

mod cleaning_tests {
    use super::*;

    #[test]
    fn should_normalize_separators() {
        assert_eq!(normalize_separators("a\\b\\c"), "a/b/c");
        assert_eq!(normalize_separators("a/b"), "a/b");
    }

    #[test]
    fn should_clean_posix_paths() {
        assert_eq!(clean_path("/a/./b//c/../d"), "/a/b/d");
        assert_eq!(clean_path("/../a"), "/a");
        assert_eq!(clean_path("/"), "/");
    }

    #[test]
    fn should_clean_windows_paths() {
        assert_eq!(clean_path("C:\\a\\b\\..\\c"), "C:/a/c");
        assert_eq!(clean_path("c:/a"), "C:/a");
    }

    #[test]
    fn should_keep_leading_parent_segments_on_unrooted_paths() {
        assert_eq!(clean_path("../a/../../b"), "../../b");
        assert_eq!(clean_path("a/.."), ".");
    }

    #[test]
    fn should_parse_roots() {
        assert_eq!(CleanPath::parse("/a").root, PathRoot::Posix);
        assert_eq!(CleanPath::parse("d:\\a").root, PathRoot::Drive('D'));
        assert_eq!(CleanPath::parse("a/b").root, PathRoot::Unrooted);
        assert!(is_rooted("/x"));
        assert!(!is_rooted("x"));
    }
}

mod relative_tests {
    use super::*;

    #[test]
    fn should_descend_into_child_directory() {
        assert_eq!(relative("/project/src", "/project/src/core").unwrap(), "core");
    }

    #[test]
    fn should_climb_to_sibling_directory() {
        assert_eq!(relative("/project/src/app", "/project/lib").unwrap(), "../../lib");
    }

    #[test]
    fn should_return_empty_for_same_directory() {
        assert_eq!(relative("/project/src", "/project/src/").unwrap(), "");
    }

    #[test]
    fn should_relate_unrooted_paths() {
        assert_eq!(relative("src/app", "src/core").unwrap(), "../core");
        assert_eq!(relative("src", "../lib").unwrap(), "../../lib");
    }

    #[test]
    fn should_reject_origin_climbing_above_its_base() {
        assert!(relative("../src", "lib").is_err());
    }

    #[test]
    fn should_reject_different_roots() {
        assert!(relative("/project", "C:/project").is_err());
        assert!(relative("C:/a", "D:/a").is_err());
        assert!(relative("/a", "a").is_err());
    }

    #[test]
    fn should_compare_drive_letters_case_insensitively() {
        assert_eq!(relative("c:\\project", "C:\\project\\core").unwrap(), "core");
    }
}

mod relative_import_tests {
    use super::*;

    #[test]
    fn should_prefix_local_paths() {
        assert_eq!(to_relative_import("core"), "./core");
        assert_eq!(to_relative_import(""), ".");
        assert!(is_local_relative_path("core/a"));
    }

    #[test]
    fn should_not_prefix_escaping_paths() {
        assert_eq!(to_relative_import("../lib"), "../lib");
        assert!(!is_local_relative_path("../lib"));
    }
}
