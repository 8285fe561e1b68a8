use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TsConfig {
    compiler_options: Option<CompilerOptions>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    base_url: Option<String>,
    #[serde(default)]
    paths: IndexMap<String, Vec<String>>,
}

/// Read `compilerOptions.paths` from a tsconfig file as alias entries.
///
/// Only wildcard mappings translate into prefix aliases:
/// `"@core/*": ["src/core/*"]` becomes `@core/` → `<baseUrl>/src/core`.
/// When a mapping lists several targets the first one wins.
pub fn load_tsconfig_aliases(path: &Path) -> Result<Vec<(String, PathBuf)>> {
    let content = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
    let cleaned = strip_trailing_commas(&strip_jsonc_comments(&content));
    let tsconfig: TsConfig = serde_json::from_str(&cleaned)
        .map_err(|e| BuildError::configuration(e.to_string(), Some(path)))?;

    let tsconfig_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let options = tsconfig.compiler_options.unwrap_or_default();
    let base_url = options
        .base_url
        .as_deref()
        .map_or_else(|| tsconfig_dir.to_path_buf(), |b| tsconfig_dir.join(b));

    let mut aliases = Vec::new();
    for (pattern, targets) in options.paths {
        match wildcard_alias(&pattern, &targets) {
            Some((alias, target)) => aliases.push((alias.to_string(), base_url.join(target))),
            None => log::debug!(
                "Skipping path mapping `{}` from {}: not a prefix wildcard",
                pattern,
                path.display()
            ),
        }
    }
    Ok(aliases)
}

/// `("@core/*", ["src/core/*"])` → `("@core/", "src/core/")`.
fn wildcard_alias<'a>(pattern: &'a str, targets: &'a [String]) -> Option<(&'a str, &'a str)> {
    let alias = pattern.strip_suffix('*')?;
    let target = targets.first()?.strip_suffix('*')?;
    if alias.is_empty() || alias.contains('*') || target.contains('*') {
        return None;
    }
    Some((alias, target))
}

/// Strip JSONC comments (`//` line and `/* */` block) while respecting strings.
fn strip_jsonc_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push(ch);
                copy_string_body(&mut chars, &mut out);
            }
            '/' if chars.peek() == Some(&'/') => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Drop commas directly followed (modulo whitespace) by `}` or `]`.
fn strip_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push(ch);
                copy_string_body(&mut chars, &mut out);
            }
            ',' => {
                let rest: String = chars.clone().skip_while(|c| c.is_whitespace()).take(1).collect();
                if rest != "}" && rest != "]" {
                    out.push(ch);
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Copy a JSON string body up to and including its closing quote.
fn copy_string_body(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else if c == '"' {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod jsonc_tests {
        use super::*;

        #[test]
        fn should_remove_line_comments() {
            let input = "{\n  // comment\n  \"key\": \"value\"\n}";
            let result = strip_jsonc_comments(input);
            assert!(!result.contains("//"));
            assert!(result.contains("\"key\": \"value\""));
        }

        #[test]
        fn should_remove_block_comments() {
            let input = "{ /* block */ \"key\": 1 }";
            assert_eq!(strip_jsonc_comments(input), "{  \"key\": 1 }");
        }

        #[test]
        fn should_preserve_strings_with_slashes() {
            let input = r#"{ "url": "https://example.com/*api*/" }"#;
            assert_eq!(strip_jsonc_comments(input), input);
        }

        #[test]
        fn should_preserve_non_ascii_text() {
            let input = "{ \"name\": \"café\" } // ünïcode";
            assert_eq!(strip_jsonc_comments(input), "{ \"name\": \"café\" } ");
        }

        #[test]
        fn should_remove_trailing_commas() {
            let input = "{ \"a\": [1, 2,], \"b\": \",]\", }";
            assert_eq!(strip_trailing_commas(input), "{ \"a\": [1, 2], \"b\": \",]\" }");
        }
    }

    mod wildcard_tests {
        use super::*;

        #[test]
        fn should_map_prefix_wildcards() {
            let targets = vec!["src/core/*".to_string()];
            assert_eq!(wildcard_alias("@core/*", &targets), Some(("@core/", "src/core/")));
        }

        #[test]
        fn should_skip_exact_and_catch_all_mappings() {
            let targets = vec!["src/special".to_string()];
            assert_eq!(wildcard_alias("@special", &targets), None);
            let targets = vec!["src/*".to_string()];
            assert_eq!(wildcard_alias("*", &targets), None);
        }
    }

    mod load_tests {
        use super::*;

        #[test]
        fn should_load_paths_relative_to_base_url() {
            let dir = tempfile::tempdir().unwrap();
            let tsconfig = dir.path().join("tsconfig.json");
            fs::write(
                &tsconfig,
                r#"{
  // compiler settings
  "compilerOptions": {
    "baseUrl": "./src",
    "paths": {
      "@core/*": ["core/*"],
      "@app/*": ["app/*", "legacy/app/*"],
      "@config": ["config.ts"],
    },
  }
}"#,
            )
            .unwrap();

            let aliases = load_tsconfig_aliases(&tsconfig).unwrap();
            assert_eq!(
                aliases,
                vec![
                    ("@core/".to_string(), dir.path().join("./src").join("core/")),
                    ("@app/".to_string(), dir.path().join("./src").join("app/")),
                ]
            );
        }

        #[test]
        fn should_return_nothing_without_compiler_options() {
            let dir = tempfile::tempdir().unwrap();
            let tsconfig = dir.path().join("tsconfig.json");
            fs::write(&tsconfig, "{}").unwrap();

            assert!(load_tsconfig_aliases(&tsconfig).unwrap().is_empty());
        }

        #[test]
        fn should_report_missing_file_as_io_error() {
            let dir = tempfile::tempdir().unwrap();
            let err = load_tsconfig_aliases(&dir.path().join("missing.json")).unwrap_err();
            assert!(matches!(err, BuildError::Io { .. }));
        }
    }
}
