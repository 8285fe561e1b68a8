//! Package Manifest Stamping
//!
//! Writes a minimal `package.json` next to the rewritten sources so Node
//! picks the right module system for the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use alias_resolver::ModuleFormat;

use crate::config::BuildConfig;
use crate::error::{BuildError, Result};

pub const MANIFEST_FILE: &str = "package.json";

/// Manifest text for `format`, e.g. `{"type": "module"}`.
pub fn package_manifest(format: ModuleFormat) -> String {
    format!("{{\"type\": \"{}\"}}", format.package_type())
}

/// Write `<out_dir>/package.json`, creating `out_dir` if needed.
pub fn write_package_manifest(format: ModuleFormat, out_dir: &Path) -> Result<PathBuf> {
    if out_dir.as_os_str().is_empty() {
        return Err(BuildError::configuration("output directory is empty", None));
    }

    fs::create_dir_all(out_dir).map_err(|e| BuildError::io(out_dir, e))?;

    let manifest_path = out_dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, package_manifest(format))
        .map_err(|e| BuildError::io(&manifest_path, e))?;

    log::debug!("Stamped {} as {}", manifest_path.display(), format.package_type());
    Ok(manifest_path)
}

/// Stamp the configured output directory with the configured format.
pub fn stamp_package_type(config: &BuildConfig) -> Result<PathBuf> {
    write_package_manifest(config.format, &config.out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_manifest_text() {
        assert_eq!(package_manifest(ModuleFormat::Esm), r#"{"type": "module"}"#);
        assert_eq!(package_manifest(ModuleFormat::CommonJs), r#"{"type": "commonjs"}"#);
    }

    #[test]
    fn should_write_module_manifest_for_esm() {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().join("dist");

        let path = write_package_manifest(ModuleFormat::Esm, &dist).unwrap();
        assert_eq!(path, dist.join("package.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"type": "module"}"#);
    }

    #[test]
    fn should_write_commonjs_manifest_for_cjs() {
        let dir = tempfile::tempdir().unwrap();
        let dist = dir.path().join("dist");

        let path = write_package_manifest(ModuleFormat::CommonJs, &dist).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), r#"{"type": "commonjs"}"#);
    }

    #[test]
    fn should_create_nested_output_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("build").join("esm").join("lib");

        write_package_manifest(ModuleFormat::Esm, &nested).unwrap();
        assert!(nested.join(MANIFEST_FILE).is_file());
    }

    #[test]
    fn should_overwrite_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write_package_manifest(ModuleFormat::Esm, dir.path()).unwrap();
        let path = write_package_manifest(ModuleFormat::CommonJs, dir.path()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), r#"{"type": "commonjs"}"#);
    }

    #[test]
    fn should_reject_empty_output_directory() {
        let err = write_package_manifest(ModuleFormat::Esm, Path::new("")).unwrap_err();
        assert!(matches!(err, BuildError::Configuration { .. }));
    }

    #[test]
    fn should_fail_when_output_directory_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dist");
        fs::write(&file, "").unwrap();

        let err = write_package_manifest(ModuleFormat::Esm, &file).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }
}
