//! Alias Resolver
//!
//! Rewrites alias prefixes in one source unit into paths relative to the
//! unit's own file.
//!
//! The rewrite is textual, not syntactic: every literal occurrence of an
//! alias key is replaced, including occurrences inside comments, string
//! literals and identifiers that happen to contain the key.

use std::path::Path;
use std::str::FromStr;

use crate::alias_map::AliasMap;
use crate::error::ResolveError;
use crate::extension::append_js_extensions;
use crate::path::{relative_between, to_relative_import, CleanPath};

/// Module system the rewritten output is consumed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleFormat {
    /// Strict ESM: relative specifiers need explicit extensions.
    Esm,
    #[default]
    CommonJs,
}

impl ModuleFormat {
    pub fn is_esm(self) -> bool {
        self == ModuleFormat::Esm
    }

    /// Value of the `type` field in a `package.json`.
    pub fn package_type(self) -> &'static str {
        match self {
            ModuleFormat::Esm => "module",
            ModuleFormat::CommonJs => "commonjs",
        }
    }
}

impl FromStr for ModuleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "esm" | "module" => Ok(ModuleFormat::Esm),
            "cjs" | "commonjs" => Ok(ModuleFormat::CommonJs),
            other => Err(format!(
                "unknown module format `{}` (expected `esm` or `cjs`)",
                other
            )),
        }
    }
}

impl From<bool> for ModuleFormat {
    fn from(is_esm: bool) -> Self {
        if is_esm {
            ModuleFormat::Esm
        } else {
            ModuleFormat::CommonJs
        }
    }
}

/// Rewrite `content` so that every alias key becomes a path relative to
/// `source_file`'s directory.
///
/// Keys are substituted one after another in `aliases` insertion order; a
/// later key sees the output of earlier ones. In [`ModuleFormat::Esm`] the
/// `from` specifiers then receive a `.js` extension where they have none.
/// An empty alias map returns `content` untouched in either format.
///
/// `source_file` is only used for path arithmetic and is never read. Paths
/// are compared lexically and never resolved against the working directory,
/// so a rooted `source_file` needs rooted alias targets: an unrooted target
/// such as `src/core` fails with [`ResolveError::PathComputation`], as do
/// targets on another drive.
pub fn resolve(
    content: &str,
    source_file: &Path,
    aliases: &AliasMap,
    format: ModuleFormat,
) -> Result<String, ResolveError> {
    if aliases.is_empty() {
        return Ok(content.to_string());
    }

    let source_dir = source_directory(source_file)?;
    let mut output = content.to_string();

    for (alias, target) in aliases.iter() {
        if alias.is_empty() {
            continue;
        }
        let import_path = relative_import_path(&source_dir, source_file, target)?;
        output = output.replace(alias, &format!("{}/", import_path));
    }

    if format.is_esm() {
        output = append_js_extensions(&output);
    }

    Ok(output)
}

/// Import path from the directory of `source_file` to `target`, e.g.
/// `./core` or `../shared`.
pub fn alias_import_path(source_file: &Path, target: &Path) -> Result<String, ResolveError> {
    let source_dir = source_directory(source_file)?;
    relative_import_path(&source_dir, source_file, target)
}

fn source_directory(source_file: &Path) -> Result<CleanPath, ResolveError> {
    let source = source_file.to_string_lossy();
    CleanPath::parse(&source).parent().ok_or_else(|| {
        ResolveError::path_computation(
            &*source,
            "",
            "source file path has no parent directory",
        )
    })
}

fn relative_import_path(
    source_dir: &CleanPath,
    source_file: &Path,
    target: &Path,
) -> Result<String, ResolveError> {
    let target_str = target.to_string_lossy();
    let relative = relative_between(source_dir, &CleanPath::parse(&target_str)).map_err(|reason| {
        ResolveError::path_computation(source_file.to_string_lossy(), &*target_str, reason)
    })?;
    Ok(to_relative_import(&relative))
}
