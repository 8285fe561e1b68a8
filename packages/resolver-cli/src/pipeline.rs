use glob::{glob, Pattern};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use alias_resolver::{resolve, AliasMap};

use crate::config::BuildConfig;
use crate::error::{BuildError, Result};
use crate::manifest::stamp_package_type;

/// Outcome of a [`build`] run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Rewritten files, in source order.
    pub files: Vec<PathBuf>,
    pub manifest: PathBuf,
}

/// Source files matched by `include` under `root_dir`, minus `exclude`
/// matches and anything already inside `out_dir`. Sorted, no duplicates.
pub fn collect_sources(config: &BuildConfig) -> Result<Vec<PathBuf>> {
    let excludes = config
        .exclude
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| BuildError::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut files = BTreeSet::new();
    let root = Pattern::escape(&config.root_dir.to_string_lossy());
    for pattern in &config.include {
        let full = Path::new(&root).join(pattern);
        let full_str = full.to_string_lossy();
        let entries = glob(&full_str).map_err(|source| BuildError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        for path in entries.filter_map(std::result::Result::ok) {
            if !path.is_file() || path.starts_with(&config.out_dir) {
                continue;
            }
            let relative = path.strip_prefix(&config.root_dir).unwrap_or(&path);
            if excludes.iter().any(|p| p.matches_path(relative)) {
                log::debug!("Excluded {}", path.display());
                continue;
            }
            files.insert(path);
        }
    }

    Ok(files.into_iter().collect())
}

/// Read `source` and rewrite its aliases with the configured format.
///
/// Specifiers are computed from the file's [`output_path`], so they hold
/// where the rewritten copy is written.
pub fn rewrite_file(source: &Path, config: &BuildConfig) -> Result<String> {
    rewrite_with(source, config, &output_aliases(config))
}

fn rewrite_with(source: &Path, config: &BuildConfig, aliases: &AliasMap) -> Result<String> {
    let content = fs::read_to_string(source).map_err(|e| BuildError::io(source, e))?;
    let origin = output_path(source, config);
    resolve(&content, &origin, aliases, config.format).map_err(|e| BuildError::Rewrite {
        file: source.to_path_buf(),
        source: e,
    })
}

/// The configured aliases as seen from `out_dir`: targets under `root_dir`
/// point at their mirrored copy under `out_dir`.
pub fn output_aliases(config: &BuildConfig) -> AliasMap {
    config
        .aliases
        .iter()
        .map(|(alias, target)| {
            let mapped = match target.strip_prefix(&config.root_dir) {
                Ok(relative) if !target.starts_with(&config.out_dir) => {
                    config.out_dir.join(relative)
                }
                _ => target.to_path_buf(),
            };
            (alias, mapped)
        })
        .collect()
}

/// Where the rewritten copy of `source` lands.
pub fn output_path(source: &Path, config: &BuildConfig) -> PathBuf {
    match source.strip_prefix(&config.root_dir) {
        Ok(relative) => config.out_dir.join(relative),
        Err(_) => config
            .out_dir
            .join(source.file_name().unwrap_or(source.as_os_str())),
    }
}

/// Rewrite every source into `out_dir`, then stamp the package manifest.
///
/// Files are rewritten in parallel in memory. Nothing is written unless every
/// rewrite succeeds.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    let start = Instant::now();
    let sources = collect_sources(config)?;

    log::info!(
        "Rewriting {} files with {} aliases ({})",
        sources.len(),
        config.aliases.len(),
        config.format.package_type()
    );

    let aliases = output_aliases(config);
    let outputs = sources
        .par_iter()
        .map(|source| -> Result<(PathBuf, String)> {
            let rewritten = rewrite_with(source, config, &aliases)?;
            let target = output_path(source, config);
            log::debug!("{} -> {}", source.display(), target.display());
            Ok((target, rewritten))
        })
        .collect::<Result<Vec<_>>>()?;

    let files = outputs
        .par_iter()
        .map(|(target, content)| -> Result<PathBuf> {
            write_output(target, content)?;
            Ok(target.clone())
        })
        .collect::<Result<Vec<_>>>()?;

    let manifest = stamp_package_type(config)?;

    log::info!(
        "Wrote {} files to {} in {:?}",
        files.len(),
        config.out_dir.display(),
        start.elapsed()
    );

    Ok(BuildReport { files, manifest })
}

fn write_output(target: &Path, content: &str) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    fs::write(target, content).map_err(|e| BuildError::io(target, e))
}
