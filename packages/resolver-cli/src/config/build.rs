use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use alias_resolver::{AliasMap, ModuleFormat, SCRIPT_EXTENSIONS};

use super::tsconfig::load_tsconfig_aliases;
use crate::error::{BuildError, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "alias.config.json";

/// Build configuration exactly as written on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBuildConfig {
    pub format: Option<String>,
    pub root_dir: Option<String>,
    pub out_dir: Option<String>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub tsconfig: Option<String>,
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
}

/// Validated build configuration with every path made absolute.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// File the configuration was loaded from, if any.
    pub config_path: Option<PathBuf>,
    pub format: ModuleFormat,
    pub root_dir: PathBuf,
    pub out_dir: PathBuf,
    /// Glob patterns relative to `root_dir`.
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub aliases: AliasMap,
}

impl BuildConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
        let raw: RawBuildConfig = serde_json::from_str(&content)
            .map_err(|e| BuildError::configuration(e.to_string(), Some(path)))?;

        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let base_dir = fs::canonicalize(parent).map_err(|e| BuildError::io(parent, e))?;

        let mut config = Self::from_raw(raw, &base_dir, Some(path))?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate `raw`, resolving relative paths against `base_dir`.
    pub fn from_raw(raw: RawBuildConfig, base_dir: &Path, location: Option<&Path>) -> Result<Self> {
        let format = match raw.format.as_deref() {
            Some(value) => value
                .parse::<ModuleFormat>()
                .map_err(|message| BuildError::configuration(message, location))?,
            None => {
                return Err(BuildError::configuration(
                    "missing `format` (expected `esm` or `cjs`)",
                    location,
                ))
            }
        };

        let out_dir = match raw.out_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => base_dir.join(dir),
            _ => return Err(BuildError::configuration("missing `outDir`", location)),
        };

        let root_dir = base_dir.join(raw.root_dir.as_deref().unwrap_or("."));

        let include = raw.include.unwrap_or_else(default_include);
        if include.is_empty() {
            return Err(BuildError::configuration("`include` must not be empty", location));
        }

        let mut aliases = AliasMap::new();
        if let Some(tsconfig) = raw.tsconfig.as_deref() {
            aliases.extend(load_tsconfig_aliases(&base_dir.join(tsconfig))?);
        }
        for (alias, target) in raw.aliases {
            if alias.is_empty() {
                return Err(BuildError::configuration("alias keys must not be empty", location));
            }
            aliases.insert(alias, base_dir.join(target));
        }

        Ok(Self {
            config_path: None,
            format,
            root_dir,
            out_dir,
            include,
            exclude: raw.exclude.unwrap_or_default(),
            aliases,
        })
    }

    pub fn with_format(mut self, format: ModuleFormat) -> Self {
        self.format = format;
        self
    }
}

/// One `**/*.<ext>` pattern per script extension.
pub fn default_include() -> Vec<String> {
    SCRIPT_EXTENSIONS
        .iter()
        .filter(|ext| **ext != "json")
        .map(|ext| format!("**/*.{}", ext))
        .collect()
}
