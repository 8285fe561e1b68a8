//! Configuration
//!
//! Loads the JSON build configuration and, optionally, alias entries from a
//! tsconfig `compilerOptions.paths` block.

pub mod build;
pub mod tsconfig;


pub use build::{default_include, BuildConfig, RawBuildConfig, DEFAULT_CONFIG_FILE};
pub use tsconfig::load_tsconfig_aliases;
