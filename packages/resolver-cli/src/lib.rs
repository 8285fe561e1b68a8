#![deny(clippy::all)]

/**
 * Alias Resolver CLI
 *
 * Build step that rewrites aliased imports across a project before bundling
 */

// CLI-specific modules
pub mod config;
pub mod crash;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod pipeline;
pub mod version;

pub use error::{BuildError, ErrorKind};
