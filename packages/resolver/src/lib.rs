#![deny(clippy::all)]

/**
 * Alias Resolver
 *
 * Rewrites path aliases in JavaScript/TypeScript import and export
 * specifiers into file-relative paths, so a bundler downstream never has to
 * know about them.
 */
pub mod alias_map;
pub mod error;
pub mod extension;
pub mod path;
pub mod resolve;

// Re-exports
pub use alias_map::AliasMap;
pub use error::ResolveError;
pub use extension::{append_js_extensions, has_script_extension, SCRIPT_EXTENSIONS};
pub use resolve::{alias_import_path, resolve, ModuleFormat};
