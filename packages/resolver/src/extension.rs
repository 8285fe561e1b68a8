//! ESM Extension Pass
//!
//! Strict ESM loaders refuse extension-less relative specifiers, so every
//! `import ... from '<spec>'` / `export ... from '<spec>'` specifier that
//! does not already name a script file gets `.js` appended.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Extensions that count as "already has an extension".
pub const SCRIPT_EXTENSIONS: &[&str] = &[
    "js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx", "json",
];

/// `import`/`export` keyword, anything up to whitespace + `from`, then a
/// single- or double-quoted specifier. The clause may span lines but not a
/// `;` or another quote.
static FROM_CLAUSE_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\b(?:import|export)\b[^;'"]*?\s+from\s*(?:'([^'\r\n]*)'|"([^"\r\n]*)")"#)
        .unwrap()
});

/// Whether the last path segment of a specifier ends in a script extension.
pub fn has_script_extension(specifier: &str) -> bool {
    let file_name = specifier.rsplit('/').next().unwrap_or(specifier);
    match file_name.rfind('.') {
        Some(pos) if pos + 1 < file_name.len() => {
            let ext = &file_name[pos + 1..];
            SCRIPT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        }
        _ => false,
    }
}

/// Whether `specifier` names a directory rather than a file: it ends in `/`,
/// is `.`/`..`, or its last segment ends in a bare dot.
fn names_directory(specifier: &str) -> bool {
    let file_name = specifier.rsplit('/').next().unwrap_or(specifier);
    file_name.is_empty() || file_name.ends_with('.')
}

/// Append `.js` to every `from` specifier lacking a script extension.
///
/// Empty specifiers and directory-like ones (`./core/`, `..`) are left alone.
/// Only the text inside the quotes changes. Running the pass twice gives the
/// same result as running it once.
pub fn append_js_extensions(content: &str) -> String {
    FROM_CLAUSE_REGEXP
        .replace_all(content, |caps: &Captures| {
            let clause = &caps[0];
            let specifier = match caps.get(1).or_else(|| caps.get(2)) {
                Some(m) => m,
                None => return clause.to_string(),
            };

            let spec = specifier.as_str();
            if spec.is_empty() || names_directory(spec) || has_script_extension(spec) {
                return clause.to_string();
            }

            // Offsets in `caps` are absolute; make the split point clause-relative.
            let split = specifier.end() - caps.get(0).map_or(0, |m| m.start());
            format!("{}.js{}", &clause[..split], &clause[split..])
        })
        .into_owned()
}
