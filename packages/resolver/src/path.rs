//! Path Arithmetic
//!
//! Lexical path helpers used to turn alias targets into relative import
//! paths. Nothing here touches the filesystem: both POSIX (`/a/b`) and
//! Windows (`C:\a\b`) spellings are handled as text so the output is the
//! same on every host.

use crate::error::ResolveError;

/// Convert Windows-style separators to POSIX separators.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Root of a cleaned path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRoot {
    /// Relative path, no root.
    Unrooted,
    /// `/`
    Posix,
    /// Drive letter, stored upper-cased so `c:` and `C:` compare equal.
    Drive(char),
}

/// A path split into its root and `.`/`..`-free segments.
///
/// Leading `..` segments survive only on unrooted paths; on rooted paths
/// they are clamped at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanPath {
    pub root: PathRoot,
    pub segments: Vec<String>,
}

impl CleanPath {
    pub fn parse(path: &str) -> Self {
        let normalized = normalize_separators(path);
        let (root, rest) = split_root(&normalized);

        let mut segments: Vec<String> = Vec::new();
        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    let can_pop = matches!(segments.last(), Some(last) if last != "..");
                    if can_pop {
                        segments.pop();
                    } else if root == PathRoot::Unrooted {
                        segments.push("..".to_string());
                    }
                }
                other => segments.push(other.to_string()),
            }
        }

        CleanPath { root, segments }
    }

    /// Directory containing this path, or `None` when there is no last
    /// segment to drop (`/`, `C:/`, empty input).
    pub fn parent(&self) -> Option<CleanPath> {
        match self.segments.last() {
            None => None,
            Some(last) if last == ".." => None,
            Some(_) => {
                let mut segments = self.segments.clone();
                segments.pop();
                Some(CleanPath {
                    root: self.root,
                    segments,
                })
            }
        }
    }

    pub fn is_rooted(&self) -> bool {
        self.root != PathRoot::Unrooted
    }
}

impl std::fmt::Display for CleanPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self.segments.join("/");
        match self.root {
            PathRoot::Unrooted if joined.is_empty() => write!(f, "."),
            PathRoot::Unrooted => write!(f, "{}", joined),
            PathRoot::Posix => write!(f, "/{}", joined),
            PathRoot::Drive(letter) => write!(f, "{}:/{}", letter, joined),
        }
    }
}

fn split_root(normalized: &str) -> (PathRoot, &str) {
    let bytes = normalized.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let letter = (bytes[0] as char).to_ascii_uppercase();
        return (PathRoot::Drive(letter), &normalized[2..]);
    }
    if normalized.starts_with('/') {
        return (PathRoot::Posix, normalized);
    }
    (PathRoot::Unrooted, normalized)
}

/// Lexically clean a path: forward slashes, no `.` segments, `..` folded.
pub fn clean_path(path: &str) -> String {
    CleanPath::parse(path).to_string()
}

/// Whether the path starts at a filesystem root or drive letter.
pub fn is_rooted(path: &str) -> bool {
    CleanPath::parse(path).is_rooted()
}

/// Relative path leading from directory `from` to `to`, with `/` separators.
///
/// Returns an empty string when both name the same directory.
pub fn relative(from: &str, to: &str) -> Result<String, ResolveError> {
    let from_path = CleanPath::parse(from);
    let to_path = CleanPath::parse(to);
    relative_between(&from_path, &to_path)
        .map_err(|reason| ResolveError::path_computation(from, to, reason))
}

pub(crate) fn relative_between(from: &CleanPath, to: &CleanPath) -> Result<String, String> {
    if from.root != to.root {
        let reason = match (from.root, to.root) {
            (PathRoot::Drive(a), PathRoot::Drive(b)) => {
                format!("paths are on different drives ({}: and {}:)", a, b)
            }
            _ => "one path is rooted and the other is not".to_string(),
        };
        return Err(reason);
    }

    let common = from
        .segments
        .iter()
        .zip(&to.segments)
        .take_while(|(a, b)| a == b)
        .count();

    if from.segments[common..].iter().any(|s| s == "..") {
        return Err("the origin directory climbs above its base with `..`".to_string());
    }

    let mut parts: Vec<&str> = Vec::new();
    for _ in common..from.segments.len() {
        parts.push("..");
    }
    parts.extend(to.segments[common..].iter().map(String::as_str));

    Ok(parts.join("/"))
}

/// A relative path that stays inside the origin directory.
pub fn is_local_relative_path(relative_path: &str) -> bool {
    !is_rooted(relative_path) && !relative_path.starts_with("..")
}

/// Turn a relative path into an import path: `./` is prepended unless the
/// path already escapes upward.
pub fn to_relative_import(relative_path: &str) -> String {
    if relative_path.is_empty() {
        ".".to_string()
    } else if is_local_relative_path(relative_path) {
        format!("./{}", relative_path)
    } else {
        relative_path.to_string()
    }
}
