//! Request target to filesystem path resolution.
//!
//! Resolution is purely textual and never touches the filesystem. The target
//! is anchored below the content root with a `./` prefix, then every `..` is
//! rewritten to `./` until none is left. With no `..` in the string there is
//! no way to climb out of the root, whatever the client sends.

use std::fmt;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

/// A path that is guaranteed to live under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
    relative: String,
}

impl ResolvedPath {
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// The sanitized part below the root, e.g. `./css/site.css`.
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Name of the final path component.
    pub fn file_name(&self) -> &str {
        self.relative
            .rsplit('/')
            .next()
            .unwrap_or(self.relative.as_str())
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Resolves `target` against `root`.
///
/// `/` and anything ending in `/` map to that directory's `index.html`. An
/// empty target, or one made only of slashes, lands on the root's index.
pub fn resolve(root: &Path, target: &str) -> ResolvedPath {
    let relative = if target == "/" {
        format!("./{}", INDEX_FILE)
    } else {
        let mut location = format!("./{}", target);
        defuse_parent_refs(&mut location);
        if location.ends_with('/') {
            location.push_str(INDEX_FILE);
        }
        location
    };

    ResolvedPath {
        path: root.join(&relative),
        relative,
    }
}

/// Rewrites `..` to `./` until no `..` remains.
///
/// Every pass turns one dot into a slash, so this always terminates.
fn defuse_parent_refs(location: &mut String) {
    while let Some(pos) = location.find("..") {
        location.replace_range(pos..pos + 2, "./");
    }
}
