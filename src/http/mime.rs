//! MIME type lookup by file extension.
//!
//! Lookups are exact and case-sensitive: `page.HTML` does not match `html`.
//! A file with no extension, or an extension the table does not know, gets
//! no Content-Type header at all rather than a guessed one.

use std::fmt;
use std::path::Path;

use anyhow::Context;

use crate::http::path::ResolvedPath;

/// Table used when no `mime.types` file is configured.
const DEFAULT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("json", "application/json"),
    ("txt", "text/plain"),
    ("csv", "text/csv"),
    ("md", "text/markdown"),
    ("xml", "application/xml"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("wasm", "application/wasm"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpe", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("mp3", "audio/mpeg"),
    ("ogg", "audio/ogg"),
    ("wav", "audio/wav"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeEntry {
    pub extension: String,
    pub content_type: String,
}

impl MimeEntry {
    pub fn new(extension: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            content_type: content_type.into(),
        }
    }
}

/// An immutable extension to content type table.
///
/// Scanned in insertion order, so the first entry for a duplicated extension
/// wins.
#[derive(Debug, Clone)]
pub struct MimeTable {
    entries: Vec<MimeEntry>,
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_TYPES.iter().copied())
    }
}

impl MimeTable {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(ext, ty)| MimeEntry::new(ext, ty))
                .collect(),
        }
    }

    /// Parses the `mime.types` format: one `type ext1 ext2 ...` per line,
    /// `#` starting a comment line. Types listed without extensions are
    /// skipped.
    pub fn parse_mime_types(raw: &str) -> Self {
        let mut entries = Vec::new();

        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(content_type) = fields.next() else {
                continue;
            };
            for ext in fields {
                entries.push(MimeEntry::new(ext, content_type));
            }
        }

        Self { entries }
    }

    /// Reads and parses a `mime.types` file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading mime types from {}", path.display()))?;
        let table = Self::parse_mime_types(&raw);
        if table.is_empty() {
            anyhow::bail!("no mime types found in {}", path.display());
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup_extension(&self, extension: &str) -> Option<&MimeEntry> {
        self.entries.iter().find(|e| e.extension == extension)
    }

    /// Content type entry for the file at `path`, if its extension is known.
    pub fn resolve(&self, path: &ResolvedPath) -> Option<&MimeEntry> {
        extension_of(path.file_name()).and_then(|ext| self.lookup_extension(ext))
    }
}

impl fmt::Display for MimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.extension, self.content_type)
    }
}

/// Text after the last `.` of a file name.
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, ext)| ext)
}
