use std::path::PathBuf;

use crate::config::StaticFilesConfig;
use crate::http::mime::MimeTable;

/// Read-only serving context shared by every connection.
///
/// Built once at startup and never mutated, so it is handed to connection
/// tasks behind an `Arc` without any locking.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub mime: MimeTable,
    pub max_request_size: usize,
}

impl Site {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mime: MimeTable::default(),
            max_request_size: StaticFilesConfig::default().max_request_size,
        }
    }

    pub fn from_config(cfg: &StaticFilesConfig) -> anyhow::Result<Self> {
        let mime = match &cfg.mime_types {
            Some(path) => MimeTable::load(path)?,
            None => MimeTable::default(),
        };

        Ok(Self {
            root: cfg.root.clone(),
            mime,
            max_request_size: cfg.max_request_size,
        })
    }

    pub fn with_mime(mut self, mime: MimeTable) -> Self {
        self.mime = mime;
        self
    }

    pub fn with_max_request_size(mut self, size: usize) -> Self {
        self.max_request_size = size;
        self
    }
}
