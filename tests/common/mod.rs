#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lantern::http::connection::Connection;
use lantern::http::response::StatusCode;
use lantern::http::site::Site;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A scratch content root, removed on drop.
pub struct TempRoot {
    path: PathBuf,
}

impl TempRoot {
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!("lantern-test-{}-{}", std::process::id(), id));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(self, name: &str, contents: &[u8]) -> Self {
        let full = self.path.join(name);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, contents).unwrap();
        self
    }

    pub fn dir(self, name: &str) -> Self {
        std::fs::create_dir_all(self.path.join(name)).unwrap();
        self
    }

    pub fn site(&self) -> Arc<Site> {
        Arc::new(Site::new(self.path.clone()))
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// The root used by most tests.
pub fn sample_root() -> TempRoot {
    TempRoot::new()
        .file("index.html", b"<h1>home</h1>")
        .file("data.json", b"{\"ok\":true}")
        .file("README", b"plain bytes, no extension")
        .file("sub/index.html", b"<h1>sub</h1>")
        .file("img/logo.png", &[0x89, b'P', b'N', b'G', 0x00, 0xff, 0x10])
        .dir("empty")
}

/// Runs one connection over an in-memory pipe and returns everything the
/// server wrote, plus the status it recorded.
pub async fn exchange(site: Arc<Site>, request: &[u8]) -> (Vec<u8>, Option<StatusCode>) {
    let (mut client, server) = tokio::io::duplex(256 * 1024);

    let handle = tokio::spawn(async move {
        let mut conn = Connection::new(server, site);
        conn.run().await.unwrap();
        conn.status()
    });

    client.write_all(request).await.unwrap();
    client.shutdown().await.unwrap();
    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();

    let status = handle.await.unwrap();
    (out, status)
}

/// Splits a raw response into (head, body) at the first blank line.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8(raw[..pos + 2].to_vec()).unwrap();
    (head, raw[pos + 4..].to_vec())
}

pub fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.split("\r\n")
        .filter_map(|line| line.split_once(": "))
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)
}
