//! Test helpers for writing delivery requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::DeliveryRequest;
use std::fs;
use tempfile::TempDir;

/// Write `contents` to `path`, panicking with context on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// Serialize `request` as pretty JSON at `path`.
pub(super) fn write_request(path: &Utf8Path, request: &DeliveryRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}

/// A temporary directory holding a `request.json` path.
#[derive(Debug)]
pub(super) struct RequestWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    request_path: Utf8PathBuf,
}

impl RequestWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let request_path = root.join("request.json");
        Self {
            _dir: dir,
            root,
            request_path,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn request_path(&self) -> &Utf8Path {
        &self.request_path
    }
}
