// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::rc::Rc;
use std::{fs, io};

use crate::StoreError;

/// A string-keyed blob store used to persist availability.
pub trait BlobStore {
    /// Reads the blob stored under `key`, `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `blob` under `key`, replacing any previous blob.
    fn set(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same blobs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.borrow().len()
    }

    /// Whether the store holds no blob.
    pub fn is_empty(&self) -> bool {
        self.blobs.borrow().is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// Store keeping one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. The directory is created on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File backing `key`.
    pub fn path_of(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", encode_key(key)))
    }
}

impl BlobStore for FileStore {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_of(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no stored blob");
                Ok(None)
            }
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    #[tracing::instrument(skip(self, blob), fields(root = %self.root.display()))]
    fn set(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(io_err)?;

        // write then rename: readers never observe a partial blob
        let path = self.path_of(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, blob).map_err(io_err)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            if let Err(err) = fs::remove_file(&tmp) {
                tracing::warn!(path = %tmp.display(), %err, "failed to remove temporary blob");
            }
            return Err(io_err(e));
        }

        tracing::debug!(path = %path.display(), bytes = blob.len(), "blob written");
        Ok(())
    }
}

/// Keeps `[A-Za-z0-9_-]` and percent-encodes every other byte, so any key is a flat file name.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' => encoded.push(char::from(byte)),
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}
