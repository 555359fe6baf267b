// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Buffers backing a capture session.

use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

/// Shared in-memory sink used by attribute-mode capture.
///
/// Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryBuffer {
    data: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes to the end of the buffer
    pub fn append(&self, buf: &[u8]) {
        self.data.lock().extend_from_slice(buf);
    }

    /// Everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.data.lock().clone()
    }

    /// Everything written so far, decoded as UTF-8 (lossily)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.data.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.lock().is_empty()
    }
}

/// Anonymous temporary file used by descriptor-mode capture.
///
/// The file is removed by the OS once the last descriptor referring to it is
/// closed.
#[derive(Debug)]
pub struct FileBuffer {
    file: File,
}

impl FileBuffer {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            file: tempfile::tempfile()?,
        })
    }

    /// Append bytes at the current end of the file
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        (&self.file).write_all(buf)
    }

    /// Read the whole file without moving the shared write offset.
    #[cfg(unix)]
    pub fn contents(&self) -> io::Result<Vec<u8>> {
        use std::os::unix::fs::FileExt;

        let len = usize::try_from(self.file.metadata()?.len())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let mut data = vec![0; len];
        self.file.read_exact_at(&mut data, 0)?;
        Ok(data)
    }

    /// Read the whole file; the offset ends up at the end, where appends go.
    #[cfg(not(unix))]
    pub fn contents(&self) -> io::Result<Vec<u8>> {
        use std::io::{Read, Seek, SeekFrom};

        let mut file = &self.file;
        file.seek(SeekFrom::Start(0))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    pub fn file(&self) -> &File {
        &self.file
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
