//! Capacity-bounded source buffer

use crate::error::{Error, Result};

/// Default capacity used by the CLI (8 MiB)
pub const DEFAULT_CAPACITY: usize = 8 * 1024 * 1024;

/// A byte buffer with an explicit maximum capacity.
///
/// The logical length is the length of the backing `Vec`. The capacity is a
/// declared limit, independent of the `Vec`'s allocation, and is never
/// exceeded by any operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl SourceBuffer {
    /// Create an empty buffer that may grow up to `capacity` bytes
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    /// Wrap existing content, failing if it already exceeds `capacity`
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, capacity: usize) -> Result<Self> {
        let data = bytes.into();
        if data.len() > capacity {
            return Err(Error::BufferOverflow {
                required: data.len(),
                capacity,
            });
        }
        Ok(Self { data, capacity })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes that can still be added before hitting capacity
    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Raw storage for the splicer. Callers must check capacity first.
    pub(crate) fn storage_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }
}

impl AsRef<[u8]> for SourceBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
