//! In-place payload insertion

use tracing::trace;

use crate::buffer::SourceBuffer;
use crate::error::{Error, Result};
use crate::signature::Payload;

/// Insert `payload` at `at`, shifting the suffix `buffer[at..]` right.
///
/// Both checks run before any byte is touched, so on error the buffer is
/// exactly as it was.
pub fn splice(buffer: &mut SourceBuffer, at: usize, payload: &Payload) -> Result<()> {
    let len = buffer.len();
    if at > len {
        return Err(Error::InsertionOutOfBounds { at, len });
    }

    let required = len
        .checked_add(payload.len())
        .ok_or(Error::BufferOverflow {
            required: usize::MAX,
            capacity: buffer.capacity(),
        })?;
    if required > buffer.capacity() {
        return Err(Error::BufferOverflow {
            required,
            capacity: buffer.capacity(),
        });
    }

    let storage = buffer.storage_mut();
    // Scratch lives only for this call and holds exactly the suffix.
    let scratch = storage[at..].to_vec();
    storage.truncate(at);
    storage.reserve_exact(payload.len() + scratch.len());
    storage.extend_from_slice(payload.as_bytes());
    storage.extend_from_slice(&scratch);

    trace!(at, inserted = payload.len(), suffix = scratch.len(), "spliced");
    debug_assert_eq!(buffer.len(), required);
    Ok(())
}
