//! Byte-exact signature search

use memchr::memmem;

use crate::error::{Error, Result};
use crate::signature::Signature;

/// Find the insertion point for `signature` in `haystack`.
///
/// Returns the offset just past the end of the first occurrence, or `None`
/// when the signature does not occur.
pub fn find(haystack: &[u8], signature: &Signature) -> Option<usize> {
    memmem::find(haystack, signature.as_bytes()).map(|start| start + signature.len())
}

/// Same as [`find`] for an unvalidated needle. An empty needle is rejected
/// before searching.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Result<Option<usize>> {
    if needle.is_empty() {
        return Err(Error::InvalidSignature);
    }
    Ok(memmem::find(haystack, needle).map(|start| start + needle.len()))
}

/// Insertion points of every non-overlapping occurrence, left to right.
pub fn find_all(haystack: &[u8], signature: &Signature) -> Vec<usize> {
    let len = signature.len();
    let mut points = Vec::new();
    let mut pos = 0;
    while let Some(start) = memmem::find(&haystack[pos..], signature.as_bytes()) {
        pos += start + len;
        points.push(pos);
    }
    points
}
