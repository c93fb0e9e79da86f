use std::fmt;

use crate::error::{Error, Result};

/// A non-empty byte string marking an injection point.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::InvalidSignature);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: signatures are non-empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl TryFrom<&str> for Signature {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

/// Bytes inserted right after a matched signature. May be empty.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload({} bytes)", self.0.len())
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEntry {
    pub name: String,
    pub signature: Signature,
    pub payload: Payload,
}

impl SignatureEntry {
    pub fn new(name: impl Into<String>, signature: Signature, payload: Payload) -> Self {
        Self {
            name: name.into(),
            signature,
            payload,
        }
    }
}

/// Ordered, immutable list of signature/payload pairs.
///
/// Order is significant: `patch` applies entries front to back and each entry
/// sees the buffer as left by the previous ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureTable {
    entries: Vec<SignatureEntry>,
}

impl SignatureTable {
    /// Build a table, rejecting duplicate entry names (case-insensitive)
    pub fn new(entries: Vec<SignatureEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i]
                .iter()
                .any(|prev| prev.name.eq_ignore_ascii_case(&entry.name))
            {
                return Err(Error::InvalidTable(format!(
                    "Duplicate entry name '{}'",
                    entry.name
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn builder() -> SignatureTableBuilder {
        SignatureTableBuilder::default()
    }

    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&SignatureEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes the table could add if every entry matched
    pub fn max_growth(&self) -> usize {
        self.entries.iter().map(|e| e.payload.len()).sum()
    }
}

impl<'a> IntoIterator for &'a SignatureTable {
    type Item = &'a SignatureEntry;
    type IntoIter = std::slice::Iter<'a, SignatureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builder that validates signatures as entries are added.
#[derive(Debug, Default)]
pub struct SignatureTableBuilder {
    entries: Vec<SignatureEntry>,
    error: Option<Error>,
}

impl SignatureTableBuilder {
    pub fn entry(
        mut self,
        name: impl Into<String>,
        signature: impl Into<Vec<u8>>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        match Signature::new(signature) {
            Ok(signature) => self.entries.push(SignatureEntry::new(
                name,
                signature,
                Payload::new(payload),
            )),
            Err(e) => self.error = Some(e),
        }
        self
    }

    pub fn build(self) -> Result<SignatureTable> {
        if let Some(e) = self.error {
            return Err(e);
        }
        SignatureTable::new(self.entries)
    }
}
