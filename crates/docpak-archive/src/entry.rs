use bytes::Bytes;

/// A named payload destined for the assembled archive.
///
/// Names are requested names; the assembler resolves collisions at write
/// time (see [`crate::disambiguate`]), so two entries may share a `name`
/// here without conflict.
#[derive(Clone, Debug)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Bytes,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
