use std::fmt;

/// Opaque bearer token issued by the auth service.
///
/// Threaded explicitly into every catalog and retrieval call; there is no
/// ambient credential lookup anywhere in the core.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The token value is a credential; keep it out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(..)")
    }
}
