/// Prefixes for the per-index key and value derivation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyPrefix {
    Key,
    Value,
    Field,
    Location,
    Message,
}

impl KeyPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyPrefix::Key => "key",
            KeyPrefix::Value => "value",
            KeyPrefix::Field => "field",
            KeyPrefix::Location => "location",
            KeyPrefix::Message => "message",
        }
    }
}

/// `prefix` followed by the decimal index, e.g. `key42`.
#[inline]
pub fn indexed(prefix: KeyPrefix, i: usize) -> String {
    format!("{}{}", prefix.as_str(), i)
}
