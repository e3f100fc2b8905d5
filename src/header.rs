use std::fmt;

use crate::Binary;

/// One header field. Names are kept as the wire bytes; the QPACK codec
/// enforces the lowercase rule on both the encode and decode paths.
#[derive(Clone, PartialEq, Eq)]
pub struct Header {
    name: Binary,
    value: Binary,
}

impl Header {
    pub fn new(name: Binary, value: Binary) -> Header {
        Header { name, value }
    }

    pub fn name(&self) -> &Binary {
        &self.name
    }

    pub fn value(&self) -> &Binary {
        &self.value
    }

    pub fn into_parts(self) -> (Binary, Binary) {
        (self.name, self.value)
    }

    /// Field names travel lowercase; anything else is a malformed header.
    pub fn name_is_lowercase(name: &[u8]) -> bool {
        !name.iter().any(|byte| byte.is_ascii_uppercase())
    }
}

impl From<(&str, &str)> for Header {
    fn from((name, value): (&str, &str)) -> Header {
        Header::new(Binary::from(name), Binary::from(value))
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            String::from_utf8_lossy(self.name.as_slice()),
            String::from_utf8_lossy(self.value.as_slice())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Header;

    #[test]
    fn lowercase_check() {
        assert!(Header::name_is_lowercase(b":method"));
        assert!(Header::name_is_lowercase(b"content-type"));
        assert!(!Header::name_is_lowercase(b"Content-Type"));
    }
}
