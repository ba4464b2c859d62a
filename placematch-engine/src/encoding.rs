//! Declared character encodings for message corpora

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character encoding a corpus is declared to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// 7-bit ASCII
    #[default]
    Ascii,
    /// UTF-8
    Utf8,
}

impl Encoding {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Utf8 => "utf8",
        }
    }

    /// Decode `bytes`, returning the byte offset of the first invalid
    /// sequence on failure
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<&'a str, usize> {
        match self {
            Encoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(offset),
                None => std::str::from_utf8(bytes).map_err(|e| e.valid_up_to()),
            },
            Encoding::Utf8 => std::str::from_utf8(bytes).map_err(|e| e.valid_up_to()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            other => Err(format!("unsupported encoding: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_decode() {
        assert_eq!(Encoding::Ascii.decode(b"hello world"), Ok("hello world"));
        assert_eq!(Encoding::Ascii.decode("caf\u{e9}".as_bytes()), Err(3));
        assert_eq!(Encoding::Ascii.decode(&[b'a', 0x80]), Err(1));
    }

    #[test]
    fn test_utf8_decode() {
        assert_eq!(Encoding::Utf8.decode("caf\u{e9}".as_bytes()), Ok("caf\u{e9}"));
        assert_eq!(Encoding::Utf8.decode(&[b'o', b'k', 0xff]), Err(2));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("US-ASCII".parse::<Encoding>().unwrap(), Encoding::Ascii);
        assert_eq!("utf-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert!("latin1".parse::<Encoding>().is_err());
        assert_eq!(Encoding::default(), Encoding::Ascii);
    }
}
