// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Character-set configuration for string and character payloads.
//!
//! The charset is a property of the byte stream, set once per writer or
//! cursor instance and forwarded by the serializer/parser constructors.
//! Handlers never carry their own charset state.

use crate::core::{ParseError, ParseResult, SerializeError, SerializeResult};

/// Character set used to encode and decode `s` and `c` payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8 (default). Strings pass through unchanged; characters must
    /// fit a single UTF-8 byte.
    #[default]
    Utf8,
    /// Strict 7-bit ASCII in both directions.
    Ascii,
}

impl Charset {
    /// Get the charset name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Ascii => "ASCII",
        }
    }

    /// Encode a string to its payload bytes.
    pub(crate) fn encode_str(self, value: &str) -> SerializeResult<&[u8]> {
        match self {
            Charset::Utf8 => Ok(value.as_bytes()),
            Charset::Ascii => {
                if let Some(offending) = value.chars().find(|c| !c.is_ascii()) {
                    return Err(SerializeError::invalid_encoding(
                        self.name(),
                        format!("'{offending}' is outside the ASCII range"),
                    ));
                }
                Ok(value.as_bytes())
            }
        }
    }

    /// Decode payload bytes read at `position` into a string.
    pub(crate) fn decode_str(self, bytes: &[u8], position: usize) -> ParseResult<String> {
        match self {
            Charset::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| ParseError::invalid_encoding(self.name(), position, e.to_string())),
            Charset::Ascii => {
                if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(ParseError::invalid_encoding(
                        self.name(),
                        position,
                        format!("byte 0x{:02X} at offset {offset}", bytes[offset]),
                    ));
                }
                Ok(bytes.iter().map(|&b| b as char).collect())
            }
        }
    }

    /// Encode a character to its single payload byte.
    ///
    /// OSC characters occupy one byte on the wire, so the character must
    /// be representable as a single byte in this charset.
    pub(crate) fn encode_char(self, value: char) -> SerializeResult<u8> {
        if value.is_ascii() {
            Ok(value as u8)
        } else {
            Err(SerializeError::invalid_encoding(
                self.name(),
                format!("'{value}' does not fit a single {} byte", self.name()),
            ))
        }
    }

    /// Decode a single payload byte read at `position` into a character.
    pub(crate) fn decode_char(self, byte: u8, position: usize) -> ParseResult<char> {
        if byte.is_ascii() {
            Ok(byte as char)
        } else {
            Err(ParseError::invalid_encoding(
                self.name(),
                position,
                format!("byte 0x{byte:02X} is not a single-byte character"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(Charset::default(), Charset::Utf8);
    }

    #[test]
    fn test_utf8_encode_passthrough() {
        let bytes = Charset::Utf8.encode_str("héllo").expect("encode");
        assert_eq!(bytes, "héllo".as_bytes());
    }

    #[test]
    fn test_utf8_decode_rejects_invalid_bytes() {
        let result = Charset::Utf8.decode_str(&[0x61, 0xFF, 0x62], 8);
        assert!(matches!(
            result,
            Err(ParseError::InvalidEncoding { position: 8, .. })
        ));
    }

    #[test]
    fn test_ascii_encode_rejects_non_ascii() {
        let result = Charset::Ascii.encode_str("héllo");
        assert!(matches!(result, Err(SerializeError::InvalidEncoding { .. })));
    }

    #[test]
    fn test_ascii_decode_rejects_high_bytes() {
        let result = Charset::Ascii.decode_str(&[0x61, 0x80], 0);
        assert!(matches!(result, Err(ParseError::InvalidEncoding { .. })));
    }

    #[test]
    fn test_ascii_round_trip() {
        let bytes = Charset::Ascii.encode_str("abc").expect("encode");
        let back = Charset::Ascii.decode_str(bytes, 0).expect("decode");
        assert_eq!(back, "abc");
    }

    #[test]
    fn test_char_single_byte_contract() {
        assert_eq!(Charset::Utf8.encode_char('a').expect("encode"), b'a');
        assert!(Charset::Utf8.encode_char('é').is_err());
        assert_eq!(Charset::Utf8.decode_char(b'a', 0).expect("decode"), 'a');
        assert!(Charset::Utf8.decode_char(0xC3, 0).is_err());
    }
}
