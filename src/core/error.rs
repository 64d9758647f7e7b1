// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for oscwire.
//!
//! Three error domains with distinct lifecycles:
//! - [`ParseError`] - failures while decoding a received byte buffer
//! - [`SerializeError`] - failures while encoding an argument list
//! - [`RegistryError`] - handler registration conflicts, surfaced at
//!   registry-assembly time, never during serialize/parse

use std::fmt;

/// Errors that can occur while parsing a received OSC byte buffer.
///
/// A parse failure for any one argument invalidates the whole
/// argument-list parse; no partial results are returned.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// Type-tag character with no registered handler
    UnknownType {
        /// The unrecognized identifier character
        identifier: char,
    },

    /// Buffer exhausted before the required bytes were available
    BufferUnderrun {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when the underrun occurred
        position: usize,
    },

    /// String or character payload not decodable in the configured charset
    InvalidEncoding {
        /// Charset name (e.g. "UTF-8", "ASCII")
        charset: String,
        /// Cursor position of the offending payload
        position: usize,
        /// Decode error detail
        reason: String,
    },

    /// Unbalanced `[` / `]` in the type-tag string
    UnbalancedArray {
        /// Index of the offending character within the tag string
        position: usize,
    },

    /// Negative blob length prefix
    InvalidLength {
        /// The length value that was read
        length: i32,
        /// Cursor position of the length prefix
        position: usize,
    },

    /// Blob length prefix exceeding the data bounds
    LengthExceeded {
        /// Length that was read
        length: usize,
        /// Position in buffer
        position: usize,
        /// Buffer length
        buffer_len: usize,
    },
}

impl ParseError {
    /// Create an unknown-type error.
    pub fn unknown_type(identifier: char) -> Self {
        ParseError::UnknownType { identifier }
    }

    /// Create a buffer underrun error.
    pub fn buffer_underrun(requested: usize, available: usize, position: usize) -> Self {
        ParseError::BufferUnderrun {
            requested,
            available,
            position,
        }
    }

    /// Create an invalid-encoding error.
    pub fn invalid_encoding(
        charset: impl Into<String>,
        position: usize,
        reason: impl Into<String>,
    ) -> Self {
        ParseError::InvalidEncoding {
            charset: charset.into(),
            position,
            reason: reason.into(),
        }
    }

    /// Create an unbalanced-array error.
    pub fn unbalanced_array(position: usize) -> Self {
        ParseError::UnbalancedArray { position }
    }

    /// Create an invalid-length error.
    pub fn invalid_length(length: i32, position: usize) -> Self {
        ParseError::InvalidLength { length, position }
    }

    /// Create a length-exceeded error.
    pub fn length_exceeded(length: usize, position: usize, buffer_len: usize) -> Self {
        ParseError::LengthExceeded {
            length,
            position,
            buffer_len,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ParseError::UnknownType { identifier } => {
                vec![("identifier", identifier.to_string())]
            }
            ParseError::BufferUnderrun {
                requested,
                available,
                position,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            ParseError::InvalidEncoding {
                charset,
                position,
                reason,
            } => vec![
                ("charset", charset.clone()),
                ("position", position.to_string()),
                ("reason", reason.clone()),
            ],
            ParseError::UnbalancedArray { position } => {
                vec![("position", position.to_string())]
            }
            ParseError::InvalidLength { length, position } => vec![
                ("length", length.to_string()),
                ("position", position.to_string()),
            ],
            ParseError::LengthExceeded {
                length,
                position,
                buffer_len,
            } => vec![
                ("length", length.to_string()),
                ("position", position.to_string()),
                ("buffer_len", buffer_len.to_string()),
            ],
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownType { identifier } => {
                write!(f, "Unknown type identifier: '{identifier}'")
            }
            ParseError::BufferUnderrun {
                requested,
                available,
                position,
            } => write!(
                f,
                "Buffer underrun: requested {requested} bytes at position {position}, but only {available} bytes available"
            ),
            ParseError::InvalidEncoding {
                charset,
                position,
                reason,
            } => write!(
                f,
                "Invalid {charset} payload at position {position}: {reason}"
            ),
            ParseError::UnbalancedArray { position } => {
                write!(f, "Unbalanced array delimiter in tag string at index {position}")
            }
            ParseError::InvalidLength { length, position } => {
                write!(f, "Invalid length {length} at position {position}")
            }
            ParseError::LengthExceeded {
                length,
                position,
                buffer_len,
            } => write!(
                f,
                "Length {length} exceeds buffer at position {position} (buffer length: {buffer_len})"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur while serializing an argument list.
#[derive(Debug, Clone)]
pub enum SerializeError {
    /// Value variant does not match the type the handler was resolved for
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual type name of the supplied value
        actual: String,
    },

    /// Value shape has no registered handler
    UnsupportedType {
        /// The unregistered value kind
        kind: String,
    },

    /// String or character not representable in the configured charset
    InvalidEncoding {
        /// Charset name (e.g. "UTF-8", "ASCII")
        charset: String,
        /// Encode error detail
        reason: String,
    },

    /// Blob longer than the `i32` length prefix can describe
    BlobTooLarge {
        /// Actual blob length in bytes
        length: usize,
    },
}

impl SerializeError {
    /// Create a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        SerializeError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an unsupported-type error.
    pub fn unsupported_type(kind: impl Into<String>) -> Self {
        SerializeError::UnsupportedType { kind: kind.into() }
    }

    /// Create an invalid-encoding error.
    pub fn invalid_encoding(charset: impl Into<String>, reason: impl Into<String>) -> Self {
        SerializeError::InvalidEncoding {
            charset: charset.into(),
            reason: reason.into(),
        }
    }

    /// Create a blob-too-large error.
    pub fn blob_too_large(length: usize) -> Self {
        SerializeError::BlobTooLarge { length }
    }
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::TypeMismatch { expected, actual } => {
                write!(f, "Type mismatch: expected {expected}, got {actual}")
            }
            SerializeError::UnsupportedType { kind } => {
                write!(f, "No handler registered for value kind: {kind}")
            }
            SerializeError::InvalidEncoding { charset, reason } => {
                write!(f, "Value not representable in {charset}: {reason}")
            }
            SerializeError::BlobTooLarge { length } => {
                write!(f, "Blob of {length} bytes exceeds the 32-bit length prefix")
            }
        }
    }
}

impl std::error::Error for SerializeError {}

/// Handler registration conflicts.
///
/// These are configuration errors raised while the registry is being
/// assembled, before any serialize or parse operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Identifier character already claimed by another handler
    DuplicateIdentifier {
        /// The colliding identifier character
        identifier: char,
    },

    /// Identifier character reserved for structural use (`[`, `]`, NUL)
    ReservedIdentifier {
        /// The rejected identifier character
        identifier: char,
    },

    /// Identifier character outside the single-byte ASCII range
    InvalidIdentifier {
        /// The rejected identifier character
        identifier: char,
    },

    /// Value kind already claimed by another handler
    DuplicateKind {
        /// Name of the colliding value kind
        kind: String,
    },
}

impl RegistryError {
    /// Create a duplicate-identifier error.
    pub fn duplicate_identifier(identifier: char) -> Self {
        RegistryError::DuplicateIdentifier { identifier }
    }

    /// Create a reserved-identifier error.
    pub fn reserved_identifier(identifier: char) -> Self {
        RegistryError::ReservedIdentifier { identifier }
    }

    /// Create an invalid-identifier error.
    pub fn invalid_identifier(identifier: char) -> Self {
        RegistryError::InvalidIdentifier { identifier }
    }

    /// Create a duplicate-kind error.
    pub fn duplicate_kind(kind: impl Into<String>) -> Self {
        RegistryError::DuplicateKind { kind: kind.into() }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateIdentifier { identifier } => {
                write!(f, "Identifier '{identifier}' is already registered")
            }
            RegistryError::ReservedIdentifier { identifier } => {
                write!(f, "Identifier '{identifier}' is reserved for structural use")
            }
            RegistryError::InvalidIdentifier { identifier } => {
                write!(f, "Identifier '{identifier}' is not a single-byte ASCII character")
            }
            RegistryError::DuplicateKind { kind } => {
                write!(f, "Value kind {kind} is already handled")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Result type for parse operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type for serialize operations.
pub type SerializeResult<T> = std::result::Result<T, SerializeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_error() {
        let err = ParseError::unknown_type('q');
        assert!(matches!(err, ParseError::UnknownType { .. }));
        assert_eq!(err.to_string(), "Unknown type identifier: 'q'");
    }

    #[test]
    fn test_buffer_underrun_error() {
        let err = ParseError::buffer_underrun(8, 3, 12);
        assert!(matches!(err, ParseError::BufferUnderrun { .. }));
        assert_eq!(
            err.to_string(),
            "Buffer underrun: requested 8 bytes at position 12, but only 3 bytes available"
        );
    }

    #[test]
    fn test_invalid_encoding_error() {
        let err = ParseError::invalid_encoding("UTF-8", 4, "invalid continuation byte");
        assert!(matches!(err, ParseError::InvalidEncoding { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid UTF-8 payload at position 4: invalid continuation byte"
        );
    }

    #[test]
    fn test_unbalanced_array_error() {
        let err = ParseError::unbalanced_array(3);
        assert_eq!(
            err.to_string(),
            "Unbalanced array delimiter in tag string at index 3"
        );
    }

    #[test]
    fn test_invalid_length_error() {
        let err = ParseError::invalid_length(-5, 8);
        assert_eq!(err.to_string(), "Invalid length -5 at position 8");
    }

    #[test]
    fn test_length_exceeded_error() {
        let err = ParseError::length_exceeded(1000, 8, 64);
        assert_eq!(
            err.to_string(),
            "Length 1000 exceeds buffer at position 8 (buffer length: 64)"
        );
    }

    #[test]
    fn test_log_fields_unknown_type() {
        let err = ParseError::unknown_type('q');
        let fields = err.log_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0, "identifier");
        assert_eq!(fields[0].1, "q");
    }

    #[test]
    fn test_log_fields_buffer_underrun() {
        let err = ParseError::buffer_underrun(8, 3, 12);
        let fields = err.log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ("requested", "8".to_string()));
        assert_eq!(fields[1], ("available", "3".to_string()));
        assert_eq!(fields[2], ("position", "12".to_string()));
    }

    #[test]
    fn test_log_fields_length_exceeded() {
        let err = ParseError::length_exceeded(1000, 8, 64);
        let fields = err.log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ("length", "1000".to_string()));
        assert_eq!(fields[1], ("position", "8".to_string()));
        assert_eq!(fields[2], ("buffer_len", "64".to_string()));
    }

    #[test]
    fn test_type_mismatch_error() {
        let err = SerializeError::type_mismatch("int32", "string");
        assert!(matches!(err, SerializeError::TypeMismatch { .. }));
        assert_eq!(err.to_string(), "Type mismatch: expected int32, got string");
    }

    #[test]
    fn test_unsupported_type_error() {
        let err = SerializeError::unsupported_type("color");
        assert_eq!(
            err.to_string(),
            "No handler registered for value kind: color"
        );
    }

    #[test]
    fn test_serialize_invalid_encoding_error() {
        let err = SerializeError::invalid_encoding("ASCII", "'é' is outside the ASCII range");
        assert_eq!(
            err.to_string(),
            "Value not representable in ASCII: 'é' is outside the ASCII range"
        );
    }

    #[test]
    fn test_blob_too_large_error() {
        let err = SerializeError::blob_too_large(3_000_000_000);
        assert_eq!(
            err.to_string(),
            "Blob of 3000000000 bytes exceeds the 32-bit length prefix"
        );
    }

    #[test]
    fn test_duplicate_identifier_error() {
        let err = RegistryError::duplicate_identifier('i');
        assert_eq!(err.to_string(), "Identifier 'i' is already registered");
    }

    #[test]
    fn test_reserved_identifier_error() {
        let err = RegistryError::reserved_identifier('[');
        assert_eq!(
            err.to_string(),
            "Identifier '[' is reserved for structural use"
        );
    }

    #[test]
    fn test_invalid_identifier_error() {
        let err = RegistryError::invalid_identifier('é');
        assert_eq!(
            err.to_string(),
            "Identifier 'é' is not a single-byte ASCII character"
        );
    }

    #[test]
    fn test_duplicate_kind_error() {
        let err = RegistryError::duplicate_kind("int32");
        assert_eq!(err.to_string(), "Value kind int32 is already handled");
    }

    #[test]
    fn test_error_clone() {
        let err1 = ParseError::buffer_underrun(4, 0, 0);
        let err2 = err1.clone();
        assert_eq!(err1.to_string(), err2.to_string());
    }

    #[test]
    fn test_error_debug_format() {
        let err = ParseError::unknown_type('z');
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("UnknownType"));
    }
}
