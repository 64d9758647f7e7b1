// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Argument list parsing: the symmetric reverse of the serializer.
//!
//! Reads the type-tag string up to its terminating padding, then walks
//! the tag characters: `[` and `]` build nested array containers, every
//! other character resolves through the handler registry and consumes
//! its payload from the cursor. A failure on any argument invalidates
//! the whole parse; no partial results are returned.

use tracing::warn;

use super::charset::Charset;
use super::cursor::OscCursor;
use crate::argument::registry::HandlerRegistry;
use crate::argument::ArgumentHandler;
use crate::core::{OscValue, ParseError, ParseResult};

/// One-shot parser for a received argument-list buffer.
///
/// Borrows an assembled [`HandlerRegistry`]; a fresh [`OscCursor`] is
/// created per [`parse`](Self::parse) call.
///
/// # Example
///
/// ```
/// use oscwire::argument::registry::HandlerRegistry;
/// use oscwire::encoding::OscParser;
/// use oscwire::OscValue;
///
/// let registry = HandlerRegistry::with_defaults();
/// let parser = OscParser::new(&registry);
/// let data = [b'i', 0, 0, 0, 0, 0, 0, 42];
/// assert_eq!(parser.parse(&data).unwrap(), vec![OscValue::Int32(42)]);
/// ```
pub struct OscParser<'a> {
    registry: &'a HandlerRegistry,
    charset: Charset,
}

impl<'a> OscParser<'a> {
    /// Create a parser with the default charset (UTF-8).
    #[must_use]
    pub fn new(registry: &'a HandlerRegistry) -> Self {
        Self {
            registry,
            charset: Charset::default(),
        }
    }

    /// Create a parser with the specified charset for string and
    /// character payloads.
    #[must_use]
    pub fn with_charset(registry: &'a HandlerRegistry, charset: Charset) -> Self {
        Self { registry, charset }
    }

    /// Parse a buffer positioned at the start of a type-tag string into
    /// the ordered argument list it encodes.
    pub fn parse(&self, data: &[u8]) -> ParseResult<Vec<OscValue>> {
        let mut cursor = OscCursor::with_charset(data, self.charset);

        let tags = self.read_tag_string(&mut cursor)?;
        let arguments = self.read_payloads(&tags, &mut cursor)?;

        if !cursor.is_at_end() {
            // Transports commonly hand over over-allocated receive
            // buffers; trailing bytes are tolerated but worth noticing.
            warn!(
                trailing = cursor.remaining(),
                position = cursor.position(),
                "unconsumed bytes after argument list"
            );
        }

        Ok(arguments)
    }

    /// Read the tag characters up to the terminating padding.
    fn read_tag_string(&self, cursor: &mut OscCursor<'_>) -> ParseResult<Vec<u8>> {
        let mut tags = Vec::new();
        loop {
            let byte = cursor.read_u8()?;
            if byte == 0 {
                break;
            }
            tags.push(byte);
        }
        // The NUL just consumed is the first byte of the tag string's
        // unconditional pad; skip whatever remains of it.
        let skip = 4 - (tags.len() % 4) - 1;
        cursor.read_bytes(skip)?;
        Ok(tags)
    }

    /// Walk the tag characters, consuming one payload per non-structural
    /// tag and assembling nested arrays via an explicit container stack.
    fn read_payloads(&self, tags: &[u8], cursor: &mut OscCursor<'_>) -> ParseResult<Vec<OscValue>> {
        let mut stack: Vec<Vec<OscValue>> = vec![Vec::new()];

        for (index, &tag) in tags.iter().enumerate() {
            match tag {
                b'[' => stack.push(Vec::new()),
                b']' => {
                    let elements = stack.pop().expect("container stack is never empty");
                    match stack.last_mut() {
                        Some(parent) => parent.push(OscValue::Array(elements)),
                        None => return Err(ParseError::unbalanced_array(index)),
                    }
                }
                other => {
                    let identifier = other as char;
                    let handler: &dyn ArgumentHandler = self
                        .registry
                        .by_identifier(identifier)
                        .ok_or_else(|| ParseError::unknown_type(identifier))?;
                    let value = handler.parse(cursor)?;
                    stack
                        .last_mut()
                        .expect("container stack is never empty")
                        .push(value);
                }
            }
        }

        if stack.len() != 1 {
            // One or more '[' were never closed.
            return Err(ParseError::unbalanced_array(tags.len()));
        }
        Ok(stack.pop().expect("container stack holds the result"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &[u8]) -> ParseResult<Vec<OscValue>> {
        let registry = HandlerRegistry::with_defaults();
        OscParser::new(&registry).parse(data)
    }

    #[test]
    fn test_parse_single_marker() {
        let data = [b'T', 0, 0, 0];
        assert_eq!(parse(&data).expect("parse"), vec![OscValue::Bool(true)]);
    }

    #[test]
    fn test_parse_empty_argument_list() {
        let data = [0, 0, 0, 0];
        assert_eq!(parse(&data).expect("parse"), Vec::<OscValue>::new());
    }

    #[test]
    fn test_parse_int32() {
        let data = [b'i', 0, 0, 0, 0x00, 0x00, 0x00, 0x2A];
        assert_eq!(parse(&data).expect("parse"), vec![OscValue::Int32(42)]);
    }

    #[test]
    fn test_parse_all_markers() {
        let data = [b'T', b'F', b'N', b'I', 0, 0, 0, 0];
        assert_eq!(
            parse(&data).expect("parse"),
            vec![
                OscValue::Bool(true),
                OscValue::Bool(false),
                OscValue::Null,
                OscValue::Impulse,
            ]
        );
    }

    #[test]
    fn test_parse_string_with_always_pad_word() {
        let mut data = vec![b's', 0, 0, 0];
        data.extend_from_slice(&[b'a', b'b', b'c', b'd', 0, 0, 0, 0]);
        assert_eq!(
            parse(&data).expect("parse"),
            vec![OscValue::String("abcd".into())]
        );
    }

    #[test]
    fn test_parse_nested_array() {
        let mut data = vec![b'i', b'[', b'T', b'i', b']', 0, 0, 0];
        data.extend_from_slice(&1i32.to_be_bytes());
        data.extend_from_slice(&2i32.to_be_bytes());
        assert_eq!(
            parse(&data).expect("parse"),
            vec![
                OscValue::Int32(1),
                OscValue::Array(vec![OscValue::Bool(true), OscValue::Int32(2)]),
            ]
        );
    }

    #[test]
    fn test_parse_doubly_nested_array() {
        let mut data = vec![b'[', b'[', b'i', b']', b']', 0, 0, 0];
        data.extend_from_slice(&5i32.to_be_bytes());
        assert_eq!(
            parse(&data).expect("parse"),
            vec![OscValue::Array(vec![OscValue::Array(vec![
                OscValue::Int32(5)
            ])])]
        );
    }

    #[test]
    fn test_parse_empty_array() {
        let data = [b'[', b']', 0, 0];
        assert_eq!(
            parse(&data).expect("parse"),
            vec![OscValue::Array(vec![])]
        );
    }

    #[test]
    fn test_unknown_tag_fails() {
        let data = [b'q', 0, 0, 0];
        assert!(matches!(
            parse(&data),
            Err(ParseError::UnknownType { identifier: 'q' })
        ));
    }

    #[test]
    fn test_unknown_tag_is_not_skipped_inside_list() {
        let mut data = vec![b'i', b'q', 0, 0];
        data.extend_from_slice(&1i32.to_be_bytes());
        assert!(matches!(
            parse(&data),
            Err(ParseError::UnknownType { identifier: 'q' })
        ));
    }

    #[test]
    fn test_unbalanced_close_fails() {
        let data = [b']', 0, 0, 0];
        assert!(matches!(
            parse(&data),
            Err(ParseError::UnbalancedArray { position: 0 })
        ));
    }

    #[test]
    fn test_unclosed_open_fails() {
        let data = [b'[', b'T', 0, 0];
        assert!(matches!(
            parse(&data),
            Err(ParseError::UnbalancedArray { .. })
        ));
    }

    #[test]
    fn test_truncated_payload_fails() {
        let data = [b'i', 0, 0, 0, 0x00, 0x01];
        assert!(matches!(
            parse(&data),
            Err(ParseError::BufferUnderrun { .. })
        ));
    }

    #[test]
    fn test_missing_tag_terminator_fails() {
        // Tag characters run to the end of the buffer with no padding.
        let data = [b'i', b'i', b'i', b'i'];
        assert!(matches!(
            parse(&data),
            Err(ParseError::BufferUnderrun { .. })
        ));
    }

    #[test]
    fn test_empty_buffer_fails() {
        assert!(matches!(
            parse(&[]),
            Err(ParseError::BufferUnderrun { .. })
        ));
    }

    #[test]
    fn test_tag_padding_skip_is_unconditional() {
        // Four tags are followed by a full pad word before payloads.
        let mut data = vec![b'i', b'i', b'i', b'i', 0, 0, 0, 0];
        for v in 1..=4i32 {
            data.extend_from_slice(&v.to_be_bytes());
        }
        assert_eq!(
            parse(&data).expect("parse"),
            vec![
                OscValue::Int32(1),
                OscValue::Int32(2),
                OscValue::Int32(3),
                OscValue::Int32(4),
            ]
        );
    }

    #[test]
    fn test_trailing_bytes_are_tolerated() {
        let data = [b'T', 0, 0, 0, 0xDE, 0xAD];
        assert_eq!(parse(&data).expect("parse"), vec![OscValue::Bool(true)]);
    }

    #[test]
    fn test_failure_returns_no_partial_results() {
        // First argument parses fine, second underruns; the whole parse
        // must fail.
        let mut data = vec![b'i', b'i', 0, 0];
        data.extend_from_slice(&7i32.to_be_bytes());
        data.extend_from_slice(&[0x00, 0x01]);
        assert!(parse(&data).is_err());
    }
}
