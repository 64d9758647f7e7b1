// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Argument list serialization: type-tag rendering plus payload writing.
//!
//! The serializer renders the type-tag string first (one identifier
//! character per argument, recursing into nested arrays as `[` ... `]`),
//! terminates it with the unconditional padding rule, then writes each
//! argument's payload through its registered handler in order.

use super::charset::Charset;
use super::writer::OscWriter;
use crate::argument::registry::HandlerRegistry;
use crate::argument::ArgumentHandler;
use crate::core::{OscValue, SerializeError, SerializeResult};

/// One-shot serializer for an ordered argument list.
///
/// Borrows an assembled [`HandlerRegistry`]; a fresh [`OscWriter`] is
/// created per [`serialize`](Self::serialize) call, so one serializer
/// can encode any number of argument lists sequentially.
///
/// # Example
///
/// ```
/// use oscwire::argument::registry::HandlerRegistry;
/// use oscwire::encoding::OscSerializer;
/// use oscwire::OscValue;
///
/// let registry = HandlerRegistry::with_defaults();
/// let serializer = OscSerializer::new(&registry);
/// let bytes = serializer.serialize(&[OscValue::Bool(true)]).unwrap();
/// assert_eq!(bytes, vec![b'T', 0, 0, 0]);
/// ```
pub struct OscSerializer<'a> {
    registry: &'a HandlerRegistry,
    charset: Charset,
}

impl<'a> OscSerializer<'a> {
    /// Create a serializer with the default charset (UTF-8).
    #[must_use]
    pub fn new(registry: &'a HandlerRegistry) -> Self {
        Self {
            registry,
            charset: Charset::default(),
        }
    }

    /// Create a serializer with the specified charset for string and
    /// character payloads.
    #[must_use]
    pub fn with_charset(registry: &'a HandlerRegistry, charset: Charset) -> Self {
        Self { registry, charset }
    }

    /// Serialize an ordered argument list to its wire representation.
    ///
    /// The returned buffer is always a multiple of 4 bytes long: the tag
    /// string and every variable-length payload are terminated by the
    /// unconditional padding rule.
    pub fn serialize(&self, arguments: &[OscValue]) -> SerializeResult<Vec<u8>> {
        let mut writer = OscWriter::with_charset(self.charset);
        self.render_tags(&mut writer, arguments)?;
        writer.pad_to_boundary();
        self.write_payloads(&mut writer, arguments)?;
        Ok(writer.into_bytes())
    }

    /// Emit one tag character per argument, recursing into arrays.
    ///
    /// Tag characters go through the writer's single-byte path; the
    /// caller terminates the unit with
    /// [`pad_to_boundary`](OscWriter::pad_to_boundary).
    fn render_tags(&self, writer: &mut OscWriter, arguments: &[OscValue]) -> SerializeResult<()> {
        for argument in arguments {
            match argument {
                OscValue::Array(elements) => {
                    writer.write_u8(b'[');
                    self.render_tags(writer, elements)?;
                    writer.write_u8(b']');
                }
                other => {
                    let handler = self.resolve(other)?;
                    writer.write_u8(handler.identifier() as u8);
                }
            }
        }
        Ok(())
    }

    /// Write each argument's payload in order; markers contribute
    /// nothing, arrays recurse structurally.
    fn write_payloads(
        &self,
        writer: &mut OscWriter,
        arguments: &[OscValue],
    ) -> SerializeResult<()> {
        for argument in arguments {
            match argument {
                OscValue::Array(elements) => self.write_payloads(writer, elements)?,
                other => self.resolve(other)?.serialize(writer, other)?,
            }
        }
        Ok(())
    }

    fn resolve(&self, value: &OscValue) -> SerializeResult<&dyn ArgumentHandler> {
        self.registry
            .by_value(value)
            .ok_or_else(|| SerializeError::unsupported_type(value.kind().to_string()))
    }
}
