// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! RGBA color argument support, identifier `r`.
//!
//! This is an add-on argument type, not part of the default set: callers
//! that exchange color arguments opt in by calling
//! [`register_color_extensions`] while assembling their registry. It
//! exercises the same extension seam available to third-party types.

use std::sync::Arc;

use super::registry::HandlerRegistry;
use super::ArgumentHandler;
use crate::core::{OscColor, OscValue, ParseResult, RegistryError, SerializeError, SerializeResult, ValueKind};
use crate::encoding::{OscCursor, OscWriter};

/// RGBA color, identifier `r`, 4-byte payload in wire order R,G,B,A.
pub struct ColorHandler;

impl ArgumentHandler for ColorHandler {
    fn identifier(&self) -> char {
        'r'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Color
    }

    fn parse(&self, cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        let word = cursor.read_i32()? as u32;
        Ok(OscValue::Color(OscColor::from_rgba(word)))
    }

    fn serialize(&self, writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Color(color) => {
                writer.write_i32(color.to_rgba() as i32);
                Ok(())
            }
            other => Err(SerializeError::type_mismatch("color", other.type_name())),
        }
    }
}

/// Register the color argument type with `registry`.
///
/// Fails with a [`RegistryError`] if another handler already claims the
/// `r` identifier or the color value kind.
pub fn register_color_extensions(registry: &mut HandlerRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(ColorHandler))
}
