// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The default argument type set: `i h f d s c b` payload handlers and
//! the `T F N I` marker handlers.
//!
//! Each handler is a stateless unit struct. Serialization checks the
//! value variant first and reports a type mismatch rather than coercing;
//! parsing consumes exactly the payload width defined by the wire format.

use super::ArgumentHandler;
use crate::core::{OscValue, ParseResult, SerializeError, SerializeResult, ValueKind};
use crate::encoding::{OscCursor, OscWriter};

/// 32-bit signed integer, identifier `i`, 4-byte payload.
pub struct Int32Handler;

impl ArgumentHandler for Int32Handler {
    fn identifier(&self) -> char {
        'i'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Int32
    }

    fn parse(&self, cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Int32(cursor.read_i32()?))
    }

    fn serialize(&self, writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Int32(v) => {
                writer.write_i32(*v);
                Ok(())
            }
            other => Err(SerializeError::type_mismatch("int32", other.type_name())),
        }
    }
}

/// 64-bit signed integer, identifier `h`, 8-byte payload.
///
/// Also the landing type for arbitrary-precision integers reduced to
/// their low 64 bits by the caller.
pub struct Int64Handler;

impl ArgumentHandler for Int64Handler {
    fn identifier(&self) -> char {
        'h'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Int64
    }

    fn parse(&self, cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Int64(cursor.read_i64()?))
    }

    fn serialize(&self, writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Int64(v) => {
                writer.write_i64(*v);
                Ok(())
            }
            other => Err(SerializeError::type_mismatch("int64", other.type_name())),
        }
    }
}

/// 32-bit float, identifier `f`, 4-byte payload (IEEE-754 bit pattern).
pub struct Float32Handler;

impl ArgumentHandler for Float32Handler {
    fn identifier(&self) -> char {
        'f'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Float32
    }

    fn parse(&self, cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Float32(cursor.read_f32()?))
    }

    fn serialize(&self, writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Float32(v) => {
                writer.write_f32(*v);
                Ok(())
            }
            other => Err(SerializeError::type_mismatch("float32", other.type_name())),
        }
    }
}

/// 64-bit float, identifier `d`, 8-byte payload (IEEE-754 bit pattern).
pub struct Float64Handler;

impl ArgumentHandler for Float64Handler {
    fn identifier(&self) -> char {
        'd'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Float64
    }

    fn parse(&self, cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Float64(cursor.read_f64()?))
    }

    fn serialize(&self, writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Float64(v) => {
                writer.write_f64(*v);
                Ok(())
            }
            other => Err(SerializeError::type_mismatch("float64", other.type_name())),
        }
    }
}

/// Charset-encoded string, identifier `s`.
pub struct StringHandler;

impl ArgumentHandler for StringHandler {
    fn identifier(&self) -> char {
        's'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::String
    }

    fn parse(&self, cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::String(cursor.read_str()?))
    }

    fn serialize(&self, writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::String(v) => writer.write_string(v),
            other => Err(SerializeError::type_mismatch("string", other.type_name())),
        }
    }
}

/// Single character, identifier `c`, one charset byte through the
/// aligned path.
pub struct CharHandler;

impl ArgumentHandler for CharHandler {
    fn identifier(&self) -> char {
        'c'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Char
    }

    fn parse(&self, cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Char(cursor.read_char()?))
    }

    fn serialize(&self, writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Char(v) => writer.write_char(*v),
            other => Err(SerializeError::type_mismatch("char", other.type_name())),
        }
    }
}

/// Opaque binary payload, identifier `b`, length-prefixed and padded.
pub struct BlobHandler;

impl ArgumentHandler for BlobHandler {
    fn identifier(&self) -> char {
        'b'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Blob
    }

    fn parse(&self, cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Blob(cursor.read_blob()?))
    }

    fn serialize(&self, writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Blob(v) => writer.write_blob(v),
            other => Err(SerializeError::type_mismatch("blob", other.type_name())),
        }
    }
}

/// Boolean true, identifier `T`, marker-only.
pub struct TrueHandler;

impl ArgumentHandler for TrueHandler {
    fn identifier(&self) -> char {
        'T'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::True
    }

    fn is_marker_only(&self) -> bool {
        true
    }

    fn parse(&self, _cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Bool(true))
    }

    fn serialize(&self, _writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Bool(true) => Ok(()),
            other => Err(SerializeError::type_mismatch("true", other.type_name())),
        }
    }
}

/// Boolean false, identifier `F`, marker-only.
pub struct FalseHandler;

impl ArgumentHandler for FalseHandler {
    fn identifier(&self) -> char {
        'F'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::False
    }

    fn is_marker_only(&self) -> bool {
        true
    }

    fn parse(&self, _cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Bool(false))
    }

    fn serialize(&self, _writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Bool(false) => Ok(()),
            other => Err(SerializeError::type_mismatch("false", other.type_name())),
        }
    }
}

/// Null, identifier `N`, marker-only.
pub struct NullHandler;

impl ArgumentHandler for NullHandler {
    fn identifier(&self) -> char {
        'N'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Null
    }

    fn is_marker_only(&self) -> bool {
        true
    }

    fn parse(&self, _cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Null)
    }

    fn serialize(&self, _writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Null => Ok(()),
            other => Err(SerializeError::type_mismatch("null", other.type_name())),
        }
    }
}

/// Impulse (bang), identifier `I`, marker-only.
pub struct ImpulseHandler;

impl ArgumentHandler for ImpulseHandler {
    fn identifier(&self) -> char {
        'I'
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Impulse
    }

    fn is_marker_only(&self) -> bool {
        true
    }

    fn parse(&self, _cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
        Ok(OscValue::Impulse)
    }

    fn serialize(&self, _writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()> {
        match value {
            OscValue::Impulse => Ok(()),
            other => Err(SerializeError::type_mismatch("impulse", other.type_name())),
        }
    }
}
