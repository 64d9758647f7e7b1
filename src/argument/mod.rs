// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Pluggable per-type argument handlers.
//!
//! Each semantic argument type is handled by one [`ArgumentHandler`]:
//! it knows its single-character type-tag identifier, whether it is a
//! marker-only type, and how to parse and serialize its payload. The
//! default set lives in [`defaults`]; add-on types such as the RGBA
//! color in [`color`] register through the same
//! [`HandlerRegistry`](registry::HandlerRegistry) interface.

pub mod color;
pub mod defaults;
pub mod registry;

use crate::core::{OscValue, ParseResult, SerializeResult, ValueKind};
use crate::encoding::{OscCursor, OscWriter};

/// One semantic argument type's wire behavior.
///
/// Handlers are stateless values constructed once during registry
/// assembly and shared by reference for the registry's lifetime; they
/// carry no per-call mutable state. Charset configuration lives on the
/// writer/cursor, never on a handler.
///
/// # Contract
///
/// - `parse` consumes exactly the bytes belonging to this type (zero
///   bytes if marker-only) and leaves the cursor immediately past them.
/// - `serialize` writes exactly this type's payload (nothing if
///   marker-only) and fails with a
///   [`TypeMismatch`](crate::core::SerializeError::TypeMismatch) when
///   the supplied value does not match the type the handler was
///   resolved for.
/// - Marker-only handlers guarantee a zero-byte payload in both
///   directions.
pub trait ArgumentHandler: Send + Sync {
    /// The type-tag identifier character for this type.
    fn identifier(&self) -> char;

    /// The value shape this handler serializes.
    fn kind(&self) -> ValueKind;

    /// Whether the value is fully encoded by the tag character, with no
    /// payload bytes.
    fn is_marker_only(&self) -> bool {
        false
    }

    /// Parse this type's payload from the cursor.
    fn parse(&self, cursor: &mut OscCursor<'_>) -> ParseResult<OscValue>;

    /// Serialize `value`'s payload into the writer.
    fn serialize(&self, writer: &mut OscWriter, value: &OscValue) -> SerializeResult<()>;
}
