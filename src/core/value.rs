// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! OSC argument value type system.
//!
//! Provides the unified value representation for serialized and parsed
//! argument lists. All variants are serde-serializable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single OSC argument value.
///
/// Each payload-bearing variant corresponds to one registered argument
/// handler; the marker variants (`Bool`, `Null`, `Impulse`) are fully
/// encoded by their type-tag character and carry no payload bytes.
/// `Array` is structural: it is rendered as `[` and `]` delimiters in
/// the type-tag string and contributes only its elements' payloads.
///
/// # Design Principles
///
/// - **Serde support**: all variants are serializable for downstream
///   processing
/// - **Owned types**: uses owned `String` and `Vec<u8>` for clarity
/// - **Tagged dispatch**: handler resolution goes through [`ValueKind`]
///   rather than sequential runtime type tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OscValue {
    /// 32-bit signed integer, identifier `i`
    Int32(i32),

    /// 64-bit signed integer, identifier `h`.
    /// Arbitrary-precision integers are reduced to 64 bits by the caller.
    Int64(i64),

    /// 32-bit float, identifier `f`
    Float32(f32),

    /// 64-bit float, identifier `d`
    Float64(f64),

    /// Charset-encoded string, identifier `s`
    String(String),

    /// Single character, identifier `c`
    Char(char),

    /// Opaque binary payload, identifier `b`
    Blob(Vec<u8>),

    /// Boolean, identifiers `T` / `F` (marker-only)
    Bool(bool),

    /// Null, identifier `N` (marker-only)
    Null,

    /// Impulse (bang), identifier `I` (marker-only)
    Impulse,

    /// RGBA color, identifier `r` (extension type)
    Color(OscColor),

    /// Nested argument array, rendered as `[` ... `]` in the tag string
    Array(Vec<OscValue>),
}

/// Payload-shape discriminant used for serialize-time handler resolution.
///
/// `Bool(true)` and `Bool(false)` map to the distinct kinds [`True`] and
/// [`False`]: booleans resolve to their own handlers ahead of any generic
/// type matching, as a property of the discriminant rather than of lookup
/// order.
///
/// [`True`]: ValueKind::True
/// [`False`]: ValueKind::False
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float64,
    /// Charset-encoded string
    String,
    /// Single character
    Char,
    /// Opaque binary payload
    Blob,
    /// Boolean true (marker)
    True,
    /// Boolean false (marker)
    False,
    /// Null (marker)
    Null,
    /// Impulse (marker)
    Impulse,
    /// RGBA color (extension)
    Color,
    /// Nested argument array (structural, never registered)
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::String => "string",
            ValueKind::Char => "char",
            ValueKind::Blob => "blob",
            ValueKind::True => "true",
            ValueKind::False => "false",
            ValueKind::Null => "null",
            ValueKind::Impulse => "impulse",
            ValueKind::Color => "color",
            ValueKind::Array => "array",
        };
        write!(f, "{name}")
    }
}

impl OscValue {
    /// Get the payload-shape kind of this value.
    ///
    /// Booleans are classified by their value, not just their type:
    /// `Bool(true)` is [`ValueKind::True`] and `Bool(false)` is
    /// [`ValueKind::False`], each with its own tag character.
    pub fn kind(&self) -> ValueKind {
        match self {
            OscValue::Bool(true) => ValueKind::True,
            OscValue::Bool(false) => ValueKind::False,
            OscValue::Int32(_) => ValueKind::Int32,
            OscValue::Int64(_) => ValueKind::Int64,
            OscValue::Float32(_) => ValueKind::Float32,
            OscValue::Float64(_) => ValueKind::Float64,
            OscValue::String(_) => ValueKind::String,
            OscValue::Char(_) => ValueKind::Char,
            OscValue::Blob(_) => ValueKind::Blob,
            OscValue::Null => ValueKind::Null,
            OscValue::Impulse => ValueKind::Impulse,
            OscValue::Color(_) => ValueKind::Color,
            OscValue::Array(_) => ValueKind::Array,
        }
    }

    /// Get a human-readable type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            OscValue::Int32(_) => "int32",
            OscValue::Int64(_) => "int64",
            OscValue::Float32(_) => "float32",
            OscValue::Float64(_) => "float64",
            OscValue::String(_) => "string",
            OscValue::Char(_) => "char",
            OscValue::Blob(_) => "blob",
            OscValue::Bool(true) => "true",
            OscValue::Bool(false) => "false",
            OscValue::Null => "null",
            OscValue::Impulse => "impulse",
            OscValue::Color(_) => "color",
            OscValue::Array(_) => "array",
        }
    }

    /// Check if this value is fully encoded by its tag character
    /// (contributes zero payload bytes).
    pub fn is_marker(&self) -> bool {
        matches!(self, OscValue::Bool(_) | OscValue::Null | OscValue::Impulse)
    }

    /// Check if this value is a numeric type (integers or floats).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            OscValue::Int32(_) | OscValue::Int64(_) | OscValue::Float32(_) | OscValue::Float64(_)
        )
    }

    /// Get the value as i32, if it is one.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            OscValue::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as i64, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OscValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as f32, if it is one.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            OscValue::Float32(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as f64, if it is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OscValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OscValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a char, if it is one.
    pub fn as_char(&self) -> Option<char> {
        match self {
            OscValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the value as a blob byte slice, if it is a blob.
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            OscValue::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Get the value as a bool, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OscValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a color, if it is one.
    pub fn as_color(&self) -> Option<OscColor> {
        match self {
            OscValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the value as an array slice, if it is an array.
    pub fn as_array(&self) -> Option<&[OscValue]> {
        match self {
            OscValue::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl From<i32> for OscValue {
    fn from(v: i32) -> Self {
        OscValue::Int32(v)
    }
}

impl From<i64> for OscValue {
    fn from(v: i64) -> Self {
        OscValue::Int64(v)
    }
}

impl From<f32> for OscValue {
    fn from(v: f32) -> Self {
        OscValue::Float32(v)
    }
}

impl From<f64> for OscValue {
    fn from(v: f64) -> Self {
        OscValue::Float64(v)
    }
}

impl From<&str> for OscValue {
    fn from(v: &str) -> Self {
        OscValue::String(v.to_string())
    }
}

impl From<String> for OscValue {
    fn from(v: String) -> Self {
        OscValue::String(v)
    }
}

impl From<char> for OscValue {
    fn from(v: char) -> Self {
        OscValue::Char(v)
    }
}

impl From<Vec<u8>> for OscValue {
    fn from(v: Vec<u8>) -> Self {
        OscValue::Blob(v)
    }
}

impl From<bool> for OscValue {
    fn from(v: bool) -> Self {
        OscValue::Bool(v)
    }
}

impl From<OscColor> for OscValue {
    fn from(v: OscColor) -> Self {
        OscValue::Color(v)
    }
}

impl From<Vec<OscValue>> for OscValue {
    fn from(v: Vec<OscValue>) -> Self {
        OscValue::Array(v)
    }
}

/// RGBA color argument, wire order R,G,B,A.
///
/// The value for the `r` extension type. The handler for it lives in
/// [`crate::argument::color`] and is not part of the default registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OscColor {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel
    pub alpha: u8,
}

impl OscColor {
    /// Create a color from its four channels.
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Unpack a color from a big-endian RGBA word (red in the most
    /// significant byte).
    pub fn from_rgba(word: u32) -> Self {
        let [red, green, blue, alpha] = word.to_be_bytes();
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Pack the color into a big-endian RGBA word.
    pub fn to_rgba(self) -> u32 {
        u32::from_be_bytes([self.red, self.green, self.blue, self.alpha])
    }
}
