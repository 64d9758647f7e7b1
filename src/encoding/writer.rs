// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte stream writer producing the OSC wire representation.
//!
//! All multi-byte values are written big-endian. Variable-length payloads
//! (strings, blobs) and the type-tag terminator use the unconditional
//! padding rule `pad = 4 - (len % 4)`: a payload whose length is already a
//! multiple of 4 still receives a full 4-byte pad word. This is inherited
//! wire behavior; peers depend on it, so it is preserved bit-exactly and
//! pinned down by tests rather than corrected.

use super::charset::Charset;
use crate::core::{SerializeError, SerializeResult};

/// Default initial capacity for the output buffer.
const DEFAULT_CAPACITY: usize = 64;

/// Growable big-endian byte stream writer.
///
/// A writer is owned exclusively by a single serialize operation; it is
/// created per call and discarded after [`into_bytes`](Self::into_bytes).
///
/// # Example
///
/// ```
/// use oscwire::encoding::OscWriter;
///
/// let mut writer = OscWriter::new();
/// writer.write_i32(42);
/// writer.write_string("abc").unwrap();
/// assert_eq!(writer.into_bytes(), vec![0, 0, 0, 42, b'a', b'b', b'c', 0]);
/// ```
#[derive(Debug)]
pub struct OscWriter {
    /// Output buffer
    buffer: Vec<u8>,
    /// Charset for string/char payloads, fixed at construction
    charset: Charset,
}

impl Default for OscWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OscWriter {
    /// Create a new writer with the default charset (UTF-8).
    #[must_use]
    pub fn new() -> Self {
        Self::with_charset(Charset::default())
    }

    /// Create a new writer with the specified charset.
    #[must_use]
    pub fn with_charset(charset: Charset) -> Self {
        Self {
            buffer: Vec::with_capacity(DEFAULT_CAPACITY),
            charset,
        }
    }

    /// Create a new writer with the specified initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            charset: Charset::default(),
        }
    }

    /// Get the configured charset.
    #[must_use]
    pub const fn charset(&self) -> Charset {
        self.charset
    }

    /// Get the current size of the written data.
    #[must_use]
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    /// Get a reference to the written data.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the writer and return the written data.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Write a 32-bit signed integer (4 bytes, big-endian).
    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Write a 64-bit signed integer (8 bytes, big-endian).
    ///
    /// Arbitrary-precision integers are reduced to their low 64 bits by
    /// the caller before reaching this writer.
    pub fn write_i64(&mut self, value: i64) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Write a 32-bit float via its IEEE-754 bit pattern (4 bytes).
    pub fn write_f32(&mut self, value: f32) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_bits().to_be_bytes());
        self
    }

    /// Write a 64-bit float via its IEEE-754 bit pattern (8 bytes).
    pub fn write_f64(&mut self, value: f64) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_bits().to_be_bytes());
        self
    }

    /// Write a single raw byte.
    ///
    /// CAUTION: this does not enforce 4-byte alignment and breaks the
    /// stream's alignment invariant if used standalone. It exists for
    /// callers that assemble an aligned unit themselves, such as the
    /// type-tag renderer, which terminates the tag characters with
    /// [`pad_to_boundary`](Self::pad_to_boundary).
    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buffer.push(value);
        self
    }

    /// Write a raw byte span, left-padded with zero bytes to a 4-byte
    /// total when the span length is not itself a multiple of 4.
    ///
    /// Unlike the string/blob path, an already-aligned span passes
    /// through without padding.
    pub fn write_aligned_block(&mut self, bytes: &[u8]) -> &mut Self {
        let rem = bytes.len() % 4;
        if rem != 0 {
            self.write_zeros(4 - rem);
        }
        self.buffer.extend_from_slice(bytes);
        self
    }

    /// Write a string: charset-encoded bytes followed by the
    /// unconditional trailing padding.
    ///
    /// The pad is `4 - (len % 4)` zero bytes even when `len` is already
    /// a multiple of 4, so an aligned string gains a full extra pad word
    /// ("abcd" occupies 8 bytes).
    pub fn write_string(&mut self, value: &str) -> SerializeResult<()> {
        let bytes = self.charset.encode_str(value)?;
        let pad = 4 - (bytes.len() % 4);
        self.buffer.extend_from_slice(bytes);
        self.write_zeros(pad);
        Ok(())
    }

    /// Write a single character through the aligned path: one charset
    /// byte followed by three zero bytes.
    pub fn write_char(&mut self, value: char) -> SerializeResult<()> {
        let byte = self.charset.encode_char(value)?;
        self.buffer.push(byte);
        self.write_zeros(3);
        Ok(())
    }

    /// Write a blob: `i32` length prefix, raw bytes, then the same
    /// unconditional trailing padding as strings.
    pub fn write_blob(&mut self, bytes: &[u8]) -> SerializeResult<()> {
        let length =
            i32::try_from(bytes.len()).map_err(|_| SerializeError::blob_too_large(bytes.len()))?;
        self.write_i32(length);
        let pad = 4 - (bytes.len() % 4);
        self.buffer.extend_from_slice(bytes);
        self.write_zeros(pad);
        Ok(())
    }

    /// Terminate the current logical unit: append `4 - (len % 4)` zero
    /// bytes unconditionally (1 to 4 of them), so the stream always grows
    /// and always ends on a 4-byte boundary.
    ///
    /// Used after the type-tag characters, which double as the tag
    /// string's NUL termination.
    pub fn pad_to_boundary(&mut self) -> &mut Self {
        let pad = 4 - (self.buffer.len() % 4);
        self.write_zeros(pad);
        self
    }

    fn write_zeros(&mut self, count: usize) {
        self.buffer.resize(self.buffer.len() + count, 0);
    }
}
