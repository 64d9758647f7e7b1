// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # oscwire
//!
//! Wire-format codec for OSC (Open Sound Control) argument lists.
//!
//! This library translates an ordered sequence of typed arguments into
//! the byte-exact, 4-byte-aligned, big-endian OSC binary representation
//! and back. Type dispatch is pluggable: each argument type is one
//! [`ArgumentHandler`](argument::ArgumentHandler) keyed by its
//! single-character type-tag identifier, and add-on modules register
//! further types through the same
//! [`HandlerRegistry`](argument::registry::HandlerRegistry) interface
//! the default set uses.
//!
//! Transport is out of scope by design: the parser takes an
//! already-received byte buffer positioned at the start of a type-tag
//! string, and the serializer produces a finished buffer for whatever
//! sink the caller uses.
//!
//! ## Architecture
//!
//! - `core/` - value model ([`OscValue`], [`ValueKind`], [`OscColor`])
//!   and the error taxonomy
//! - `encoding/` - aligned byte streams ([`encoding::OscWriter`],
//!   [`encoding::OscCursor`]) and the argument-list codec on top of them
//!   ([`encoding::OscSerializer`], [`encoding::OscParser`])
//! - `argument/` - the [`ArgumentHandler`](argument::ArgumentHandler)
//!   trait, the default type set, the color extension, and the registry
//!
//! ## Example: serialize and parse an argument list
//!
//! ```
//! use oscwire::argument::registry::HandlerRegistry;
//! use oscwire::encoding::{OscParser, OscSerializer};
//! use oscwire::OscValue;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = HandlerRegistry::with_defaults();
//!
//! let arguments = vec![
//!     OscValue::Int32(42),
//!     OscValue::String("hello".into()),
//!     OscValue::Bool(true),
//! ];
//! let bytes = OscSerializer::new(&registry).serialize(&arguments)?;
//! assert_eq!(bytes.len() % 4, 0);
//!
//! let parsed = OscParser::new(&registry).parse(&bytes)?;
//! assert_eq!(parsed, arguments);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: registering an extension type
//!
//! ```
//! use oscwire::argument::color::register_color_extensions;
//! use oscwire::argument::registry::HandlerRegistry;
//! use oscwire::encoding::{OscParser, OscSerializer};
//! use oscwire::{OscColor, OscValue};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = HandlerRegistry::with_defaults();
//! register_color_extensions(&mut registry)?;
//!
//! let color = OscValue::Color(OscColor::new(255, 0, 128, 64));
//! let bytes = OscSerializer::new(&registry).serialize(&[color.clone()])?;
//! assert_eq!(OscParser::new(&registry).parse(&bytes)?, vec![color]);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{
    OscColor, OscValue, ParseError, ParseResult, RegistryError, SerializeError, SerializeResult,
    ValueKind,
};

// Wire encoding/decoding
pub mod encoding;

// Argument handlers and registry
pub mod argument;

// Re-export the main entry points
pub use argument::registry::HandlerRegistry;
pub use encoding::{Charset, OscCursor, OscParser, OscSerializer, OscWriter};
