// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Argument handler registry.
//!
//! Maps type-tag identifier characters to handlers (parse-time
//! resolution) and value kinds to handlers (serialize-time resolution).
//! A registry is assembled once - the default set plus any add-on
//! registrations - and is read-only afterwards: registration takes
//! `&mut self`, every lookup takes `&self`, and the assembled registry
//! is safe to share across concurrent serialize/parse operations on
//! independent streams.

use std::collections::HashMap;
use std::sync::Arc;

use super::defaults::{
    BlobHandler, CharHandler, FalseHandler, Float32Handler, Float64Handler, ImpulseHandler,
    Int32Handler, Int64Handler, NullHandler, StringHandler, TrueHandler,
};
use super::ArgumentHandler;
use crate::core::{OscValue, RegistryError, ValueKind};

/// Identifier characters that can never name a handler: the array
/// delimiters and the padding/terminator byte.
const RESERVED_IDENTIFIERS: [char; 3] = ['[', ']', '\0'];

/// Extensible mapping from identifier character and value shape to
/// argument handler.
///
/// # Example
///
/// ```
/// use oscwire::argument::registry::HandlerRegistry;
/// use oscwire::argument::color::register_color_extensions;
///
/// let mut registry = HandlerRegistry::with_defaults();
/// register_color_extensions(&mut registry).unwrap();
/// assert!(registry.by_identifier('r').is_some());
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    /// Parse-time resolution: tag character to handler
    by_identifier: HashMap<char, Arc<dyn ArgumentHandler>>,
    /// Serialize-time resolution: value shape to handler
    by_kind: HashMap<ValueKind, Arc<dyn ArgumentHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the default type set
    /// (`i h f d s c b T F N I`).
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [Arc<dyn ArgumentHandler>; 11] = [
            Arc::new(Int32Handler),
            Arc::new(Int64Handler),
            Arc::new(Float32Handler),
            Arc::new(Float64Handler),
            Arc::new(StringHandler),
            Arc::new(CharHandler),
            Arc::new(BlobHandler),
            Arc::new(TrueHandler),
            Arc::new(FalseHandler),
            Arc::new(NullHandler),
            Arc::new(ImpulseHandler),
        ];
        for handler in defaults {
            registry
                .register(handler)
                .expect("default handler set is collision-free");
        }
        registry
    }

    /// Register a handler.
    ///
    /// Rejects identifiers already claimed by any previously registered
    /// handler (including the default set), the reserved structural
    /// characters `[` and `]`, non-ASCII identifiers, and handlers whose
    /// declared value kind is already mapped.
    pub fn register(&mut self, handler: Arc<dyn ArgumentHandler>) -> Result<(), RegistryError> {
        let identifier = handler.identifier();
        let kind = handler.kind();

        if RESERVED_IDENTIFIERS.contains(&identifier) {
            return Err(RegistryError::reserved_identifier(identifier));
        }
        if !identifier.is_ascii() {
            return Err(RegistryError::invalid_identifier(identifier));
        }
        if self.by_identifier.contains_key(&identifier) {
            return Err(RegistryError::duplicate_identifier(identifier));
        }
        if self.by_kind.contains_key(&kind) {
            return Err(RegistryError::duplicate_kind(kind.to_string()));
        }

        tracing::debug!(identifier = %identifier, kind = %kind, "registered argument handler");
        self.by_identifier.insert(identifier, Arc::clone(&handler));
        self.by_kind.insert(kind, handler);
        Ok(())
    }

    /// Resolve a handler by its type-tag identifier character.
    #[must_use]
    pub fn by_identifier(&self, identifier: char) -> Option<&dyn ArgumentHandler> {
        self.by_identifier.get(&identifier).map(Arc::as_ref)
    }

    /// Resolve a handler by a value's shape.
    ///
    /// Booleans resolve to the `T`/`F` handlers ahead of any generic
    /// matching because [`OscValue::kind`] classifies them by value.
    /// `Array` values are structural and never resolve to a handler.
    #[must_use]
    pub fn by_value(&self, value: &OscValue) -> Option<&dyn ArgumentHandler> {
        self.by_kind.get(&value.kind()).map(Arc::as_ref)
    }

    /// Check if an identifier is registered.
    #[must_use]
    pub fn contains(&self, identifier: char) -> bool {
        self.by_identifier.contains_key(&identifier)
    }

    /// Get all registered identifier characters.
    #[must_use]
    pub fn identifiers(&self) -> Vec<char> {
        let mut identifiers: Vec<char> = self.by_identifier.keys().copied().collect();
        identifiers.sort_unstable();
        identifiers
    }

    /// Get the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OscValue, ParseResult, SerializeResult};
    use crate::encoding::{OscCursor, OscWriter};

    // Minimal handler for collision testing
    struct ProbeHandler {
        identifier: char,
        kind: ValueKind,
    }

    impl ArgumentHandler for ProbeHandler {
        fn identifier(&self) -> char {
            self.identifier
        }

        fn kind(&self) -> ValueKind {
            self.kind
        }

        fn parse(&self, _cursor: &mut OscCursor<'_>) -> ParseResult<OscValue> {
            Ok(OscValue::Null)
        }

        fn serialize(&self, _writer: &mut OscWriter, _value: &OscValue) -> SerializeResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_with_defaults_contains_default_set() {
        let registry = HandlerRegistry::with_defaults();
        assert_eq!(registry.len(), 11);
        assert_eq!(
            registry.identifiers(),
            vec!['F', 'I', 'N', 'T', 'b', 'c', 'd', 'f', 'h', 'i', 's']
        );
    }

    #[test]
    fn test_by_identifier() {
        let registry = HandlerRegistry::with_defaults();
        let handler = registry.by_identifier('i').expect("int32 handler");
        assert_eq!(handler.kind(), ValueKind::Int32);
        assert!(registry.by_identifier('r').is_none());
    }

    #[test]
    fn test_by_value_generic_kinds() {
        let registry = HandlerRegistry::with_defaults();
        let handler = registry
            .by_value(&OscValue::String("x".into()))
            .expect("string handler");
        assert_eq!(handler.identifier(), 's');
    }

    #[test]
    fn test_by_value_booleans_resolve_by_value() {
        let registry = HandlerRegistry::with_defaults();
        let true_handler = registry.by_value(&OscValue::Bool(true)).expect("T handler");
        let false_handler = registry
            .by_value(&OscValue::Bool(false))
            .expect("F handler");
        assert_eq!(true_handler.identifier(), 'T');
        assert_eq!(false_handler.identifier(), 'F');
    }

    #[test]
    fn test_by_value_array_is_structural() {
        let registry = HandlerRegistry::with_defaults();
        assert!(registry.by_value(&OscValue::Array(vec![])).is_none());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let mut registry = HandlerRegistry::with_defaults();
        let err = registry
            .register(Arc::new(ProbeHandler {
                identifier: 'i',
                kind: ValueKind::Color,
            }))
            .expect_err("duplicate identifier must be rejected");
        assert_eq!(err, RegistryError::DuplicateIdentifier { identifier: 'i' });
        // The failed registration must not have touched the kind map.
        let color = OscValue::Color(crate::core::OscColor::new(0, 0, 0, 0));
        assert!(registry.by_value(&color).is_none());
    }

    #[test]
    fn test_reserved_identifiers_rejected() {
        let mut registry = HandlerRegistry::new();
        for reserved in ['[', ']', '\0'] {
            let err = registry
                .register(Arc::new(ProbeHandler {
                    identifier: reserved,
                    kind: ValueKind::Color,
                }))
                .expect_err("reserved identifier must be rejected");
            assert_eq!(
                err,
                RegistryError::ReservedIdentifier {
                    identifier: reserved
                }
            );
        }
    }

    #[test]
    fn test_non_ascii_identifier_rejected() {
        let mut registry = HandlerRegistry::new();
        let err = registry
            .register(Arc::new(ProbeHandler {
                identifier: 'é',
                kind: ValueKind::Color,
            }))
            .expect_err("non-ASCII identifier must be rejected");
        assert_eq!(err, RegistryError::InvalidIdentifier { identifier: 'é' });
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let mut registry = HandlerRegistry::with_defaults();
        let err = registry
            .register(Arc::new(ProbeHandler {
                identifier: 'z',
                kind: ValueKind::Int32,
            }))
            .expect_err("duplicate kind must be rejected");
        assert_eq!(
            err,
            RegistryError::DuplicateKind {
                kind: "int32".to_string()
            }
        );
        assert!(!registry.contains('z'));
    }

    #[test]
    fn test_empty_registry() {
        let registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.by_identifier('i').is_none());
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HandlerRegistry>();
    }
}
