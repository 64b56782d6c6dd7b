//! The key registry: which fields, in which order, identify a document.
//!
//! [`KeyRegistry`] is built once per process from the collection table in
//! `botledger-types` and never mutated. [`KeyDeriver`] pairs it with the
//! configured [`KeyOptions`] and implements primary-key derivation for
//! untyped JSON documents.

use serde_json::{Map, Value};
use tracing::field;

use std::collections::HashMap;
use std::sync::OnceLock;

use botledger_observe::attrs;
use botledger_types::collection::{CollectionId, ForeignKey};
use botledger_types::config::KeyOptions;
use botledger_types::error::{ConfigurationError, KeyError, ValidationError};
use botledger_types::key::{json_kind, KeyValue};

use crate::encoding::{encode_key, legacy_render};

static GLOBAL_REGISTRY: OnceLock<KeyRegistry> = OnceLock::new();

/// Key definition for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSchema {
    pub id: CollectionId,
    /// Non-empty, in declared order.
    pub key_fields: &'static [&'static str],
    pub references: &'static [ForeignKey],
}

impl CollectionSchema {
    pub fn of(id: CollectionId) -> Self {
        Self {
            id,
            key_fields: id.key_fields(),
            references: id.references(),
        }
    }
}

/// Immutable lookup from collection token to its key definition.
#[derive(Debug)]
pub struct KeyRegistry {
    entries: HashMap<&'static str, CollectionSchema>,
}

impl KeyRegistry {
    /// The process-wide registry, built on first use.
    pub fn global() -> &'static KeyRegistry {
        GLOBAL_REGISTRY.get_or_init(KeyRegistry::build)
    }

    fn build() -> Self {
        let entries = CollectionId::ALL
            .into_iter()
            .map(|id| (id.as_str(), CollectionSchema::of(id)))
            .collect();
        Self { entries }
    }

    /// Look up a collection by its token.
    pub fn schema(&self, collection: &str) -> Result<&CollectionSchema, ConfigurationError> {
        self.entries
            .get(collection)
            .ok_or_else(|| ConfigurationError::UnknownCollection(collection.to_string()))
    }

    /// All collections, in declaration order.
    pub fn schemas(&self) -> impl Iterator<Item = &CollectionSchema> {
        CollectionId::ALL
            .into_iter()
            .filter_map(|id| self.entries.get(id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key fields of `schema` that `doc` lacks, in declared order.
///
/// Presence only: a field holding `null`, `false`, `0`, or `""` counts.
pub(crate) fn missing_key_fields(schema: &CollectionSchema, doc: &Map<String, Value>) -> Vec<String> {
    schema
        .key_fields
        .iter()
        .filter(|field| !doc.contains_key(**field))
        .map(|field| field.to_string())
        .collect()
}

/// Check that `doc` is an object carrying every key field of `schema`.
pub(crate) fn require_key_fields<'a>(
    schema: &CollectionSchema,
    doc: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    let Value::Object(map) = doc else {
        return Err(ValidationError::NotAnObject {
            collection: schema.id.to_string(),
            found: json_kind(doc).to_string(),
        });
    };

    let missing = missing_key_fields(schema, map);
    if !missing.is_empty() {
        return Err(ValidationError::MissingKeyFields {
            collection: schema.id.to_string(),
            missing,
            document: doc.to_string(),
        });
    }

    Ok(map)
}

/// Derives primary keys from JSON documents.
#[derive(Debug, Clone, Copy)]
pub struct KeyDeriver {
    registry: &'static KeyRegistry,
    options: KeyOptions,
}

impl KeyDeriver {
    /// A deriver over the global registry with the given options.
    pub fn new(options: KeyOptions) -> Self {
        Self {
            registry: KeyRegistry::global(),
            options,
        }
    }

    pub fn options(&self) -> KeyOptions {
        self.options
    }

    pub fn registry(&self) -> &'static KeyRegistry {
        self.registry
    }

    /// Derive the primary key of `doc` within `collection`.
    ///
    /// Checks, in order: the collection is known, `doc` is an object, and
    /// every key field is present. The key is the key-field values in
    /// declared order, each converted to text, joined with `_`.
    pub fn primary_key(&self, doc: &Value, collection: &str) -> Result<String, KeyError> {
        match self.derive(doc, collection) {
            Ok((key, field_count)) => {
                tracing::debug!(
                    { attrs::COLLECTION } = collection,
                    { attrs::PRIMARY_KEY } = key.as_str(),
                    { attrs::KEY_FIELD_COUNT } = field_count as u64,
                    { attrs::KEY_ENCODING } = field::display(self.options.encoding),
                    "derived primary key"
                );
                Ok(key)
            }
            Err(e) => {
                tracing::debug!(
                    { attrs::COLLECTION } = collection,
                    { attrs::ERROR } = field::display(&e),
                    "primary key derivation failed"
                );
                Err(e)
            }
        }
    }

    /// The key and the number of fields it was built from.
    fn derive(&self, doc: &Value, collection: &str) -> Result<(String, usize), KeyError> {
        let schema = self.registry.schema(collection)?;
        let parts = self.key_parts(schema, doc)?;
        let field_count = parts.len();
        Ok((encode_key(parts, self.options.encoding), field_count))
    }

    /// Rendered key-field values of `doc`, in declared order.
    pub fn key_parts(
        &self,
        schema: &CollectionSchema,
        doc: &Value,
    ) -> Result<Vec<String>, ValidationError> {
        let map = require_key_fields(schema, doc)?;

        schema
            .key_fields
            .iter()
            .map(|field| {
                // Presence was checked above.
                let value = &map[*field];
                match KeyValue::from_json(value) {
                    Some(scalar) => Ok(scalar.to_string()),
                    None if !self.options.scalar_only => Ok(legacy_render(value)),
                    None => Err(ValidationError::NonScalarKeyField {
                        collection: schema.id.to_string(),
                        field: field.to_string(),
                        found: json_kind(value).to_string(),
                    }),
                }
            })
            .collect()
    }
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self::new(KeyOptions::default())
    }
}

/// Derive the primary key of `doc` within `collection` using default
/// options (plain `_` join, scalar key values only).
///
/// # Examples
///
/// ```
/// use botledger_core::get_primary_key;
/// use serde_json::json;
///
/// let key = get_primary_key(
///     &json!({"execution_id": "abc123", "action_type": "merge", "timestamp": 1000}),
///     "Action",
/// )
/// .unwrap();
/// assert_eq!(key, "abc123_merge_1000");
/// ```
pub fn get_primary_key(doc: &Value, collection: &str) -> Result<String, KeyError> {
    KeyDeriver::default().primary_key(doc, collection)
}
