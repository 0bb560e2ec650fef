//! # apvocab
//! > statically described ActivityStreams vocabulary, decoded from and encoded to json trees
//!
//! every vocabulary type is a [TypeSchema] declared as data in [types], listing the [Property]
//! descriptors of [props] it carries. a single [Entity] engine holds instances of any of them:
//! each property slot is a [PropertyValue], a tagged union of whatever alternatives the property
//! admits, and anything the schema doesn't know is kept aside and written back untouched.
//!
//! ```rust
//! let registry = apvocab::Registry::activitystreams();
//! let article = registry
//! 	.decode_value(&serde_json::json!({
//! 		"type": "Article",
//! 		"name": "Hello",
//! 		"to": ["https://example.com/alice"],
//! 	}))
//! 	.expect("valid article");
//! assert_eq!(article.count(&apvocab::props::NAME), 1);
//! assert_eq!(article.value(&apvocab::props::TO, 0).and_then(|x| x.id()), Some("https://example.com/alice"));
//! ```
//!
//! embedded entities are instantiated through a [Resolver]: [Registry] knows the whole
//! vocabulary and can be extended with more types, any `Fn(&str) -> Option<Entity>` works too

mod macros;
pub(crate) use macros::{strenum, scalars, embeds};
pub use macros::TypeValueError;

mod error;
pub use error::{CodecError, DecodeError, EncodeError, SchemaError};

mod schema;
pub use schema::{Capability, Kind, Property, TypeSchema};

pub mod primitive;
pub use primitive::{Bcp47, Duration, Iri, LangString, MediaType, Primitive};

pub mod props;
pub mod types;

mod value;
pub use value::PropertyValue;

mod entity;
pub use entity::Entity;

pub mod registry;
pub use registry::{Registry, Resolver};

pub mod config;
pub use config::Config;

#[cfg(feature = "shortcuts")]
pub mod target;

#[cfg(feature = "jsonld")]
mod jsonld;
#[cfg(feature = "jsonld")]
pub use jsonld::LD;
