use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
	primitive::{Bcp47, Duration, Iri, LangString, MediaType, Primitive},
	registry::Decoder,
	Capability, CodecError, DecodeError, EncodeError, Entity, Kind, Property, SchemaError,
};

/// The value held by one property slot: exactly one of the alternatives its property admits, or
/// a raw json value nothing in the schema could make sense of.
///
/// Being an enum, setting any alternative drops whatever was there before.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	String(String),
	LangString(LangString),
	Iri(Iri),
	Float(f64),
	DateTime(DateTime<Utc>),
	Duration(Duration),
	MediaType(MediaType),
	NonNegativeInteger(u64),
	Boolean(bool),
	Bcp47(Bcp47),
	/// a nested entity, tagged with the capability it was accepted as
	Embedded(Capability, Box<Entity>),
	/// passed through verbatim
	Unknown(Value),
}

crate::scalars! {
	String(String) => string,
	LangString(LangString) => lang_string,
	Iri(Iri) => iri,
	Float(f64) => float,
	DateTime(DateTime<Utc>) => date_time,
	Duration(Duration) => duration,
	MediaType(MediaType) => media_type,
	NonNegativeInteger(u64) => non_negative_integer,
	Boolean(bool) => boolean,
	Bcp47(Bcp47) => bcp47,
}

crate::embeds! {
	Object => object,
	Link => link,
	Image => image,
	Collection => collection,
	OrderedCollection => ordered_collection,
	CollectionPage => collection_page,
	OrderedCollectionPage => ordered_collection_page,
}

impl PropertyValue {
	/// embed an entity as `capability`, which its type must satisfy
	pub fn embed(capability: Capability, entity: Entity) -> Result<Self, SchemaError> {
		if !entity.satisfies(capability) {
			return Err(SchemaError::Capability { ty: entity.type_name(), capability });
		}
		Ok(PropertyValue::Embedded(capability, Box::new(entity)))
	}

	/// which alternative is held, `None` for unknown payloads
	pub fn kind(&self) -> Option<Kind> {
		match self {
			PropertyValue::String(_) => Some(Kind::String),
			PropertyValue::LangString(_) => Some(Kind::LangString),
			PropertyValue::Iri(_) => Some(Kind::Iri),
			PropertyValue::Float(_) => Some(Kind::Float),
			PropertyValue::DateTime(_) => Some(Kind::DateTime),
			PropertyValue::Duration(_) => Some(Kind::Duration),
			PropertyValue::MediaType(_) => Some(Kind::MediaType),
			PropertyValue::NonNegativeInteger(_) => Some(Kind::NonNegativeInteger),
			PropertyValue::Boolean(_) => Some(Kind::Boolean),
			PropertyValue::Bcp47(_) => Some(Kind::Bcp47),
			PropertyValue::Embedded(cap, _) => Some(Kind::Embed(*cap)),
			PropertyValue::Unknown(_) => None,
		}
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, PropertyValue::Unknown(_))
	}

	pub fn as_unknown(&self) -> Option<&Value> {
		match self {
			PropertyValue::Unknown(x) => Some(x),
			_ => None,
		}
	}

	pub fn set_unknown(&mut self, val: Value) {
		*self = PropertyValue::Unknown(val);
	}

	/// embedded entity, whatever capability it was accepted as
	pub fn as_entity(&self) -> Option<&Entity> {
		match self {
			PropertyValue::Embedded(_, x) => Some(x),
			_ => None,
		}
	}

	/// returns id of referenced resource: the iri itself, id of embedded objects, href of embedded links
	pub fn id(&self) -> Option<&str> {
		match self {
			PropertyValue::Iri(iri) => Some(iri.as_str()),
			PropertyValue::Embedded(_, entity) => entity
				.id()
				.or_else(|| entity.get(&crate::props::HREF).and_then(PropertyValue::as_iri))
				.map(Iri::as_str),
			_ => None,
		}
	}

	/// Decode one json value for `property`.
	///
	/// Json objects carrying a `type` are offered to the embeddable alternatives in declared
	/// order, each trying every discriminator in order; anything else goes through the scalar
	/// codecs in declared order. Whatever no alternative accepts is kept as an unknown payload.
	/// Only a json object given to a property without embeddable alternatives is an error, and
	/// errors of nested entities propagate.
	pub(crate) fn decode(property: &'static Property, raw: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
		// json-ld value objects are literals, not nodes
		if let Value::Object(map) = raw {
			if !map.contains_key("@value") {
				return Self::decode_node(property, map, raw, decoder);
			}
		}

		for kind in property.scalars() {
			match decode_scalar(kind, raw) {
				Ok(value) => return Ok(value),
				Err(e) => tracing::trace!("'{}' is not {kind}: {e}", property.name),
			}
		}

		tracing::trace!("no alternative of '{}' accepts {raw}, keeping it verbatim", property.name);
		Ok(PropertyValue::Unknown(raw.clone()))
	}

	fn decode_node(property: &'static Property, map: &Map<String, Value>, raw: &Value, decoder: &mut Decoder) -> Result<Self, DecodeError> {
		if property.capabilities().next().is_none() {
			return Err(DecodeError::NoShapeForMap(property.name));
		}

		let Some(discriminator) = map.get("type") else {
			return Ok(PropertyValue::Unknown(raw.clone()));
		};
		let names = discriminators(discriminator);

		for capability in property.capabilities() {
			for name in &names {
				let Some(mut nested) = decoder.resolve(name) else { continue };
				if !nested.satisfies(capability) {
					continue;
				}
				decoder.descend(|d| nested.deserialize_with(map, d))?;
				return Ok(PropertyValue::Embedded(capability, Box::new(nested)));
			}
		}

		tracing::trace!("no embeddable alternative of '{}' accepts types {names:?}", property.name);
		Ok(PropertyValue::Unknown(raw.clone()))
	}

	/// Encode back into json. Unknown payloads are echoed unchanged.
	pub fn encode(&self) -> Result<Value, EncodeError> {
		match self {
			PropertyValue::String(x) => x.encode(),
			PropertyValue::LangString(x) => x.encode(),
			PropertyValue::Iri(x) => x.encode(),
			PropertyValue::Float(x) => x.encode(),
			PropertyValue::DateTime(x) => x.encode(),
			PropertyValue::Duration(x) => x.encode(),
			PropertyValue::MediaType(x) => x.encode(),
			PropertyValue::NonNegativeInteger(x) => x.encode(),
			PropertyValue::Boolean(x) => x.encode(),
			PropertyValue::Bcp47(x) => x.encode(),
			PropertyValue::Embedded(_, entity) => Ok(Value::Object(entity.serialize()?)),
			PropertyValue::Unknown(raw) => Ok(raw.clone()),
		}
	}
}

fn decode_scalar(kind: Kind, raw: &Value) -> Result<PropertyValue, CodecError> {
	Ok(match kind {
		Kind::String => PropertyValue::String(String::decode(raw)?),
		Kind::LangString => PropertyValue::LangString(LangString::decode(raw)?),
		Kind::Iri => PropertyValue::Iri(Iri::decode(raw)?),
		Kind::Float => PropertyValue::Float(f64::decode(raw)?),
		Kind::DateTime => PropertyValue::DateTime(DateTime::<Utc>::decode(raw)?),
		Kind::Duration => PropertyValue::Duration(Duration::decode(raw)?),
		Kind::MediaType => PropertyValue::MediaType(MediaType::decode(raw)?),
		Kind::NonNegativeInteger => PropertyValue::NonNegativeInteger(u64::decode(raw)?),
		Kind::Boolean => PropertyValue::Boolean(bool::decode(raw)?),
		Kind::Bcp47 => PropertyValue::Bcp47(Bcp47::decode(raw)?),
		Kind::Embed(_) => return Err(CodecError::Mismatch { expected: kind, found: crate::error::json_kind(raw) }),
	})
}

/// type names asserted by a `type` value, which may be a string or an array of strings
pub(crate) fn discriminators(value: &Value) -> Vec<&str> {
	match value {
		Value::String(name) => vec![name.as_str()],
		Value::Array(names) => names.iter().filter_map(Value::as_str).collect(),
		_ => Vec::new(),
	}
}
