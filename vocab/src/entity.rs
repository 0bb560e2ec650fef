use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
	primitive::{Iri, Primitive},
	registry::{Decoder, Resolver},
	Capability, DecodeError, EncodeError, Property, PropertyValue, SchemaError, TypeSchema,
};

/// values of a non-functional property, in order
#[derive(Debug, Clone, Default)]
struct Sequence {
	values: Vec<PropertyValue>,
	// decoded from a one element json array, written back the same way until modified
	keep_array: bool,
}

/// One instance of a vocabulary type.
///
/// Which properties exist and what they may hold comes from `schema`; anything a document carries
/// beyond that lands in the unknown bag and is written back untouched.
#[derive(Debug, Clone)]
pub struct Entity {
	schema: &'static TypeSchema,
	id: Option<Iri>,
	types: Vec<Value>,
	// `type` was a one element json array, see `Sequence::keep_array`
	type_array: bool,
	functional: BTreeMap<&'static str, PropertyValue>,
	sequences: BTreeMap<&'static str, Sequence>,
	language_maps: BTreeMap<&'static str, BTreeMap<String, String>>,
	unknown: Map<String, Value>,
}

impl Entity {
	pub fn new(schema: &'static TypeSchema) -> Self {
		Entity {
			schema,
			id: None,
			types: Vec::new(),
			type_array: false,
			functional: BTreeMap::new(),
			sequences: BTreeMap::new(),
			language_maps: BTreeMap::new(),
			unknown: Map::new(),
		}
	}

	pub fn schema(&self) -> &'static TypeSchema {
		self.schema
	}

	pub fn type_name(&self) -> &'static str {
		self.schema.name
	}

	pub fn satisfies(&self, capability: Capability) -> bool {
		self.schema.satisfies(capability)
	}

	pub fn id(&self) -> Option<&Iri> {
		self.id.as_ref()
	}

	pub fn set_id(&mut self, id: Option<Iri>) -> Option<Iri> {
		std::mem::replace(&mut self.id, id)
	}

	/// type discriminators as found in the document or set by hand
	pub fn types(&self) -> &[Value] {
		&self.types
	}

	pub fn set_types(&mut self, types: Vec<Value>) {
		self.types = types;
		self.type_array = false;
	}

	/// add a discriminator unless an identical one is already there
	pub fn append_type(&mut self, name: impl Into<String>) {
		let name = name.into();
		if !self.types.iter().any(|t| t.as_str() == Some(name.as_str())) {
			self.types.push(Value::String(name));
			self.type_array = false;
		}
	}

	/// discriminators written out: the asserted ones, plus our own type name if missing
	pub fn effective_types(&self) -> Vec<Value> {
		let mut out = self.types.clone();
		if !out.iter().any(|t| t.as_str() == Some(self.schema.name)) {
			out.push(Value::String(self.schema.name.to_string()));
		}
		out
	}

	pub fn unknown(&self) -> &Map<String, Value> {
		&self.unknown
	}

	pub fn unknown_mut(&mut self) -> &mut Map<String, Value> {
		&mut self.unknown
	}

	fn declared(&self, property: &Property) -> Result<&'static Property, SchemaError> {
		match self.schema.property(property.name) {
			Some(p) if p == property => Ok(p),
			_ => Err(SchemaError::UnknownProperty { ty: self.schema.name, property: property.name }),
		}
	}

	fn admitted(property: &'static Property, value: &PropertyValue) -> Result<(), SchemaError> {
		match value.kind() {
			Some(kind) if !property.admits(kind) => Err(SchemaError::KindNotAllowed { property: property.name, kind }),
			_ => Ok(()),
		}
	}

	fn sequence_mut(&mut self, property: &Property) -> Result<&mut Sequence, SchemaError> {
		let property = self.declared(property)?;
		if property.functional {
			return Err(SchemaError::Functional(property.name));
		}
		Ok(self.sequences.entry(property.name).or_default())
	}

	/// value of a functional property
	pub fn get(&self, property: &Property) -> Option<&PropertyValue> {
		self.functional.get(property.name)
	}

	/// Replace the value of a functional property, returning the previous one. Unknown payloads
	/// are accepted on any property.
	pub fn set(&mut self, property: &Property, value: impl Into<PropertyValue>) -> Result<Option<PropertyValue>, SchemaError> {
		let property = self.declared(property)?;
		if !property.functional {
			return Err(SchemaError::NonFunctional(property.name));
		}
		let value = value.into();
		Self::admitted(property, &value)?;
		Ok(self.functional.insert(property.name, value))
	}

	/// drop every value of a property, functional or not
	pub fn clear(&mut self, property: &Property) {
		self.functional.remove(property.name);
		self.sequences.remove(property.name);
	}

	pub fn is_set(&self, property: &Property) -> bool {
		!self.values(property).is_empty()
	}

	/// Every value of a property in order. Functional properties yield at most one, properties
	/// this type does not have yield none.
	pub fn values(&self, property: &Property) -> &[PropertyValue] {
		if let Some(value) = self.functional.get(property.name) {
			return std::slice::from_ref(value);
		}
		self.sequences
			.get(property.name)
			.map(|s| s.values.as_slice())
			.unwrap_or_default()
	}

	pub fn count(&self, property: &Property) -> usize {
		self.values(property).len()
	}

	pub fn value(&self, property: &Property, index: usize) -> Option<&PropertyValue> {
		self.values(property).get(index)
	}

	pub fn append(&mut self, property: &Property, value: impl Into<PropertyValue>) -> Result<(), SchemaError> {
		let value = value.into();
		Self::admitted(self.declared(property)?, &value)?;
		let seq = self.sequence_mut(property)?;
		seq.values.push(value);
		seq.keep_array = false;
		Ok(())
	}

	pub fn prepend(&mut self, property: &Property, value: impl Into<PropertyValue>) -> Result<(), SchemaError> {
		let value = value.into();
		Self::admitted(self.declared(property)?, &value)?;
		let seq = self.sequence_mut(property)?;
		seq.values.insert(0, value);
		seq.keep_array = false;
		Ok(())
	}

	pub fn remove(&mut self, property: &Property, index: usize) -> Result<PropertyValue, SchemaError> {
		let seq = self.sequence_mut(property)?;
		if index >= seq.values.len() {
			return Err(SchemaError::OutOfBounds { property: property.name, index, len: seq.values.len() });
		}
		seq.keep_array = false;
		Ok(seq.values.remove(index))
	}

	/// replace the whole sequence of a non-functional property
	pub fn set_values(&mut self, property: &Property, values: Vec<PropertyValue>) -> Result<(), SchemaError> {
		let declared = self.declared(property)?;
		for value in &values {
			Self::admitted(declared, value)?;
		}
		let seq = self.sequence_mut(property)?;
		seq.values = values;
		seq.keep_array = false;
		Ok(())
	}

	/// builder flavor of `set` and `append`, picked by the property being functional
	pub fn with(mut self, property: &Property, value: impl Into<PropertyValue>) -> Result<Self, SchemaError> {
		if property.functional {
			self.set(property, value)?;
		} else {
			self.append(property, value)?;
		}
		Ok(self)
	}

	pub fn language_map(&self, property: &Property) -> Option<&BTreeMap<String, String>> {
		self.language_maps.get(property.name)
	}

	/// `Some` map, even an empty one, is written out; `None` removes it
	pub fn set_language_map(
		&mut self,
		property: &Property,
		map: Option<BTreeMap<String, String>>,
	) -> Result<Option<BTreeMap<String, String>>, SchemaError> {
		let property = self.declared(property)?;
		if !property.language_map {
			return Err(SchemaError::NoLanguageMap(property.name));
		}
		Ok(match map {
			Some(map) => self.language_maps.insert(property.name, map),
			None => self.language_maps.remove(property.name),
		})
	}

	/// Fill this entity from a json object, resolving embedded entities through `resolver`.
	///
	/// Keys are applied one at a time: when an error is returned, keys handled before the failing
	/// one have already been written into `self`.
	pub fn deserialize(&mut self, map: &Map<String, Value>, resolver: &dyn Resolver) -> Result<(), DecodeError> {
		self.deserialize_with(map, &mut Decoder::new(resolver))
	}

	pub(crate) fn deserialize_with(&mut self, map: &Map<String, Value>, decoder: &mut Decoder) -> Result<(), DecodeError> {
		for (key, raw) in map {
			match key.as_str() {
				"@context" => continue,
				"type" => {
					self.type_array = matches!(raw, Value::Array(names) if names.len() == 1);
					self.types = match raw {
						Value::Array(names) => names.clone(),
						other => vec![other.clone()],
					};
				},
				"id" => {
					let id = Iri::decode(raw).map_err(|source| DecodeError::Field { key: "id", source })?;
					self.id = Some(id);
				},
				_ => {
					if let Some(property) = self.schema.property(key) {
						self.deserialize_property(property, raw, decoder)?;
					} else if let Some(property) = self.language_map_property(key) {
						match raw {
							Value::Object(entries) => {
								let entries = entries
									.iter()
									.filter_map(|(lang, text)| match text {
										Value::String(text) => Some((lang.clone(), text.clone())),
										_ => {
											tracing::trace!("dropping non-text entry '{lang}' of '{key}'");
											None
										},
									})
									.collect();
								self.language_maps.insert(property.name, entries);
							},
							_ => {
								tracing::debug!("'{key}' is not a language map, keeping it as unknown field");
								self.unknown.insert(key.clone(), raw.clone());
							},
						}
					} else {
						tracing::debug!("'{}' has no property '{key}', keeping it as unknown field", self.schema.name);
						self.unknown.insert(key.clone(), raw.clone());
					}
				},
			}
		}
		Ok(())
	}

	fn deserialize_property(&mut self, property: &'static Property, raw: &Value, decoder: &mut Decoder) -> Result<(), DecodeError> {
		if property.functional {
			let value = PropertyValue::decode(property, raw, decoder).map_err(|e| e.within(property.name))?;
			self.functional.insert(property.name, value);
			return Ok(());
		}

		let seq = match raw {
			Value::Array(items) => Sequence {
				values: items
					.iter()
					.map(|item| PropertyValue::decode(property, item, decoder))
					.collect::<Result<_, _>>()
					.map_err(|e| e.within(property.name))?,
				keep_array: items.len() == 1,
			},
			single => Sequence {
				values: vec![PropertyValue::decode(property, single, decoder).map_err(|e| e.within(property.name))?],
				keep_array: false,
			},
		};
		self.sequences.insert(property.name, seq);
		Ok(())
	}

	fn language_map_property(&self, key: &str) -> Option<&'static Property> {
		key.strip_suffix("Map")
			.and_then(|name| self.schema.property(name))
			.filter(|p| p.language_map)
	}

	/// Write this entity as a json object: unknown fields first, then `type`, `id` and every set
	/// property in schema order. Nothing is returned if any value fails to encode.
	///
	/// Single values, `type` included, are written bare unless they were decoded from a one
	/// element array and left untouched since.
	pub fn serialize(&self) -> Result<Map<String, Value>, EncodeError> {
		let mut out = self.unknown.clone();

		let mut types = self.effective_types();
		let discriminator = if types.len() == 1 && !self.type_array { types.remove(0) } else { Value::Array(types) };
		out.insert("type".to_string(), discriminator);

		if let Some(id) = &self.id {
			out.insert("id".to_string(), id.encode()?);
		}

		for property in self.schema.all_properties() {
			let encoded = if property.functional {
				self.functional.get(property.name).map(PropertyValue::encode).transpose()
			} else {
				self.sequences.get(property.name).map(encode_sequence).transpose().map(Option::flatten)
			};
			if let Some(value) = encoded.map_err(|e| e.within(property.name))? {
				out.insert(property.name.to_string(), value);
			}

			if let (Some(key), Some(map)) = (property.map_key(), self.language_maps.get(property.name)) {
				let map = map.iter().map(|(lang, text)| (lang.clone(), Value::String(text.clone()))).collect();
				out.insert(key, Value::Object(map));
			}
		}

		Ok(out)
	}
}

fn encode_sequence(seq: &Sequence) -> Result<Option<Value>, EncodeError> {
	match seq.values.as_slice() {
		[] => Ok(None),
		[single] if !seq.keep_array => single.encode().map(Some),
		many => Ok(Some(Value::Array(many.iter().map(PropertyValue::encode).collect::<Result<_, _>>()?))),
	}
}

impl PartialEq for Entity {
	fn eq(&self, other: &Self) -> bool {
		// wire layout (`keep_array`, `type_array`) is not part of the value
		let sequences = |e: &Entity| -> Vec<(&'static str, Vec<PropertyValue>)> {
			e.sequences
				.iter()
				.filter(|(_, s)| !s.values.is_empty())
				.map(|(k, s)| (*k, s.values.clone()))
				.collect()
		};
		self.schema == other.schema
			&& self.id == other.id
			&& self.effective_types() == other.effective_types()
			&& self.functional == other.functional
			&& sequences(self) == sequences(other)
			&& self.language_maps == other.language_maps
			&& self.unknown == other.unknown
	}
}

#[cfg(test)]
mod test {
	use std::collections::BTreeMap;

	use chrono::{TimeDelta, TimeZone, Utc};
	use serde_json::{json, Value};

	use crate::{
		props, types, Capability, DecodeError, Duration, EncodeError, Entity, Iri, Kind, LangString, PropertyValue, Registry,
		SchemaError,
	};

	fn iri(text: &str) -> Iri {
		Iri::parse(text).expect("valid iri")
	}

	fn decode(raw: &Value) -> Entity {
		Registry::activitystreams().decode_value(raw).expect("decodes")
	}

	fn encode(entity: &Entity) -> Value {
		Value::Object(entity.serialize().expect("encodes"))
	}

	#[test]
	fn article_with_name_and_recipient() {
		let raw = json!({ "type": "Article", "name": "Hello", "to": ["https://example.com/alice"] });
		let article = decode(&raw);
		assert_eq!(article.count(&props::NAME), 1);
		assert!(article.value(&props::NAME, 0).is_some_and(PropertyValue::is_string));
		assert_eq!(article.value(&props::NAME, 0).and_then(PropertyValue::as_string).map(String::as_str), Some("Hello"));
		assert_eq!(article.count(&props::TO), 1);
		assert!(article.value(&props::TO, 0).is_some_and(PropertyValue::is_iri));
		assert_eq!(
			article.value(&props::TO, 0).and_then(PropertyValue::as_iri).map(Iri::as_url),
			Some(&url::Url::parse("https://example.com/alice").expect("valid url"))
		);
		assert_eq!(encode(&article), raw);
	}

	#[test]
	fn removing_down_to_one_value_collapses_it() {
		let mut article = decode(&json!({ "name": ["A", "B"], "type": "Article" }));
		let removed = article.remove(&props::NAME, 0).expect("there are two names");
		assert_eq!(removed.as_string().map(String::as_str), Some("A"));
		assert_eq!(encode(&article), json!({ "type": "Article", "name": "B" }));
	}

	#[test]
	fn sequences_collapse_only_when_single() {
		let mut note = Entity::new(&types::NOTE);
		assert_eq!(encode(&note), json!({ "type": "Note" }));

		note.append(&props::TO, iri("https://example.com/alice")).expect("notes have recipients");
		assert_eq!(encode(&note), json!({ "type": "Note", "to": "https://example.com/alice" }));

		note.append(&props::TO, iri("https://example.com/bob")).expect("notes have recipients");
		note.prepend(&props::TO, iri("https://example.com/carol")).expect("notes have recipients");
		assert_eq!(
			encode(&note),
			json!({ "type": "Note", "to": ["https://example.com/carol", "https://example.com/alice", "https://example.com/bob"] })
		);

		note.set_values(&props::TO, Vec::new()).expect("notes have recipients");
		assert_eq!(encode(&note), json!({ "type": "Note" }));
	}

	#[test]
	fn own_type_is_injected_once() {
		let mut note = Entity::new(&types::NOTE);
		assert_eq!(encode(&note)["type"], json!("Note"));

		note.append_type("Note");
		note.append_type("Note");
		assert_eq!(note.types(), &[json!("Note")]);
		assert_eq!(encode(&note)["type"], json!("Note"));

		note.set_types(vec![json!("Emoji")]);
		assert_eq!(encode(&note)["type"], json!(["Emoji", "Note"]));
	}

	#[test]
	fn empty_language_maps_are_written_absent_ones_are_not() {
		let mut note = Entity::new(&types::NOTE);
		note.set_language_map(&props::CONTENT, Some(BTreeMap::new())).expect("content has a map");
		assert_eq!(encode(&note), json!({ "type": "Note", "contentMap": {} }));

		note.set_language_map(&props::CONTENT, None).expect("content has a map");
		assert_eq!(encode(&note), json!({ "type": "Note" }));

		assert_eq!(note.set_language_map(&props::TO, None), Err(SchemaError::NoLanguageMap("to")));
	}

	#[test]
	fn language_maps_drop_non_text_entries() {
		let note = decode(&json!({ "type": "Note", "contentMap": { "en": "hi", "it": 3 }, "nameMap": "oops" }));
		let content = note.language_map(&props::CONTENT).expect("content map decoded");
		assert_eq!(content.get("en").map(String::as_str), Some("hi"));
		assert!(!content.contains_key("it"));
		assert!(note.language_map(&props::NAME).is_none());
		assert_eq!(note.unknown().get("nameMap"), Some(&json!("oops")));
	}

	#[test]
	fn unknown_fields_survive_verbatim() {
		let raw = json!({
			"@context": ["https://www.w3.org/ns/activitystreams", { "sensitive": "as:sensitive" }],
			"type": "Note",
			"sensitive": false,
			"_misskey_quote": { "deep": [1, { "x": null }], "type": "Whatever" },
			"tag": { "type": "Emoji", "name": ":blob:", "icon": { "url": "https://example.com/blob.png" } },
		});
		let note = decode(&raw);
		assert!(!note.unknown().contains_key("@context"));
		assert_eq!(note.unknown().get("sensitive"), Some(&json!(false)));
		assert!(note.value(&props::TAG, 0).is_some_and(PropertyValue::is_unknown));

		let mut expected = raw.clone();
		if let Value::Object(map) = &mut expected {
			map.remove("@context");
		}
		assert_eq!(encode(&note), expected);
	}

	#[test]
	fn unknown_fields_survive_inside_embedded_entities() {
		let raw = json!({
			"type": "Create",
			"object": {
				"type": "Note",
				"x:custom": { "a": [1, { "b": null }] },
				"inReplyTo": { "type": "Note", "y:deeper": ["kept", 2] },
			},
		});
		let create = decode(&raw);
		let note = create.value(&props::OBJECT, 0).and_then(PropertyValue::as_object).expect("embedded note");
		assert_eq!(note.unknown().get("x:custom"), Some(&json!({ "a": [1, { "b": null }] })));
		let parent = note.value(&props::IN_REPLY_TO, 0).and_then(PropertyValue::as_object).expect("embedded parent");
		assert_eq!(parent.unknown().get("y:deeper"), Some(&json!(["kept", 2])));
		assert_eq!(encode(&create), raw);
	}

	#[test]
	fn decoding_again_replaces_sequences_and_types() {
		let mut note = Entity::new(&types::NOTE)
			.with(&props::TO, iri("https://example.com/old"))
			.expect("notes have recipients");
		note.set_types(vec![json!("Note"), json!("x:Old")]);

		let map = json!({ "type": "Note", "to": ["https://a.example/n1", "https://a.example/n2"] });
		let map = map.as_object().expect("json object");
		note.deserialize(map, &Registry::activitystreams()).expect("decodes");

		assert_eq!(note.count(&props::TO), 2);
		assert_eq!(note.value(&props::TO, 0).and_then(PropertyValue::id), Some("https://a.example/n1"));
		assert_eq!(note.value(&props::TO, 1).and_then(PropertyValue::id), Some("https://a.example/n2"));
		assert_eq!(note.types(), &[json!("Note")]);
	}

	#[test]
	fn wire_layout_does_not_affect_equality() {
		let from_array = decode(&json!({ "type": ["Note"], "to": ["https://example.com/alice"] }));
		let from_bare = decode(&json!({ "type": "Note", "to": "https://example.com/alice" }));
		let built = Entity::new(&types::NOTE)
			.with(&props::TO, iri("https://example.com/alice"))
			.expect("notes have recipients");
		assert_eq!(from_array, from_bare);
		assert_eq!(from_array, built);
		assert_ne!(encode(&from_array), encode(&from_bare));
	}

	#[test]
	fn discriminators_are_kept_as_arrays() {
		let note = decode(&json!({ "type": "Note" }));
		assert_eq!(note.types(), &[json!("Note")]);
		let page = decode(&json!({ "type": ["OrderedCollectionPage", "x:Extra"] }));
		assert!(page.satisfies(Capability::OrderedCollection));
		assert_eq!(encode(&page)["type"], json!(["OrderedCollectionPage", "x:Extra"]));

		let mut single = decode(&json!({ "type": ["Note"], "content": "hi" }));
		assert_eq!(encode(&single), json!({ "type": ["Note"], "content": "hi" }));
		single.set_types(vec![json!("Note")]);
		assert_eq!(encode(&single)["type"], json!("Note"));
	}

	#[test]
	fn nested_errors_abort_and_name_the_property() {
		let err = Registry::activitystreams()
			.decode_value(&json!({ "type": "Create", "object": { "type": "Note", "id": "nope" } }))
			.expect_err("nested id is invalid");
		match err {
			DecodeError::Nested { property, source } => {
				assert_eq!(property, "object");
				assert!(matches!(*source, DecodeError::Field { key: "id", .. }));
			},
			other => panic!("unexpected error {other}"),
		}
	}

	#[test]
	fn failed_decodes_leave_earlier_keys_applied() {
		let mut note = Entity::new(&types::NOTE);
		let map = json!({ "content": "kept", "id": "nope" });
		let map = map.as_object().expect("json object");
		assert!(note.deserialize(map, &Registry::activitystreams()).is_err());
		assert_eq!(note.count(&props::CONTENT), 1);
		assert!(note.id().is_none());
	}

	#[test]
	fn encode_errors_name_the_property_path() {
		let image = Entity::new(&types::IMAGE).with(&props::ALTITUDE, f64::NAN).expect("images have altitude");
		let note = Entity::new(&types::NOTE)
			.with(&props::ATTACHMENT, PropertyValue::embed(Capability::Object, image).expect("images are objects"))
			.expect("notes have attachments");
		match note.serialize() {
			Err(EncodeError::Nested { property: "attachment", source }) => {
				assert!(matches!(*source, EncodeError::Nested { property: "altitude", .. }));
			},
			other => panic!("unexpected result {other:?}"),
		}
	}

	#[test]
	fn decoding_what_was_encoded_gives_the_same_entity() {
		let image = Entity::new(&types::IMAGE)
			.with(&props::URL, iri("https://example.com/cat.png"))
			.and_then(|e| e.with(&props::MEDIA_TYPE, crate::MediaType::parse("image/png").expect("valid media type")))
			.expect("images have urls and media types");

		let mut note = Entity::new(&types::NOTE);
		note.set_id(Some(iri("https://example.com/notes/1")));
		note.append(&props::NAME, "Cats".to_string()).expect("notes have names");
		note.append(&props::CONTENT, LangString::new("gatti", "it")).expect("notes have content");
		note.append(&props::TO, iri("https://example.com/alice")).expect("notes have recipients");
		note.append(&props::TO, iri("https://www.w3.org/ns/activitystreams#Public")).expect("notes have recipients");
		note.append(&props::ATTACHMENT, PropertyValue::embed(Capability::Object, image).expect("images are objects"))
			.expect("notes have attachments");
		note.set(&props::PUBLISHED, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().expect("valid date"))
			.expect("notes have a publish date");
		note.set(&props::DURATION, Duration::new(TimeDelta::hours(2))).expect("notes have durations");
		note.set(&props::ALTITUDE, 12.5).expect("notes have altitude");
		note.set_language_map(&props::SUMMARY, Some(BTreeMap::from([("en".to_string(), "cats".to_string())])))
			.expect("summary has a map");
		note.unknown_mut().insert("sensitive".to_string(), json!(true));

		let encoded = encode(&note);
		assert_eq!(encoded["published"], json!("2024-01-02T03:04:05Z"));
		assert_eq!(encoded["duration"], json!("PT2H"));
		assert_eq!(decode(&encoded), note);
		assert_eq!(encode(&decode(&encoded)), encoded);
	}

	#[test]
	fn accessors_enforce_the_schema() {
		let mut note = Entity::new(&types::NOTE);
		assert_eq!(note.set(&props::TO, iri("https://example.com")), Err(SchemaError::NonFunctional("to")));
		assert_eq!(note.append(&props::PUBLISHED, Utc::now()), Err(SchemaError::Functional("published")));
		assert_eq!(
			note.set(&props::HREF, iri("https://example.com")),
			Err(SchemaError::UnknownProperty { ty: "Note", property: "href" })
		);
		assert_eq!(
			note.set(&props::PUBLISHED, "yesterday".to_string()),
			Err(SchemaError::KindNotAllowed { property: "published", kind: Kind::String })
		);
		assert_eq!(
			note.remove(&props::TO, 3),
			Err(SchemaError::OutOfBounds { property: "to", index: 3, len: 0 })
		);
		assert!(note.set(&props::PUBLISHED, PropertyValue::Unknown(json!("last tuesday"))).is_ok());
		assert!(note.values(&props::HREF).is_empty());
		assert_eq!(note.count(&props::PUBLISHED), 1);
	}

	#[test]
	fn functional_values_are_replaced() {
		let mut link = Entity::new(&types::LINK);
		assert_eq!(link.set(&props::HREF, iri("https://example.com/a")), Ok(None));
		let previous = link.set(&props::HREF, iri("https://example.com/b")).expect("links have href");
		assert_eq!(previous.as_ref().and_then(PropertyValue::id), Some("https://example.com/a"));
		assert_eq!(encode(&link), json!({ "type": "Link", "href": "https://example.com/b" }));
		link.clear(&props::HREF);
		assert!(!link.is_set(&props::HREF));
	}
}
