use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{config::DecodeConfig, error::json_kind, types, value::discriminators, DecodeError, Entity, TypeSchema};

/// how many embedded entities may nest inside each other unless configured otherwise
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Turns type discriminators into fresh, empty entities.
///
/// Implementations must return a new instance on every call and `None` for names they do not
/// know; capability checks are done by the caller.
pub trait Resolver {
	fn resolve(&self, type_name: &str) -> Option<Entity>;

	fn max_depth(&self) -> usize {
		DEFAULT_MAX_DEPTH
	}
}

impl<F> Resolver for F
where
	F: Fn(&str) -> Option<Entity>,
{
	fn resolve(&self, type_name: &str) -> Option<Entity> {
		self(type_name)
	}
}

/// Explicit table of known vocabulary types, handed to every decode.
#[derive(Debug, Clone)]
pub struct Registry {
	types: BTreeMap<&'static str, &'static TypeSchema>,
	config: DecodeConfig,
}

impl Default for Registry {
	fn default() -> Self {
		Registry::activitystreams()
	}
}

impl Registry {
	/// a registry knowing no types at all
	pub fn new() -> Self {
		Registry { types: BTreeMap::new(), config: DecodeConfig::default() }
	}

	/// a registry knowing every ActivityStreams and ActivityPub type
	pub fn activitystreams() -> Self {
		types::ALL
			.iter()
			.copied()
			.fold(Registry::new(), |registry, schema| registry.with_type(schema))
	}

	/// add (or replace) a type, returning the one previously registered under the same name
	pub fn register(&mut self, schema: &'static TypeSchema) -> Option<&'static TypeSchema> {
		self.types.insert(schema.name, schema)
	}

	pub fn with_type(mut self, schema: &'static TypeSchema) -> Self {
		self.register(schema);
		self
	}

	pub fn with_config(mut self, config: DecodeConfig) -> Self {
		self.config = config;
		self
	}

	pub fn get(&self, type_name: &str) -> Option<&'static TypeSchema> {
		self.types.get(type_name).copied()
	}

	pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.types.keys().copied()
	}

	/// Decode a top level document, instantiating the first of its asserted types this registry
	/// knows. On error no entity is returned.
	pub fn decode(&self, map: &Map<String, Value>) -> Result<Entity, DecodeError> {
		let discriminator = map.get("type").ok_or(DecodeError::MissingType)?;
		let names = discriminators(discriminator);
		let Some(mut entity) = names.iter().find_map(|name| self.resolve(name)) else {
			return Err(DecodeError::UnresolvedType(names.into_iter().map(str::to_string).collect()));
		};
		entity.deserialize(map, self)?;
		Ok(entity)
	}

	pub fn decode_value(&self, value: &Value) -> Result<Entity, DecodeError> {
		match value {
			Value::Object(map) => self.decode(map),
			other => Err(DecodeError::NotAnObject(json_kind(other))),
		}
	}
}

impl Resolver for Registry {
	fn resolve(&self, type_name: &str) -> Option<Entity> {
		self.get(type_name).map(Entity::new)
	}

	fn max_depth(&self) -> usize {
		self.config.max_depth
	}
}

/// State of one decode call: where types come from and how deep we are.
pub struct Decoder<'r> {
	resolver: &'r dyn Resolver,
	max_depth: usize,
	depth: usize,
}

impl<'r> Decoder<'r> {
	pub fn new(resolver: &'r dyn Resolver) -> Self {
		Decoder { resolver, max_depth: resolver.max_depth(), depth: 0 }
	}

	pub(crate) fn resolve(&self, type_name: &str) -> Option<Entity> {
		self.resolver.resolve(type_name)
	}

	/// run `f` one embedding level deeper
	pub(crate) fn descend<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, DecodeError>) -> Result<T, DecodeError> {
		if self.depth >= self.max_depth {
			return Err(DecodeError::TooDeep(self.max_depth));
		}
		self.depth += 1;
		let res = f(self);
		self.depth -= 1;
		res
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{config::DecodeConfig, props, types, DecodeError, Entity, Registry, Resolver, TypeSchema};

	#[test]
	fn resolution_returns_fresh_instances() {
		let registry = Registry::activitystreams();
		let mut first = registry.resolve("Note").expect("notes are known");
		first.append(&props::NAME, "changed".to_string()).expect("notes have names");
		let second = registry.resolve("Note").expect("notes are known");
		assert_eq!(second.count(&props::NAME), 0);
		assert_eq!(second, Entity::new(&types::NOTE));
	}

	#[test]
	fn unknown_names_resolve_to_nothing() {
		let registry = Registry::activitystreams();
		assert!(registry.resolve("Emoji").is_none());
		assert!(registry.resolve("note").is_none());
		assert!(Registry::new().resolve("Note").is_none());
	}

	#[test]
	fn extension_types_can_be_registered() {
		static EMOJI: TypeSchema = TypeSchema { name: "Emoji", extends: &[&types::OBJECT], properties: &[] };
		let registry = Registry::activitystreams().with_type(&EMOJI);
		let note = registry
			.decode_value(&json!({ "type": "Note", "tag": { "type": "Emoji", "name": ":blob:" } }))
			.expect("decodes");
		let tag = note.value(&props::TAG, 0).expect("one tag");
		assert_eq!(tag.as_object().map(Entity::type_name), Some("Emoji"));
	}

	#[test]
	fn top_level_decode_picks_first_known_type() {
		let registry = Registry::activitystreams();
		let entity = registry
			.decode_value(&json!({ "type": ["Emoji", "Person"], "preferredUsername": "alice" }))
			.expect("decodes");
		assert_eq!(entity.type_name(), "Person");
		assert_eq!(entity.types(), &[json!("Emoji"), json!("Person")]);
	}

	#[test]
	fn top_level_decode_needs_a_known_type() {
		let registry = Registry::activitystreams();
		assert!(matches!(registry.decode_value(&json!({ "name": "x" })), Err(DecodeError::MissingType)));
		assert!(matches!(
			registry.decode_value(&json!({ "type": "Emoji" })),
			Err(DecodeError::UnresolvedType(names)) if names == vec!["Emoji".to_string()]
		));
		assert!(matches!(registry.decode_value(&json!("Note")), Err(DecodeError::NotAnObject("string"))));
	}

	#[test]
	fn nesting_is_bounded() {
		let registry = Registry::activitystreams().with_config(DecodeConfig { max_depth: 2 });
		let shallow = json!({ "type": "Note", "inReplyTo": { "type": "Note", "inReplyTo": { "type": "Note" } } });
		assert!(registry.decode_value(&shallow).is_ok());

		let deep = json!({ "type": "Note", "inReplyTo": { "type": "Note", "inReplyTo": { "type": "Note", "inReplyTo": { "type": "Note" } } } });
		let err = registry.decode_value(&deep).expect_err("too deep");
		let mut inner = &err;
		while let DecodeError::Nested { source, .. } = inner {
			inner = source.as_ref();
		}
		assert!(matches!(inner, DecodeError::TooDeep(2)));
	}
}
