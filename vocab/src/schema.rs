use crate::strenum;

strenum! {
	pub enum Capability {
		Object,
		Link,
		Image,
		Collection,
		OrderedCollection,
		CollectionPage,
		OrderedCollectionPage;
	};

	pub enum Kind {
		String,
		LangString,
		Iri,
		Float,
		DateTime,
		Duration,
		MediaType,
		NonNegativeInteger,
		Boolean,
		Bcp47;

		Embed(Capability)
	};
}

impl Kind {
	pub fn capability(self) -> Option<Capability> {
		match self {
			Kind::Embed(cap) => Some(cap),
			_ => None,
		}
	}

	pub fn is_embedded(self) -> bool {
		matches!(self, Kind::Embed(_))
	}
}

/// One property slot of a vocabulary type.
///
/// `kinds` lists the alternatives this property admits, in the order they are tried while
/// decoding: embedded capabilities compete among themselves for json objects, scalar kinds for
/// everything else.
#[derive(Debug, PartialEq, Eq)]
pub struct Property {
	pub name: &'static str,
	pub functional: bool,
	pub kinds: &'static [Kind],
	/// also accepts a `<name>Map` language tag -> text map
	pub language_map: bool,
}

impl Property {
	pub const fn functional(name: &'static str, kinds: &'static [Kind]) -> Self {
		Property { name, functional: true, kinds, language_map: false }
	}

	pub const fn sequence(name: &'static str, kinds: &'static [Kind]) -> Self {
		Property { name, functional: false, kinds, language_map: false }
	}

	pub const fn with_language_map(self) -> Self {
		Property { language_map: true, ..self }
	}

	pub fn admits(&self, kind: Kind) -> bool {
		self.kinds.contains(&kind)
	}

	/// embeddable alternatives, in tie-break order
	pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
		self.kinds.iter().filter_map(|k| k.capability())
	}

	/// scalar alternatives, in tie-break order
	pub fn scalars(&self) -> impl Iterator<Item = Kind> + '_ {
		self.kinds.iter().copied().filter(|k| !k.is_embedded())
	}

	pub fn map_key(&self) -> Option<String> {
		self.language_map.then(|| format!("{}Map", self.name))
	}
}

/// A vocabulary type: its canonical name, the types it extends and the properties it adds.
pub struct TypeSchema {
	pub name: &'static str,
	pub extends: &'static [&'static TypeSchema],
	pub properties: &'static [&'static Property],
}

impl TypeSchema {
	/// true if this type is `name` or transitively extends it
	pub fn is_a(&self, name: &str) -> bool {
		self.name == name || self.extends.iter().any(|t| t.is_a(name))
	}

	pub fn satisfies(&self, capability: Capability) -> bool {
		self.is_a(capability.as_ref())
	}

	/// find a property declared by this type or any of its ancestors
	pub fn property(&self, name: &str) -> Option<&'static Property> {
		self.properties
			.iter()
			.copied()
			.find(|p| p.name == name)
			.or_else(|| self.extends.iter().find_map(|t| t.property(name)))
	}

	/// every property of this type, ancestors first, each listed once
	pub fn all_properties(&self) -> Vec<&'static Property> {
		let mut out = Vec::new();
		self.collect_properties(&mut out);
		out
	}

	fn collect_properties(&self, out: &mut Vec<&'static Property>) {
		for parent in self.extends {
			parent.collect_properties(out);
		}
		for prop in self.properties {
			if !out.iter().any(|p| p.name == prop.name) {
				out.push(prop);
			}
		}
	}
}

impl PartialEq for TypeSchema {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other) || self.name == other.name
	}
}

impl Eq for TypeSchema {}

impl std::fmt::Debug for TypeSchema {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("TypeSchema").field(&self.name).finish()
	}
}
