use crate::Kind;

/// a primitive codec refused a json value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
	#[error("expected {expected}, got json {found}")]
	Mismatch {
		expected: Kind,
		found: &'static str,
	},

	#[error("invalid {kind} '{text}': {reason}")]
	Invalid {
		kind: Kind,
		text: String,
		reason: String,
	},
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("property '{0}' admits no shape for a json object")]
	NoShapeForMap(&'static str),

	#[error("invalid value for '{key}': {source}")]
	Field {
		key: &'static str,
		#[source]
		source: CodecError,
	},

	#[error("in '{property}': {source}")]
	Nested {
		property: &'static str,
		#[source]
		source: Box<DecodeError>,
	},

	#[error("entities nested deeper than {0} levels")]
	TooDeep(usize),

	#[error("expected a json object, got json {0}")]
	NotAnObject(&'static str),

	#[error("document carries no type discriminator")]
	MissingType,

	#[error("no registered type among {0:?}")]
	UnresolvedType(Vec<String>),
}

impl DecodeError {
	pub(crate) fn within(self, property: &'static str) -> Self {
		DecodeError::Nested { property, source: Box::new(self) }
	}
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
	#[error("float {0} has no json representation")]
	NonFiniteFloat(f64),

	#[error("in '{property}': {source}")]
	Nested {
		property: &'static str,
		#[source]
		source: Box<EncodeError>,
	},
}

impl EncodeError {
	pub(crate) fn within(self, property: &'static str) -> Self {
		EncodeError::Nested { property, source: Box::new(self) }
	}
}

/// misuse of an entity accessor against its type schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
	#[error("type '{ty}' has no property '{property}'")]
	UnknownProperty {
		ty: &'static str,
		property: &'static str,
	},

	#[error("property '{0}' is functional and holds a single value")]
	Functional(&'static str),

	#[error("property '{0}' holds a sequence of values")]
	NonFunctional(&'static str),

	#[error("property '{property}' does not admit {kind} values")]
	KindNotAllowed {
		property: &'static str,
		kind: Kind,
	},

	#[error("property '{0}' has no language map")]
	NoLanguageMap(&'static str),

	#[error("type '{ty}' cannot be embedded as {capability}")]
	Capability {
		ty: &'static str,
		capability: crate::Capability,
	},

	#[error("index {index} out of bounds for '{property}' holding {len} values")]
	OutOfBounds {
		property: &'static str,
		index: usize,
		len: usize,
	},
}

/// name of a json value's kind, for error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}
