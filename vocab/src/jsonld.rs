use serde_json::{Map, Value};

pub const ACTIVITYSTREAMS: &str = "https://www.w3.org/ns/activitystreams";
pub const SECURITY: &str = "https://w3id.org/security/v1";

pub trait LD {
	/// attach the json-ld `@context` entities never write themselves
	fn ld_context(self) -> Self;
}

impl LD for Map<String, Value> {
	fn ld_context(mut self) -> Self {
		let mut ctx = vec![Value::String(ACTIVITYSTREAMS.into())];
		if self.contains_key("publicKey") {
			ctx.push(Value::String(SECURITY.into()));
		}
		let ctx = if ctx.len() == 1 { ctx.remove(0) } else { Value::Array(ctx) };
		self.insert("@context".to_string(), ctx);
		self
	}
}

impl LD for Value {
	fn ld_context(self) -> Self {
		match self {
			Value::Object(map) => Value::Object(map.ld_context()),
			other => {
				tracing::warn!("cannot add @context to json value different than object");
				other
			},
		}
	}
}
