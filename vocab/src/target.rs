use crate::{props, Entity, PropertyValue};

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

pub trait Addressed {
	/// everyone this is delivered to: `to`, `bto`, `cc` and `bcc`
	fn addressed(&self) -> Vec<String>;
	/// primary targets only: `to` and `bto`
	fn mentioning(&self) -> Vec<String>;

	fn is_public(&self) -> bool {
		self.addressed().iter().any(|x| x == PUBLIC)
	}
}

impl Entity {
	/// ids of every value of a property, skipping values without one
	pub fn all_ids(&self, property: &crate::Property) -> Vec<String> {
		self.values(property)
			.iter()
			.filter_map(PropertyValue::id)
			.map(str::to_string)
			.collect()
	}
}

impl Addressed for Entity {
	fn addressed(&self) -> Vec<String> {
		let mut to = self.mentioning();
		to.append(&mut self.all_ids(&props::CC));
		to.append(&mut self.all_ids(&props::BCC));
		to
	}

	fn mentioning(&self) -> Vec<String> {
		let mut to = self.all_ids(&props::TO);
		to.append(&mut self.all_ids(&props::BTO));
		to
	}
}
