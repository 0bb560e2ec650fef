#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}
		)*
	};
}

pub(crate) use strenum;

/// accessors for scalar alternatives of a property value: `is_x`, `as_x`, `set_x` and `From<T>`
macro_rules! scalars {
	( $( $variant:ident($t:ty) => $name:ident ),* $(,)? ) => {
		paste::paste! {
			impl $crate::PropertyValue {
				$(
					pub fn [< is_ $name >](&self) -> bool {
						matches!(self, Self::$variant(_))
					}

					pub fn [< as_ $name >](&self) -> Option<&$t> {
						match self {
							Self::$variant(x) => Some(x),
							_ => None,
						}
					}

					pub fn [< set_ $name >](&mut self, val: $t) {
						*self = Self::$variant(val);
					}
				)*
			}

			$(
				impl From<$t> for $crate::PropertyValue {
					fn from(value: $t) -> Self {
						Self::$variant(value)
					}
				}
			)*
		}
	};
}

pub(crate) use scalars;

/// accessors for embedded alternatives, one per capability
macro_rules! embeds {
	( $( $cap:ident => $name:ident ),* $(,)? ) => {
		paste::paste! {
			impl $crate::PropertyValue {
				$(
					pub fn [< is_ $name >](&self) -> bool {
						matches!(self, Self::Embedded($crate::Capability::$cap, _))
					}

					pub fn [< as_ $name >](&self) -> Option<&$crate::Entity> {
						match self {
							Self::Embedded($crate::Capability::$cap, x) => Some(x),
							_ => None,
						}
					}

					pub fn [< set_ $name >](&mut self, val: $crate::Entity) -> Result<(), $crate::SchemaError> {
						*self = Self::embed($crate::Capability::$cap, val)?;
						Ok(())
					}
				)*
			}
		}
	};
}

pub(crate) use embeds;
