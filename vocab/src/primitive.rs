//! Scalar codecs for the xsd/rdf datatypes used by the vocabulary.
//!
//! Every codec turns one json value into a native value or refuses it with a [CodecError]; none of
//! them panic. Refusals are expected while decoding polymorphic properties, where alternatives are
//! tried in order until one accepts.

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde_json::{Number, Value};

use crate::{error::json_kind, CodecError, EncodeError, Kind};

pub trait Primitive: Sized {
	const KIND: Kind;

	fn decode(value: &Value) -> Result<Self, CodecError>;
	fn encode(&self) -> Result<Value, EncodeError>;
}

fn mismatch(expected: Kind, value: &Value) -> CodecError {
	CodecError::Mismatch { expected, found: json_kind(value) }
}

fn invalid(kind: Kind, text: &str, reason: impl ToString) -> CodecError {
	CodecError::Invalid { kind, text: text.to_string(), reason: reason.to_string() }
}

fn text(kind: Kind, value: &Value) -> Result<&str, CodecError> {
	value.as_str().ok_or_else(|| mismatch(kind, value))
}

impl Primitive for String {
	const KIND: Kind = Kind::String;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		Ok(text(Self::KIND, value)?.to_string())
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		Ok(Value::String(self.clone()))
	}
}

/// A language tagged string, carried on the wire as a JSON-LD value object:
/// `{"@value": "hello", "@language": "en"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LangString {
	pub value: String,
	pub language: String,
}

impl LangString {
	pub fn new(value: impl ToString, language: impl ToString) -> Self {
		LangString { value: value.to_string(), language: language.to_string() }
	}
}

impl Primitive for LangString {
	const KIND: Kind = Kind::LangString;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		let Value::Object(map) = value else { return Err(mismatch(Self::KIND, value)) };
		let (Some(Value::String(text)), Some(Value::String(language))) = (map.get("@value"), map.get("@language")) else {
			return Err(invalid(Self::KIND, &value.to_string(), "expected string '@value' and '@language'"));
		};
		Ok(LangString::new(text, language))
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		let mut map = serde_json::Map::new();
		map.insert("@value".to_string(), Value::String(self.value.clone()));
		map.insert("@language".to_string(), Value::String(self.language.clone()));
		Ok(Value::Object(map))
	}
}

/// An absolute IRI. The text is kept as given, so re-encoding never normalizes it.
#[derive(Debug, Clone)]
pub struct Iri {
	text: String,
	url: url::Url,
}

impl Iri {
	pub fn parse(text: &str) -> Result<Self, url::ParseError> {
		let url = url::Url::parse(text)?;
		Ok(Iri { text: text.to_string(), url })
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}

	pub fn as_url(&self) -> &url::Url {
		&self.url
	}
}

impl PartialEq for Iri {
	fn eq(&self, other: &Self) -> bool {
		self.text == other.text
	}
}

impl Eq for Iri {}

impl std::hash::Hash for Iri {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.text.hash(state)
	}
}

impl std::fmt::Display for Iri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text)
	}
}

impl std::str::FromStr for Iri {
	type Err = url::ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Iri::parse(s)
	}
}

impl From<url::Url> for Iri {
	fn from(url: url::Url) -> Self {
		Iri { text: url.to_string(), url }
	}
}

impl Primitive for Iri {
	const KIND: Kind = Kind::Iri;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		let text = text(Self::KIND, value)?;
		Iri::parse(text).map_err(|e| invalid(Self::KIND, text, e))
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		Ok(Value::String(self.text.clone()))
	}
}

// 2^53, past this f64 stops representing every integer
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// xsd:float. Integral values below 2^53 are written as json integers, so `1.0` comes back out as
/// `1`: the same `f64`, different json text.
impl Primitive for f64 {
	const KIND: Kind = Kind::Float;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		value.as_f64().ok_or_else(|| mismatch(Self::KIND, value))
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		if !self.is_finite() {
			return Err(EncodeError::NonFiniteFloat(*self));
		}
		// integral floats go out as json integers, like most json encoders print them
		if self.fract() == 0.0 && self.abs() < EXACT_INTEGER_LIMIT {
			return Ok(Value::Number(Number::from(*self as i64)));
		}
		Number::from_f64(*self)
			.map(Value::Number)
			.ok_or(EncodeError::NonFiniteFloat(*self))
	}
}

impl Primitive for u64 {
	const KIND: Kind = Kind::NonNegativeInteger;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		value.as_u64().ok_or_else(|| mismatch(Self::KIND, value))
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		Ok(Value::Number(Number::from(*self)))
	}
}

impl Primitive for bool {
	const KIND: Kind = Kind::Boolean;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		value.as_bool().ok_or_else(|| mismatch(Self::KIND, value))
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		Ok(Value::Bool(*self))
	}
}

impl Primitive for DateTime<Utc> {
	const KIND: Kind = Kind::DateTime;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		let text = text(Self::KIND, value)?;
		DateTime::parse_from_rfc3339(text)
			.map(|t| t.with_timezone(&Utc))
			.map_err(|e| invalid(Self::KIND, text, e))
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
	}
}

/// `type/subtype` media type, as in `text/html` or `image/png; charset=binary`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType(String);

impl MediaType {
	pub fn parse(text: &str) -> Result<Self, CodecError> {
		let essence = text.split(';').next().unwrap_or_default().trim();
		match essence.split_once('/') {
			Some((top, sub)) if !top.is_empty() && !sub.is_empty() && !essence.contains(char::is_whitespace) =>
				Ok(MediaType(text.to_string())),
			_ => Err(invalid(Kind::MediaType, text, "expected 'type/subtype'")),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Primitive for MediaType {
	const KIND: Kind = Kind::MediaType;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		MediaType::parse(text(Self::KIND, value)?)
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		Ok(Value::String(self.0.clone()))
	}
}

/// BCP47 language tag, checked for shape only (`en`, `pt-BR`, `zh-Hant-TW`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bcp47(String);

impl Bcp47 {
	pub fn parse(text: &str) -> Result<Self, CodecError> {
		let well_formed = !text.is_empty()
			&& text.split('-').all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()));
		if well_formed {
			Ok(Bcp47(text.to_string()))
		} else {
			Err(invalid(Kind::Bcp47, text, "malformed language tag"))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Primitive for Bcp47 {
	const KIND: Kind = Kind::Bcp47;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		Bcp47::parse(text(Self::KIND, value)?)
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		Ok(Value::String(self.0.clone()))
	}
}

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
// xsd:duration years and months have no fixed length, these are the usual approximations
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// xsd:duration, such as `PT5S` or `P1DT12H`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Duration(TimeDelta);

impl Duration {
	pub fn new(delta: TimeDelta) -> Self {
		Duration(delta)
	}

	pub fn as_delta(&self) -> TimeDelta {
		self.0
	}

	pub fn parse(text: &str) -> Result<Self, CodecError> {
		parse_duration(text)
			.map(Duration)
			.map_err(|reason| invalid(Kind::Duration, text, reason))
	}
}

impl From<TimeDelta> for Duration {
	fn from(value: TimeDelta) -> Self {
		Duration(value)
	}
}

impl std::fmt::Display for Duration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.0 < TimeDelta::zero() {
			f.write_str("-")?;
		}
		let abs = self.0.abs();
		let total = abs.num_seconds();
		let nanos = abs.subsec_nanos();
		let (days, hours, minutes, seconds) = (total / DAY, total % DAY / HOUR, total % HOUR / MINUTE, total % MINUTE);

		f.write_str("P")?;
		if days > 0 {
			write!(f, "{days}D")?;
		}
		if days > 0 && hours == 0 && minutes == 0 && seconds == 0 && nanos == 0 {
			return Ok(());
		}
		f.write_str("T")?;
		if hours > 0 {
			write!(f, "{hours}H")?;
		}
		if minutes > 0 {
			write!(f, "{minutes}M")?;
		}
		if seconds > 0 || nanos > 0 || (hours == 0 && minutes == 0) {
			write!(f, "{seconds}")?;
			if nanos > 0 {
				let fraction = format!("{nanos:09}");
				write!(f, ".{}", fraction.trim_end_matches('0'))?;
			}
			f.write_str("S")?;
		}
		Ok(())
	}
}

impl Primitive for Duration {
	const KIND: Kind = Kind::Duration;

	fn decode(value: &Value) -> Result<Self, CodecError> {
		Duration::parse(text(Self::KIND, value)?)
	}

	fn encode(&self) -> Result<Value, EncodeError> {
		Ok(Value::String(self.to_string()))
	}
}

fn parse_duration(text: &str) -> Result<TimeDelta, String> {
	let (negative, rest) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text),
	};
	let rest = rest.strip_prefix('P').ok_or("missing 'P' designator")?;
	let (date, time) = match rest.split_once('T') {
		Some((date, time)) => (date, Some(time)),
		None => (rest, None),
	};
	if rest.is_empty() || time == Some("") {
		return Err("no duration components".to_string());
	}

	let mut total = components(date, &[('Y', YEAR), ('M', MONTH), ('D', DAY)])?;
	if let Some(time) = time {
		let clock = components(time, &[('H', HOUR), ('M', MINUTE), ('S', 1)])?;
		total = total.checked_add(&clock).ok_or("duration out of range")?;
	}

	Ok(if negative { -total } else { total })
}

/// sum `<number><designator>` pairs, designators must follow the order of `units`
fn components(part: &str, units: &[(char, i64)]) -> Result<TimeDelta, String> {
	let mut total = TimeDelta::zero();
	let mut next = 0;
	let mut number = String::new();

	for c in part.chars() {
		if c.is_ascii_digit() || c == '.' {
			number.push(c);
			continue;
		}
		let Some(pos) = units[next..].iter().position(|(d, _)| *d == c) else {
			return Err(format!("unexpected '{c}'"));
		};
		let (designator, seconds) = units[next + pos];
		next += pos + 1;
		if number.is_empty() {
			return Err(format!("missing number before '{designator}'"));
		}

		let delta = match number.split_once('.') {
			Some((whole, fraction)) => {
				if seconds != 1 {
					return Err(format!("only seconds may be fractional, not '{designator}'"));
				}
				let whole: i64 = whole.parse().map_err(|e| format!("bad seconds '{number}': {e}"))?;
				if fraction.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
					return Err(format!("bad fraction in '{number}'"));
				}
				let digits: String = fraction.chars().chain(std::iter::repeat('0')).take(9).collect();
				let nanos: i64 = digits.parse().map_err(|e| format!("bad fraction in '{number}': {e}"))?;
				TimeDelta::try_seconds(whole)
					.and_then(|s| s.checked_add(&TimeDelta::nanoseconds(nanos)))
					.ok_or("duration out of range")?
			},
			None => {
				let n: i64 = number.parse().map_err(|e| format!("bad number '{number}': {e}"))?;
				n.checked_mul(seconds)
					.and_then(TimeDelta::try_seconds)
					.ok_or("duration out of range")?
			},
		};
		total = total.checked_add(&delta).ok_or("duration out of range")?;
		number.clear();
	}

	if !number.is_empty() {
		return Err(format!("number '{number}' has no designator"));
	}
	Ok(total)
}
