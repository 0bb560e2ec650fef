//! Property descriptors of the ActivityStreams 2.0 vocabulary, plus the ActivityPub additions.
//!
//! See <https://www.w3.org/TR/activitystreams-vocabulary/#properties> and
//! <https://www.w3.org/TR/activitypub/#actor-objects>.

use crate::{Capability as C, Kind as K, Property};

const NODE: &[K] = &[K::Embed(C::Object), K::Embed(C::Link), K::Iri];
const OBJECT_OR_IRI: &[K] = &[K::Embed(C::Object), K::Iri];
const TEXT: &[K] = &[K::String, K::LangString];
const IMAGE_NODE: &[K] = &[K::Embed(C::Image), K::Embed(C::Link), K::Iri];
const PAGE: &[K] = &[K::Embed(C::CollectionPage), K::Embed(C::Link), K::Iri];
const ANY_COLLECTION: &[K] = &[K::Embed(C::OrderedCollection), K::Embed(C::Collection), K::Iri];
const ORDERED_COLLECTION: &[K] = &[K::Embed(C::OrderedCollection), K::Iri];
const TIME: &[K] = &[K::DateTime];
const FLOAT: &[K] = &[K::Float];
const COUNT: &[K] = &[K::NonNegativeInteger];

// Object
pub static ALTITUDE: Property = Property::functional("altitude", FLOAT);
pub static ATTACHMENT: Property = Property::sequence("attachment", NODE);
pub static ATTRIBUTED_TO: Property = Property::sequence("attributedTo", NODE);
pub static AUDIENCE: Property = Property::sequence("audience", NODE);
pub static BCC: Property = Property::sequence("bcc", NODE);
pub static BTO: Property = Property::sequence("bto", NODE);
pub static CC: Property = Property::sequence("cc", NODE);
pub static CONTENT: Property = Property::sequence("content", TEXT).with_language_map();
pub static CONTEXT: Property = Property::sequence("context", NODE);
pub static DURATION: Property = Property::functional("duration", &[K::Duration]);
pub static END_TIME: Property = Property::functional("endTime", TIME);
pub static GENERATOR: Property = Property::sequence("generator", NODE);
pub static ICON: Property = Property::sequence("icon", IMAGE_NODE);
pub static IMAGE: Property = Property::sequence("image", IMAGE_NODE);
pub static IN_REPLY_TO: Property = Property::sequence("inReplyTo", NODE);
pub static LOCATION: Property = Property::sequence("location", NODE);
pub static MEDIA_TYPE: Property = Property::functional("mediaType", &[K::MediaType]);
pub static NAME: Property = Property::sequence("name", TEXT).with_language_map();
pub static PREVIEW: Property = Property::sequence("preview", NODE);
pub static PUBLISHED: Property = Property::functional("published", TIME);
pub static REPLIES: Property = Property::functional("replies", &[K::Embed(C::Collection), K::Iri]);
pub static START_TIME: Property = Property::functional("startTime", TIME);
pub static SUMMARY: Property = Property::sequence("summary", TEXT).with_language_map();
pub static TAG: Property = Property::sequence("tag", NODE);
pub static TO: Property = Property::sequence("to", NODE);
pub static UPDATED: Property = Property::functional("updated", TIME);
pub static URL: Property = Property::sequence("url", &[K::Iri, K::Embed(C::Link)]);

// ActivityPub, on every Object
pub static ENDPOINTS: Property = Property::functional("endpoints", OBJECT_OR_IRI);
pub static FOLLOWERS: Property = Property::functional("followers", ANY_COLLECTION);
pub static FOLLOWING: Property = Property::functional("following", ANY_COLLECTION);
pub static INBOX: Property = Property::functional("inbox", ORDERED_COLLECTION);
pub static LIKED: Property = Property::functional("liked", ANY_COLLECTION);
pub static LIKES: Property = Property::functional("likes", ANY_COLLECTION);
pub static OUTBOX: Property = Property::functional("outbox", ORDERED_COLLECTION);
pub static PREFERRED_USERNAME: Property = Property::functional("preferredUsername", TEXT).with_language_map();
pub static SHARES: Property = Property::functional("shares", ANY_COLLECTION);
pub static SOURCE: Property = Property::functional("source", OBJECT_OR_IRI);
pub static STREAMS: Property = Property::sequence("streams", ANY_COLLECTION);

// Link
pub static HEIGHT: Property = Property::functional("height", COUNT);
pub static HREF: Property = Property::functional("href", &[K::Iri]);
pub static HREFLANG: Property = Property::functional("hreflang", &[K::Bcp47]);
pub static REL: Property = Property::sequence("rel", &[K::String]);
pub static WIDTH: Property = Property::functional("width", COUNT);

// Activity
pub static ACTOR: Property = Property::sequence("actor", NODE);
pub static INSTRUMENT: Property = Property::sequence("instrument", NODE);
pub static OBJECT: Property = Property::sequence("object", NODE);
pub static ORIGIN: Property = Property::sequence("origin", NODE);
pub static RESULT: Property = Property::sequence("result", NODE);
pub static TARGET: Property = Property::sequence("target", NODE);

// Question
pub static ANY_OF: Property = Property::sequence("anyOf", NODE);
pub static CLOSED: Property = Property::sequence(
	"closed",
	&[K::Embed(C::Object), K::Embed(C::Link), K::DateTime, K::Boolean],
);
pub static ONE_OF: Property = Property::sequence("oneOf", NODE);

// Collection and pages
pub static CURRENT: Property = Property::functional("current", PAGE);
pub static FIRST: Property = Property::functional("first", PAGE);
pub static ITEMS: Property = Property::sequence("items", NODE);
pub static LAST: Property = Property::functional("last", PAGE);
pub static NEXT: Property = Property::functional("next", PAGE);
pub static ORDERED_ITEMS: Property = Property::sequence("orderedItems", NODE);
pub static PART_OF: Property = Property::functional("partOf", &[K::Embed(C::Collection), K::Embed(C::Link), K::Iri]);
pub static PREV: Property = Property::functional("prev", PAGE);
pub static START_INDEX: Property = Property::functional("startIndex", COUNT);
pub static TOTAL_ITEMS: Property = Property::functional("totalItems", COUNT);

// Place
pub static ACCURACY: Property = Property::functional("accuracy", FLOAT);
pub static LATITUDE: Property = Property::functional("latitude", FLOAT);
pub static LONGITUDE: Property = Property::functional("longitude", FLOAT);
pub static RADIUS: Property = Property::functional("radius", FLOAT);
pub static UNITS: Property = Property::functional("units", &[K::String, K::Iri]);

// Profile, Relationship, Tombstone
pub static DESCRIBES: Property = Property::functional("describes", OBJECT_OR_IRI);
pub static RELATIONSHIP: Property = Property::sequence("relationship", OBJECT_OR_IRI);
pub static SUBJECT: Property = Property::functional("subject", NODE);
pub static DELETED: Property = Property::functional("deleted", TIME);
pub static FORMER_TYPE: Property = Property::sequence("formerType", &[K::Embed(C::Object), K::String]);
