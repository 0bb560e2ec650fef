//! Vocabulary types as data: each one names its parents and the properties it adds.

use crate::{props, TypeSchema};

macro_rules! vocabulary {
	( $( $ident:ident = $name:literal : [$($parent:ident),*] { $($prop:ident),* } )* ) => {
		$(
			pub static $ident: TypeSchema = TypeSchema {
				name: $name,
				extends: &[$(&$parent),*],
				properties: &[$(&props::$prop),*],
			};
		)*

		/// every type of the vocabulary, in declaration order
		pub static ALL: &[&TypeSchema] = &[$(&$ident),*];
	};
}

vocabulary! {
	OBJECT = "Object" : [] {
		ALTITUDE, ATTACHMENT, ATTRIBUTED_TO, AUDIENCE, BCC, BTO, CC, CONTENT, CONTEXT, DURATION,
		END_TIME, GENERATOR, ICON, IMAGE, IN_REPLY_TO, LOCATION, MEDIA_TYPE, NAME, PREVIEW,
		PUBLISHED, REPLIES, START_TIME, SUMMARY, TAG, TO, UPDATED, URL,
		ENDPOINTS, FOLLOWERS, FOLLOWING, INBOX, LIKED, LIKES, OUTBOX, PREFERRED_USERNAME, SHARES,
		SOURCE, STREAMS
	}
	LINK = "Link" : [] {
		HREF, REL, MEDIA_TYPE, NAME, HREFLANG, HEIGHT, WIDTH, PREVIEW
	}
	MENTION = "Mention" : [LINK] {}

	ACTIVITY = "Activity" : [OBJECT] { ACTOR, OBJECT, TARGET, RESULT, ORIGIN, INSTRUMENT }
	INTRANSITIVE_ACTIVITY = "IntransitiveActivity" : [OBJECT] { ACTOR, TARGET, RESULT, ORIGIN, INSTRUMENT }

	COLLECTION = "Collection" : [OBJECT] { TOTAL_ITEMS, CURRENT, FIRST, LAST, ITEMS }
	ORDERED_COLLECTION = "OrderedCollection" : [COLLECTION] { ORDERED_ITEMS }
	COLLECTION_PAGE = "CollectionPage" : [COLLECTION] { PART_OF, NEXT, PREV }
	ORDERED_COLLECTION_PAGE = "OrderedCollectionPage" : [COLLECTION_PAGE, ORDERED_COLLECTION] { START_INDEX }

	ACCEPT = "Accept" : [ACTIVITY] {}
	TENTATIVE_ACCEPT = "TentativeAccept" : [ACCEPT] {}
	ADD = "Add" : [ACTIVITY] {}
	ANNOUNCE = "Announce" : [ACTIVITY] {}
	CREATE = "Create" : [ACTIVITY] {}
	DELETE = "Delete" : [ACTIVITY] {}
	DISLIKE = "Dislike" : [ACTIVITY] {}
	FLAG = "Flag" : [ACTIVITY] {}
	FOLLOW = "Follow" : [ACTIVITY] {}
	IGNORE = "Ignore" : [ACTIVITY] {}
	BLOCK = "Block" : [IGNORE] {}
	JOIN = "Join" : [ACTIVITY] {}
	LEAVE = "Leave" : [ACTIVITY] {}
	LIKE = "Like" : [ACTIVITY] {}
	LISTEN = "Listen" : [ACTIVITY] {}
	MOVE = "Move" : [ACTIVITY] {}
	OFFER = "Offer" : [ACTIVITY] {}
	INVITE = "Invite" : [OFFER] {}
	READ = "Read" : [ACTIVITY] {}
	REJECT = "Reject" : [ACTIVITY] {}
	TENTATIVE_REJECT = "TentativeReject" : [REJECT] {}
	REMOVE = "Remove" : [ACTIVITY] {}
	UNDO = "Undo" : [ACTIVITY] {}
	UPDATE = "Update" : [ACTIVITY] {}
	VIEW = "View" : [ACTIVITY] {}
	ARRIVE = "Arrive" : [INTRANSITIVE_ACTIVITY] {}
	TRAVEL = "Travel" : [INTRANSITIVE_ACTIVITY] {}
	QUESTION = "Question" : [INTRANSITIVE_ACTIVITY] { ONE_OF, ANY_OF, CLOSED }

	APPLICATION = "Application" : [OBJECT] {}
	GROUP = "Group" : [OBJECT] {}
	ORGANIZATION = "Organization" : [OBJECT] {}
	PERSON = "Person" : [OBJECT] {}
	SERVICE = "Service" : [OBJECT] {}

	ARTICLE = "Article" : [OBJECT] {}
	DOCUMENT = "Document" : [OBJECT] {}
	AUDIO = "Audio" : [DOCUMENT] {}
	IMAGE = "Image" : [DOCUMENT] {}
	PAGE = "Page" : [DOCUMENT] {}
	VIDEO = "Video" : [DOCUMENT] {}
	EVENT = "Event" : [OBJECT] {}
	NOTE = "Note" : [OBJECT] {}
	PLACE = "Place" : [OBJECT] { ACCURACY, LATITUDE, LONGITUDE, RADIUS, UNITS }
	PROFILE = "Profile" : [OBJECT] { DESCRIBES }
	RELATIONSHIP = "Relationship" : [OBJECT] { SUBJECT, OBJECT, RELATIONSHIP }
	TOMBSTONE = "Tombstone" : [OBJECT] { FORMER_TYPE, DELETED }
}

/// look up a vocabulary type by its canonical name
pub fn by_name(name: &str) -> Option<&'static TypeSchema> {
	ALL.iter().copied().find(|t| t.name == name)
}
