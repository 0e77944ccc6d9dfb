// Event aggregate with its owned bands and members.
//
// Purpose
// - Represent what the store persists: an event, the bands playing at it, and the members of each band.
//
// Invariants
// - Bands and members are kept in ordered sets, so structurally equal entries never appear twice.
// - Bands and members have no identity of their own. They are replaced wholesale, never patched in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type EventId = i64;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Band {
    pub name: String,
    #[serde(default)]
    pub members: BTreeSet<Member>,
}

impl Band {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Member::new).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub nb_stars: Option<u32>,
    #[serde(default)]
    pub bands: BTreeSet<Band>,
}
