// Pure search over a snapshot of events.
//
// Purpose
// - Keep only members whose name contains the query (case-insensitive), prune the bands and events left empty,
//   and annotate what survives with the surviving counts.
//
// Responsibilities
// - Match member names only. Band names and event titles are never compared against the query.
// - Build fresh views. The snapshot passed in is never modified.
// - Preserve the snapshot order of events. Band and member order follows set ordering.
//
// Boundaries
// - No input or output. The snapshot is loaded by the caller.

use crate::modules::events::core::event::{Band, Event, Member};
use crate::modules::events::core::view::{BandView, EventView, with_count};
use std::collections::BTreeSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("search query is missing")]
    Missing,
}

/// A query that has already been lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn parse(raw: Option<&str>) -> Result<Self, QueryError> {
        let raw = raw.ok_or(QueryError::Missing)?;
        Ok(Self {
            needle: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    fn matches(&self, member: &Member) -> bool {
        member.name.to_lowercase().contains(&self.needle)
    }
}

pub fn search(events: &[Event], query: &SearchQuery) -> Vec<EventView> {
    events
        .iter()
        .filter_map(|event| filter_event(event, query))
        .collect()
}

fn filter_event(event: &Event, query: &SearchQuery) -> Option<EventView> {
    let bands: BTreeSet<BandView> = event
        .bands
        .iter()
        .filter_map(|band| filter_band(band, query))
        .collect();
    if bands.is_empty() {
        return None;
    }
    Some(EventView {
        title: with_count(&event.title, bands.len()),
        img_url: event.img_url.clone(),
        bands,
    })
}

fn filter_band(band: &Band, query: &SearchQuery) -> Option<BandView> {
    let members: BTreeSet<Member> = band
        .members
        .iter()
        .filter(|member| query.matches(member))
        .cloned()
        .collect();
    if members.is_empty() {
        return None;
    }
    Some(BandView {
        name: with_count(&band.name, members.len()),
        members,
    })
}
