// Shared test fixtures for events.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::events::core::event::{Band, Event, EventId};
use crate::modules::events::core::view::EventView;
use std::fs;

const ALL_EVENTS: &str = "./tests/fixtures/events/all_events.json";
const FILTERED_EVENTS_WA: &str = "./tests/fixtures/events/filtered_events_wa.json";

/// The five-event catalog used across the test suite.
pub fn load_all_events() -> Vec<Event> {
    let json_str = fs::read_to_string(ALL_EVENTS).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

/// Expected search result for the query "Wa" against [`load_all_events`].
pub fn load_filtered_events() -> Vec<EventView> {
    let json_str = fs::read_to_string(FILTERED_EVENTS_WA).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub struct EventBuilder {
    inner: Event,
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new(id: EventId) -> Self {
        Self {
            inner: Event {
                id,
                title: String::new(),
                img_url: String::new(),
                comment: None,
                nb_stars: None,
                bands: Default::default(),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn img_url(mut self, v: impl Into<String>) -> Self {
        self.inner.img_url = v.into();
        self
    }

    pub fn comment(mut self, v: impl Into<String>) -> Self {
        self.inner.comment = Some(v.into());
        self
    }

    pub fn nb_stars(mut self, v: u32) -> Self {
        self.inner.nb_stars = Some(v);
        self
    }

    pub fn band<I, S>(mut self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.bands.insert(Band::new(name, members));
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

#[cfg(test)]
mod event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let event = EventBuilder::new(3)
            .title("Rock Fest")
            .img_url("img/rock.png")
            .comment("Loud")
            .nb_stars(4)
            .band("Waves", ["Wally"])
            .build();
        assert_eq!(event.id, 3);
        assert_eq!(event.title, "Rock Fest");
        assert_eq!(event.img_url, "img/rock.png");
        assert_eq!(event.comment.as_deref(), Some("Loud"));
        assert_eq!(event.nb_stars, Some(4));
        assert_eq!(event.bands.len(), 1);
    }

    #[rstest]
    fn it_should_parse_the_catalog() {
        assert_eq!(load_all_events().len(), 5);
        assert_eq!(load_filtered_events().len(), 1);
    }
}
