// Annotated projections produced by the search engine.
//
// Purpose
// - Carry the filtered shape of an event back to callers: title and band names suffixed with match counts.
//
// Boundaries
// - Never persisted. Id, comment and rating are deliberately absent.

use crate::modules::events::core::event::Member;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BandView {
    pub name: String,
    pub members: BTreeSet<Member>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    pub title: String,
    pub img_url: String,
    pub bands: BTreeSet<BandView>,
}

/// Appends the surviving count to a title or band name, e.g. `"Waves [2]"`.
pub fn with_count(label: &str, count: usize) -> String {
    format!("{label} [{count}]")
}

#[cfg(test)]
mod event_view_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Rock Fest", 1, "Rock Fest [1]")]
    #[case("Waves", 12, "Waves [12]")]
    #[case("", 0, " [0]")]
    fn it_should_append_the_count(#[case] label: &str, #[case] count: usize, #[case] expected: &str) {
        assert_eq!(with_count(label, count), expected);
    }

    #[rstest]
    fn it_should_serialize_without_id_comment_or_rating() {
        let view = EventView {
            title: "Rock Fest [1]".into(),
            img_url: "img/rock.png".into(),
            bands: [BandView {
                name: "Waves [1]".into(),
                members: [Member::new("Wally")].into_iter().collect(),
            }]
            .into_iter()
            .collect(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Rock Fest [1]",
                "imgUrl": "img/rock.png",
                "bands": [{ "name": "Waves [1]", "members": [{ "name": "Wally" }] }]
            })
        );
    }
}
