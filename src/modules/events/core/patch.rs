// Partial update of an event: comment and star rating only.
//
// Purpose
// - Express the only two fields a caller may change on an existing event.
//
// Responsibilities
// - Replace both fields wholesale, including clearing them when the patch leaves them out.
// - Leave id, title, image and bands exactly as stored.
//
// Notes
// - Any Event-shaped payload deserializes into a patch. Unknown fields are ignored.

use crate::modules::events::core::event::Event;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub nb_stars: Option<u32>,
}

impl EventPatch {
    pub fn apply_to(self, mut event: Event) -> Event {
        event.comment = self.comment;
        event.nb_stars = self.nb_stars;
        event
    }
}
