//! Questionnaire surface: item definitions, Likert bounds, response collection.
//! Bounds are enforced here, at collection time — the classifier itself is
//! permissive about values it is handed.

mod items;
mod prompt;

pub use items::{display_text, ITEMS, ITEM_COUNT};
pub use prompt::{collect_interactive, parse_answer_list};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inclusive Likert scale bounds (0 = strongly disagree, 5 = strongly agree).
pub const SCALE_MIN: u8 = 0;
pub const SCALE_MAX: u8 = 5;

/// Pre-selected answer when the respondent skips an item (mid-scale).
pub const SCALE_DEFAULT: u8 = 3;

/// One completed questionnaire. Immutable once collected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub id: String,
    pub ts: DateTime<Utc>,
    /// One value per item, positionally aligned with [`ITEMS`].
    pub answers: Vec<u8>,
}

impl Response {
    pub fn new(answers: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ts: Utc::now(),
            answers,
        }
    }
}
