//! School event record.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    /// Free-form date string; the site renders it verbatim, nothing parses it.
    pub date: String,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Category tag: school/osis/academic/sport.
    pub category: Option<String>,
}

impl Collection for Event {
    const NAME: &'static str = "event";
}
