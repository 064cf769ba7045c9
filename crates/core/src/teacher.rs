//! Teaching staff record.
//!
//! Declared as part of the data model but not yet wired to any endpoint or
//! seed data; the collection stays empty until a staff page exists.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub name: String,
    pub subject: String,
    /// Department name, free text (no referential link).
    pub department: Option<String>,
    pub photo: Option<String>,
    pub bio: Option<String>,
}

impl Collection for Teacher {
    const NAME: &'static str = "teacher";
}
