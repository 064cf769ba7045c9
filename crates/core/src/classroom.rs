//! Class record.
//!
//! Like [`crate::teacher::Teacher`], declared but not yet exposed by any
//! endpoint or seed data.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::error::{CoreError, Violations};

/// Lowest grade level taught at the school.
pub const MIN_LEVEL: i64 = 7;
/// Highest grade level taught at the school.
pub const MAX_LEVEL: i64 = 12;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRoom {
    /// Class identifier, e.g. "X IPA 1".
    pub name: String,
    /// Grade level, [`MIN_LEVEL`]..=[`MAX_LEVEL`].
    pub level: i64,
    pub homeroom_teacher: Option<String>,
}

impl Collection for ClassRoom {
    const NAME: &'static str = "classroom";
}

impl ClassRoom {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut violations = Violations::new();
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.level) {
            violations.push(
                "level",
                format!("must be between {MIN_LEVEL} and {MAX_LEVEL}"),
            );
        }
        violations.into_result()
    }
}
