//! School profile record.
//!
//! Effectively a singleton: seeding inserts exactly one document and nothing
//! else writes the collection.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::email::is_valid_email;
use crate::error::{CoreError, Violations};

/// Public profile of the school shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolInfo {
    pub name: String,
    pub tagline: Option<String>,
    pub description: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hero_image: Option<String>,
}

impl Collection for SchoolInfo {
    const NAME: &'static str = "schoolinfo";
}

impl SchoolInfo {
    /// Check format constraints. Field presence and types are already
    /// guaranteed by deserialization.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut violations = Violations::new();
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                violations.push("email", "must be a syntactically valid email address");
            }
        }
        violations.into_result()
    }
}
