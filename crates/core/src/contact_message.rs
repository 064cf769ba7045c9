//! Visitor contact message.
//!
//! Write-only: the contact endpoint inserts these, nothing reads them back
//! over HTTP.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;
use crate::email::is_valid_email;
use crate::error::{CoreError, Violations};

/// Minimum length of the message body, in characters.
pub const MIN_MESSAGE_LENGTH: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Collection for ContactMessage {
    const NAME: &'static str = "contactmessage";
}

impl ContactMessage {
    /// Check format constraints, collecting every violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut violations = Violations::new();
        if !is_valid_email(&self.email) {
            violations.push("email", "must be a syntactically valid email address");
        }
        if self.message.chars().count() < MIN_MESSAGE_LENGTH {
            violations.push(
                "message",
                format!("must be at least {MIN_MESSAGE_LENGTH} characters"),
            );
        }
        violations.into_result()
    }
}
