//! Student-council (OSIS) member record.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsisMember {
    pub name: String,
    /// Position in the council, e.g. "Ketua OSIS".
    pub role: String,
    /// Class the member attends, e.g. "XI IPA 2".
    pub class_name: Option<String>,
    pub photo: Option<String>,
    pub bio: Option<String>,
}

impl Collection for OsisMember {
    const NAME: &'static str = "osismember";
}
