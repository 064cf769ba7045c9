//! Extracurricular activity record.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extracurricular {
    pub name: String,
    pub mentor: Option<String>,
    pub schedule: Option<String>,
    pub description: Option<String>,
    /// Icon name consumed by the frontend.
    pub icon: Option<String>,
}

impl Collection for Extracurricular {
    const NAME: &'static str = "extracurricular";
}
