//! Academic department record.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    /// Head of department, free text.
    pub head: Option<String>,
    pub description: Option<String>,
}

impl Collection for Department {
    const NAME: &'static str = "department";
}
