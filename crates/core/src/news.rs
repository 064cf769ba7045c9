//! News article record.

use serde::{Deserialize, Serialize};

use crate::collection::Collection;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub image: Option<String>,
    pub author: Option<String>,
}

impl Collection for News {
    const NAME: &'static str = "news";
}
