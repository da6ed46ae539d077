use serde::{Deserialize, Serialize};

pub mod service;
pub use service::SidebarService;

/// One sidebar bucket, as delivered by the category document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryEntry {
    pub name: String,
    pub slug: String,
    pub icon: String,
    #[serde(default)]
    pub count: i64,
}
