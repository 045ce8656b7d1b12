use serde::{Deserialize, Serialize};

use super::REGISTRY;

/// Entry of the home page listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewLink {
    pub key: String,
    pub title: String,
    pub path: String,
}

pub const LIST_VIEWS: &str = "list_views";

/// All registered views, in registry order.
pub fn list_views() -> Vec<ViewLink> {
    REGISTRY
        .iter()
        .map(|view| ViewLink {
            key: view.key.to_string(),
            title: view.title.to_string(),
            path: format!("/{}", view.key),
        })
        .collect()
}
