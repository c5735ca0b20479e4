use serde::{Deserialize, Serialize};

use crate::entity::Listing;
use crate::query::QueryEngine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub client: String,
    /// Display form, e.g. "In Progress"; filtered by slug ("in-progress").
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub spent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Listing for Project {
    const KIND: &'static str = "projects";

    fn id(&self) -> &str {
        &self.id
    }

    fn query_engine() -> QueryEngine<Self> {
        QueryEngine::new()
            .text_field("name", |p: &Project| p.name.as_str())
            .text_field("description", |p: &Project| p.description.as_str())
            .text_field("client", |p: &Project| p.client.as_str())
            .text_list("tags", |p: &Project| p.tags.iter().map(String::as_str).collect())
            .slug_facet("status", |p: &Project| p.status.as_str())
            .facet("priority", |p: &Project| p.priority.as_str())
    }
}
