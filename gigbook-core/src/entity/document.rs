use serde::{Deserialize, Serialize};

use crate::entity::Listing;
use crate::query::QueryEngine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    /// "Project Proposal", "Contract Agreement", "Invoice"...
    #[serde(rename = "type")]
    pub kind: String,
    pub client: String,
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Listing for Document {
    const KIND: &'static str = "documents";

    fn id(&self) -> &str {
        &self.id
    }

    fn query_engine() -> QueryEngine<Self> {
        QueryEngine::new()
            .text_field("name", |d: &Document| d.name.as_str())
            .text_field("description", |d: &Document| d.description.as_str())
            .text_field("client", |d: &Document| d.client.as_str())
            .text_list("tags", |d: &Document| d.tags.iter().map(String::as_str).collect())
            .slug_facet("type", |d: &Document| d.kind.as_str())
            .facet("status", |d: &Document| d.status.as_str())
    }
}
