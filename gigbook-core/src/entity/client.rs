use serde::{Deserialize, Serialize};

use crate::entity::Listing;
use crate::query::QueryEngine;

/// A client account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// "Active", "Inactive"...
    pub status: String,
    /// "High", "Medium", "Low"
    pub priority: String,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub active_projects: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Listing for Client {
    const KIND: &'static str = "clients";

    fn id(&self) -> &str {
        &self.id
    }

    fn query_engine() -> QueryEngine<Self> {
        QueryEngine::new()
            .text_field("name", |c: &Client| c.name.as_str())
            .text_field("email", |c: &Client| c.email.as_str())
            .text_field("company", |c: &Client| c.company.as_str())
            .text_field("location", |c: &Client| c.location.as_str())
            .facet("status", |c: &Client| c.status.as_str())
            .facet("priority", |c: &Client| c.priority.as_str())
    }
}
