use serde::{Deserialize, Serialize};

use crate::entity::Listing;
use crate::query::QueryEngine;

/// Money in or out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    /// "income" or "expense"
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub amount: f64,
    /// "completed", "pending", "overdue", "failed"
    pub status: String,
    pub date: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub reference: String,
    /// Expenses usually have no client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default)]
    pub category: String,
}

impl Listing for Payment {
    const KIND: &'static str = "payments";

    fn id(&self) -> &str {
        &self.id
    }

    fn query_engine() -> QueryEngine<Self> {
        QueryEngine::new()
            .text_field("description", |p: &Payment| p.description.as_str())
            .text_field("reference", |p: &Payment| p.reference.as_str())
            .text_field("client", |p: &Payment| p.client.as_deref().unwrap_or(""))
            .facet("status", |p: &Payment| p.status.as_str())
            .facet("type", |p: &Payment| p.kind.as_str())
    }
}
