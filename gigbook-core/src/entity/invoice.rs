use serde::{Deserialize, Serialize};

use crate::entity::Listing;
use crate::query::QueryEngine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    /// e.g. "INV-2024-003"
    pub number: String,
    pub client: String,
    #[serde(default)]
    pub project: String,
    pub amount: f64,
    /// "Paid", "Sent", "Overdue", "Draft"
    pub status: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub due_date: String,
}

impl Listing for Invoice {
    const KIND: &'static str = "invoices";

    fn id(&self) -> &str {
        &self.id
    }

    fn query_engine() -> QueryEngine<Self> {
        QueryEngine::new()
            .text_field("number", |i: &Invoice| i.number.as_str())
            .text_field("client", |i: &Invoice| i.client.as_str())
            .text_field("project", |i: &Invoice| i.project.as_str())
            .facet("status", |i: &Invoice| i.status.as_str())
    }
}
