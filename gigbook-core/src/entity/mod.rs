//! Dashboard record types and the selectors each list page searches by.
//!
//! Each type implements [`Listing`], which hands back a [`QueryEngine`]
//! wired with that page's text fields and facets. Numeric fields (revenue,
//! budget, amount) are carried for the host's summary panels only.

mod client;
mod document;
mod invoice;
mod payment;
mod project;

pub use client::Client;
pub use document::Document;
pub use invoice::Invoice;
pub use payment::Payment;
pub use project::Project;

use crate::query::QueryEngine;

/// A record type shown on a filterable list page.
pub trait Listing: Sized {
    /// Plural page name, e.g. `"clients"`.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// The engine wired with this type's search fields and facets.
    fn query_engine() -> QueryEngine<Self>;
}
