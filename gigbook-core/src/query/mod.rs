//! Free-text and facet filtering over record collections.
//!
//! A [`QueryEngine`] holds the selectors for one record type: text fields
//! searched by the free-text query and named facets matched exactly. The
//! engine knows nothing about the record shape beyond those closures.
//!
//! Filtering is a full pass over the input on every call. Output borrows
//! from the input and keeps its relative order.

mod facet;
mod spec;

pub use facet::FacetMatch;
pub use spec::{ALL, FacetChoice, FilterSpec};

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::{GigbookError, GigbookResult};
use facet::FacetSelector;

type TextFn<R> = Box<dyn Fn(&R) -> &str + Send + Sync>;
type TextListFn<R> = Box<dyn Fn(&R) -> Vec<&str> + Send + Sync>;

enum TextSelector<R> {
    Single(TextFn<R>),
    Many(TextListFn<R>),
}

struct TextField<R> {
    name: String,
    select: TextSelector<R>,
}

impl<R> TextField<R> {
    /// `needle` is already lowercased.
    fn contains(&self, record: &R, needle: &str) -> bool {
        match &self.select {
            TextSelector::Single(f) => f(record).to_lowercase().contains(needle),
            TextSelector::Many(f) => f(record)
                .into_iter()
                .any(|value| value.to_lowercase().contains(needle)),
        }
    }
}

/// Selectors for one record type.
pub struct QueryEngine<R> {
    text_fields: Vec<TextField<R>>,
    facets: BTreeMap<String, FacetSelector<R>>,
}

impl<R> Default for QueryEngine<R> {
    fn default() -> Self {
        QueryEngine {
            text_fields: Vec::new(),
            facets: BTreeMap::new(),
        }
    }
}

impl<R> QueryEngine<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field searched by the free-text query.
    pub fn text_field<F>(mut self, name: &str, select: F) -> Self
    where
        F: Fn(&R) -> &str + Send + Sync + 'static,
    {
        self.text_fields.push(TextField {
            name: name.to_string(),
            select: TextSelector::Single(Box::new(select)),
        });
        self
    }

    /// Add a multi-valued text field (e.g. tags). Matches when any value does.
    pub fn text_list<F>(mut self, name: &str, select: F) -> Self
    where
        F: Fn(&R) -> Vec<&str> + Send + Sync + 'static,
    {
        self.text_fields.push(TextField {
            name: name.to_string(),
            select: TextSelector::Many(Box::new(select)),
        });
        self
    }

    /// Add a facet compared case-insensitively.
    pub fn facet<F>(self, name: &str, select: F) -> Self
    where
        F: Fn(&R) -> &str + Send + Sync + 'static,
    {
        self.facet_with(name, FacetMatch::CaseInsensitive, select)
    }

    /// Add a facet compared by slug, so `"In Progress"` matches `"in-progress"`.
    pub fn slug_facet<F>(self, name: &str, select: F) -> Self
    where
        F: Fn(&R) -> &str + Send + Sync + 'static,
    {
        self.facet_with(name, FacetMatch::Slug, select)
    }

    pub fn facet_with<F>(mut self, name: &str, matching: FacetMatch, select: F) -> Self
    where
        F: Fn(&R) -> &str + Send + Sync + 'static,
    {
        self.facets
            .insert(name.to_string(), FacetSelector::new(matching, Box::new(select)));
        self
    }

    pub fn text_field_names(&self) -> impl Iterator<Item = &str> {
        self.text_fields.iter().map(|f| f.name.as_str())
    }

    pub fn facet_names(&self) -> impl Iterator<Item = &str> {
        self.facets.keys().map(String::as_str)
    }

    /// Read a facet value off a record, if the facet exists.
    pub fn facet_value<'r>(&self, name: &str, record: &'r R) -> Option<&'r str> {
        self.facets.get(name).map(|facet| facet.value(record))
    }

    /// Validate `spec` against the registered facets and prepare it for matching.
    ///
    /// Fails with [`GigbookError::UnknownFacet`] when the filter selects a value
    /// for a facet this engine has no selector for. Facets set to
    /// [`FacetChoice::All`] are never checked.
    pub fn compile<'e>(&'e self, spec: &FilterSpec) -> GigbookResult<CompiledFilter<'e, R>> {
        let facets = spec
            .active_facets()
            .map(|(name, value)| {
                self.facets
                    .get(name)
                    .map(|facet| (facet, facet.normalize(value)))
                    .ok_or_else(|| GigbookError::UnknownFacet(name.to_string()))
            })
            .collect::<GigbookResult<Vec<_>>>()?;

        let needle = (!spec.query.is_empty()).then(|| spec.query.to_lowercase());

        Ok(CompiledFilter {
            text_fields: &self.text_fields,
            needle,
            facets,
        })
    }

    /// Records matching `spec`, in input order.
    ///
    /// Accepts any iterator of record references, so a filtered result can
    /// be passed back in.
    pub fn filter<'r, I>(&self, records: I, spec: &FilterSpec) -> GigbookResult<Vec<&'r R>>
    where
        I: IntoIterator<Item = &'r R>,
        R: 'r,
    {
        let compiled = self.compile(spec)?;

        let mut total = 0usize;
        let matched: Vec<&R> = records
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|record| compiled.matches(record))
            .collect();

        debug!(
            target: "gigbook::query",
            total,
            matched = matched.len(),
            query = %spec.query,
            "Filtered records"
        );

        Ok(matched)
    }

    /// Number of records matching `spec`.
    pub fn count<'r, I>(&self, records: I, spec: &FilterSpec) -> GigbookResult<usize>
    where
        I: IntoIterator<Item = &'r R>,
        R: 'r,
    {
        let compiled = self.compile(spec)?;
        Ok(records.into_iter().filter(|r| compiled.matches(r)).count())
    }
}

impl<R> fmt::Debug for QueryEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("QueryEngine")
            .field("text_fields", &self.text_field_names().collect::<Vec<_>>())
            .field("facets", &self.facet_names().collect::<Vec<_>>())
            .finish()
    }
}

/// A [`FilterSpec`] checked against an engine, with the query and facet
/// values folded once up front.
pub struct CompiledFilter<'e, R> {
    text_fields: &'e [TextField<R>],
    needle: Option<String>,
    facets: Vec<(&'e FacetSelector<R>, String)>,
}

impl<R> CompiledFilter<'_, R> {
    pub fn matches(&self, record: &R) -> bool {
        self.matches_text(record) && self.matches_facets(record)
    }

    fn matches_text(&self, record: &R) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => self.text_fields.iter().any(|f| f.contains(record, needle)),
        }
    }

    fn matches_facets(&self, record: &R) -> bool {
        self.facets
            .iter()
            .all(|(facet, wanted)| facet.matches(record, wanted))
    }
}
