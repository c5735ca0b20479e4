//! Facet selectors and their comparison modes.

/// How a facet's record value is compared with the selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacetMatch {
    /// Lowercased equality.
    #[default]
    CaseInsensitive,
    /// Slug equality: `"In Progress"`, `"in progress"` and `"in-progress"` are the same value.
    Slug,
}

impl FacetMatch {
    pub fn normalize(self, value: &str) -> String {
        match self {
            FacetMatch::CaseInsensitive => value.to_lowercase(),
            FacetMatch::Slug => slug::slugify(value),
        }
    }
}

pub(crate) struct FacetSelector<R> {
    matching: FacetMatch,
    select: Box<dyn Fn(&R) -> &str + Send + Sync>,
}

impl<R> FacetSelector<R> {
    pub(crate) fn new(matching: FacetMatch, select: Box<dyn Fn(&R) -> &str + Send + Sync>) -> Self {
        FacetSelector { matching, select }
    }

    pub(crate) fn value<'r>(&self, record: &'r R) -> &'r str {
        (self.select)(record)
    }

    pub(crate) fn normalize(&self, value: &str) -> String {
        self.matching.normalize(value)
    }

    /// `wanted` must already be normalized with this facet's mode.
    pub(crate) fn matches(&self, record: &R, wanted: &str) -> bool {
        self.normalize(self.value(record)) == wanted
    }
}
