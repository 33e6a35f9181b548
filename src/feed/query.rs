//! Feed query parameters

/// Active filter/search parameters for a feed fetch
///
/// The server does the filtering; the client only forwards the terms. Empty
/// fields are omitted from the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    /// Free-text search term
    pub search: Option<String>,
    /// Restrict to clips carrying this tag
    pub tag: Option<String>,
    /// Restrict to clips by this creator
    pub creator: Option<String>,
}

impl FeedQuery {
    /// An unfiltered query
    pub fn all() -> Self {
        Self::default()
    }

    /// Set the search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = non_empty(term.into());
        self
    }

    /// Set the tag filter
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = non_empty(tag.into());
        self
    }

    /// Set the creator filter
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = non_empty(creator.into());
        self
    }

    /// Whether no filter is active
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.tag.is_none() && self.creator.is_none()
    }

    /// Query pairs for the fetch request, non-empty fields only
    pub fn to_query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(ref term) = self.search {
            pairs.push(("search", term.as_str()));
        }
        if let Some(ref tag) = self.tag {
            pairs.push(("tag", tag.as_str()));
        }
        if let Some(ref creator) = self.creator {
            pairs.push(("creator", creator.as_str()));
        }
        pairs
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
