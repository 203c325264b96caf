use serde::{Deserialize, Serialize};

/// Pagination and ordering parameters for a list query.
///
/// This is an immutable value: advancing through a collection means asking a
/// returned [`Page`] for the next options rather than mutating these in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOptions {
    /// Maximum number of items per page. Unset means the server default,
    /// which returns all remaining items in one page.
    pub limit: Option<usize>,
    /// Number of items to skip from the start of the ordered collection.
    pub offset: usize,
    /// `true` returns newest-first, `false` oldest-first.
    pub descending: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            limit: None,
            offset: 0,
            descending: true,
        }
    }
}

impl FindOptions {
    /// Options with the given page size, starting at offset 0, newest-first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Render as query parameters. `limit` is omitted when unset so the
    /// server default applies.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query.push(("offset", self.offset.to_string()));
        query.push(("descending", self.descending.to_string()));
        query
    }
}

/// One page of a list query, along with the options that produced it.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    find_options: FindOptions,
}

impl<T> Page<T> {
    pub(crate) fn new(items: Vec<T>, find_options: FindOptions) -> Self {
        Self {
            items,
            find_options,
        }
    }

    /// Options for the next page, or `None` when this page signals the end
    /// of the collection.
    ///
    /// A page shorter than the requested limit (including an empty one)
    /// means the collection is exhausted. A page exactly as long as the
    /// limit yields next options even when the collection happens to end
    /// here; the caller discovers exhaustion on the following empty page.
    /// When no limit was requested the whole collection arrived at once and
    /// there is never a next page.
    pub fn next_page(&self) -> Option<FindOptions> {
        match self.find_options.limit {
            Some(limit) if self.items.len() == limit => Some(FindOptions {
                offset: self.find_options.offset + self.items.len(),
                ..self.find_options
            }),
            _ => None,
        }
    }

    /// The options this page was fetched with.
    pub fn find_options(&self) -> &FindOptions {
        &self.find_options
    }
}
