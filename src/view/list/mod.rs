//! Client-side list projection.
//!
//! A list page keeps the last fetched collection untouched and derives the visible page
//! from it on every render: search & categorical filter, optional date ordering, then
//! pagination. Nothing here mutates the collection.

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};

/// Text fields matched by the search box.
pub trait Searchable {
    fn name(&self) -> &str;

    /// Secondary text, `None` when the entity has none
    fn description(&self) -> Option<&str>;
}

/// Entities ordered by a point in time.
pub trait Dated {
    fn date(&self) -> DateTime<Utc>;
}

/// Resource-specific categorical predicate.
pub trait CategoryFilter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Case-insensitive substring match against name or description.
///
/// An empty query matches everything; a missing description never matches.
pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();

    item.name().to_lowercase().contains(&query)
        || item
            .description()
            .is_some_and(|description| description.to_lowercase().contains(&query))
}

/// Keeps the entities matching both the search query and the categorical filter.
pub fn apply_filters<'a, T, F>(collection: &'a [T], query: &str, filter: &F) -> Vec<&'a T>
where
    T: Searchable,
    F: CategoryFilter<T>,
{
    collection
        .iter()
        .filter(|item| matches_query(*item, query) && filter.matches(*item))
        .collect()
}

/// Stable sort, most recent first.
pub fn sort_by_date_desc<T: Dated>(items: &mut [&T]) {
    items.sort_by(|a, b| b.date().cmp(&a.date()));
}

/// One page of a filtered list.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number this page was cut at
    pub page: usize,
    /// Always at least 1, even for an empty list
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The pagination control is only rendered when there is more than one page
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

/// Cuts page `page` (1-based) of `page_size` items out of `ordered`.
///
/// A page size of 0 is treated as 1 and page 0 as page 1. Pages past the end are empty.
pub fn paginate<T: Clone>(ordered: &[T], page_size: usize, page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total_pages = ordered.len().div_ceil(page_size).max(1);

    let items = ordered
        .iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        page,
        total_pages,
    }
}

/// User-controlled list parameters.
///
/// Changing the query or the filter always returns to page 1; changing the page leaves
/// query and filter untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<F> {
    query: String,
    filter: F,
    page: usize,
    page_size: usize,
}

impl<F> ListState<F> {
    pub fn new(filter: F, page_size: usize) -> Self {
        Self {
            query: String::new(),
            filter,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 1;
    }

    /// Modifies part of a composite filter in place.
    pub fn update_filter(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.filter);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Current page of `collection` in collection order.
    pub fn view<'a, T>(&self, collection: &'a [T]) -> Page<&'a T>
    where
        T: Searchable,
        F: CategoryFilter<T>,
    {
        let filtered = apply_filters(collection, &self.query, &self.filter);

        paginate(&filtered, self.page_size, self.page)
    }

    /// Current page of `collection`, most recent first.
    pub fn view_by_date_desc<'a, T>(&self, collection: &'a [T]) -> Page<&'a T>
    where
        T: Searchable + Dated,
        F: CategoryFilter<T>,
    {
        let mut filtered = apply_filters(collection, &self.query, &self.filter);
        sort_by_date_desc(&mut filtered);

        paginate(&filtered, self.page_size, self.page)
    }
}
