use super::model::{Category, ListingItem};

/// The single active predicate narrowing the listing. Free-text search and
/// tag selection are mutually exclusive by construction; there is no hidden
/// "current filter" state anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    Query(String),
    Category(Category),
    Region(String),
}

impl Filter {
    /// Build a filter from the listing query string: a tag wins over a
    /// pending text query, and the `all` sentinel (or nothing) means
    /// unfiltered.
    pub fn from_params(filter: Option<&str>, query: Option<&str>) -> Filter {
        match filter {
            Some("all") | None => match query {
                Some(q) if !q.trim().is_empty() => Filter::Query(q.trim().to_string()),
                _ => Filter::All,
            },
            Some(tag) => match Category::from_slug(tag) {
                Some(category) => Filter::Category(category),
                None => Filter::Region(tag.to_string()),
            },
        }
    }

    pub fn matches(&self, item: &ListingItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Query(q) => {
                let needle = q.to_lowercase();
                contains(&item.title, &needle)
                    || contains(&item.summary_text, &needle)
                    || item
                        .address
                        .as_deref()
                        .map(|a| contains(a, &needle))
                        .unwrap_or(false)
            }
            Filter::Category(category) => item.category == *category,
            Filter::Region(region) => item.region.as_deref() == Some(region.as_str()),
        }
    }

    pub fn apply<'a>(&self, items: &'a [ListingItem]) -> Vec<&'a ListingItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}
