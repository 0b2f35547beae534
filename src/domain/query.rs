use serde::Serialize;

/// Page sizes offered by the per-page selector.
pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Ordering applied to the remote ideas listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "-published_at")]
    NewestFirst,
    #[serde(rename = "published_at")]
    OldestFirst,
}

impl SortOrder {
    /// Wire value shared by the URL parameter and the remote API.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "-published_at",
            SortOrder::OldestFirst => "published_at",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "-published_at" => Some(SortOrder::NewestFirst),
            "published_at" => Some(SortOrder::OldestFirst),
            _ => None,
        }
    }
}

/// The (page, size, sort) triple mirrored in the URL query string.
///
/// The URL is the only persisted state for the ideas view. Every navigation
/// link and selector form writes all three parameters together, so the URL
/// never holds a partial combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub page: usize,
    pub size: usize,
    pub sort: SortOrder,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort: SortOrder::default(),
        }
    }
}

impl QueryState {
    /// Reads the query state from raw URL parameters.
    ///
    /// Absent or non-numeric `page`/`size` fall back to their defaults, as
    /// does a numeric size outside the selector options. `page` has no upper
    /// bound: a page beyond the last one yields an empty item set from the
    /// remote service rather than an error.
    pub fn from_params(page: Option<&str>, size: Option<&str>, sort: Option<&str>) -> Self {
        let page = page
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let size = size
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|s| PAGE_SIZES.contains(s))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let sort = sort.and_then(SortOrder::parse).unwrap_or_default();

        Self { page, size, sort }
    }

    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        let page = if page == 0 { 1 } else { page };
        Self { page, ..self }
    }

    /// Changing the page length invalidates the prior page index.
    #[must_use]
    pub fn with_size(self, size: usize) -> Self {
        let size = if PAGE_SIZES.contains(&size) {
            size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self { page: 1, size, ..self }
    }

    /// Changing the ordering invalidates the prior page index.
    #[must_use]
    pub fn with_sort(self, sort: SortOrder) -> Self {
        Self { page: 1, sort, ..self }
    }

    /// Serializes all three parameters together for link targets.
    pub fn query_string(&self) -> String {
        format!(
            "page={}&size={}&sort={}",
            self.page,
            self.size,
            self.sort.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_round_trip() {
        let state = QueryState::default()
            .with_sort(SortOrder::OldestFirst)
            .with_size(20)
            .with_page(4);

        assert_eq!(state.page, 4);
        assert_eq!(state.size, 20);
        assert_eq!(state.sort, SortOrder::OldestFirst);
        assert_eq!(state.query_string(), "page=4&size=20&sort=published_at");
    }

    #[test]
    fn changing_size_resets_page() {
        let state = QueryState::default().with_page(7).with_size(50);
        assert_eq!(state.page, 1);
        assert_eq!(state.size, 50);
    }

    #[test]
    fn changing_sort_resets_page() {
        let state = QueryState::default().with_page(7).with_sort(SortOrder::OldestFirst);
        assert_eq!(state.page, 1);
        assert_eq!(state.sort, SortOrder::OldestFirst);
    }

    #[test]
    fn from_params_defaults_on_missing_values() {
        let state = QueryState::from_params(None, None, None);
        assert_eq!(state, QueryState::default());
    }

    #[test]
    fn from_params_defaults_on_garbage() {
        let state = QueryState::from_params(Some("abc"), Some("-3"), Some("title"));
        assert_eq!(state.page, DEFAULT_PAGE);
        assert_eq!(state.size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.sort, SortOrder::NewestFirst);
    }

    #[test]
    fn from_params_rejects_unlisted_size() {
        let state = QueryState::from_params(Some("2"), Some("33"), Some("published_at"));
        assert_eq!(state.page, 2);
        assert_eq!(state.size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.sort, SortOrder::OldestFirst);
    }

    #[test]
    fn from_params_allows_out_of_range_page() {
        let state = QueryState::from_params(Some("9999"), Some("10"), None);
        assert_eq!(state.page, 9999);
    }

    #[test]
    fn page_zero_normalizes_to_one() {
        assert_eq!(QueryState::default().with_page(0).page, 1);
        assert_eq!(QueryState::from_params(Some("0"), None, None).page, 1);
    }
}
