use crate::{response::Meta, store::PageRequest};

/// Raw query string as ordered key/value pairs. Decoding this never fails,
/// so repeated or malformed keys cannot reject the request.
pub type QueryPairs = Vec<(String, String)>;

/// Upper bound for both the window size and the offset; the database
/// binds LIMIT and OFFSET as signed 64-bit integers.
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// Raw `page` / `per_page` query values. Parsing is permissive: anything
/// that is not a positive integer falls back to the default.
#[derive(Debug, Default)]
pub struct Pagination {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub per_page: u64,
}

impl Pagination {
    /// The first occurrence of each key wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            per_page: first_value(pairs, "per_page"),
        }
    }

    pub fn normalize(&self, default_per_page: u64) -> PageWindow {
        let page = parse_positive(self.page.as_deref()).unwrap_or(1);
        let per_page = parse_positive(self.per_page.as_deref())
            .unwrap_or(default_per_page)
            .min(MAX_WINDOW);
        PageWindow { page, per_page }
    }

    /// Whether the caller sent a `page` parameter at all.
    pub fn page_requested(&self) -> bool {
        self.page.is_some()
    }
}

impl PageWindow {
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page).min(MAX_WINDOW)
    }

    pub fn request(&self) -> PageRequest {
        PageRequest {
            limit: self.per_page,
            offset: self.offset(),
        }
    }

    pub fn meta(&self, total: u64) -> Meta {
        Meta::new(self.page, self.per_page, total)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|v| *v > 0)
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

#[derive(Debug, Default)]
pub struct OrderListQuery {
    pub pagination: Pagination,
    pub status: Option<String>,
}

impl OrderListQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            pagination: Pagination::from_pairs(pairs),
            status: first_value(pairs, "status"),
        }
    }
}
