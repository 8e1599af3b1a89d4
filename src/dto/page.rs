use serde::{Deserialize, Serialize};

/// Server-side page of a listing. Page numbers are zero-indexed. The admin
/// endpoints historically spell the index/size fields differently, so both
/// spellings are accepted on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    #[serde(alias = "pageSize")]
    pub size: i64,
    #[serde(alias = "currentPage")]
    pub number: i64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.number + 1 >= self.total_pages
    }
}

/// Paging parameters shared by every paged listing.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    pub(crate) fn to_query(self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ]
    }
}
