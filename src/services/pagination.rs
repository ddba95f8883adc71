use crate::db::SortOrder;
use crate::models::PaginatedResponse;

pub const PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub order: SortOrder,
}

impl PageRequest {
    /// Pages are 1-based; a missing or zero page means the first one.
    pub fn new(page: Option<u32>, order: SortOrder) -> Self {
        Self {
            page: page.filter(|page| *page >= 1).unwrap_or(1),
            order,
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(PAGE_SIZE)
    }

    /// Wraps one page of items. An empty page is still a successful page.
    pub fn respond<T>(&self, data: Vec<T>, count: u64) -> PaginatedResponse<T> {
        PaginatedResponse {
            data,
            total_pages: count.div_ceil(u64::from(PAGE_SIZE)),
            curr_page: self.page,
            count,
            limit: PAGE_SIZE,
        }
    }

    /// Cuts this page out of an already filtered, already ordered set.
    pub fn slice<T>(&self, items: Vec<T>) -> PaginatedResponse<T> {
        let count = items.len() as u64;
        let data = items
            .into_iter()
            .skip(self.offset() as usize)
            .take(PAGE_SIZE as usize)
            .collect();
        self.respond(data, count)
    }
}
