//! Forward/backward paging over fixed-size pages of indexer records.

use tracing::debug;

use crate::indexer::{Entity, EntityKind, EntityQuerySource, PAGE_SIZE};

/// Page cursor with a derived "has more" flag.
///
/// The indexer reports no totals, so a full page is taken to mean another
/// page may exist. When the remaining records exactly fill the last page this
/// over-predicts by one request; the empty page that follows clears the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    current_page: u64,
    has_more: bool,
    page_size: u64,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PageCursor {
    pub fn new(page_size: u64) -> Self {
        Self {
            current_page: 0,
            has_more: false,
            page_size,
        }
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    /// Back to the first page
    pub fn reset(&mut self) -> u64 {
        self.current_page = 0;
        self.has_more = false;
        self.current_page
    }

    /// Advances only when the last page was full
    pub fn next(&mut self) -> Option<u64> {
        if !self.has_more {
            return None;
        }
        self.current_page += 1;
        Some(self.current_page)
    }

    pub fn prev(&mut self) -> Option<u64> {
        if self.current_page == 0 {
            return None;
        }
        self.current_page -= 1;
        Some(self.current_page)
    }

    /// Records how many rows a page returned. Results for any page other
    /// than the current one are stale and ignored.
    pub fn record(&mut self, page: u64, len: usize) -> bool {
        if page != self.current_page {
            return false;
        }
        self.has_more = len as u64 == self.page_size;
        true
    }
}

/// A request for one page of a list
#[derive(Debug, Clone)]
pub struct PageRequest<T: Entity> {
    pub chain_id: String,
    pub page: u64,
    pub criteria: T::Criteria,
}

/// Rows fetched for one page request
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub chain_id: String,
    pub page: u64,
    pub rows: Vec<T>,
}

/// Paged listing of one entity kind, scoped to a chain
#[derive(Debug, Clone)]
pub struct PagedList<T: Entity> {
    chain_id: String,
    cursor: PageCursor,
    rows: Vec<T>,
    selected: usize,
    loading: bool,
}

impl<T: Entity> PagedList<T> {
    pub fn new(chain_id: &str) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            cursor: PageCursor::default(),
            rows: Vec::new(),
            selected: 0,
            loading: false,
        }
    }

    pub fn kind(&self) -> EntityKind {
        T::KIND
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&T> {
        self.rows.get(self.selected)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn request(&mut self, page: u64) -> PageRequest<T> {
        self.loading = true;
        PageRequest {
            chain_id: self.chain_id.clone(),
            page,
            criteria: T::page_criteria(&self.chain_id, page),
        }
    }

    /// First page, used on mount
    pub fn start(&mut self) -> PageRequest<T> {
        let page = self.cursor.reset();
        self.request(page)
    }

    /// Re-scopes to another chain. Returns the reload request when the chain
    /// actually changed.
    pub fn set_chain(&mut self, chain_id: &str) -> Option<PageRequest<T>> {
        if self.chain_id == chain_id {
            return None;
        }
        self.chain_id = chain_id.to_string();
        self.rows.clear();
        self.selected = 0;
        Some(self.start())
    }

    pub fn next_page(&mut self) -> Option<PageRequest<T>> {
        if self.loading {
            return None;
        }
        let page = self.cursor.next()?;
        Some(self.request(page))
    }

    pub fn prev_page(&mut self) -> Option<PageRequest<T>> {
        if self.loading {
            return None;
        }
        let page = self.cursor.prev()?;
        Some(self.request(page))
    }

    /// Applies a fetched page; pages for another chain or page are stale
    pub fn apply(&mut self, page: u64, rows: Vec<T>) -> bool {
        if !self.loading || !self.cursor.record(page, rows.len()) {
            debug!(kind = T::KIND.path(), page, "discarding stale page");
            return false;
        }
        self.rows = rows;
        self.selected = 0;
        self.loading = false;
        true
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Applies a page result, checking it belongs to this list's chain
    pub fn apply_result(&mut self, result: PageResult<T>) -> bool {
        if result.chain_id != self.chain_id {
            debug!(kind = T::KIND.path(), chain = %result.chain_id, "discarding page for other chain");
            return false;
        }
        self.apply(result.page, result.rows)
    }
}

/// Runs one page request against a source
pub async fn load_page<T, S>(source: &S, request: PageRequest<T>) -> PageResult<T>
where
    T: Entity,
    S: EntityQuerySource<T>,
{
    let rows = source.fetch_entities(&request.criteria).await;
    PageResult {
        chain_id: request.chain_id,
        page: request.page,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::{Block, QueryCriteria};

    fn blocks(n: usize) -> Vec<Block> {
        (0..n)
            .map(|i| Block {
                block_number: i as u64,
                ..Default::default()
            })
            .collect()
    }

    // ==================== PageCursor ====================

    #[test]
    fn test_full_page_sets_has_more() {
        let mut cursor = PageCursor::default();
        assert!(cursor.record(0, 25));
        assert!(cursor.has_more());
    }

    #[test]
    fn test_short_page_clears_has_more() {
        let mut cursor = PageCursor::default();
        cursor.record(0, 24);
        assert!(!cursor.has_more());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.current_page(), 0);
    }

    #[test]
    fn test_empty_next_page_clears_over_prediction() {
        let mut cursor = PageCursor::default();
        cursor.record(0, 25);
        assert_eq!(cursor.next(), Some(1));
        cursor.record(1, 0);
        assert!(!cursor.has_more());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_prev_stops_at_zero() {
        let mut cursor = PageCursor::default();
        assert_eq!(cursor.prev(), None);
        cursor.record(0, 25);
        cursor.next();
        assert_eq!(cursor.prev(), Some(0));
        assert_eq!(cursor.prev(), None);
    }

    #[test]
    fn test_stale_page_is_ignored() {
        let mut cursor = PageCursor::default();
        cursor.record(0, 25);
        cursor.next();
        assert!(!cursor.record(0, 3));
        assert!(cursor.has_more());
    }

    // ==================== PagedList ====================

    #[test]
    fn test_start_requests_first_page() {
        let mut list = PagedList::<Block>::new("1");
        let request = list.start();
        assert_eq!(request.page, 0);
        assert_eq!(
            request.criteria.to_query(),
            "latest=true&page_idx=0&chain_id=1&limit=25"
        );
        assert!(list.is_loading());
    }

    #[test]
    fn test_next_and_prev_pages() {
        let mut list = PagedList::<Block>::new("1");
        let first = list.start();
        list.apply(first.page, blocks(25));

        let second = list.next_page().unwrap();
        assert_eq!(second.page, 1);
        assert!(second.criteria.to_query().contains("page_idx=1"));
        // No double-advance while a page is in flight
        assert!(list.next_page().is_none());

        list.apply(1, blocks(10));
        assert!(!list.cursor().has_more());
        assert!(list.next_page().is_none());

        let back = list.prev_page().unwrap();
        assert_eq!(back.page, 0);
    }

    #[test]
    fn test_chain_change_resets_to_first_page() {
        let mut list = PagedList::<Block>::new("1");
        let first = list.start();
        list.apply(first.page, blocks(25));
        let _ = list.next_page();
        list.apply(1, blocks(25));

        assert!(list.set_chain("1").is_none());
        let request = list.set_chain("2").unwrap();
        assert_eq!(request.page, 0);
        assert!(request.criteria.to_query().contains("chain_id=2"));
        assert!(list.rows().is_empty());
        assert_eq!(list.cursor().current_page(), 0);
    }

    #[test]
    fn test_row_selection_is_clamped() {
        let mut list = PagedList::<Block>::new("1");
        let first = list.start();
        list.apply(first.page, blocks(2));
        list.select_prev();
        assert_eq!(list.selected(), 0);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), 1);
        assert_eq!(list.selected_row().unwrap().block_number, 1);
    }

    #[test]
    fn test_page_for_other_chain_is_discarded() {
        let mut list = PagedList::<Block>::new("1");
        let _ = list.start();
        let request = list.set_chain("2");
        assert!(request.is_some());

        let stale = PageResult {
            chain_id: "1".to_string(),
            page: 0,
            rows: blocks(3),
        };
        assert!(!list.apply_result(stale));
        assert!(list.is_loading());

        let fresh = PageResult {
            chain_id: "2".to_string(),
            page: 0,
            rows: blocks(3),
        };
        assert!(list.apply_result(fresh));
        assert_eq!(list.rows().len(), 3);
    }

    struct FixedSource(usize);

    impl EntityQuerySource<Block> for FixedSource {
        async fn fetch_entities(&self, _criteria: &<Block as Entity>::Criteria) -> Vec<Block> {
            blocks(self.0)
        }
    }

    #[tokio::test]
    async fn test_load_page_carries_request_tags() {
        let mut list = PagedList::<Block>::new("7");
        let request = list.start();
        let result = load_page(&FixedSource(25), request).await;
        assert_eq!(result.chain_id, "7");
        assert_eq!(result.page, 0);
        assert!(list.apply_result(result));
        assert!(list.cursor().has_more());
    }
}
