use crate::core::catalog;
use crate::domain::model::{CatalogItem, Page};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

pub const ITEMS_PER_PAGE: usize = 8;

/// 以頁碼切片（模擬 API 用）
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPage<T> {
    pub data: Vec<T>,
    pub next_page: Option<usize>,
    pub has_more: bool,
}

pub fn paginate<T: Clone>(items: &[T], page_index: usize, page_size: usize) -> IndexedPage<T> {
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    let has_more = page_index.saturating_mul(page_size).saturating_add(page_size) < items.len();

    IndexedPage {
        data: items[start..end].to_vec(),
        next_page: has_more.then_some(page_index + 1),
        has_more,
    }
}

/// Cursor rule of the proxy: a short page is the last one. An offset that
/// would overflow also ends the sequence.
pub fn next_offset(offset: u64, limit: usize, returned: usize) -> Option<u64> {
    if returned < limit {
        None
    } else {
        offset.checked_add(returned as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Exhausted,
    Failed,
}

/// Accumulates pages from a [`CatalogSource`] as the user scrolls.
pub struct InfiniteCatalog<S: CatalogSource> {
    source: S,
    page_size: usize,
    pages: Vec<Vec<S::Item>>,
    next_offset: Option<u64>,
    status: FetchStatus,
}

impl<S: CatalogSource> InfiniteCatalog<S> {
    pub fn new(source: S) -> Self {
        Self::with_page_size(source, ITEMS_PER_PAGE)
    }

    pub fn with_page_size(source: S, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            pages: Vec::new(),
            next_offset: Some(0),
            status: FetchStatus::Idle,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_offset.is_some()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Vec<S::Item>] {
        &self.pages
    }

    /// 依頁面順序攤平
    pub fn items(&self) -> impl Iterator<Item = &S::Item> {
        self.pages.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the page at the current cursor. Returns `false` when the end was
    /// already reached.
    pub async fn fetch_next_page(&mut self) -> Result<bool> {
        let Some(offset) = self.next_offset else {
            return Ok(false);
        };

        tracing::debug!("Fetching page at offset {} (limit {})", offset, self.page_size);
        let page: Page<S::Item> = match self.source.fetch_page(offset, self.page_size).await {
            Ok(page) => page,
            Err(e) => {
                // 保留已載入的頁面與游標，下次從同一個 offset 重試
                self.status = FetchStatus::Failed;
                tracing::warn!("Page fetch at offset {} failed: {}", offset, e);
                return Err(e);
            }
        };

        tracing::debug!(
            "Received {} items, next offset {:?}",
            page.items.len(),
            page.next_offset
        );
        self.status = if page.has_more() {
            FetchStatus::Idle
        } else {
            FetchStatus::Exhausted
        };
        self.next_offset = page.next_offset;
        self.pages.push(page.items);
        Ok(true)
    }

    /// The end-of-list sentinel scrolled into view.
    pub async fn on_sentinel_visible(&mut self) -> Result<bool> {
        if !self.has_next_page() {
            return Ok(false);
        }
        self.fetch_next_page().await
    }

    /// 載入所有剩餘頁面
    pub async fn fetch_all(&mut self) -> Result<usize> {
        while self.fetch_next_page().await? {}
        Ok(self.len())
    }
}

impl<S: CatalogSource<Item = CatalogItem>> InfiniteCatalog<S> {
    pub fn toggle_like(&mut self, id: &str) -> Option<bool> {
        self.pages
            .iter_mut()
            .find_map(|page| catalog::toggle_like(page, id))
    }

    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items().find(|item| item.id == id)
    }
}
