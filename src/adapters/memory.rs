use crate::core::pagination::{paginate, IndexedPage};
use crate::core::{CatalogItem, CatalogSource, Page};
use crate::domain::model::{ActivityType, Category};
use crate::utils::error::Result;
use crate::utils::validation::validate_price;
use async_trait::async_trait;
use std::time::Duration;

/// Static catalog served page by page, optionally with an artificial delay.
#[derive(Debug, Clone)]
pub struct MemorySource {
    items: Vec<CatalogItem>,
    latency: Duration,
}

impl MemorySource {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        for item in &items {
            validate_price(&format!("price of '{}'", item.id), item.price)?;
        }
        Ok(Self {
            items,
            latency: Duration::ZERO,
        })
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// 以頁碼取頁，不經過 offset 游標
    pub fn page(&self, page_index: usize, page_size: usize) -> IndexedPage<CatalogItem> {
        paginate(&self.items, page_index, page_size.max(1))
    }
}

#[async_trait]
impl CatalogSource for MemorySource {
    type Item = CatalogItem;

    async fn fetch_page(&self, offset: u64, limit: usize) -> Result<Page<CatalogItem>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let len = self.items.len();
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
        let end = start.saturating_add(limit.max(1)).min(len);

        Ok(Page {
            next_offset: (end < len).then_some(end as u64),
            items: self.items[start..end].to_vec(),
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn travel(
    id: &str,
    title: &str,
    location: &str,
    price: f64,
    original_price: Option<f64>,
    rating: f64,
    review_count: u32,
    duration: &str,
    group_size: &str,
    activity: ActivityType,
    category: Option<Category>,
    likes: u32,
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        price,
        original_price,
        rating,
        review_count,
        duration: duration.to_string(),
        group_size: group_size.to_string(),
        activity: activity.to_string(),
        category,
        likes,
        is_liked: false,
        img_url: format!("https://images.example.com/travels/{}.jpg", id),
    }
}

/// 內建的示範行程
pub fn sample_travels() -> Vec<CatalogItem> {
    use ActivityType::*;

    vec![
        travel("1", "Adventure in the Alps", "Switzerland", 1299.0, Some(1599.0), 4.8, 124, "7 days", "8-12 people", Adventure, Some(Category::Trekking4000mMinus), 89),
        travel("2", "Cultural Tour of Japan", "Tokyo", 2199.0, None, 4.9, 89, "10 days", "6-10 people", Cultural, Some(Category::TurismoCultura), 156),
        travel("3", "Tropical Paradise Escape", "Maldives", 3499.0, None, 4.7, 67, "5 days", "2-4 people", Relaxation, None, 234),
        travel("4", "Everest Base Camp Trek", "Nepal", 2450.0, Some(2790.0), 4.9, 211, "14 days", "8-12 people", Adventure, Some(Category::Trekking4000mPlus), 312),
        travel("5", "Heliski in the Caucasus", "Georgia", 4890.0, None, 4.6, 38, "7 days", "2-4 people", Adventure, Some(Category::SkiHeliski), 77),
        travel("6", "Sailing the Lofoten Islands", "Norway", 3150.0, None, 4.8, 54, "8 days", "6-10 people", Nature, Some(Category::NavegacionArtica), 140),
        travel("7", "Marrakech Medina Walks", "Morocco", 890.0, Some(990.0), 4.4, 172, "5 days", "8-12 people", Urban, Some(Category::TurismoCultura), 65),
        travel("8", "Patagonia Wild Trails", "Chile", 2890.0, None, 4.9, 98, "12 days", "6-10 people", Nature, Some(Category::Trekking), 201),
        travel("9", "Ice Climbing in Rjukan", "Norway", 1190.0, None, 4.5, 29, "4 days", "2-4 people", Adventure, Some(Category::EscaladaHielo), 41),
        travel("10", "Kyoto Temples & Tea", "Kyoto", 1890.0, None, 4.7, 143, "6 days", "6-10 people", Cultural, Some(Category::TurismoCultura), 118),
        travel("11", "Aconcagua Expedition", "Argentina", 5200.0, Some(5600.0), 4.8, 22, "20 days", "6-10 people", Adventure, Some(Category::AlpinismoExpedicion), 93),
        travel("12", "Dolomites Photo Week", "Italy", 1650.0, None, 4.6, 47, "7 days", "2-4 people", Nature, Some(Category::Fotografia), 58),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pagination::InfiniteCatalog;

    #[test]
    fn test_sample_travels_are_valid() {
        let travels = sample_travels();
        assert_eq!(travels.len(), 12);
        assert!(MemorySource::new(travels).is_ok());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut travels = sample_travels();
        travels[0].price = -1.0;
        assert!(MemorySource::new(travels).is_err());
    }

    #[tokio::test]
    async fn test_pages_of_eight() {
        let source = MemorySource::new(sample_travels()).unwrap();

        let first = source.fetch_page(0, 8).await.unwrap();
        assert_eq!(first.items.len(), 8);
        assert_eq!(first.next_offset, Some(8));

        let second = source.fetch_page(8, 8).await.unwrap();
        assert_eq!(second.items.len(), 4);
        assert_eq!(second.next_offset, None);
        assert_eq!(second.items[0].id, "9");
    }

    #[tokio::test]
    async fn test_unaligned_offset_starts_at_that_item() {
        let source = MemorySource::new(sample_travels()).unwrap();

        let page = source.fetch_page(3, 8).await.unwrap();
        let ids: Vec<&str> = page.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "5", "6", "7", "8", "9", "10", "11"]);
        assert_eq!(page.next_offset, Some(11));

        let tail = source.fetch_page(11, 8).await.unwrap();
        assert_eq!(tail.items.len(), 1);
        assert_eq!(tail.items[0].id, "12");
        assert_eq!(tail.next_offset, None);
    }

    #[test]
    fn test_page_number_view() {
        let source = MemorySource::new(sample_travels()).unwrap();

        let second = source.page(1, 8);
        assert_eq!(second.data.len(), 4);
        assert_eq!(second.data[0].id, "9");
        assert!(!second.has_more);
        assert_eq!(source.page(0, 8).next_page, Some(1));
    }

    #[tokio::test]
    async fn test_offset_past_the_end_is_empty() {
        let source = MemorySource::new(sample_travels()).unwrap();

        let page = source.fetch_page(u64::MAX, 8).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_offset, None);
    }

    #[tokio::test]
    async fn test_infinite_catalog_likes_across_pages() {
        let source = MemorySource::new(sample_travels())
            .unwrap()
            .with_latency(Duration::from_millis(1));
        let mut catalog = InfiniteCatalog::new(source);

        catalog.fetch_all().await.unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.page_count(), 2);

        assert_eq!(catalog.toggle_like("10"), Some(true));
        assert!(catalog.find("10").unwrap().is_liked);
        assert_eq!(catalog.toggle_like("nope"), None);
    }
}
