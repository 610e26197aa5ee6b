use crate::domain::model::CatalogItem;
use crate::domain::ports::Listing;

/// 切換收藏狀態，回傳新狀態；找不到 id 時回傳 `None`
pub fn toggle_like(items: &mut [CatalogItem], id: &str) -> Option<bool> {
    let item = items.iter_mut().find(|item| item.id == id)?;
    item.is_liked = !item.is_liked;
    tracing::debug!("Item {} liked: {}", item.id, item.is_liked);
    Some(item.is_liked)
}

pub fn find_item<'a, T: Listing>(items: &'a [T], key: &str) -> Option<&'a T> {
    items.iter().find(|item| item.key() == key)
}

pub fn favorites(items: &[CatalogItem]) -> impl Iterator<Item = &CatalogItem> {
    items.iter().filter(|item| item.is_liked)
}
