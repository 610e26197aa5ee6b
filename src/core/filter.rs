use crate::domain::model::{CatalogItem, SortOption};
use crate::domain::ports::Listing;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 篩選條件；空的清單代表不限制
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub activity: Vec<String>,
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub duration: Vec<String>,
    #[serde(default)]
    pub group_size: Vec<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub sort: Option<SortOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Activity,
    Location,
    Duration,
    GroupSize,
    Category,
}

impl Filters {
    pub fn values(&self, kind: FilterKind) -> &[String] {
        match kind {
            FilterKind::Activity => &self.activity,
            FilterKind::Location => &self.location,
            FilterKind::Duration => &self.duration,
            FilterKind::GroupSize => &self.group_size,
            FilterKind::Category => &self.category,
        }
    }

    fn values_mut(&mut self, kind: FilterKind) -> &mut Vec<String> {
        match kind {
            FilterKind::Activity => &mut self.activity,
            FilterKind::Location => &mut self.location,
            FilterKind::Duration => &mut self.duration,
            FilterKind::GroupSize => &mut self.group_size,
            FilterKind::Category => &mut self.category,
        }
    }

    /// Check or uncheck one value of a multi-select filter.
    pub fn toggle(&mut self, kind: FilterKind, value: &str, checked: bool) {
        let values = self.values_mut(kind);
        if checked {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        } else {
            values.retain(|v| v != value);
        }
    }

    pub fn clear(&mut self) {
        *self = Filters::default();
    }

    pub fn has_active(&self) -> bool {
        !self.activity.is_empty()
            || !self.location.is_empty()
            || !self.duration.is_empty()
            || !self.group_size.is_empty()
            || !self.category.is_empty()
            || self.sort.is_some()
    }

    fn accepts(&self, item: &CatalogItem) -> bool {
        matches_any(&self.activity, &item.activity)
            && matches_any(&self.location, &item.location)
            && matches_any(&self.duration, &item.duration)
            && matches_any(&self.group_size, &item.group_size)
            && (self.category.is_empty()
                || item
                    .category
                    .is_some_and(|c| self.category.iter().any(|v| v == c.label())))
    }
}

fn matches_any(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|v| v == value)
}

fn matches_search(item: &CatalogItem, query: &str) -> bool {
    item.title.to_lowercase().contains(query) || item.location.to_lowercase().contains(query)
}

/// 搜尋 + 多重篩選 + 排序，回傳新的檢視，不改動原始資料
pub fn filter_items<'a>(
    items: &'a [CatalogItem],
    search_query: &str,
    filters: &Filters,
) -> Vec<&'a CatalogItem> {
    let query = search_query.to_lowercase();

    let mut filtered: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| matches_search(item, &query) && filters.accepts(item))
        .collect();

    // sort_by 為穩定排序，同分時維持原順序
    match filters.sort {
        Some(SortOption::BestRated) => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        Some(SortOption::LowestPrice) => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Some(SortOption::HighestPrice) => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        None => {}
    }

    filtered
}

/// Product variant search: title only, blank query keeps everything.
pub fn search_by_title<'a, T: Listing>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.title().to_lowercase().contains(&query))
        .collect()
}

/// Distinct values offered by the filter menu, sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub activities: Vec<String>,
    pub locations: Vec<String>,
    pub durations: Vec<String>,
    pub group_sizes: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterOptions {
    pub fn from_items(items: &[CatalogItem]) -> Self {
        fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
            values
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        }

        Self {
            activities: distinct(items.iter().map(|i| i.activity.as_str())),
            locations: distinct(items.iter().map(|i| i.location.as_str())),
            durations: distinct(items.iter().map(|i| i.duration.as_str())),
            group_sizes: distinct(items.iter().map(|i| i.group_size.as_str())),
            categories: distinct(items.iter().filter_map(|i| i.category.map(|c| c.label()))),
        }
    }
}
