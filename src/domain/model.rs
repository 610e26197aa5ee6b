use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 旅遊行程卡片的資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub duration: String,
    #[serde(rename = "group_size")]
    pub group_size: String,
    pub activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub likes: u32,
    pub is_liked: bool,
    pub img_url: String,
}

/// Proxy 回傳給前端的商品格式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub img_url: String,
}

/// Raw `product.template` record as returned by `search_read`.
///
/// Odoo sends `false` for unset fields, so every optional column goes through
/// [`odoo_optional`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OdooProduct {
    pub id: i64,
    pub name: String,
    pub list_price: f64,
    #[serde(default, deserialize_with = "odoo_optional")]
    pub compare_list_price: Option<f64>,
    #[serde(default, deserialize_with = "odoo_optional")]
    pub x_studio_catalogofoto2: Option<String>,
    #[serde(default, deserialize_with = "odoo_optional")]
    pub x_studio_enlace_web: Option<String>,
}

impl From<OdooProduct> for ProductItem {
    fn from(p: OdooProduct) -> Self {
        Self {
            id: p.id,
            title: p.name,
            price: p.list_price,
            original_price: p.compare_list_price,
            img_url: p.x_studio_catalogofoto2.unwrap_or_default(),
        }
    }
}

/// 一頁資料；`next_offset` 為 `None` 代表已經是最後一頁
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub next_offset: Option<u64>,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.next_offset.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOption {
    #[serde(rename = "Best rated")]
    BestRated,
    #[serde(rename = "Lowest price")]
    LowestPrice,
    #[serde(rename = "Highest price")]
    HighestPrice,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [
        SortOption::BestRated,
        SortOption::LowestPrice,
        SortOption::HighestPrice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::BestRated => "Best rated",
            SortOption::LowestPrice => "Lowest price",
            SortOption::HighestPrice => "Highest price",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Adventure,
    Cultural,
    Relaxation,
    Nature,
    Urban,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Adventure => "adventure",
            ActivityType::Cultural => "cultural",
            ActivityType::Relaxation => "relaxation",
            ActivityType::Nature => "nature",
            ActivityType::Urban => "urban",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! categories {
    ($($variant:ident => $label:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Category {
            $(#[serde(rename = $label)] $variant,)+
        }

        impl Category {
            pub fn label(&self) -> &'static str {
                match self {
                    $(Category::$variant => $label,)+
                }
            }
        }
    };
}

categories! {
    Trekking => "TREKKING",
    Trekking4000mPlus => "Trekking >4.000m",
    Trekking4000mMinus => "Trekking <4.000m",
    TrekkingCultura => "Trekking & Cultura",
    Ski => "SKI",
    SkiMontana => "Ski Montaña",
    SkiFreeride => "Ski Freeride",
    SkiHeliski => "Ski Heliski",
    SkiSnowcat => "Ski Snowcat",
    SkiMotoNieve => "Ski Moto de nieve",
    SkiResortAlpino => "Ski Resort/Alpino",
    SkiVelero => "Ski & Velero",
    Alpinismo => "ALPINISMO",
    AlpinismoExpedicion => "Alpinismo Expedición",
    AlpinismoTecnico => "Alpinismo Técnico",
    AlpinismoNoTecnico => "Alpinismo no Técnico",
    Navegacion => "NAVEGACIÓN",
    NavegacionOceanica => "Navegación oceánica",
    NavegacionArtica => "Navegación ártica",
    NavegacionFamilia => "Navegación família y amigos",
    NavegacionSenderismo => "Navegación & senderismo",
    NavegacionEscalada => "Navegación & escalada",
    Turismo => "TURISMO",
    TurismoCultura => "Turismo & Cultura",
    TurismoNaturaleza => "Turismo & Naturaleza",
    TrailRunning => "TRAIL RUNNING",
    Fotografia => "FOTOGRAFÍA",
    Escalada => "ESCALADA",
    EscaladaRoca => "Escalada de roca",
    EscaladaHielo => "Escalada en hielo",
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OdooField<T> {
    Value(T),
    Unset(bool),
}

/// Odoo 以 `false` 表示空欄位，轉成 `None`
pub fn odoo_optional<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<OdooField<T>>::deserialize(deserializer)? {
        Some(OdooField::Value(value)) => Some(value),
        Some(OdooField::Unset(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_odoo_product_false_fields_become_none() {
        let product: OdooProduct = serde_json::from_value(json!({
            "id": 7,
            "name": "Trekking Annapurna",
            "list_price": 1850.0,
            "compare_list_price": false,
            "x_studio_catalogofoto2": false
        }))
        .unwrap();

        assert_eq!(product.compare_list_price, None);
        assert_eq!(product.x_studio_catalogofoto2, None);
        assert_eq!(product.x_studio_enlace_web, None);
    }

    #[test]
    fn test_product_item_mapping() {
        let product: OdooProduct = serde_json::from_value(json!({
            "id": 3,
            "name": "Ski Heliski Canada",
            "list_price": 4200.0,
            "compare_list_price": 4800.0,
            "x_studio_catalogofoto2": "https://cdn.example.com/heli.jpg"
        }))
        .unwrap();

        let item = ProductItem::from(product);
        assert_eq!(item.title, "Ski Heliski Canada");
        assert_eq!(item.original_price, Some(4800.0));
        assert_eq!(item.img_url, "https://cdn.example.com/heli.jpg");

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["originalPrice"], json!(4800.0));
        assert_eq!(value["imgUrl"], json!("https://cdn.example.com/heli.jpg"));
    }

    #[test]
    fn test_missing_image_maps_to_empty_string() {
        let product: OdooProduct = serde_json::from_value(json!({
            "id": 1,
            "name": "Gift card",
            "list_price": 50.0,
            "x_studio_catalogofoto2": false
        }))
        .unwrap();

        let item = ProductItem::from(product);
        assert_eq!(item.img_url, "");
        let value = serde_json::to_value(&item).unwrap();
        assert!(value["originalPrice"].is_null());
    }

    #[test]
    fn test_catalog_item_json_field_names() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": "1",
            "title": "Adventure in the Alps",
            "location": "Switzerland",
            "price": 1299,
            "originalPrice": 1599,
            "rating": 4.8,
            "reviewCount": 124,
            "duration": "7 days",
            "group_size": "8-12 people",
            "activity": "adventure",
            "category": "Trekking >4.000m",
            "likes": 89,
            "isLiked": false,
            "imgUrl": "test1.jpg"
        }))
        .unwrap();

        assert_eq!(item.original_price, Some(1599.0));
        assert_eq!(item.review_count, 124);
        assert_eq!(item.group_size, "8-12 people");
        assert_eq!(item.category, Some(Category::Trekking4000mPlus));
    }

    #[test]
    fn test_sort_option_labels() {
        assert_eq!(SortOption::from_label("best rated"), Some(SortOption::BestRated));
        assert_eq!(SortOption::from_label("Highest price"), Some(SortOption::HighestPrice));
        assert_eq!(SortOption::from_label("cheapest"), None);
        assert_eq!(
            serde_json::to_value(SortOption::LowestPrice).unwrap(),
            json!("Lowest price")
        );
    }

    #[test]
    fn test_page_envelope_shape() {
        let page = Page {
            next_offset: Some(8),
            items: vec![1, 2],
        };
        assert!(page.has_more());
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"nextOffset": 8, "items": [1, 2]})
        );
        let last = Page::<i32> {
            next_offset: None,
            items: vec![],
        };
        assert!(!last.has_more());
        assert_eq!(
            serde_json::to_value(&last).unwrap(),
            json!({"nextOffset": null, "items": []})
        );
    }
}
