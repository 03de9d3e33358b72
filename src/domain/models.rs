use crate::catalog::{CatalogEdition, ValidatorRecord};
use crate::domain::constants::{
    DEFAULT_LEGACY_SUMMARY_PATH, DEFAULT_ORDER_PATH, DEFAULT_PRODUCT_PATH,
};
use serde::{Deserialize, Serialize};

fn default_product_path() -> String {
    DEFAULT_PRODUCT_PATH.to_string()
}

fn default_order_path() -> String {
    DEFAULT_ORDER_PATH.to_string()
}

fn default_legacy_summary_path() -> String {
    DEFAULT_LEGACY_SUMMARY_PATH.to_string()
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub edition: Option<CatalogEdition>,
    #[serde(default)]
    pub catalog_file: Option<String>,
    #[serde(default)]
    pub routes: Routes,
}

/// Page paths used when building navigation targets.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Routes {
    #[serde(default = "default_product_path")]
    pub product: String,
    #[serde(default = "default_order_path")]
    pub order: String,
    #[serde(default = "default_legacy_summary_path")]
    pub legacy_summary: String,
}

impl Default for Routes {
    fn default() -> Self {
        Routes {
            product: default_product_path(),
            order: default_order_path(),
            legacy_summary: default_legacy_summary_path(),
        }
    }
}

/// Query parameters shared by the detail and order pages.
///
/// Every field is an untrusted optional string; nothing here is checked
/// against the catalog until a resolver looks it up.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub vehicle_key: Option<String>,
    pub validator_id: Option<String>,
}

/// Parameters of the older order-summary page, which carries the car's
/// display fields instead of its key.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct LegacySummaryParams {
    pub car_name: Option<String>,
    pub car_price: Option<String>,
    pub car_image: Option<String>,
    pub validator: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum NavigationTarget {
    Order {
        url: String,
        state: NavigationState,
    },
    OrderSummary {
        url: String,
        params: LegacySummaryParams,
    },
}

impl NavigationTarget {
    pub fn url(&self) -> &str {
        match self {
            NavigationTarget::Order { url, .. } | NavigationTarget::OrderSummary { url, .. } => url,
        }
    }
}

#[derive(Serialize, Clone)]
pub struct ListingItem {
    pub key: String,
    pub name: String,
    pub make: String,
    pub tagline: Option<String>,
    pub price: String,
    pub card_image: String,
    pub detail_url: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ThumbnailView {
    pub index: usize,
    pub src: String,
    pub active: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub preview: String,
    pub selected: usize,
    pub thumbnails: Vec<ThumbnailView>,
}

#[derive(Serialize, Clone)]
pub struct ValidatorOption {
    #[serde(flatten)]
    pub validator: ValidatorRecord,
    pub selected: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    Navigate { target: NavigationTarget },
    Rejected { error: String, message: String },
}

#[derive(Serialize)]
pub struct DetailView {
    pub key: String,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: String,
    pub gallery: GalleryView,
    pub validators: Vec<ValidatorOption>,
    pub selected_validator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<CheckoutOutcome>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailPage {
    Found(DetailView),
    NotFound {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        checkout: Option<CheckoutOutcome>,
    },
}

#[derive(Serialize, Clone)]
pub struct OrderCar {
    pub key: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

#[derive(Serialize, Clone)]
pub struct OrderView {
    pub car: OrderCar,
    pub validator: ValidatorRecord,
    pub total: String,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OrderPage {
    Found(OrderView),
    NotFound { message: String },
}

#[derive(Serialize, Clone, Default)]
pub struct LegacyValidator {
    pub id: String,
    pub name: String,
    pub image: String,
}

#[derive(Serialize, Clone, Default)]
pub struct LegacySummaryView {
    pub car_name: Option<String>,
    pub car_price: Option<String>,
    pub car_image: Option<String>,
    pub validator: Option<LegacyValidator>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StubReceipt {
    pub capability: String,
    pub implemented: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct StubPage {
    pub order: OrderPage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<StubReceipt>,
}

#[derive(Serialize)]
pub struct CatalogReport {
    pub name: String,
    pub source: String,
    pub vehicles: usize,
    pub validators: usize,
    pub status: String,
}

#[derive(Serialize)]
pub struct EffectiveConfig {
    pub config_path: String,
    pub config_file_present: bool,
    pub edition: CatalogEdition,
    pub catalog_file: Option<String>,
    pub routes: Routes,
}
