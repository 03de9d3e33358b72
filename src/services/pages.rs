use crate::catalog::{discover, Catalog, DiscoverFilter, ValidatorRecord, VehicleRecord};
use crate::domain::constants::{CAR_NOT_FOUND, ORDER_NOT_FOUND};
use crate::domain::models::{
    CheckoutOutcome, DetailPage, DetailView, LegacySummaryView, LegacyValidator, ListingItem,
    NavigationTarget, OrderCar, OrderPage, OrderView, Routes, ValidatorOption,
};
use crate::services::gallery::{self, GalleryError, GalleryState};
use crate::services::navigation::product_url;
use crate::services::resolver::Resolver;
use crate::services::selection::{checkout, CheckoutError, CheckoutStyle, SelectionState};

pub fn listing(
    catalog: &Catalog,
    query: Option<&str>,
    filter: &DiscoverFilter<'_>,
    routes: &Routes,
) -> Vec<ListingItem> {
    discover(catalog, query, filter)
        .into_iter()
        .map(|v| ListingItem {
            key: v.key.clone(),
            name: v.name.clone(),
            make: v.make.clone(),
            tagline: v.tagline.clone(),
            price: v.price.clone(),
            card_image: v
                .card_image
                .clone()
                .or_else(|| v.images.first().cloned())
                .unwrap_or_default(),
            detail_url: product_url(routes, &v.key),
        })
        .collect()
}

pub fn validator_options(catalog: &Catalog, selected: Option<&str>) -> Vec<ValidatorOption> {
    catalog
        .validators
        .iter()
        .map(|v| ValidatorOption {
            validator: v.clone(),
            selected: selected == Some(v.id.as_str()),
        })
        .collect()
}

/// Detail page for one vehicle: gallery, validator radio group, checkout.
///
/// State lives only as long as the page; navigating away drops it.
pub struct ProductPage<'a> {
    catalog: &'a Catalog,
    vehicle: Option<&'a VehicleRecord>,
    gallery: Option<GalleryState>,
    selection: SelectionState,
    checkout: Option<CheckoutOutcome>,
}

impl<'a> ProductPage<'a> {
    pub fn load(catalog: &'a Catalog, query: &str) -> Self {
        let (_, vehicle) = Resolver::new(catalog).resolve_detail(query);
        ProductPage {
            catalog,
            vehicle,
            gallery: vehicle.map(|v| GalleryState::new(v.images.len())),
            selection: SelectionState::default(),
            checkout: None,
        }
    }

    pub fn vehicle(&self) -> Option<&'a VehicleRecord> {
        self.vehicle
    }

    pub fn click_thumbnail(&mut self, index: usize) -> Result<(), GalleryError> {
        match self.gallery.as_mut() {
            Some(g) => g.click(index),
            None => {
                tracing::debug!(index, "thumbnail click ignored, no vehicle loaded");
                Ok(())
            }
        }
    }

    pub fn select_validator(&mut self, id: &str) -> Result<(), CheckoutError> {
        self.selection.select(self.catalog, id)
    }

    /// Runs checkout and remembers the outcome for the rendered view.
    pub fn checkout(
        &mut self,
        style: CheckoutStyle,
        routes: &Routes,
    ) -> Result<NavigationTarget, CheckoutError> {
        let result = checkout(&self.selection, self.vehicle, style, routes);
        self.checkout = Some(match &result {
            Ok(target) => CheckoutOutcome::Navigate {
                target: target.clone(),
            },
            Err(e) => {
                tracing::info!(reason = e.kind(), "checkout rejected");
                CheckoutOutcome::Rejected {
                    error: e.kind().to_string(),
                    message: e.to_string(),
                }
            }
        });
        result
    }

    pub fn view(&self) -> DetailPage {
        let (Some(vehicle), Some(state)) = (self.vehicle, self.gallery.as_ref()) else {
            return DetailPage::NotFound {
                message: CAR_NOT_FOUND.to_string(),
                checkout: self.checkout.clone(),
            };
        };
        let selected = self.selection.selected();
        DetailPage::Found(DetailView {
            key: vehicle.key.clone(),
            name: vehicle.name.clone(),
            description: vehicle.description.clone(),
            features: vehicle.features.clone(),
            price: vehicle.price.clone(),
            gallery: gallery::render(state, &vehicle.images),
            validators: validator_options(self.catalog, selected),
            selected_validator: selected.map(str::to_string),
            checkout: self.checkout.clone(),
        })
    }
}

pub fn order_view(vehicle: &VehicleRecord, validator: &ValidatorRecord) -> OrderView {
    OrderView {
        car: OrderCar {
            key: vehicle.key.clone(),
            name: vehicle.name.clone(),
            description: vehicle.description.clone(),
            price: vehicle.price.clone(),
            image: vehicle.images.first().cloned().unwrap_or_default(),
        },
        validator: validator.clone(),
        total: vehicle.price.clone(),
    }
}

pub fn order_page(catalog: &Catalog, query: &str) -> OrderPage {
    match Resolver::new(catalog).resolve_order(query) {
        Some(order) => OrderPage::Found(order_view(order.vehicle, order.validator)),
        None => OrderPage::NotFound {
            message: ORDER_NOT_FOUND.to_string(),
        },
    }
}

/// Fields of the older summary page render one by one; empty values count
/// as absent.
pub fn legacy_summary_page(catalog: &Catalog, query: &str) -> LegacySummaryView {
    let resolved = Resolver::new(catalog).resolve_legacy_summary(query);
    let present = |v: Option<String>| v.filter(|s| !s.is_empty());
    LegacySummaryView {
        car_name: present(resolved.params.car_name),
        car_price: present(resolved.params.car_price),
        car_image: present(resolved.params.car_image),
        validator: resolved.validator.map(|v| LegacyValidator {
            id: v.id.clone(),
            name: v.name.clone(),
            image: v.image.clone(),
        }),
    }
}
