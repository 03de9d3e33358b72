use crate::catalog::{Catalog, VehicleRecord};
use crate::domain::models::{LegacySummaryParams, NavigationState, NavigationTarget, Routes};

/// Checkout refusals. The `Display` text is what the user is shown.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Please select a validator before checkout")]
    MissingSelection,
    #[error("Car details not loaded yet. Please try again.")]
    VehicleNotLoaded,
    #[error("unknown validator: {0}")]
    UnknownValidator(String),
}

impl CheckoutError {
    pub fn kind(&self) -> &'static str {
        match self {
            CheckoutError::MissingSelection => "missing_selection",
            CheckoutError::VehicleNotLoaded => "vehicle_not_loaded",
            CheckoutError::UnknownValidator(_) => "unknown_validator",
        }
    }
}

/// Where checkout sends the buyer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckoutStyle {
    /// `/order?carKey=..&validatorId=..`
    #[default]
    Order,
    /// `order-summary.html?carName=..&carPrice=..&carImage=..&validator=..`
    LegacySummary,
}

/// Radio-group selection: at most one validator, last write wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> Result<(), CheckoutError> {
        if catalog.validator(id).is_none() {
            return Err(CheckoutError::UnknownValidator(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

pub fn checkout(
    selection: &SelectionState,
    vehicle: Option<&VehicleRecord>,
    style: CheckoutStyle,
    routes: &Routes,
) -> Result<NavigationTarget, CheckoutError> {
    let validator_id = selection.selected().ok_or(CheckoutError::MissingSelection)?;
    let vehicle = vehicle.ok_or(CheckoutError::VehicleNotLoaded)?;

    let target = match style {
        CheckoutStyle::Order => NavigationState {
            vehicle_key: Some(vehicle.key.clone()),
            validator_id: Some(validator_id.to_string()),
        }
        .into_order_target(routes),
        CheckoutStyle::LegacySummary => LegacySummaryParams {
            car_name: Some(vehicle.name.clone()),
            car_price: Some(vehicle.price.clone()),
            car_image: Some(vehicle.images.first().cloned().unwrap_or_default()),
            validator: Some(validator_id.to_string()),
        }
        .into_target(routes),
    };
    tracing::info!(
        vehicle = %vehicle.key,
        validator = validator_id,
        url = target.url(),
        "checkout accepted"
    );
    Ok(target)
}
