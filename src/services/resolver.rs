use crate::catalog::{Catalog, ValidatorRecord, VehicleRecord};
use crate::domain::models::{LegacySummaryParams, NavigationState};

/// Looks up the records a page's query string points at.
///
/// Every key is resolved on its own; a miss is an ordinary `None`.
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

/// Outcome of resolving an order page query. Both records or neither.
pub struct ResolvedOrder<'a> {
    pub vehicle: &'a VehicleRecord,
    pub validator: &'a ValidatorRecord,
}

pub struct ResolvedLegacySummary<'a> {
    pub params: LegacySummaryParams,
    pub validator: Option<&'a ValidatorRecord>,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Resolver { catalog }
    }

    pub fn vehicle(&self, state: &NavigationState) -> Option<&'a VehicleRecord> {
        let key = state.vehicle_key.as_deref()?;
        let found = self.catalog.vehicle(key);
        if found.is_none() {
            tracing::debug!(key, "vehicle key did not resolve");
        }
        found
    }

    pub fn validator(&self, state: &NavigationState) -> Option<&'a ValidatorRecord> {
        let id = state.validator_id.as_deref()?;
        let found = self.catalog.validator(id);
        if found.is_none() {
            tracing::debug!(id, "validator id did not resolve");
        }
        found
    }

    pub fn resolve_detail(&self, query: &str) -> (NavigationState, Option<&'a VehicleRecord>) {
        let state = NavigationState::from_detail_query(query);
        let vehicle = self.vehicle(&state);
        (state, vehicle)
    }

    /// The order page renders nothing unless both keys resolve.
    pub fn resolve_order(&self, query: &str) -> Option<ResolvedOrder<'a>> {
        let state = NavigationState::from_order_query(query);
        let vehicle = self.vehicle(&state);
        let validator = self.validator(&state);
        match (vehicle, validator) {
            (Some(vehicle), Some(validator)) => Some(ResolvedOrder {
                vehicle,
                validator,
            }),
            _ => None,
        }
    }

    pub fn resolve_legacy_summary(&self, query: &str) -> ResolvedLegacySummary<'a> {
        let params = LegacySummaryParams::from_query(query);
        let validator = params
            .validator
            .as_deref()
            .and_then(|id| self.catalog.validator(id));
        ResolvedLegacySummary { params, validator }
    }
}
