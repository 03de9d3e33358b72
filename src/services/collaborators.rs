//! Downstream screens the marketplace hands off to but does not implement.
//!
//! Payment, wallet connection and shipment validation are capabilities the
//! order flow may call. `PlaceholderDesk` answers every call with a receipt
//! marked `implemented: false`.

use crate::domain::models::{OrderView, StubReceipt};

pub trait PaymentGateway {
    fn initiate_payment(&self, order: &OrderView) -> anyhow::Result<StubReceipt>;
}

pub trait WalletConnector {
    fn connect_wallet(&self) -> anyhow::Result<StubReceipt>;
}

pub trait ValidationDesk {
    fn confirm_validation(&self, order: &OrderView) -> anyhow::Result<StubReceipt>;
}

pub const PAYMENT_PLACEHOLDER: &str = "Payment functionality would be implemented here";
pub const WALLET_PLACEHOLDER: &str = "Wallet connection would be implemented here";
pub const VALIDATION_PLACEHOLDER: &str = "Validation confirmation would be implemented here";

#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderDesk;

fn placeholder(capability: &str, message: &str) -> StubReceipt {
    tracing::info!(capability, "placeholder collaborator called");
    StubReceipt {
        capability: capability.to_string(),
        implemented: false,
        message: message.to_string(),
    }
}

impl PaymentGateway for PlaceholderDesk {
    fn initiate_payment(&self, order: &OrderView) -> anyhow::Result<StubReceipt> {
        tracing::debug!(car = %order.car.key, total = %order.total, "payment requested");
        Ok(placeholder("payment", PAYMENT_PLACEHOLDER))
    }
}

impl WalletConnector for PlaceholderDesk {
    fn connect_wallet(&self) -> anyhow::Result<StubReceipt> {
        Ok(placeholder("wallet", WALLET_PLACEHOLDER))
    }
}

impl ValidationDesk for PlaceholderDesk {
    fn confirm_validation(&self, order: &OrderView) -> anyhow::Result<StubReceipt> {
        tracing::debug!(validator = %order.validator.id, "validation requested");
        Ok(placeholder("validation", VALIDATION_PLACEHOLDER))
    }
}
