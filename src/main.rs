use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod domain;
mod logging;
mod services;

use catalog::{Catalog, DiscoverFilter};
use cli::{Cli, Commands};
use commands::{handle_catalog_commands, handle_collaborator_commands, handle_page_commands};
use domain::models::{
    CatalogReport, CheckoutOutcome, DetailPage, LegacySummaryView, OrderPage, OrderView,
    StubPage, StubReceipt,
};
use logging::Verbosity;
use services::collaborators::{PaymentGateway, PlaceholderDesk, ValidationDesk, WalletConnector};
use services::output::{print_one, print_out};
use services::pages::{legacy_summary_page, listing, order_page, validator_options, ProductPage};
use services::selection::CheckoutStyle;
use services::settings::{effective_config, load_settings, open_catalog, Settings};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let settings = load_settings(cli.edition, cli.catalog.as_deref())?;
    let (catalog, source) = open_catalog(&settings)?;
    tracing::debug!(
        source = %source,
        vehicles = catalog.vehicles.len(),
        validators = catalog.validators.len(),
        "catalog ready"
    );

    if handle_page_commands(&cli, &settings, &catalog)? {
        return Ok(());
    }
    if handle_catalog_commands(&cli, &settings, &catalog, &source)? {
        return Ok(());
    }
    handle_collaborator_commands(&cli, &catalog, &PlaceholderDesk)?;
    Ok(())
}
