use crate::*;

pub fn handle_catalog_commands(
    cli: &Cli,
    settings: &Settings,
    catalog: &Catalog,
    source: &str,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Validators => {
            let options = validator_options(catalog, None);
            print_out(cli.json, &options, |o| {
                let v = &o.validator;
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    v.id, v.name, v.status, v.validations, v.success_rate
                )
            })?;
        }
        Commands::Validate => {
            catalog::validate(catalog)?;
            let report = CatalogReport {
                name: catalog.name.clone(),
                source: source.to_string(),
                vehicles: catalog.vehicles.len(),
                validators: catalog.validators.len(),
                status: "valid".to_string(),
            };
            print_one(cli.json, report, |r| {
                format!(
                    "catalog valid ({}: {} vehicles, {} validators)",
                    r.source, r.vehicles, r.validators
                )
            })?;
        }
        Commands::Config => {
            print_one(cli.json, effective_config(settings), |c| {
                format!(
                    "config: {}{}\nedition: {:?}\ncatalog_file: {}\nproduct: {}\norder: {}\nlegacy_summary: {}",
                    c.config_path,
                    if c.config_file_present { "" } else { " (absent)" },
                    c.edition,
                    c.catalog_file.as_deref().unwrap_or("-"),
                    c.routes.product,
                    c.routes.order,
                    c.routes.legacy_summary
                )
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

pub fn handle_collaborator_commands(
    cli: &Cli,
    catalog: &Catalog,
    desk: &PlaceholderDesk,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Pay { query } => {
            let page = stub_page(catalog, query, |order| desk.initiate_payment(order))?;
            print_one(cli.json, page, render_stub_text)?;
        }
        Commands::ConfirmValidation { query } => {
            let page = stub_page(catalog, query, |order| desk.confirm_validation(order))?;
            print_one(cli.json, page, render_stub_text)?;
        }
        Commands::ConnectWallet => {
            let receipt = desk.connect_wallet()?;
            print_one(cli.json, receipt, |r| r.message.clone())?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

/// The collaborator only runs when the order page itself resolves.
fn stub_page(
    catalog: &Catalog,
    query: &str,
    call: impl FnOnce(&OrderView) -> anyhow::Result<StubReceipt>,
) -> anyhow::Result<StubPage> {
    let order = order_page(catalog, query);
    let receipt = match &order {
        OrderPage::Found(view) => Some(call(view)?),
        OrderPage::NotFound { .. } => None,
    };
    Ok(StubPage { order, receipt })
}

fn render_stub_text(page: &StubPage) -> String {
    match (&page.order, &page.receipt) {
        (OrderPage::NotFound { message }, _) => message.clone(),
        (OrderPage::Found(order), Some(receipt)) => {
            format!("{} ({} for {})", receipt.message, order.total, order.car.name)
        }
        (OrderPage::Found(_), None) => String::new(),
    }
}
