use crate::*;

pub fn handle_page_commands(cli: &Cli, settings: &Settings, catalog: &Catalog) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Browse {
            query,
            make,
            model,
            price_range,
        } => {
            let filter = DiscoverFilter {
                make: make.as_deref(),
                model: model.as_deref(),
                price_range: *price_range,
            };
            let items = listing(catalog, query.as_deref(), &filter, &settings.routes);
            print_out(cli.json, &items, |i| {
                format!("{}\t{}\t{}\t{}", i.key, i.name, i.price, i.detail_url)
            })?;
        }
        Commands::Product {
            query,
            clicks,
            validators,
            checkout,
            legacy,
        } => {
            let mut page = ProductPage::load(catalog, query);
            for index in clicks {
                page.click_thumbnail(*index)?;
            }
            for id in validators {
                page.select_validator(id)?;
            }
            if *checkout {
                let style = if *legacy {
                    CheckoutStyle::LegacySummary
                } else {
                    CheckoutStyle::Order
                };
                page.checkout(style, &settings.routes).ok();
            }
            if page.vehicle().is_none() {
                tracing::debug!(query = %query, "detail page has no vehicle");
            }
            print_one(cli.json, page.view(), render_detail_text)?;
        }
        Commands::Order { query } => {
            print_one(cli.json, order_page(catalog, query), render_order_text)?;
        }
        Commands::Summary { query } => {
            print_one(
                cli.json,
                legacy_summary_page(catalog, query),
                render_summary_text,
            )?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

fn stars(n: u8) -> String {
    "⭐".repeat(n as usize)
}

fn render_checkout_text(outcome: &CheckoutOutcome) -> String {
    match outcome {
        CheckoutOutcome::Navigate { target } => format!("checkout: {}", target.url()),
        CheckoutOutcome::Rejected { message, .. } => format!("alert: {}", message),
    }
}

fn render_detail_text(page: &DetailPage) -> String {
    let view = match page {
        DetailPage::NotFound { message, checkout } => {
            let mut lines = vec![message.clone()];
            lines.extend(checkout.iter().map(render_checkout_text));
            return lines.join("\n");
        }
        DetailPage::Found(view) => view,
    };

    let mut lines = vec![
        format!("name: {}", view.name),
        format!("description: {}", view.description),
        "features:".to_string(),
    ];
    lines.extend(view.features.iter().map(|f| format!("- {}", f)));
    lines.push(format!("price: {}", view.price));
    lines.push(format!("preview: {}", view.gallery.preview));
    for t in &view.gallery.thumbnails {
        let marker = if t.active { "*" } else { " " };
        lines.push(format!("[{}] {} {}", marker, t.index, t.src));
    }
    lines.push("validators:".to_string());
    for o in &view.validators {
        let marker = if o.selected { "x" } else { " " };
        let v = &o.validator;
        lines.push(format!(
            "({}) {}\t{}\t{}\t{}\tvalidations: {}\tsuccess rate: {}",
            marker,
            v.id,
            v.name,
            v.status,
            stars(v.stars),
            v.validations,
            v.success_rate
        ));
    }
    lines.extend(view.checkout.iter().map(render_checkout_text));
    lines.join("\n")
}

fn render_order_text(page: &OrderPage) -> String {
    let order = match page {
        OrderPage::NotFound { message } => return message.clone(),
        OrderPage::Found(order) => order,
    };
    let v = &order.validator;
    [
        "Order Summary".to_string(),
        format!("car: {}", order.car.name),
        format!("description: {}", order.car.description),
        format!("price: {}", order.car.price),
        format!("image: {}", order.car.image),
        format!("validator: {} ({})", v.name, v.status),
        format!(
            "rating: {} {} validations • {} success rate",
            stars(v.stars),
            v.validations,
            v.success_rate
        ),
        format!("total: {}", order.total),
    ]
    .join("\n")
}

fn render_summary_text(view: &LegacySummaryView) -> String {
    let mut lines = Vec::new();
    if let Some(name) = &view.car_name {
        lines.push(format!("car: {}", name));
    }
    if let Some(price) = &view.car_price {
        lines.push(format!("price: {}", price));
    }
    if let Some(image) = &view.car_image {
        lines.push(format!("image: {}", image));
    }
    if let Some(v) = &view.validator {
        lines.push(format!("validator: {}", v.name));
        lines.push(format!("validator image: {}", v.image));
    }
    lines.join("\n")
}
