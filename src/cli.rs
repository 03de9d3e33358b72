use crate::catalog::{CatalogEdition, PriceRange};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ribawheels", version, about = "RibaWheels car marketplace CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog JSON file to serve instead of the built-in data"
    )]
    pub catalog: Option<String>,
    #[arg(
        long,
        global = true,
        value_enum,
        help = "Built-in dataset to serve (default: app)"
    )]
    pub edition: Option<CatalogEdition>,
    #[arg(short, long, global = true, help = "Debug-level logs on stderr")]
    pub verbose: bool,
    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Featured cars listing.
    Browse {
        query: Option<String>,
        #[arg(long)]
        make: Option<String>,
        #[arg(long, help = "Model name fragment, e.g. GLE")]
        model: Option<String>,
        #[arg(long, value_enum)]
        price_range: Option<PriceRange>,
    },
    /// Product detail page for `car=<key>`.
    Product {
        /// Page query string or URL, e.g. `car=gle53` or `/product?car=gle53`.
        query: String,
        #[arg(long = "click", value_name = "INDEX", help = "Click a thumbnail (repeatable)")]
        clicks: Vec<usize>,
        #[arg(
            long = "validator",
            value_name = "ID",
            help = "Pick a validator (repeatable, last one wins)"
        )]
        validators: Vec<String>,
        #[arg(long, default_value_t = false)]
        checkout: bool,
        #[arg(
            long,
            default_value_t = false,
            help = "Check out to the order-summary page instead of the order page"
        )]
        legacy: bool,
    },
    /// Order page for `carKey=<key>&validatorId=<id>`.
    Order {
        query: String,
    },
    /// Order-summary page for `carName`, `carPrice`, `carImage`, `validator`.
    Summary {
        query: String,
    },
    Validators,
    Validate,
    /// Make Payment on an order page.
    Pay {
        query: String,
    },
    ConnectWallet,
    ConfirmValidation {
        query: String,
    },
    Config,
}
