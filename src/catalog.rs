use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub name: String,
    pub vehicles: Vec<VehicleRecord>,
    #[serde(default)]
    pub validators: Vec<ValidatorRecord>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VehicleRecord {
    pub key: String,
    #[serde(default)]
    pub make: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Display price, already formatted with its currency symbol.
    pub price: String,
    /// Gallery images; the first one is the default preview.
    pub images: Vec<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub card_image: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ValidatorRecord {
    pub id: String,
    pub name: String,
    pub status: ValidatorStatus,
    pub stars: u8,
    pub validations: u32,
    pub success_rate: String,
    pub image: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorStatus {
    Online,
    Offline,
}

impl std::fmt::Display for ValidatorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidatorStatus::Online => f.write_str("Online"),
            ValidatorStatus::Offline => f.write_str("Offline"),
        }
    }
}

/// Which of the two compiled-in datasets to serve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatalogEdition {
    /// Single-page app data (root-relative asset paths).
    #[default]
    App,
    /// Static-page data (relative asset paths, extra Land Cruiser listing).
    Static,
}

/// Price brackets offered by the listing search form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PriceRange {
    #[value(name = "under-20k")]
    Under20k,
    #[value(name = "20k-50k")]
    From20kTo50k,
    #[value(name = "over-50k")]
    Over50k,
}

impl PriceRange {
    pub fn contains(self, dollars: u64) -> bool {
        match self {
            PriceRange::Under20k => dollars < 20_000,
            PriceRange::From20kTo50k => (20_000..=50_000).contains(&dollars),
            PriceRange::Over50k => dollars > 50_000,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DiscoverFilter<'a> {
    pub make: Option<&'a str>,
    /// Matched against the display name, so "GLE" finds "Mercedes GLE53".
    pub model: Option<&'a str>,
    pub price_range: Option<PriceRange>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("duplicate vehicle key: {0}")]
    DuplicateVehicle(String),
    #[error("duplicate validator id: {0}")]
    DuplicateValidator(String),
    #[error("vehicle has no images: {0}")]
    EmptyGallery(String),
    #[error("validator {id} has {stars} stars (expected 1..=5)")]
    StarsOutOfRange { id: String, stars: u8 },
}

impl Catalog {
    pub fn builtin(edition: CatalogEdition) -> Catalog {
        let (name, vehicles, asset_root) = match edition {
            CatalogEdition::App => ("ribawheels", APP_VEHICLES, "/images"),
            CatalogEdition::Static => ("ribawheels-static", STATIC_VEHICLES, "images"),
        };
        Catalog {
            name: name.to_string(),
            vehicles: vehicles.iter().map(VehicleSeed::to_record).collect(),
            validators: VALIDATORS
                .iter()
                .map(|v| v.to_record(asset_root))
                .collect(),
        }
    }

    pub fn vehicle(&self, key: &str) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.key == key)
    }

    pub fn validator(&self, id: &str) -> Option<&ValidatorRecord> {
        self.validators.iter().find(|v| v.id == id)
    }
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&raw)?;
    if let Err(e) = validate(&catalog) {
        tracing::warn!(path = %path.display(), error = %e, "catalog file rejected");
        return Err(e);
    }
    tracing::info!(
        path = %path.display(),
        vehicles = catalog.vehicles.len(),
        validators = catalog.validators.len(),
        "loaded catalog file"
    );
    Ok(catalog)
}

/// Keeps only the digits of a formatted price, so "$ 69,390" reads as 69390.
pub fn price_in_dollars(price: &str) -> Option<u64> {
    let digits: String = price
        .split('.')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

pub fn discover<'a>(
    c: &'a Catalog,
    query: Option<&str>,
    filter: &DiscoverFilter<'_>,
) -> Vec<&'a VehicleRecord> {
    let q = query.map(|q| q.to_ascii_lowercase());
    c.vehicles
        .iter()
        .filter(|v| match &q {
            None => true,
            Some(q) => [&v.key, &v.name, &v.description, &v.make]
                .iter()
                .any(|field| field.to_ascii_lowercase().contains(q.as_str())),
        })
        .filter(|v| {
            filter
                .make
                .map(|m| v.make.eq_ignore_ascii_case(m))
                .unwrap_or(true)
        })
        .filter(|v| {
            filter
                .model
                .map(|m| v.name.to_ascii_lowercase().contains(&m.to_ascii_lowercase()))
                .unwrap_or(true)
        })
        .filter(|v| match filter.price_range {
            None => true,
            Some(range) => price_in_dollars(&v.price)
                .map(|p| range.contains(p))
                .unwrap_or(false),
        })
        .collect()
}

pub fn validate(c: &Catalog) -> anyhow::Result<()> {
    let mut keys = HashSet::new();
    for v in &c.vehicles {
        if !keys.insert(&v.key) {
            return Err(CatalogError::DuplicateVehicle(v.key.clone()).into());
        }
        if v.images.is_empty() {
            return Err(CatalogError::EmptyGallery(v.key.clone()).into());
        }
    }
    let mut ids = HashSet::new();
    for v in &c.validators {
        if !ids.insert(&v.id) {
            return Err(CatalogError::DuplicateValidator(v.id.clone()).into());
        }
        if !(1..=5).contains(&v.stars) {
            return Err(CatalogError::StarsOutOfRange {
                id: v.id.clone(),
                stars: v.stars,
            }
            .into());
        }
    }
    Ok(())
}

struct VehicleSeed {
    key: &'static str,
    make: &'static str,
    name: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    price: &'static str,
    images: &'static [&'static str],
    tagline: Option<&'static str>,
    card_image: Option<&'static str>,
}

impl VehicleSeed {
    fn to_record(&self) -> VehicleRecord {
        VehicleRecord {
            key: self.key.to_string(),
            make: self.make.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            price: self.price.to_string(),
            images: self.images.iter().map(|i| i.to_string()).collect(),
            tagline: self.tagline.map(str::to_string),
            card_image: self.card_image.map(str::to_string),
        }
    }
}

struct ValidatorSeed {
    id: &'static str,
    status: ValidatorStatus,
    stars: u8,
    validations: u32,
    success_rate: &'static str,
    image_file: &'static str,
}

impl ValidatorSeed {
    fn to_record(&self, asset_root: &str) -> ValidatorRecord {
        let n = self.id.trim_start_matches("validator");
        ValidatorRecord {
            id: self.id.to_string(),
            name: format!("Validator {}", n),
            status: self.status,
            stars: self.stars,
            validations: self.validations,
            success_rate: self.success_rate.to_string(),
            image: format!("{}/validators/{}", asset_root, self.image_file),
        }
    }
}

const GLE53_FEATURES: &[&str] = &[
    "Sporty exterior design with AMG styling",
    "3.0L turbo inline-6 engine",
    "Advanced safety features including lane assist",
    "Luxury interior with premium materials",
    "High-resolution infotainment system",
];

const BMW_M4_FEATURES: &[&str] = &[
    "Aggressive coupe styling",
    "3.0L twin-turbo inline-6 engine",
    "High-performance brakes and suspension",
    "Driver-focused cockpit",
    "Apple CarPlay and Android Auto",
];

const RANGE_ROVER_FEATURES: &[&str] = &[
    "Bold and modern exterior design",
    "Refined cabin with premium leather",
    "All-terrain 4x4 capabilities",
    "Panoramic sunroof and ambient lighting",
    "InControl infotainment system",
];

const LAND_CRUISER_FEATURES: &[&str] = &[
    "Rugged 4x4 capability",
    "8-passenger seating",
    "V8 power and superior towing",
    "Toyota Safety Sense",
    "Navigation and entertainment suite",
];

const GLE53_DESCRIPTION: &str = "Experience a perfect blend of luxury and performance.";
const BMW_M4_DESCRIPTION: &str = "Track-ready power with street-ready comfort.";
const RANGE_ROVER_DESCRIPTION: &str = "Command the road with elegance and dominance.";

const APP_VEHICLES: &[VehicleSeed] = &[
    VehicleSeed {
        key: "gle53",
        make: "Mercedes",
        name: "Mercedes GLE53",
        description: GLE53_DESCRIPTION,
        features: GLE53_FEATURES,
        price: "$75,000",
        images: &[
            "/images/products/gle1.jpg",
            "/images/products/gle2.jpg",
            "/images/products/gle3.jpg",
            "/images/products/gle4.jpg",
        ],
        tagline: Some("Nigeria used: 10,000 Milage"),
        card_image: Some("/images/car1.png"),
    },
    VehicleSeed {
        key: "bmwM4",
        make: "BMW",
        name: "BMW M4",
        description: BMW_M4_DESCRIPTION,
        features: BMW_M4_FEATURES,
        price: "$28,000",
        images: &[
            "/images/products/bmw1.jpeg",
            "/images/products/bmw2.jpeg",
            "/images/products/bmw3.jpeg",
            "/images/products/bmw4.jpeg",
        ],
        tagline: Some("London Used : 25,490 Milage"),
        card_image: Some("/images/car2.jpg"),
    },
    VehicleSeed {
        key: "rangeRover",
        make: "Land Rover",
        name: "Range Rover",
        description: RANGE_ROVER_DESCRIPTION,
        features: RANGE_ROVER_FEATURES,
        price: "$32,000",
        images: &[
            "/images/products/range1.jpg",
            "/images/products/range2.jpg",
            "/images/products/range3.jpg",
            "/images/products/range4.jpg",
        ],
        tagline: Some("London Used : 25,490 Milage"),
        card_image: Some("/images/car3.png"),
    },
];

const STATIC_VEHICLES: &[VehicleSeed] = &[
    VehicleSeed {
        key: "gle53",
        make: "Mercedes",
        name: "Mercedes GLE53",
        description: GLE53_DESCRIPTION,
        features: GLE53_FEATURES,
        price: "$97,855",
        images: &[
            "images/products/gle1.jpg",
            "images/products/gle2.jpg",
            "images/products/gle3.jpg",
            "images/products/gle4.jpg",
        ],
        tagline: None,
        card_image: None,
    },
    VehicleSeed {
        key: "bmwM4",
        make: "BMW",
        name: "BMW M4",
        description: BMW_M4_DESCRIPTION,
        features: BMW_M4_FEATURES,
        price: "$48,000",
        images: &[
            "images/products/bmw1.jpeg",
            "images/products/bmw2.jpeg",
            "images/products/bmw3.jpeg",
            "images/products/bmw4.jpeg",
        ],
        tagline: None,
        card_image: None,
    },
    VehicleSeed {
        key: "rangeRover",
        make: "Land Rover",
        name: "Range Rover",
        description: RANGE_ROVER_DESCRIPTION,
        features: RANGE_ROVER_FEATURES,
        price: "$49,980",
        images: &[
            "images/products/range1.jpg",
            "images/products/range2.jpg",
            "images/products/range3.jpg",
            "images/products/range4.jpg",
        ],
        tagline: None,
        card_image: None,
    },
    VehicleSeed {
        key: "landCruiser",
        make: "Toyota",
        name: "Toyota Land Cruiser",
        description: "A symbol of durability and off-road power.",
        features: LAND_CRUISER_FEATURES,
        price: "$ 69,390",
        images: &[
            "images/products/cruiser1.jpg",
            "images/products/cruiser2.jpg",
            "images/products/cruiser3.jpg",
            "images/products/cruiser4.jpg",
        ],
        tagline: None,
        card_image: None,
    },
];

const VALIDATORS: &[ValidatorSeed] = &[
    ValidatorSeed {
        id: "validator1",
        status: ValidatorStatus::Online,
        stars: 2,
        validations: 867,
        success_rate: "94.6%",
        image_file: "validator1.jpg",
    },
    ValidatorSeed {
        id: "validator2",
        status: ValidatorStatus::Online,
        stars: 3,
        validations: 1600,
        success_rate: "96.7%",
        image_file: "validator2.jpg",
    },
    ValidatorSeed {
        id: "validator3",
        status: ValidatorStatus::Online,
        stars: 3,
        validations: 1107,
        success_rate: "96.9%",
        image_file: "validator3.png",
    },
    ValidatorSeed {
        id: "validator4",
        status: ValidatorStatus::Online,
        stars: 2,
        validations: 2715,
        success_rate: "96.5%",
        image_file: "validator4.png",
    },
    ValidatorSeed {
        id: "validator5",
        status: ValidatorStatus::Offline,
        stars: 4,
        validations: 1092,
        success_rate: "93.3%",
        image_file: "validator5.png",
    },
    ValidatorSeed {
        id: "validator6",
        status: ValidatorStatus::Offline,
        stars: 2,
        validations: 308,
        success_rate: "91.1%",
        image_file: "validator6.png",
    },
    ValidatorSeed {
        id: "validator7",
        status: ValidatorStatus::Offline,
        stars: 2,
        validations: 1839,
        success_rate: "98.1%",
        image_file: "validator7.png",
    },
];
