pub const APP_NAME: &str = "ribawheels";

pub const DEFAULT_PRODUCT_PATH: &str = "/product";
pub const DEFAULT_ORDER_PATH: &str = "/order";
pub const DEFAULT_LEGACY_SUMMARY_PATH: &str = "order-summary.html";

pub const CAR_NOT_FOUND: &str = "Car not found";
pub const ORDER_NOT_FOUND: &str = "Order data not found";

pub const PARAM_CAR: &str = "car";
pub const PARAM_CAR_KEY: &str = "carKey";
pub const PARAM_VALIDATOR_ID: &str = "validatorId";
pub const PARAM_CAR_NAME: &str = "carName";
pub const PARAM_CAR_PRICE: &str = "carPrice";
pub const PARAM_CAR_IMAGE: &str = "carImage";
pub const PARAM_VALIDATOR: &str = "validator";
