use crate::domain::constants::{
    PARAM_CAR, PARAM_CAR_IMAGE, PARAM_CAR_KEY, PARAM_CAR_NAME, PARAM_CAR_PRICE, PARAM_VALIDATOR,
    PARAM_VALIDATOR_ID,
};
use crate::domain::models::{LegacySummaryParams, NavigationState, NavigationTarget, Routes};
use url::{form_urlencoded, Url};

/// Anchor for relative page URLs such as `/product?car=..` or `?car=..`.
const PAGE_BASE: &str = "http://ribawheels.invalid/";

/// Decoded query string pairs, kept in the order they appeared.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Accepts a bare query (`a=b`), a leading `?`, or a whole path/URL.
    ///
    /// A bare query is decoded as-is, so a literal `?` inside a value stays
    /// part of that value.
    pub fn parse(raw: &str) -> QueryParams {
        let raw = raw.trim();
        let query = if looks_like_url(raw) {
            url_query(raw).unwrap_or_default()
        } else {
            raw.to_string()
        };
        QueryParams(
            form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        )
    }

    /// First value for `name`; later duplicates are ignored.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

impl NavigationState {
    pub fn from_detail_query(raw: &str) -> NavigationState {
        let q = QueryParams::parse(raw);
        NavigationState {
            vehicle_key: q.owned(PARAM_CAR),
            validator_id: None,
        }
    }

    pub fn from_order_query(raw: &str) -> NavigationState {
        let q = QueryParams::parse(raw);
        NavigationState {
            vehicle_key: q.owned(PARAM_CAR_KEY),
            validator_id: q.owned(PARAM_VALIDATOR_ID),
        }
    }

    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if let Some(key) = &self.vehicle_key {
            out.append_pair(PARAM_CAR_KEY, key);
        }
        if let Some(id) = &self.validator_id {
            out.append_pair(PARAM_VALIDATOR_ID, id);
        }
        out.finish()
    }

    pub fn into_order_target(self, routes: &Routes) -> NavigationTarget {
        NavigationTarget::Order {
            url: join_url(&routes.order, &self.to_query()),
            state: self,
        }
    }
}

impl LegacySummaryParams {
    pub fn from_query(raw: &str) -> LegacySummaryParams {
        let q = QueryParams::parse(raw);
        LegacySummaryParams {
            car_name: q.owned(PARAM_CAR_NAME),
            car_price: q.owned(PARAM_CAR_PRICE),
            car_image: q.owned(PARAM_CAR_IMAGE),
            validator: q.owned(PARAM_VALIDATOR),
        }
    }

    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (name, value) in [
            (PARAM_CAR_NAME, &self.car_name),
            (PARAM_CAR_PRICE, &self.car_price),
            (PARAM_CAR_IMAGE, &self.car_image),
            (PARAM_VALIDATOR, &self.validator),
        ] {
            if let Some(v) = value {
                out.append_pair(name, v);
            }
        }
        out.finish()
    }

    pub fn into_target(self, routes: &Routes) -> NavigationTarget {
        NavigationTarget::OrderSummary {
            url: join_url(&routes.legacy_summary, &self.to_query()),
            params: self,
        }
    }
}

pub fn product_url(routes: &Routes, key: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(PARAM_CAR, key)
        .finish();
    join_url(&routes.product, &query)
}

/// A path, an absolute URL, or anything whose first `?` comes before its
/// first `=` (`?a=b`, `order-summary.html?a=b`).
fn looks_like_url(raw: &str) -> bool {
    if raw.starts_with('/') || raw.contains("://") {
        return true;
    }
    match (raw.find('?'), raw.find('=')) {
        (Some(q), Some(eq)) => q < eq,
        (Some(_), None) => true,
        _ => false,
    }
}

fn url_query(raw: &str) -> Option<String> {
    let base = Url::parse(PAGE_BASE).ok()?;
    let url = Url::options().base_url(Some(&base)).parse(raw).ok()?;
    url.query().map(str::to_string)
}

fn join_url(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else if path.contains('?') {
        format!("{}&{}", path, query)
    } else {
        format!("{}?{}", path, query)
    }
}
