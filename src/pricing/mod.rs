mod catalog;
mod zone;

pub use catalog::{builtin_catalog, ZoneCatalog, ZoneCatalogError};
pub use zone::{Demand, Trend, ZonePriceProfile};

use serde::{Deserialize, Serialize};

/// Bounds of the listing-price slider, in whole currency units per month.
/// The slider enforces these; [`suggest`] itself accepts any value.
pub const PRICE_SLIDER_MIN: f64 = 50.0;
pub const PRICE_SLIDER_MAX: f64 = 300.0;
pub const PRICE_SLIDER_STEP: f64 = 10.0;

/// Suggested monthly price for a listing: the midpoint between what the
/// owner asks and what the zone historically fetches, rounded half away from
/// zero to a whole amount.
///
/// Out-of-range input is not rejected here; a non-finite input propagates
/// into the result.
pub fn suggest(desired_price: f64, zone: &ZonePriceProfile) -> f64 {
    ((desired_price + zone.average_price) / 2.0).round()
}

/// A suggestion bundled with the zone labels the caller renders next to it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PriceSuggestion {
    pub zone: String,
    pub suggested_price: f64,
    pub demand: Demand,
    pub trend: Trend,
}

/// [`suggest`], carrying the zone's demand and trend through unchanged so a
/// price widget can show them alongside the number.
pub fn suggest_for_zone(desired_price: f64, zone: &ZonePriceProfile) -> PriceSuggestion {
    PriceSuggestion {
        zone: zone.name.clone(),
        suggested_price: suggest(desired_price, zone),
        demand: zone.demand,
        trend: zone.trend,
    }
}
