use crate::pricing::zone::{Demand, Trend, ZonePriceProfile};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ZoneCatalogError {
    #[error("Zone catalog JSON is not valid: {0}")]
    InvalidJson(String),

    #[error("Zone catalog has no zones")]
    EmptyCatalog,

    #[error("Zone '{0}' appears more than once in the catalog")]
    DuplicateZone(String),

    #[error("Zone '{0}' has a non-positive average price")]
    NonPositivePrice(String),
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
struct ZoneCatalogFile {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    zones: Vec<ZonePriceProfile>,
}

/// A validated set of zone profiles, looked up by zone name.
///
/// Validation happens at construction so every profile handed out by a
/// catalog is usable by the price calculator as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneCatalog {
    zones: Vec<ZonePriceProfile>,
}

impl ZoneCatalog {
    pub fn new(zones: Vec<ZonePriceProfile>) -> Result<Self, ZoneCatalogError> {
        if zones.is_empty() {
            return Err(ZoneCatalogError::EmptyCatalog);
        }

        for (idx, zone) in zones.iter().enumerate() {
            if zones[..idx].iter().any(|other| other.name == zone.name) {
                return Err(ZoneCatalogError::DuplicateZone(zone.name.clone()));
            }
            // The comparison also rejects a NaN average.
            if !(zone.average_price > 0.0) {
                return Err(ZoneCatalogError::NonPositivePrice(zone.name.clone()));
            }
        }

        Ok(ZoneCatalog { zones })
    }

    /// Load a catalog from its JSON form, e.g. `{"zones": [...]}`. A null
    /// zone list is treated as empty and then fails validation like any
    /// other empty catalog.
    pub fn from_json(json: &str) -> Result<Self, ZoneCatalogError> {
        let file: ZoneCatalogFile = serde_json::from_str(json)
            .map_err(|err| ZoneCatalogError::InvalidJson(err.to_string()))?;
        ZoneCatalog::new(file.zones)
    }

    pub fn get(&self, name: &str) -> Option<&ZonePriceProfile> {
        self.zones.iter().find(|zone| zone.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZonePriceProfile> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

static BUILTIN: Lazy<ZoneCatalog> = Lazy::new(|| {
    let zones = vec![
        profile("Centro", 135.0, Demand::High, Trend::Up),
        profile("Salamanca", 150.0, Demand::High, Trend::Stable),
        profile("Chamberí", 120.0, Demand::Medium, Trend::Up),
        profile("Retiro", 110.0, Demand::Medium, Trend::Stable),
        profile("Tetuán", 85.0, Demand::Low, Trend::Down),
        profile("Carabanchel", 70.0, Demand::Low, Trend::Stable),
    ];
    ZoneCatalog::new(zones).expect("builtin zone catalog is valid")
});

/// The default zones the application ships with.
pub fn builtin_catalog() -> &'static ZoneCatalog {
    &BUILTIN
}

fn profile(name: &str, average_price: f64, demand: Demand, trend: Trend) -> ZonePriceProfile {
    ZonePriceProfile {
        name: name.to_string(),
        average_price,
        demand,
        trend,
    }
}
