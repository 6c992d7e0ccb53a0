// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod identity_document;
mod pricing;

// This is the public API of the parkeo core library
pub use identity_document::{
    format, normalize, validate, DocumentInput, DocumentType, InvalidReason, ValidationResult,
};
pub use pricing::{
    builtin_catalog, suggest, suggest_for_zone, Demand, PriceSuggestion, Trend, ZoneCatalog,
    ZoneCatalogError, ZonePriceProfile, PRICE_SLIDER_MAX, PRICE_SLIDER_MIN, PRICE_SLIDER_STEP,
};
