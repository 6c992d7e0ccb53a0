use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Reference data for one zone: what a space there rents for on average and
/// how that market is moving. Supplied as static data by the caller; this
/// crate reads it and threads the labels through, nothing more.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ZonePriceProfile {
    pub name: String,
    /// Average monthly price in whole currency units. Must be positive to be
    /// accepted into a catalog.
    pub average_price: f64,
    pub demand: Demand,
    pub trend: Trend,
}

/// Qualitative demand label for a zone.
#[derive(Serialize, Deserialize, Display, EnumString, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Demand {
    High,
    Medium,
    Low,
}

/// Direction a zone's average price is moving.
#[derive(Serialize, Deserialize, Display, EnumString, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn profile_wire_shape() {
        let profile = ZonePriceProfile {
            name: "Centro".to_string(),
            average_price: 135.0,
            demand: Demand::High,
            trend: Trend::Up,
        };

        assert_tokens(
            &profile,
            &[
                Token::Struct {
                    name: "ZonePriceProfile",
                    len: 4,
                },
                Token::Str("name"),
                Token::Str("Centro"),
                Token::Str("average_price"),
                Token::F64(135.0),
                Token::Str("demand"),
                Token::UnitVariant {
                    name: "Demand",
                    variant: "high",
                },
                Token::Str("trend"),
                Token::UnitVariant {
                    name: "Trend",
                    variant: "up",
                },
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn labels_have_string_forms() {
        assert_eq!(Demand::High.to_string(), "high");
        assert_eq!(Trend::Stable.to_string(), "stable");
        assert_eq!("down".parse::<Trend>().unwrap(), Trend::Down);
        assert_eq!("medium".parse::<Demand>().unwrap(), Demand::Medium);
        assert!("sideways".parse::<Trend>().is_err());
    }
}
