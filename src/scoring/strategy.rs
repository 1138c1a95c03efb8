use crate::data::UserPreferences;
use serde::{Deserialize, Serialize};

/// Named weighting preset. Strategies are compile-time constants; selection
/// happens either from a stated goal or from price-vs-budget fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Investment,
    Balanced,
    Lifestyle,
}

pub const ALL_STRATEGIES: [Strategy; 3] = [
    Strategy::Investment,
    Strategy::Balanced,
    Strategy::Lifestyle,
];

/// Tier weights for the four-tier suburb score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SuburbTierWeights {
    pub investment: f64,
    pub location: f64,
    pub accessibility: f64,
    pub lifestyle: f64,
}

impl SuburbTierWeights {
    pub fn total(&self) -> f64 {
        self.investment + self.location + self.accessibility + self.lifestyle
    }
}

/// Tier weights for the five-tier property score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyTierWeights {
    pub investment: f64,
    pub location: f64,
    pub accessibility: f64,
    pub features: f64,
    pub lifestyle: f64,
}

impl PropertyTierWeights {
    pub fn total(&self) -> f64 {
        self.investment + self.location + self.accessibility + self.features + self.lifestyle
    }
}

/// Location-tier sub-weights over the SEIFA indices and the crime rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationWeights {
    pub irsd: f64,
    pub ier: f64,
    pub ieo: f64,
    pub crime: f64,
}

impl Strategy {
    pub const fn suburb_tiers(self) -> SuburbTierWeights {
        match self {
            Strategy::Investment => SuburbTierWeights {
                investment: 0.45,
                location: 0.30,
                accessibility: 0.15,
                lifestyle: 0.10,
            },
            Strategy::Balanced => SuburbTierWeights {
                investment: 0.30,
                location: 0.30,
                accessibility: 0.20,
                lifestyle: 0.20,
            },
            Strategy::Lifestyle => SuburbTierWeights {
                investment: 0.20,
                location: 0.35,
                accessibility: 0.15,
                lifestyle: 0.30,
            },
        }
    }

    pub const fn property_tiers(self) -> PropertyTierWeights {
        match self {
            Strategy::Investment => PropertyTierWeights {
                investment: 0.40,
                location: 0.23,
                accessibility: 0.20,
                features: 0.12,
                lifestyle: 0.05,
            },
            Strategy::Balanced => PropertyTierWeights {
                investment: 0.28,
                location: 0.23,
                accessibility: 0.26,
                features: 0.15,
                lifestyle: 0.08,
            },
            Strategy::Lifestyle => PropertyTierWeights {
                investment: 0.18,
                location: 0.23,
                accessibility: 0.20,
                features: 0.20,
                lifestyle: 0.19,
            },
        }
    }

    pub const fn location_weights(self) -> LocationWeights {
        match self {
            Strategy::Investment => LocationWeights {
                irsd: 0.45,
                ier: 0.30,
                ieo: 0.15,
                crime: 0.10,
            },
            Strategy::Balanced => LocationWeights {
                irsd: 0.30,
                ier: 0.25,
                ieo: 0.30,
                crime: 0.15,
            },
            Strategy::Lifestyle => LocationWeights {
                irsd: 0.20,
                ier: 0.20,
                ieo: 0.50,
                crime: 0.10,
            },
        }
    }

    pub fn parse(raw: &str) -> Option<Strategy> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "investment" => Some(Strategy::Investment),
            "balanced" => Some(Strategy::Balanced),
            "lifestyle" => Some(Strategy::Lifestyle),
            _ => None,
        }
    }

    /// Selection from a directly stated goal. Absent or unrecognized goals
    /// resolve to balanced.
    pub fn from_preferences(preferences: Option<&UserPreferences>) -> Strategy {
        preferences
            .and_then(|prefs| prefs.primary_goal.as_deref())
            .and_then(Strategy::parse)
            .unwrap_or(Strategy::Balanced)
    }

    /// Selection inferred from how a listing price sits in the buyer's budget
    /// window. Not equivalent to [`Strategy::from_preferences`]; suburb
    /// scoring reads the stated goal while property scoring infers intent
    /// from price fit.
    pub fn from_property_price(price: f64, preferences: Option<&UserPreferences>) -> Strategy {
        let Some((budget_min, budget_max)) =
            preferences.and_then(UserPreferences::budget_window)
        else {
            return if price < 700_000.0 {
                Strategy::Investment
            } else if price < 1_000_000.0 {
                Strategy::Balanced
            } else {
                Strategy::Lifestyle
            };
        };

        let investment_threshold = budget_min * 1.15;
        let lifestyle_min = budget_max * 0.85;
        let lifestyle_max = budget_max * 1.20;

        if price <= investment_threshold {
            Strategy::Investment
        } else if price >= lifestyle_min && price <= lifestyle_max {
            Strategy::Lifestyle
        } else {
            Strategy::Balanced
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Strategy::Investment => "investment",
            Strategy::Balanced => "balanced",
            Strategy::Lifestyle => "lifestyle",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Strategy::Investment => "Investment",
            Strategy::Balanced => "Balanced",
            Strategy::Lifestyle => "Lifestyle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(min: f64, max: f64) -> UserPreferences {
        UserPreferences {
            budget_min: Some(min),
            budget_max: Some(max),
            ..UserPreferences::default()
        }
    }

    #[test]
    fn stated_goal_wins_and_defaults_to_balanced() {
        let prefs = UserPreferences {
            primary_goal: Some("Investment".to_string()),
            ..UserPreferences::default()
        };
        assert_eq!(
            Strategy::from_preferences(Some(&prefs)),
            Strategy::Investment
        );
        assert_eq!(Strategy::from_preferences(None), Strategy::Balanced);

        let odd = UserPreferences {
            primary_goal: Some("yolo".to_string()),
            ..UserPreferences::default()
        };
        assert_eq!(Strategy::from_preferences(Some(&odd)), Strategy::Balanced);
    }

    #[test]
    fn budget_window_boundaries_are_owned_exactly() {
        let prefs = budget(500_000.0, 750_000.0);
        // investmentThreshold 575_000, lifestyle window [637_500, 900_000]
        assert_eq!(
            Strategy::from_property_price(575_000.0, Some(&prefs)),
            Strategy::Investment
        );
        assert_eq!(
            Strategy::from_property_price(600_000.0, Some(&prefs)),
            Strategy::Balanced
        );
        assert_eq!(
            Strategy::from_property_price(637_500.0, Some(&prefs)),
            Strategy::Lifestyle
        );
        assert_eq!(
            Strategy::from_property_price(650_000.0, Some(&prefs)),
            Strategy::Lifestyle
        );
        assert_eq!(
            Strategy::from_property_price(900_000.0, Some(&prefs)),
            Strategy::Lifestyle
        );
        assert_eq!(
            Strategy::from_property_price(900_001.0, Some(&prefs)),
            Strategy::Balanced
        );
    }

    #[test]
    fn every_price_maps_to_exactly_one_strategy() {
        let prefs = budget(500_000.0, 750_000.0);
        let mut price = 0.0;
        while price < 2_000_000.0 {
            // parse/key round-trip doubles as an exhaustiveness check
            let strategy = Strategy::from_property_price(price, Some(&prefs));
            assert_eq!(Strategy::parse(strategy.key()), Some(strategy));
            price += 12_500.0;
        }
    }

    #[test]
    fn no_budget_fallback_uses_fixed_ladder() {
        assert_eq!(
            Strategy::from_property_price(650_000.0, None),
            Strategy::Investment
        );
        assert_eq!(
            Strategy::from_property_price(850_000.0, None),
            Strategy::Balanced
        );
        assert_eq!(
            Strategy::from_property_price(1_200_000.0, None),
            Strategy::Lifestyle
        );
    }

    #[test]
    fn tier_weight_tables_sum_to_one() {
        // Data-review invariant over the published tables; a drifting total
        // should fail loudly rather than be silently renormalized.
        for strategy in ALL_STRATEGIES {
            assert!(
                (strategy.suburb_tiers().total() - 1.0).abs() < 1e-9,
                "{:?} suburb tiers",
                strategy
            );
            assert!(
                (strategy.property_tiers().total() - 1.0).abs() < 1e-9,
                "{:?} property tiers",
                strategy
            );
            let location = strategy.location_weights();
            assert!(
                (location.irsd + location.ier + location.ieo + location.crime - 1.0).abs() < 1e-9,
                "{:?} location sub-weights",
                strategy
            );
        }
    }
}
