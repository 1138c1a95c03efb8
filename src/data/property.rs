use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dwelling classification; unrecognized values fall back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Townhouse,
    Unit,
    Apartment,
    Villa,
    Duplex,
    Other,
}

impl PropertyType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "house" => Self::House,
            "townhouse" => Self::Townhouse,
            "unit" => Self::Unit,
            "apartment" => Self::Apartment,
            "villa" => Self::Villa,
            "duplex" => Self::Duplex,
            _ => Self::Other,
        }
    }

    /// Contribution to the property investment tier. Only houses, townhouses
    /// and units carry distinct weights; everything else shares one bucket.
    pub const fn feature_score(self) -> f64 {
        match self {
            Self::House => 100.0,
            Self::Townhouse => 70.0,
            Self::Unit => 50.0,
            Self::Apartment | Self::Villa | Self::Duplex | Self::Other => 35.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Townhouse => "townhouse",
            Self::Unit => "unit",
            Self::Apartment => "apartment",
            Self::Villa => "villa",
            Self::Duplex => "duplex",
            Self::Other => "other",
        }
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        Self::House
    }
}

/// A single listing under evaluation. Created by the scraper or user input;
/// read-only to the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub id: Option<String>,
    pub address: String,
    /// Suburb name, matched by normalized lookup into the suburb store.
    pub suburb: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "propertyType")]
    pub property_type: PropertyType,
    #[serde(default, alias = "landSize")]
    pub land_size: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<f64>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    #[serde(default, alias = "streetQuality")]
    pub street_quality: Option<f64>,
    #[serde(default, alias = "renovationCost")]
    pub renovation_cost: Option<f64>,
    #[serde(default, alias = "isFavorite")]
    pub is_favorite: bool,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, alias = "dateAdded")]
    pub date_added: Option<NaiveDate>,
    #[serde(default, alias = "sourceUrl")]
    pub source_url: Option<String>,
}
