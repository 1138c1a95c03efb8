//! The scoring engine: tiered suburb and property scores, the flat-weight
//! quick calculators, and the presentation mappers over their results.

pub mod cache;
pub mod crime;
mod factors;
pub mod grade;
pub mod insights;
mod normalize;
pub mod property;
pub mod simple;
pub mod strategy;
pub mod suburb;

pub use cache::{MemoryScoreCache, ScoreCache};
pub use crime::{crime_rate, crime_rate_for_lga, DEFAULT_CRIME_RATE};
pub use grade::{
    category_display, percentile_rank, property_banner, score_rating, suburb_banner, top_percent,
    Banner, CategoryDisplay, GradeTable, ScoreRating,
};
pub use insights::{generate_insights, Insight};
pub use normalize::normalize;
pub use property::{property_score, PropertyScore};
pub use strategy::{
    LocationWeights, PropertyTierWeights, Strategy, SuburbTierWeights, ALL_STRATEGIES,
};
pub use suburb::{suburb_score, SuburbScore};

use crate::data::{Property, Suburb, SuburbStore, UserPreferences};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Named sub-score inside a tiered breakdown, allowing transparent audits of
/// how a composite was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    Growth,
    Yield,
    Affordability,
    PropertyType,
    Irsd,
    Ier,
    Ieo,
    Crime,
    CbdAccess,
    CbdDistance,
    Transit,
    Walk,
    Schools,
    Parks,
    Childcare,
    Shopping,
    Cafes,
    LandSize,
    Bedrooms,
    Bathrooms,
    StreetQuality,
}

pub type ScoreBreakdown = BTreeMap<Factor, f64>;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("unknown suburb: {name}")]
    UnknownSuburb { name: String },
    #[error("no suburb match for listing {address} (suburb: {suburb})")]
    SuburbUnmatched { address: String, suburb: String },
}

/// Stateless calculator plus injected memoization. The engine owns no data;
/// callers hand it suburbs or a store reference per call.
pub struct ScoringEngine {
    suburb_cache: Arc<dyn ScoreCache<SuburbScore>>,
    property_cache: Arc<dyn ScoreCache<PropertyScore>>,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            suburb_cache: Arc::new(MemoryScoreCache::new()),
            property_cache: Arc::new(MemoryScoreCache::new()),
        }
    }

    pub fn with_caches(
        suburb_cache: Arc<dyn ScoreCache<SuburbScore>>,
        property_cache: Arc<dyn ScoreCache<PropertyScore>>,
    ) -> Self {
        Self {
            suburb_cache,
            property_cache,
        }
    }

    pub fn suburb_score(&self, suburb: &Suburb, strategy: Strategy) -> SuburbScore {
        let key = format!("ascore-{}-{}", suburb.name, strategy.key());
        if let Some(hit) = self.suburb_cache.get(&key) {
            return hit;
        }
        let score = suburb_score(suburb, strategy);
        self.suburb_cache.insert(key, score.clone());
        score
    }

    /// Scores a suburb by name against the store; strategy falls back to the
    /// stated goal when not given explicitly.
    pub fn score_suburb_in(
        &self,
        store: &SuburbStore,
        name: &str,
        strategy: Option<Strategy>,
        preferences: Option<&UserPreferences>,
    ) -> Result<SuburbScore, ScoreError> {
        let suburb = store.find(name).ok_or_else(|| ScoreError::UnknownSuburb {
            name: name.to_string(),
        })?;
        let strategy = strategy.unwrap_or_else(|| Strategy::from_preferences(preferences));
        Ok(self.suburb_score(suburb, strategy))
    }

    pub fn property_score(
        &self,
        property: &Property,
        suburb: &Suburb,
        preferences: Option<&UserPreferences>,
    ) -> PropertyScore {
        let price = property::effective_price(property);
        let strategy = Strategy::from_property_price(price, preferences);
        // Listing fields participate in the key: edits to a saved listing
        // must not serve a stale score.
        let key = format!(
            "bscore-{}-{}-{}-{}-{}-{:?}-{:?}-{:?}-{:?}",
            property.address,
            suburb.name,
            price,
            strategy.key(),
            property.property_type.label(),
            property.land_size,
            property.bedrooms,
            property.bathrooms,
            property.street_quality,
        );
        if let Some(hit) = self.property_cache.get(&key) {
            return hit;
        }
        let score = property_score(property, suburb, preferences);
        self.property_cache.insert(key, score.clone());
        score
    }

    /// Scores a listing against its suburb resolved from the store.
    pub fn score_property_in(
        &self,
        store: &SuburbStore,
        property: &Property,
        preferences: Option<&UserPreferences>,
    ) -> Result<PropertyScore, ScoreError> {
        let suburb = store
            .find(&property.suburb)
            .ok_or_else(|| ScoreError::SuburbUnmatched {
                address: property.address.clone(),
                suburb: property.suburb.clone(),
            })?;
        Ok(self.property_score(property, suburb, preferences))
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
