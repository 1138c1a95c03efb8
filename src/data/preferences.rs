use serde::{Deserialize, Serialize};

/// Caller-supplied scoring context. Only the goal and budget window influence
/// scoring (via strategy selection); the rest filters candidate suburbs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default, alias = "primaryGoal")]
    pub primary_goal: Option<String>,
    #[serde(default, alias = "budgetMin")]
    pub budget_min: Option<f64>,
    #[serde(default, alias = "budgetMax")]
    pub budget_max: Option<f64>,
    #[serde(default, alias = "familyStatus")]
    pub family_status: Option<String>,
    #[serde(default, alias = "safetyPriority")]
    pub safety_priority: Option<u8>,
    #[serde(default, alias = "geographicCategories")]
    pub geographic_categories: Option<CategorySelection>,
}

impl UserPreferences {
    /// Budget window when both bounds are present and positive.
    pub fn budget_window(&self) -> Option<(f64, f64)> {
        match (self.budget_min, self.budget_max) {
            (Some(min), Some(max)) if min > 0.0 && max > 0.0 => Some((min, max)),
            _ => None,
        }
    }
}

/// Either the `all` keyword or an explicit list of bucket labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategorySelection {
    Keyword(String),
    List(Vec<String>),
}

/// The four geographic bucket labels used by the candidate filter.
pub(crate) const CATEGORY_BUCKETS: usize = 4;

impl CategorySelection {
    /// An empty list, the `all` keyword, or all four buckets behave as no
    /// filter at all.
    pub fn selects_all(&self) -> bool {
        match self {
            CategorySelection::Keyword(keyword) => keyword.eq_ignore_ascii_case("all"),
            CategorySelection::List(labels) => {
                labels.is_empty() || labels.len() == CATEGORY_BUCKETS
            }
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        match self {
            CategorySelection::Keyword(keyword) => keyword.eq_ignore_ascii_case("all"),
            CategorySelection::List(labels) => labels.iter().any(|label| label == category),
        }
    }
}
