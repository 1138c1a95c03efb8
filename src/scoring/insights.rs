//! Narrative cards derived from a composite score and its factor breakdown.
//! Factors are on the 0..10 scale of the flat-weight calculators.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: String,
}

/// Always yields at least a top-strength card and a closing tip; a tier
/// banner appears from 75 up and a weak-factor card below 7.
pub fn generate_insights(composite: f64, factors: &BTreeMap<String, f64>) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(4);

    if let Some((name, value)) = strongest(factors) {
        insights.push(Insight {
            icon: "✨",
            title: "Top Strength",
            message: format!(
                "Outstanding {name} score of {value:.1}. This is a major advantage."
            ),
        });
    }

    if composite >= 85.0 {
        insights.push(Insight {
            icon: "🚀",
            title: "Premium Investment",
            message: "This property scores in the top tier. Exceptional fundamentals across \
                      multiple categories."
                .to_string(),
        });
    } else if composite >= 75.0 {
        insights.push(Insight {
            icon: "⭐",
            title: "Strong Performer",
            message: "Solid performance across key metrics with strong long-term potential."
                .to_string(),
        });
    }

    if let Some((name, value)) = weakest(factors) {
        if value < 7.0 {
            insights.push(Insight {
                icon: "🔍",
                title: "Area for Consideration",
                message: format!(
                    "{} scores {value:.1}. Review if this aligns with your priorities.",
                    capitalize(name)
                ),
            });
        }
    }

    insights.push(Insight {
        icon: "💡",
        title: "Investment Tip",
        message: "Consider this score alongside market trends and your personal circumstances. \
                  Schedule an inspection to validate."
            .to_string(),
    });

    insights
}

fn strongest(factors: &BTreeMap<String, f64>) -> Option<(&str, f64)> {
    factors
        .iter()
        .fold(None, |best: Option<(&str, f64)>, (name, value)| match best {
            Some((_, top)) if *value <= top => best,
            _ => Some((name.as_str(), *value)),
        })
}

fn weakest(factors: &BTreeMap<String, f64>) -> Option<(&str, f64)> {
    factors
        .iter()
        .fold(None, |worst: Option<(&str, f64)>, (name, value)| match worst {
            Some((_, low)) if *value >= low => worst,
            _ => Some((name.as_str(), *value)),
        })
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
