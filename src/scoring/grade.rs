//! Presentation mappers from composite scores to grades, percentiles and
//! display labels. Two grade tables ship side by side: the standard nine-step
//! table used by score reports and a compact seven-step table with labels and
//! display colors for dense layouts. They bucket differently and are kept as
//! named presets rather than merged.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTable {
    Standard,
    Compact,
}

impl GradeTable {
    pub fn letter(self, score: f64) -> &'static str {
        match self {
            GradeTable::Standard => {
                if score >= 95.0 {
                    "A+"
                } else if score >= 90.0 {
                    "A"
                } else if score >= 85.0 {
                    "A-"
                } else if score >= 80.0 {
                    "B+"
                } else if score >= 75.0 {
                    "B"
                } else if score >= 70.0 {
                    "B-"
                } else if score >= 65.0 {
                    "C+"
                } else if score >= 60.0 {
                    "C"
                } else {
                    "C-"
                }
            }
            GradeTable::Compact => score_rating(score).grade,
        }
    }
}

/// Compact-table entry: grade plus a label and a frontend color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRating {
    pub grade: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub fn score_rating(score: f64) -> ScoreRating {
    let (grade, label, color) = if score >= 90.0 {
        ("A+", "Excellent", "var(--success)")
    } else if score >= 85.0 {
        ("A", "Very Good", "var(--success)")
    } else if score >= 80.0 {
        ("B+", "Good", "var(--orange-light)")
    } else if score >= 75.0 {
        ("B", "Above Average", "var(--orange-light)")
    } else if score >= 70.0 {
        ("C+", "Average", "var(--warning)")
    } else if score >= 65.0 {
        ("C", "Below Average", "var(--warning)")
    } else {
        ("C-", "Needs Improvement", "var(--error)")
    };
    ScoreRating { grade, label, color }
}

/// "Top N%" bucket shown under a score.
pub fn top_percent(score: f64) -> u8 {
    if score >= 95.0 {
        5
    } else if score >= 90.0 {
        10
    } else if score >= 85.0 {
        15
    } else if score >= 80.0 {
        25
    } else if score >= 75.0 {
        35
    } else {
        50
    }
}

/// Estimated percentile rank, assuming the observed score distribution.
pub fn percentile_rank(score: f64) -> u8 {
    if score >= 90.0 {
        95
    } else if score >= 85.0 {
        85
    } else if score >= 80.0 {
        75
    } else if score >= 75.0 {
        60
    } else if score >= 70.0 {
        45
    } else if score >= 65.0 {
        30
    } else if score >= 60.0 {
        20
    } else if score >= 55.0 {
        12
    } else if score >= 50.0 {
        8
    } else {
        5
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDisplay {
    pub emoji: &'static str,
    pub name: String,
}

/// Emoji and label for a breakdown key. Unknown keys keep their raw name
/// behind a generic icon so new factors degrade visibly instead of vanishing.
pub fn category_display(key: &str) -> CategoryDisplay {
    let (emoji, name) = match key {
        "location" => ("📍", "Location Quality"),
        "schools" => ("🎓", "School Quality"),
        "safety" => ("🛡️", "Safety & Security"),
        "amenities" => ("🏪", "Nearby Amenities"),
        "transport" => ("🚇", "Transport Access"),
        "transportation" => ("🚇", "Transportation"),
        "lifestyle" => ("🎨", "Lifestyle Match"),
        "growth" => ("📈", "Growth Potential"),
        "affordability" => ("💰", "Affordability"),
        "investment" => ("💼", "Investment Value"),
        other => {
            return CategoryDisplay {
                emoji: "📊",
                name: other.to_string(),
            }
        }
    };
    CategoryDisplay {
        emoji,
        name: name.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub emoji: &'static str,
    pub label: &'static str,
}

pub fn suburb_banner(score: f64) -> Banner {
    let (emoji, label) = if score >= 90.0 {
        ("🌟", "Exceptional Suburb")
    } else if score >= 80.0 {
        ("✅", "Excellent Suburb")
    } else if score >= 70.0 {
        ("👍", "Good Suburb")
    } else {
        ("⚠️", "Fair Suburb")
    };
    Banner { emoji, label }
}

pub fn property_banner(score: f64) -> Banner {
    let (emoji, label) = if score >= 90.0 {
        ("🚀", "Outstanding Property")
    } else if score >= 80.0 {
        ("⭐", "Excellent Property")
    } else if score >= 70.0 {
        ("✅", "Strong Property")
    } else {
        ("👍", "Good Property")
    };
    Banner { emoji, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_bucket_differently_at_ninety() {
        assert_eq!(GradeTable::Standard.letter(92.0), "A");
        assert_eq!(GradeTable::Compact.letter(92.0), "A+");
        assert_eq!(GradeTable::Standard.letter(95.0), "A+");
    }

    #[test]
    fn compact_floor_is_needs_improvement() {
        let rating = score_rating(40.0);
        assert_eq!(rating.grade, "C-");
        assert_eq!(rating.label, "Needs Improvement");
        assert_eq!(rating.color, "var(--error)");
    }

    #[test]
    fn percentile_ladders_step_at_boundaries() {
        assert_eq!(top_percent(95.0), 5);
        assert_eq!(top_percent(94.9), 10);
        assert_eq!(top_percent(60.0), 50);
        assert_eq!(percentile_rank(90.0), 95);
        assert_eq!(percentile_rank(55.0), 12);
        assert_eq!(percentile_rank(10.0), 5);
    }

    #[test]
    fn unknown_category_keeps_its_raw_key() {
        let display = category_display("walkability");
        assert_eq!(display.emoji, "📊");
        assert_eq!(display.name, "walkability");
        assert_eq!(category_display("schools").name, "School Quality");
    }

    #[test]
    fn banners_differ_per_score_kind() {
        assert_eq!(suburb_banner(91.0).label, "Exceptional Suburb");
        assert_eq!(property_banner(91.0).label, "Outstanding Property");
        assert_eq!(suburb_banner(50.0).emoji, "⚠️");
    }
}
