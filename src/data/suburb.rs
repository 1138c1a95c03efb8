use super::preferences::UserPreferences;
use serde::{Deserialize, Serialize};

/// Read-only reference record describing a geographic area.
///
/// Numeric metrics default to 0 (60 for the school rating) when the source
/// file omits them; scoring degrades the affected sub-score instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suburb {
    pub name: String,
    pub postcode: String,
    /// Local government area, the key into the crime-rate table.
    pub lga: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub median_price: f64,
    pub growth_1yr: f64,
    pub rental_yield: f64,
    pub irsd_score: f64,
    pub irsd_decile: f64,
    pub ier_score: f64,
    pub ier_decile: f64,
    pub ieo_score: f64,
    pub ieo_decile: f64,
    pub transit_score: f64,
    pub walk_score: f64,
    pub school_rating: f64,
    pub school_count: f64,
    pub parks_density: f64,
    pub childcare_centers: f64,
    pub shopping_centers: f64,
    pub cafes_restaurants: f64,
    /// Minutes of the primary CBD commute; doubles as the accessibility
    /// distance input.
    pub commute_minutes: f64,
    /// Geographic bucket label (BAYSIDE, HILLS & RANGES, INNER METRO,
    /// OUTER GROWTH).
    pub category: String,
}

impl Default for Suburb {
    fn default() -> Self {
        Self {
            name: String::new(),
            postcode: String::new(),
            lga: String::new(),
            latitude: None,
            longitude: None,
            median_price: 0.0,
            growth_1yr: 0.0,
            rental_yield: 0.0,
            irsd_score: 0.0,
            irsd_decile: 0.0,
            ier_score: 0.0,
            ier_decile: 0.0,
            ieo_score: 0.0,
            ieo_decile: 0.0,
            transit_score: 0.0,
            walk_score: 0.0,
            school_rating: 60.0,
            school_count: 0.0,
            parks_density: 0.0,
            childcare_centers: 0.0,
            shopping_centers: 0.0,
            cafes_restaurants: 0.0,
            commute_minutes: 0.0,
            category: String::new(),
        }
    }
}

/// Immutable lookup set of suburbs, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct SuburbStore {
    suburbs: Vec<Suburb>,
}

impl SuburbStore {
    pub fn new(suburbs: Vec<Suburb>) -> Self {
        Self { suburbs }
    }

    pub fn len(&self) -> usize {
        self.suburbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suburbs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suburb> {
        self.suburbs.iter()
    }

    /// Case- and whitespace-insensitive lookup by suburb name.
    pub fn find(&self, name: &str) -> Option<&Suburb> {
        let wanted = normalize_name(name);
        self.suburbs
            .iter()
            .find(|suburb| normalize_name(&suburb.name) == wanted)
    }

    /// Pass-through filter over the caller's geographic categories. An empty
    /// selection, the `all` keyword, or all four buckets selected returns the
    /// whole set.
    pub fn filter_by_categories(&self, preferences: Option<&UserPreferences>) -> Vec<&Suburb> {
        let selection = preferences.and_then(|prefs| prefs.geographic_categories.as_ref());
        match selection {
            Some(selection) if !selection.selects_all() => self
                .suburbs
                .iter()
                .filter(|suburb| selection.contains(&suburb.category))
                .collect(),
            _ => self.suburbs.iter().collect(),
        }
    }

    /// Nearest suburb with known coordinates, by haversine distance.
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Option<&Suburb> {
        let mut nearest: Option<(&Suburb, f64)> = None;
        for suburb in &self.suburbs {
            let (Some(lat), Some(lng)) = (suburb.latitude, suburb.longitude) else {
                continue;
            };
            let distance = haversine_km(latitude, longitude, lat, lng);
            if nearest.map(|(_, best)| distance < best).unwrap_or(true) {
                nearest = Some((suburb, distance));
            }
        }
        nearest.map(|(suburb, _)| suburb)
    }
}

pub(crate) fn normalize_name(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

const EARTH_RADIUS_KM: f64 = 6371.0;

fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CategorySelection;

    fn named(name: &str, category: &str) -> Suburb {
        Suburb {
            name: name.to_string(),
            category: category.to_string(),
            ..Suburb::default()
        }
    }

    fn store() -> SuburbStore {
        SuburbStore::new(vec![
            named("Hawthorn", "INNER METRO"),
            named("Brighton", "BAYSIDE"),
            named("Werribee", "OUTER GROWTH"),
        ])
    }

    #[test]
    fn find_ignores_case_and_spacing() {
        let store = store();
        assert!(store.find("  hawthorn ").is_some());
        assert!(store.find("BRIGHTON").is_some());
        assert!(store.find("Fitzroy").is_none());
    }

    #[test]
    fn category_filter_is_pass_through_for_all() {
        let store = store();
        let prefs = UserPreferences {
            geographic_categories: Some(CategorySelection::Keyword("all".to_string())),
            ..UserPreferences::default()
        };
        assert_eq!(store.filter_by_categories(Some(&prefs)).len(), 3);
        assert_eq!(store.filter_by_categories(None).len(), 3);
    }

    #[test]
    fn category_filter_narrows_to_selection() {
        let store = store();
        let prefs = UserPreferences {
            geographic_categories: Some(CategorySelection::List(vec!["BAYSIDE".to_string()])),
            ..UserPreferences::default()
        };
        let filtered = store.filter_by_categories(Some(&prefs));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Brighton");
    }

    #[test]
    fn nearest_skips_suburbs_without_coordinates() {
        let mut brighton = named("Brighton", "BAYSIDE");
        brighton.latitude = Some(-37.9057);
        brighton.longitude = Some(144.9937);
        let store = SuburbStore::new(vec![named("Hawthorn", "INNER METRO"), brighton]);
        let hit = store.nearest(-37.9, 145.0).expect("one suburb has coords");
        assert_eq!(hit.name, "Brighton");
    }
}
