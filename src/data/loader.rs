use super::property::{Property, PropertyType};
use super::suburb::Suburb;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}

/// A CSV cell after conservative coercion. A cell becomes a number only when
/// the canonical rendering of the parsed value reproduces the raw text
/// (allowing stripped leading zeros); ambiguous strings stay text.
#[derive(Debug, Clone, PartialEq)]
enum Field {
    Number(f64),
    Text(String),
    Empty,
}

impl Field {
    fn number(&self) -> Option<f64> {
        match self {
            Field::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Stringly view used for identifier-like columns such as postcodes.
    fn display(&self) -> Option<String> {
        match self {
            Field::Number(value) => Some(canonical(*value)),
            Field::Text(value) => Some(value.clone()),
            Field::Empty => None,
        }
    }
}

fn coerce(raw: &str) -> Field {
    let value = raw.trim().trim_matches('"').trim();
    if value.is_empty() || value == "null" || value == "undefined" {
        return Field::Empty;
    }

    if let Ok(parsed) = value.parse::<f64>() {
        if parsed.is_finite() {
            let rendered = canonical(parsed);
            if rendered == value || rendered == value.trim_start_matches('0') {
                return Field::Number(parsed);
            }
        }
    }

    Field::Text(value.to_string())
}

fn canonical(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

type Row = HashMap<String, Field>;

fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = Row::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            let raw = record.get(index).unwrap_or_default();
            row.insert(header.to_string(), coerce(raw));
        }
        rows.push(row);
    }
    Ok(rows)
}

fn num(row: &Row, key: &str) -> Option<f64> {
    row.get(key).and_then(Field::number)
}

fn num_or(row: &Row, key: &str, fallback: f64) -> f64 {
    num(row, key).unwrap_or(fallback)
}

fn text(row: &Row, key: &str) -> String {
    row.get(key).and_then(Field::display).unwrap_or_default()
}

/// Parses `suburbs.csv` into reference entities, skipping unnamed rows.
pub fn load_suburbs<R: Read>(reader: R) -> Result<Vec<Suburb>, DataError> {
    let rows = read_rows(reader)?;
    Ok(rows.iter().filter_map(suburb_from_row).collect())
}

pub fn load_suburbs_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Suburb>, DataError> {
    let file = File::open(path.as_ref()).map_err(|source| DataError::Io {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    load_suburbs(file)
}

fn suburb_from_row(row: &Row) -> Option<Suburb> {
    let name = text(row, "suburb");
    if name.is_empty() {
        return None;
    }

    Some(Suburb {
        name,
        postcode: text(row, "postcode"),
        lga: text(row, "lga"),
        latitude: num(row, "latitude"),
        longitude: num(row, "longitude"),
        median_price: num_or(row, "medianPrice", 0.0),
        growth_1yr: num_or(row, "growth1yr", 0.0),
        rental_yield: num_or(row, "rentalYield", 0.0),
        irsd_score: num_or(row, "irsd_score", 0.0),
        irsd_decile: num_or(row, "irsd_decile", 0.0),
        ier_score: num_or(row, "ier_score", 0.0),
        ier_decile: num_or(row, "ier_decile", 0.0),
        ieo_score: num_or(row, "ieo_score", 0.0),
        ieo_decile: num_or(row, "ieo_decile", 0.0),
        transit_score: num_or(row, "transitScore", 0.0),
        walk_score: num_or(row, "walkScore", 0.0),
        school_rating: num_or(row, "schoolRating", 60.0),
        school_count: num_or(row, "schoolCount", 0.0),
        parks_density: num_or(row, "parksDensity", 0.0),
        childcare_centers: num_or(row, "childcareCenters", 0.0),
        shopping_centers: num_or(row, "shoppingCenters", 0.0),
        cafes_restaurants: num_or(row, "cafesRestaurants", 0.0),
        commute_minutes: num(row, "primaryCommuteMinutes")
            .or_else(|| num(row, "cbdDistance"))
            .unwrap_or(0.0),
        category: text(row, "category"),
    })
}

/// Parses `properties.csv` into listings, skipping rows without an address.
/// Persisted score columns are ignored; the engine recomputes them.
pub fn load_properties<R: Read>(reader: R) -> Result<Vec<Property>, DataError> {
    let rows = read_rows(reader)?;
    Ok(rows.iter().filter_map(property_from_row).collect())
}

pub fn load_properties_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Property>, DataError> {
    let file = File::open(path.as_ref()).map_err(|source| DataError::Io {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    load_properties(file)
}

fn property_from_row(row: &Row) -> Option<Property> {
    let address = text(row, "address");
    if address.is_empty() {
        return None;
    }

    let property_type = match row.get("propertyType") {
        Some(Field::Text(raw)) => PropertyType::parse(raw),
        _ => PropertyType::default(),
    };

    let is_favorite = match row.get("isFavorite") {
        Some(Field::Text(raw)) => raw.eq_ignore_ascii_case("true"),
        Some(Field::Number(value)) => *value != 0.0,
        _ => false,
    };

    let date_added = match row.get("dateAdded") {
        Some(Field::Text(raw)) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
        _ => None,
    };

    Some(Property {
        id: row.get("id").and_then(Field::display),
        address,
        suburb: text(row, "suburb"),
        postcode: text(row, "postcode"),
        price: num(row, "price"),
        property_type,
        land_size: num(row, "landSize"),
        bedrooms: num(row, "bedrooms"),
        bathrooms: num(row, "bathrooms"),
        street_quality: num(row, "streetQuality"),
        renovation_cost: num(row, "renovationCost"),
        is_favorite,
        tags: row.get("tags").and_then(Field::display),
        notes: row.get("notes").and_then(Field::display),
        date_added,
        source_url: row.get("sourceUrl").and_then(Field::display),
    })
}
