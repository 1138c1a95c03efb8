mod loader;
mod preferences;
mod property;
mod suburb;

pub use loader::{
    load_properties, load_properties_from_path, load_suburbs, load_suburbs_from_path, DataError,
};
pub use preferences::{CategorySelection, UserPreferences};
pub use property::{Property, PropertyType};
pub use suburb::{Suburb, SuburbStore};
