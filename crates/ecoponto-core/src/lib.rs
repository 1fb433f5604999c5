pub mod config;
pub mod dataset;
pub mod filter;
pub mod location;

pub use config::{load_app_config, AppConfig, ConfigError};
pub use dataset::{seed_locations, PENHA_CENTER};
pub use filter::{filter_locations, SHOW_ALL_QUERY};
pub use location::{Coordinates, Location, LocationId, ParseCategoryError, WasteCategory};
