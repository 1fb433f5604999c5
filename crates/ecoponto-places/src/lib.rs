pub mod error;
pub mod mapping;
pub mod resolver;
pub mod types;

pub use error::ResolverError;
pub use mapping::map_place;
pub use resolver::{CityResolver, ResolvedCity, SEARCH_RADIUS_METERS};
