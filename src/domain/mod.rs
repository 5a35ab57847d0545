// Domain types and value objects
mod direction;
mod geo_point;
mod map_view;

// Re-export commonly used types to the world
pub use direction::Direction;
pub use geo_point::GeoPoint;
pub use map_view::{GeoBounds, MapView};
