pub mod marker;
pub mod store;

pub use marker::{Marker, MarkerIcon};
pub use store::MarkerStore;
