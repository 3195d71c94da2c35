pub mod constants;
pub mod generator;
pub mod geo;
