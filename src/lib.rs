//! mockgons - Generate mock GeoJSON polygons scattered across the globe

pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod geojson;
pub mod geometry;
pub mod validation;

pub use domain::{FeatureCollection, MockFeature, ShapeChoice};
pub use error::{GenerationError, Result};
pub use generator::{GenerationParams, generate_mock_polygons, generate_seeded};
