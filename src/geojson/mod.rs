pub mod wire;
pub mod writer;

pub use wire::{FeatureProperties, GeoJsonFeature, GeoJsonFeatureCollection, GeoJsonPolygon};
pub use writer::{read_geojson, to_geojson_string, write_geojson};
