pub mod feature;
pub mod shape;

pub use feature::{FeatureCollection, MockFeature, Point, Ring};
pub use shape::{OvalOrientation, ShapeChoice};
