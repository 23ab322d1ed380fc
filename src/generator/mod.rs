//! Random polygon generation: sample a placement, pick a shape, rasterize it.

pub mod batch;
pub mod params;
pub mod rasterize;
pub mod sampler;
pub mod seed;
pub mod selector;

pub use batch::{generate_feature_seeded, generate_mock_polygons, generate_polygon, generate_seeded};
pub use params::{GenerationParams, MAX_NGON_VERTICES, MIN_NGON_VERTICES, MIN_SIZE_KM};
pub use rasterize::{
    CURVE_SAMPLES, circle_ring, draw_orientation, ngon_ring, oval_ring, rasterize, shape_ring,
};
pub use sampler::{Candidate, MAX_SAMPLE_ATTEMPTS, sample_candidate};
pub use seed::seed_for_feature;
pub use selector::{ShapeChoices, available_shapes, choose_shape};
