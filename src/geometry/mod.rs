pub mod bounds;
pub mod conversion;

pub use bounds::{DATELINE_LIMIT_DEG, GeoBounds, POLE_LIMIT_DEG};
pub use conversion::{DegreeRadii, KM_PER_DEGREE};
