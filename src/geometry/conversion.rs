//! Flat kilometre-to-degree conversion around a center latitude
//!
//! - lat_deg = km / 111.0
//! - lon_deg = km / (111.0 * cos(center_lat))
//!
//! Not geodesic; kept so output matches existing mock fixtures.

/// Kilometres per degree of latitude
pub const KM_PER_DEGREE: f64 = 111.0;

/// Angular half-extents of a shape in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeRadii {
    pub lat: f64,
    pub lon: f64,
}

impl DegreeRadii {
    /// Convert a size in kilometres to degree radii at the given latitude
    ///
    /// # Arguments
    /// * `size_km` - Shape radius in kilometres
    /// * `center_lat` - Latitude of the shape center in degrees
    pub fn from_km(size_km: f64, center_lat: f64) -> Self {
        let cos_lat = center_lat.to_radians().cos();
        Self {
            lat: size_km / KM_PER_DEGREE,
            lon: size_km / (KM_PER_DEGREE * cos_lat),
        }
    }
}
