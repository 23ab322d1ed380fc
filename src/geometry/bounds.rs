use geo::{BoundingRect, LineString};

use crate::domain::Point;

/// Latitude beyond which no generated vertex may reach
pub const POLE_LIMIT_DEG: f64 = 85.0;

/// Longitude of the antimeridian
pub const DATELINE_LIMIT_DEG: f64 = 180.0;

/// Bounding box in lon/lat degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    /// Bounds of an ellipse with the given center and radii
    pub fn around(center_lon: f64, center_lat: f64, lon_radius: f64, lat_radius: f64) -> Self {
        Self {
            min_lon: center_lon - lon_radius,
            max_lon: center_lon + lon_radius,
            min_lat: center_lat - lat_radius,
            max_lat: center_lat + lat_radius,
        }
    }

    /// Create bounds from a ring of (lon, lat) points
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let line: LineString<f64> = points
            .iter()
            .map(|&(lon, lat)| geo::coord! { x: lon, y: lat })
            .collect();

        let rect = line.bounding_rect()?;
        Some(Self {
            min_lon: rect.min().x,
            max_lon: rect.max().x,
            min_lat: rect.min().y,
            max_lat: rect.max().y,
        })
    }

    /// True if the box crosses a pole limit or the antimeridian
    pub fn wraps(&self) -> bool {
        self.max_lat > POLE_LIMIT_DEG
            || self.min_lat < -POLE_LIMIT_DEG
            || self.max_lon > DATELINE_LIMIT_DEG
            || self.min_lon < -DATELINE_LIMIT_DEG
    }
}
