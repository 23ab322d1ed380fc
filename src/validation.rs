//! Collection validation for generated mock data
//!
//! Checks every feature for the properties downstream tooling relies on:
//! - Ring is closed and has at least 4 points
//! - No NaN/Inf coordinates
//! - No vertex past ±85° latitude or ±180° longitude
//! - Ids run 1..=N in order

use std::collections::BTreeMap;

use geo::LineString;

use crate::domain::{FeatureCollection, Point};
use crate::geojson::GeoJsonFeatureCollection;
use crate::geometry::{DATELINE_LIMIT_DEG, POLE_LIMIT_DEG};

/// Result of collection validation
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Total number of features checked
    pub total: usize,
    /// Rings whose last point differs from the first
    pub unclosed: usize,
    /// Rings with fewer than 4 points
    pub too_short: usize,
    /// Features with NaN/Inf coordinates
    pub invalid_coords: usize,
    /// Features with a vertex past the pole or dateline limits
    pub out_of_bounds: usize,
    /// Features whose id is not their 1-based position
    pub misnumbered: usize,
    /// Feature count per shape tag
    pub shapes: BTreeMap<String, usize>,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.unclosed == 0
            && self.too_short == 0
            && self.invalid_coords == 0
            && self.out_of_bounds == 0
            && self.misnumbered == 0
    }

    /// One-line summary with the per-shape breakdown
    pub fn summary(&self) -> String {
        let breakdown = self
            .shapes
            .iter()
            .map(|(shape, count)| format!("{} {}", count, shape))
            .collect::<Vec<_>>()
            .join(", ");

        if self.is_valid() {
            format!("{} features valid ({})", self.total, breakdown)
        } else {
            format!(
                "{} features, {} unclosed, {} too short, {} invalid coords, {} out of bounds, {} misnumbered",
                self.total,
                self.unclosed,
                self.too_short,
                self.invalid_coords,
                self.out_of_bounds,
                self.misnumbered
            )
        }
    }

    fn check(&mut self, position: usize, id: usize, ring: &[Point], shape: &str) {
        self.total += 1;
        *self.shapes.entry(shape.to_string()).or_insert(0) += 1;

        if id != position + 1 {
            self.misnumbered += 1;
            self.warnings.push(format!(
                "Feature at position {} has id {}",
                position + 1,
                id
            ));
        }

        if ring.len() < 4 {
            self.too_short += 1;
            self.warnings
                .push(format!("Feature {} has only {} points", id, ring.len()));
        }

        if ring
            .iter()
            .any(|&(lon, lat)| !lon.is_finite() || !lat.is_finite())
        {
            self.invalid_coords += 1;
            self.warnings
                .push(format!("Feature {} has NaN/Inf coordinates", id));
            return;
        }

        let line: LineString<f64> = ring
            .iter()
            .map(|&(lon, lat)| geo::coord! { x: lon, y: lat })
            .collect();
        if !line.is_closed() {
            self.unclosed += 1;
            self.warnings.push(format!("Feature {} ring is not closed", id));
        }

        if ring.iter().any(|&(lon, lat)| is_out_of_bounds(lon, lat)) {
            self.out_of_bounds += 1;
            self.warnings
                .push(format!("Feature {} crosses the pole or dateline limit", id));
        }
    }
}

fn is_out_of_bounds(lon: f64, lat: f64) -> bool {
    lat.abs() > POLE_LIMIT_DEG || lon.abs() > DATELINE_LIMIT_DEG
}

/// Validate a generated collection
pub fn validate_collection(collection: &FeatureCollection) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (position, feature) in collection.iter().enumerate() {
        report.check(
            position,
            feature.id,
            &feature.ring,
            &feature.shape.descriptor(),
        );
    }

    report
}

/// Validate a collection read back from a GeoJSON file
///
/// Only the outer ring of each polygon is checked.
pub fn validate_geojson(geojson: &GeoJsonFeatureCollection) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (position, feature) in geojson.features.iter().enumerate() {
        let ring: Vec<Point> = feature
            .geometry
            .coordinates
            .first()
            .map(|outer| outer.iter().map(|&[lon, lat]| (lon, lat)).collect())
            .unwrap_or_default();

        report.check(
            position,
            feature.properties.id,
            &ring,
            &feature.properties.shape,
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockFeature, ShapeChoice};

    fn square(id: usize) -> MockFeature {
        MockFeature::new(
            id,
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)],
            ShapeChoice::NGon(4),
        )
    }

    #[test]
    fn test_valid_collection() {
        let collection = FeatureCollection::new(vec![square(1), square(2)]);
        let report = validate_collection(&collection);

        assert!(report.is_valid());
        assert_eq!(report.total, 2);
        assert_eq!(report.shapes.get("4-gon"), Some(&2));
        assert_eq!(report.summary(), "2 features valid (2 4-gon)");
    }

    #[test]
    fn test_detects_unclosed_ring() {
        let mut feature = square(1);
        feature.ring.pop();
        let report = validate_collection(&FeatureCollection::new(vec![feature]));

        assert_eq!(report.unclosed, 1);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_detects_out_of_bounds() {
        let mut feature = square(1);
        feature.ring[1] = (181.0, 0.0);
        let report = validate_collection(&FeatureCollection::new(vec![feature]));
        assert_eq!(report.out_of_bounds, 1);

        let mut feature = square(1);
        feature.ring[2] = (0.0, -85.5);
        let report = validate_collection(&FeatureCollection::new(vec![feature]));
        assert_eq!(report.out_of_bounds, 1);
    }

    #[test]
    fn test_detects_nan() {
        let mut feature = square(1);
        feature.ring[1] = (f64::NAN, 0.0);
        let report = validate_collection(&FeatureCollection::new(vec![feature]));
        assert_eq!(report.invalid_coords, 1);
        assert_eq!(report.unclosed, 0);
    }

    #[test]
    fn test_detects_misnumbered_ids() {
        let collection = FeatureCollection::new(vec![square(2), square(1)]);
        let report = validate_collection(&collection);
        assert_eq!(report.misnumbered, 2);
    }

    #[test]
    fn test_validate_geojson_matches_collection() {
        let collection = FeatureCollection::new(vec![square(1)]);
        let report = validate_geojson(&collection.to_geojson());
        assert!(report.is_valid());
        assert_eq!(report.total, 1);
    }
}
