//! Turn a placed shape into a closed ring of (lon, lat) points.
//!
//! Vertices are angularly regular in the flat lon/lat plane, not geodesically.

use std::f64::consts::PI;

use rand::Rng;

use super::Candidate;
use crate::domain::{OvalOrientation, Point, Ring, ShapeChoice};

/// Points sampled around circles and ovals (before closing)
pub const CURVE_SAMPLES: usize = 64;

const OVAL_MAJOR_SCALE: f64 = 1.5;
const OVAL_MINOR_SCALE: f64 = 0.7;

/// Rasterize `shape` around `candidate`
///
/// Only ovals consume randomness (their orientation).
pub fn rasterize<R: Rng + ?Sized>(rng: &mut R, candidate: &Candidate, shape: ShapeChoice) -> Ring {
    let orientation = draw_orientation(rng, shape);
    shape_ring(candidate, shape, orientation)
}

/// Draw an oval orientation; other shapes take no draw and get `EastWest`
pub fn draw_orientation<R: Rng + ?Sized>(rng: &mut R, shape: ShapeChoice) -> OvalOrientation {
    match shape {
        ShapeChoice::Oval if rng.gen_bool(0.5) => OvalOrientation::NorthSouth,
        _ => OvalOrientation::EastWest,
    }
}

/// Rasterize with a fixed orientation; `orientation` only affects ovals
pub fn shape_ring(candidate: &Candidate, shape: ShapeChoice, orientation: OvalOrientation) -> Ring {
    match shape {
        ShapeChoice::NGon(sides) => ngon_ring(candidate, sides),
        ShapeChoice::Circle => circle_ring(candidate),
        ShapeChoice::Oval => oval_ring(candidate, orientation),
    }
}

/// Regular polygon inscribed in the ellipse given by the candidate radii
pub fn ngon_ring(candidate: &Candidate, sides: usize) -> Ring {
    ellipse_ring(
        candidate,
        sides,
        candidate.lon_radius_deg,
        candidate.lat_radius_deg,
    )
}

/// Circle in the lon/lat plane using the mean of both radii
pub fn circle_ring(candidate: &Candidate) -> Ring {
    let radius = (candidate.lat_radius_deg + candidate.lon_radius_deg) / 2.0;
    ellipse_ring(candidate, CURVE_SAMPLES, radius, radius)
}

/// Ellipse stretched 1.5x along one axis and squeezed to 0.7x along the other
pub fn oval_ring(candidate: &Candidate, orientation: OvalOrientation) -> Ring {
    let (x_radius, y_radius) = match orientation {
        OvalOrientation::EastWest => (
            candidate.lon_radius_deg * OVAL_MAJOR_SCALE,
            candidate.lat_radius_deg * OVAL_MINOR_SCALE,
        ),
        OvalOrientation::NorthSouth => (
            candidate.lon_radius_deg * OVAL_MINOR_SCALE,
            candidate.lat_radius_deg * OVAL_MAJOR_SCALE,
        ),
    };
    ellipse_ring(candidate, CURVE_SAMPLES, x_radius, y_radius)
}

fn ellipse_ring(candidate: &Candidate, samples: usize, x_radius: f64, y_radius: f64) -> Ring {
    let mut ring: Ring = Vec::with_capacity(samples + 1);

    for i in 0..samples {
        let angle = 2.0 * PI * i as f64 / samples as f64;
        let point: Point = (
            candidate.center_lon + x_radius * angle.cos(),
            candidate.center_lat + y_radius * angle.sin(),
        );
        ring.push(point);
    }

    if let Some(&first) = ring.first() {
        ring.push(first);
    }

    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn candidate() -> Candidate {
        Candidate {
            center_lat: 10.0,
            center_lon: 20.0,
            lat_radius_deg: 1.0,
            lon_radius_deg: 2.0,
        }
    }

    #[test]
    fn test_ngon_square() {
        let ring = ngon_ring(&candidate(), 4);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());

        // angle 0 sits on the east end of the ellipse
        assert!((ring[0].0 - 22.0).abs() < 1e-12);
        assert!((ring[0].1 - 10.0).abs() < 1e-12);
        // angle π/2 sits on the north end
        assert!((ring[1].0 - 20.0).abs() < 1e-12);
        assert!((ring[1].1 - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_uses_average_radius() {
        let ring = circle_ring(&candidate());
        assert_eq!(ring.len(), CURVE_SAMPLES + 1);
        assert_eq!(ring.first(), ring.last());

        for &(lon, lat) in &ring {
            let r = ((lon - 20.0).powi(2) + (lat - 10.0).powi(2)).sqrt();
            assert!((r - 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_oval_east_west() {
        let ring = oval_ring(&candidate(), OvalOrientation::EastWest);
        assert_eq!(ring.len(), 65);
        // x extent 2.0 * 1.5, y extent 1.0 * 0.7
        assert!((ring[0].0 - 23.0).abs() < 1e-12);
        assert!((ring[16].1 - 10.7).abs() < 1e-12);
    }

    #[test]
    fn test_oval_north_south() {
        let ring = oval_ring(&candidate(), OvalOrientation::NorthSouth);
        assert_eq!(ring.len(), 65);
        // x extent 2.0 * 0.7, y extent 1.0 * 1.5
        assert!((ring[0].0 - 21.4).abs() < 1e-12);
        assert!((ring[16].1 - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_orientation_draw_only_for_ovals() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut untouched = StdRng::seed_from_u64(21);

        assert_eq!(
            draw_orientation(&mut rng, ShapeChoice::NGon(4)),
            OvalOrientation::EastWest
        );
        assert_eq!(
            draw_orientation(&mut rng, ShapeChoice::Circle),
            OvalOrientation::EastWest
        );
        assert_eq!(rng.r#gen::<u64>(), untouched.r#gen::<u64>());
    }

    #[test]
    fn test_rasterize_ring_lengths() {
        let mut rng = StdRng::seed_from_u64(5);
        for shape in [
            ShapeChoice::NGon(3),
            ShapeChoice::NGon(9),
            ShapeChoice::Circle,
            ShapeChoice::Oval,
        ] {
            let ring = rasterize(&mut rng, &candidate(), shape);
            assert_eq!(ring.len(), shape.ring_len());
            assert_eq!(ring.first(), ring.last());
        }
    }
}
