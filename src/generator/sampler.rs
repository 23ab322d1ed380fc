//! Random center/radius candidates that stay clear of the poles and the antimeridian.

use rand::Rng;
use tracing::debug;

use crate::error::{GenerationError, Result};
use crate::geometry::{DATELINE_LIMIT_DEG, DegreeRadii, GeoBounds, POLE_LIMIT_DEG};

/// Attempts per polygon before sampling gives up
pub const MAX_SAMPLE_ATTEMPTS: u32 = 100;

/// A validated shape placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub center_lat: f64,
    pub center_lon: f64,
    pub lat_radius_deg: f64,
    pub lon_radius_deg: f64,
}

impl Candidate {
    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::around(
            self.center_lon,
            self.center_lat,
            self.lon_radius_deg,
            self.lat_radius_deg,
        )
    }

    /// True if the ellipse around this center would cross ±85° latitude or ±180° longitude
    pub fn would_wrap(&self) -> bool {
        self.bounds().wraps()
    }
}

/// Draw one candidate without checking it
///
/// Draw order is latitude, longitude, then size; seeded output depends on it.
pub(crate) fn draw_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    min_size_km: f64,
    max_size_km: f64,
) -> Candidate {
    let center_lat = rng.gen_range(-POLE_LIMIT_DEG..=POLE_LIMIT_DEG);
    let center_lon = rng.gen_range(-DATELINE_LIMIT_DEG..=DATELINE_LIMIT_DEG);
    let size_km = rng.gen_range(min_size_km..=max_size_km);

    let radii = DegreeRadii::from_km(size_km, center_lat);
    Candidate {
        center_lat,
        center_lon,
        lat_radius_deg: radii.lat,
        lon_radius_deg: radii.lon,
    }
}

/// Sample candidates until one does not wrap
///
/// # Arguments
/// * `rng` - Random source consumed by every attempt
/// * `min_size_km` / `max_size_km` - Radius bounds in kilometres
///
/// # Returns
/// * `Ok(Candidate)` - First non-wrapping candidate
/// * `Err(SamplingExhausted)` - No valid candidate within [`MAX_SAMPLE_ATTEMPTS`]
pub fn sample_candidate<R: Rng + ?Sized>(
    rng: &mut R,
    min_size_km: f64,
    max_size_km: f64,
) -> Result<Candidate> {
    for attempt in 1..=MAX_SAMPLE_ATTEMPTS {
        let candidate = draw_candidate(rng, min_size_km, max_size_km);
        if !candidate.would_wrap() {
            if attempt > 1 {
                debug!(attempt, "accepted candidate after rejections");
            }
            return Ok(candidate);
        }
    }

    debug!(
        attempts = MAX_SAMPLE_ATTEMPTS,
        min_size_km, max_size_km, "candidate sampling exhausted"
    );
    Err(GenerationError::SamplingExhausted {
        attempts: MAX_SAMPLE_ATTEMPTS,
    })
}
