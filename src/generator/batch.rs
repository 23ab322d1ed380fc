use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::sampler::draw_candidate;
use super::{
    GenerationParams, MAX_SAMPLE_ATTEMPTS, ShapeChoices, available_shapes, choose_shape,
    draw_orientation, seed_for_feature, shape_ring,
};
use crate::domain::{FeatureCollection, MockFeature, OvalOrientation, Ring, ShapeChoice};
use crate::error::{GenerationError, Result};
use crate::geometry::GeoBounds;

/// Generate one polygon that stays clear of the poles and the antimeridian
///
/// # Algorithm
/// 1. Draw a center and size, reject it if its radii wrap
/// 2. On the first accepted candidate, pick a shape (and oval orientation)
/// 3. Rasterize it; if the ring itself wraps (circles and ovals can reach
///    past the sampled radii), redraw only the center and size
///
/// The shape is drawn exactly once, so shape frequencies stay uniform over
/// `shapes` whatever the rejection rate. All attempts share the
/// [`MAX_SAMPLE_ATTEMPTS`] budget.
pub fn generate_polygon<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerationParams,
    shapes: &ShapeChoices,
) -> Result<(Ring, ShapeChoice)> {
    let mut picked: Option<(ShapeChoice, OvalOrientation)> = None;

    for attempt in 1..=MAX_SAMPLE_ATTEMPTS {
        let candidate = draw_candidate(rng, params.min_size_km, params.max_size_km);
        if candidate.would_wrap() {
            continue;
        }

        let (shape, orientation) = match picked {
            Some(choice) => choice,
            None => {
                let shape = choose_shape(rng, shapes).ok_or_else(|| {
                    GenerationError::InvalidParameters("no shape families enabled".to_string())
                })?;
                let choice = (shape, draw_orientation(rng, shape));
                picked = Some(choice);
                choice
            }
        };
        let ring = shape_ring(&candidate, shape, orientation);

        if GeoBounds::from_points(&ring).is_none_or(|bounds| bounds.wraps()) {
            debug!(attempt, %shape, "rasterized ring crosses a limit, resampling placement");
            continue;
        }

        return Ok((ring, shape));
    }

    debug!(
        attempts = MAX_SAMPLE_ATTEMPTS,
        min_size_km = params.min_size_km,
        max_size_km = params.max_size_km,
        "polygon sampling exhausted"
    );
    Err(GenerationError::SamplingExhausted {
        attempts: MAX_SAMPLE_ATTEMPTS,
    })
}

/// Generate a full batch from a single random stream
///
/// Feature ids are 1-based and follow generation order. Any failure aborts
/// the whole batch; no partial collection is returned.
pub fn generate_mock_polygons<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerationParams,
) -> Result<FeatureCollection> {
    params.validate()?;
    let shapes = available_shapes(params);

    let mut features = Vec::with_capacity(params.count);
    for index in 0..params.count {
        let (ring, shape) = generate_polygon(rng, params, &shapes)?;
        features.push(MockFeature::new(index + 1, ring, shape));
    }

    info!(count = features.len(), "generated mock polygons");
    Ok(FeatureCollection::new(features))
}

/// Generate a batch where every feature draws from its own seeded stream
///
/// Feature `id` uses [`seed_for_feature`]`(seed, id - 1)`, so the result is
/// identical to calling [`generate_feature_seeded`] for each id in order.
pub fn generate_seeded(params: &GenerationParams, seed: u64) -> Result<FeatureCollection> {
    params.validate()?;
    let shapes = available_shapes(params);

    let features = (0..params.count)
        .map(|index| seeded_feature(params, &shapes, seed, index))
        .collect::<Result<Vec<_>>>()?;

    info!(count = features.len(), seed, "generated seeded mock polygons");
    Ok(FeatureCollection::new(features))
}

/// Regenerate the feature with the given 1-based `id` of a seeded batch
pub fn generate_feature_seeded(
    params: &GenerationParams,
    seed: u64,
    id: usize,
) -> Result<MockFeature> {
    params.validate()?;
    if id == 0 {
        return Err(GenerationError::InvalidParameters(
            "feature ids start at 1".to_string(),
        ));
    }
    let shapes = available_shapes(params);
    seeded_feature(params, &shapes, seed, id - 1)
}

fn seeded_feature(
    params: &GenerationParams,
    shapes: &ShapeChoices,
    seed: u64,
    index: usize,
) -> Result<MockFeature> {
    let mut rng = StdRng::seed_from_u64(seed_for_feature(seed, index));
    let (ring, shape) = generate_polygon(&mut rng, params, shapes)?;
    Ok(MockFeature::new(index + 1, ring, shape))
}
