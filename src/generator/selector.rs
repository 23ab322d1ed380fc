use rand::Rng;

use super::GenerationParams;
use crate::domain::ShapeChoice;

/// Ordered shape choices for a batch: n-gons first, then circle and oval
///
/// Each vertex count is its own entry, so a wide vertex range makes
/// n-gons proportionally more likely than circles or ovals. Choices are
/// addressed by index; the list is never materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeChoices {
    min_vertices: usize,
    max_vertices: usize,
    include_circles: bool,
    include_ovals: bool,
}

impl ShapeChoices {
    fn ngon_count(&self) -> usize {
        if self.max_vertices < self.min_vertices {
            0
        } else {
            (self.max_vertices - self.min_vertices).saturating_add(1)
        }
    }

    pub fn len(&self) -> usize {
        self.ngon_count()
            .saturating_add(self.include_circles as usize)
            .saturating_add(self.include_ovals as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Choice at `index` in list order
    pub fn get(&self, index: usize) -> Option<ShapeChoice> {
        let ngons = self.ngon_count();
        if index < ngons {
            return Some(ShapeChoice::NGon(self.min_vertices + index));
        }

        let mut curves = Vec::with_capacity(2);
        if self.include_circles {
            curves.push(ShapeChoice::Circle);
        }
        if self.include_ovals {
            curves.push(ShapeChoice::Oval);
        }
        curves.get(index - ngons).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ShapeChoice> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }
}

/// All shapes a batch may produce
pub fn available_shapes(params: &GenerationParams) -> ShapeChoices {
    ShapeChoices {
        min_vertices: params.min_vertices,
        max_vertices: params.max_vertices,
        include_circles: params.include_circles,
        include_ovals: params.include_ovals,
    }
}

/// Pick one shape uniformly from `shapes`
///
/// Returns `None` only for an empty list, which validated parameters never produce.
pub fn choose_shape<R: Rng + ?Sized>(rng: &mut R, shapes: &ShapeChoices) -> Option<ShapeChoice> {
    if shapes.is_empty() {
        return None;
    }
    shapes.get(rng.gen_range(0..shapes.len()))
}
