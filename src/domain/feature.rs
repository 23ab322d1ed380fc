use super::ShapeChoice;

/// A coordinate as (lon, lat) in degrees, GeoJSON axis order
pub type Point = (f64, f64);

/// Closed sequence of points; the last point repeats the first
pub type Ring = Vec<Point>;

/// A generated polygon with its batch position and shape
#[derive(Debug, Clone, PartialEq)]
pub struct MockFeature {
    /// 1-based position in generation order
    pub id: usize,
    /// Outer ring; generated polygons never have holes
    pub ring: Ring,
    pub shape: ShapeChoice,
}

impl MockFeature {
    pub fn new(id: usize, ring: Ring, shape: ShapeChoice) -> Self {
        Self { id, ring, shape }
    }

    pub fn is_closed(&self) -> bool {
        self.ring.len() >= 4 && self.ring.first() == self.ring.last()
    }
}

/// Ordered batch of generated features
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<MockFeature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<MockFeature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MockFeature> {
        self.features.iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a MockFeature;
    type IntoIter = std::slice::Iter<'a, MockFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
