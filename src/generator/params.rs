use crate::error::{GenerationError, Result};

/// Smallest vertex count a regular polygon can have
pub const MIN_NGON_VERTICES: usize = 3;

/// Largest vertex count accepted for n-gons
pub const MAX_NGON_VERTICES: usize = 1024;

/// Smallest accepted shape radius in km
pub const MIN_SIZE_KM: f64 = 1.0;

/// Immutable settings for one batch
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Number of features to generate
    pub count: usize,
    /// Lower bound of the sampled shape radius in km
    pub min_size_km: f64,
    /// Upper bound of the sampled shape radius in km
    pub max_size_km: f64,
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub include_circles: bool,
    pub include_ovals: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            count: 1000,
            min_size_km: 1.0,
            max_size_km: 315.0,
            min_vertices: 4,
            max_vertices: 4,
            include_circles: true,
            include_ovals: true,
        }
    }
}

impl GenerationParams {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_size_km(mut self, min_size_km: f64, max_size_km: f64) -> Self {
        self.min_size_km = min_size_km;
        self.max_size_km = max_size_km;
        self
    }

    pub fn with_vertices(mut self, min_vertices: usize, max_vertices: usize) -> Self {
        self.min_vertices = min_vertices;
        self.max_vertices = max_vertices;
        self
    }

    pub fn with_circles(mut self, include: bool) -> Self {
        self.include_circles = include;
        self
    }

    pub fn with_ovals(mut self, include: bool) -> Self {
        self.include_ovals = include;
        self
    }

    /// Check parameter invariants before any random draw happens
    pub fn validate(&self) -> Result<()> {
        if !self.min_size_km.is_finite() || !self.max_size_km.is_finite() {
            return Err(GenerationError::InvalidParameters(format!(
                "size bounds must be finite (got {} and {})",
                self.min_size_km, self.max_size_km
            )));
        }
        if self.min_size_km < MIN_SIZE_KM {
            return Err(GenerationError::InvalidParameters(format!(
                "min_size_km must be at least {} (got {})",
                MIN_SIZE_KM, self.min_size_km
            )));
        }
        if self.min_size_km > self.max_size_km {
            return Err(GenerationError::InvalidParameters(format!(
                "min_size_km ({}) must not exceed max_size_km ({})",
                self.min_size_km, self.max_size_km
            )));
        }
        if self.min_vertices < MIN_NGON_VERTICES {
            return Err(GenerationError::InvalidParameters(format!(
                "min_vertices must be at least {} (got {})",
                MIN_NGON_VERTICES, self.min_vertices
            )));
        }
        if self.min_vertices > self.max_vertices {
            return Err(GenerationError::InvalidParameters(format!(
                "min_vertices ({}) must not exceed max_vertices ({})",
                self.min_vertices, self.max_vertices
            )));
        }
        if self.max_vertices > MAX_NGON_VERTICES {
            return Err(GenerationError::InvalidParameters(format!(
                "max_vertices must be at most {} (got {})",
                MAX_NGON_VERTICES, self.max_vertices
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        assert!(GenerationParams::default().validate().is_ok());
    }

    #[test]
    fn test_equal_bounds_are_valid() {
        let params = GenerationParams::default()
            .with_size_km(10.0, 10.0)
            .with_vertices(3, 3);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_size_bounds_reversed() {
        let params = GenerationParams::default().with_size_km(50.0, 10.0);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, GenerationError::InvalidParameters(_)));
    }

    #[test]
    fn test_non_positive_size() {
        let params = GenerationParams::default().with_size_km(0.0, 10.0);
        assert!(params.validate().is_err());

        let params = GenerationParams::default().with_size_km(-5.0, 10.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_size_below_one_km() {
        let params = GenerationParams::default().with_size_km(0.5, 10.0);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, GenerationError::InvalidParameters(_)));

        let params = GenerationParams::default().with_size_km(1.0, 10.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_non_finite_size() {
        let params = GenerationParams::default().with_size_km(1.0, f64::INFINITY);
        assert!(params.validate().is_err());

        let params = GenerationParams::default().with_size_km(f64::NAN, 10.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_vertex_bounds() {
        let params = GenerationParams::default().with_vertices(2, 5);
        assert!(params.validate().is_err());

        let params = GenerationParams::default().with_vertices(6, 4);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_huge_vertex_count_rejected() {
        let params = GenerationParams::default().with_vertices(4, usize::MAX);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, GenerationError::InvalidParameters(_)));

        let params = GenerationParams::default().with_vertices(4, MAX_NGON_VERTICES);
        assert!(params.validate().is_ok());
    }
}
