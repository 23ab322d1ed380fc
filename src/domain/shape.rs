use std::fmt;

/// Shape family picked for a single polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeChoice {
    /// Regular polygon with the given number of vertices
    NGon(usize),
    Circle,
    Oval,
}

impl ShapeChoice {
    /// Tag written to the `shape` property ("4-gon", "circle", "oval")
    pub fn descriptor(&self) -> String {
        match self {
            ShapeChoice::NGon(sides) => format!("{}-gon", sides),
            ShapeChoice::Circle => "circle".to_string(),
            ShapeChoice::Oval => "oval".to_string(),
        }
    }

    /// Number of points in the closed ring this shape rasterizes to
    pub fn ring_len(&self) -> usize {
        match self {
            ShapeChoice::NGon(sides) => sides + 1,
            ShapeChoice::Circle | ShapeChoice::Oval => crate::generator::CURVE_SAMPLES + 1,
        }
    }
}

impl fmt::Display for ShapeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor())
    }
}

/// Which axis an oval is stretched along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvalOrientation {
    EastWest,
    NorthSouth,
}
