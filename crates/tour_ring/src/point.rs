use std::fmt;

/// Planar point supplied by the caller. Coordinates are opaque to the ring
/// beyond the Euclidean metric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dist(&self, rhs: &Self) -> f64 {
        let dx = self.x - rhs.x;
        let dy = self.y - rhs.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{},{}", b1.format(self.x), b2.format(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn dist_uses_euclidean_metric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.dist(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn dist_is_symmetric_and_zero_for_same_point() {
        let a = Point::new(-2.5, 7.0);
        let b = Point::new(11.0, -3.25);

        assert!((a.dist(&b) - b.dist(&a)).abs() < 1e-12);
        assert_eq!(a.dist(&a), 0.0);
    }

    #[test]
    fn non_finite_coordinates_are_invalid() {
        assert!(Point::new(1.0, -1.0).is_valid());
        assert!(!Point::new(f64::NAN, 0.0).is_valid());
        assert!(!Point::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn display_formats_as_x_y() {
        assert_eq!(Point::new(1.5, -2.25).to_string(), "1.5,-2.25");
        assert_eq!(Point::from((10.0, 0.0)).to_string(), "10.0,0.0");
    }
}
