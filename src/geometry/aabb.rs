use glam::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning the two given corners (component-wise ordered).
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Tightest box around `points`, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }

    /// The eight corners, `x` varying fastest.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// World-aligned box enclosing this box after `matrix` is applied.
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let corners = self.corners().map(|c| matrix.transform_point3(c));
        let (min, max) = corners[1..].iter().fold(
            (corners[0], corners[0]),
            |(lo, hi), p| (lo.min(*p), hi.max(*p)),
        );
        Self { min, max }
    }
}
