use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_inside_box_intersects() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(aabb.intersects_circle(Vec2::new(5.0, 5.0), 1.0));
    }

    #[test]
    fn test_circle_touching_edge_intersects() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // Circle center 3 units right of the box, radius exactly 3
        assert!(aabb.intersects_circle(Vec2::new(13.0, 5.0), 3.0));
    }

    #[test]
    fn test_circle_outside_box_does_not_intersect() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!aabb.intersects_circle(Vec2::new(13.1, 5.0), 3.0));
    }

    #[test]
    fn test_circle_near_corner() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // Corner distance is sqrt(2) ~ 1.414 from (11, 11)
        assert!(aabb.intersects_circle(Vec2::new(11.0, 11.0), 1.5));
        assert!(!aabb.intersects_circle(Vec2::new(11.0, 11.0), 1.4));
    }
}
