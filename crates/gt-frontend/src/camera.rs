//! 2D view camera: world units to screen pixels

use glam::Vec2;

/// Smallest zoom (pixels per world unit)
pub const MIN_ZOOM: f32 = 5.0;

/// Largest zoom (pixels per world unit)
pub const MAX_ZOOM: f32 = 400.0;

/// Zoom change per scrolled point
const ZOOM_SENSITIVITY: f32 = 0.002;

/// Pan/zoom camera over the gear plane. World y points up, screen y points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2d {
    /// World point shown at the viewport center
    pub center: Vec2,
    /// Pixels per world unit
    pub zoom: f32,
}

impl Default for Camera2d {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            zoom: 40.0,
        }
    }
}

impl Camera2d {
    /// World position to screen position, given the viewport center in pixels
    pub fn world_to_screen(&self, world: Vec2, viewport_center: Vec2) -> Vec2 {
        let offset = (world - self.center) * self.zoom;
        Vec2::new(viewport_center.x + offset.x, viewport_center.y - offset.y)
    }

    /// Screen position to world position, given the viewport center in pixels
    pub fn screen_to_world(&self, screen: Vec2, viewport_center: Vec2) -> Vec2 {
        let offset = screen - viewport_center;
        self.center + Vec2::new(offset.x, -offset.y) / self.zoom
    }

    /// Drag the scene with the pointer by `delta` pixels
    pub fn pan(&mut self, delta: Vec2) {
        self.center -= Vec2::new(delta.x, -delta.y) / self.zoom;
    }

    /// Zoom in for positive scroll, out for negative
    pub fn zoom_by_scroll(&mut self, scroll: f32) {
        self.zoom = (self.zoom * (scroll * ZOOM_SENSITIVITY).exp()).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Center on the origin and zoom so a circle of `extent` fits the viewport
    pub fn fit(&mut self, extent: f32, viewport_size: Vec2) {
        self.center = Vec2::ZERO;
        let half = viewport_size.min_element() * 0.5;
        if extent > 0.0 && half > 0.0 {
            self.zoom = (half * 0.9 / extent).clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_screen_roundtrip() {
        let camera = Camera2d {
            center: Vec2::new(1.5, -2.0),
            zoom: 25.0,
        };
        let viewport_center = Vec2::new(400.0, 300.0);
        let world = Vec2::new(-3.0, 4.25);

        let screen = camera.world_to_screen(world, viewport_center);
        let back = camera.screen_to_world(screen, viewport_center);
        assert!((back - world).length() < EPSILON);
    }

    #[test]
    fn test_world_y_points_up() {
        let camera = Camera2d::default();
        let viewport_center = Vec2::new(100.0, 100.0);
        let above = camera.world_to_screen(Vec2::new(0.0, 1.0), viewport_center);
        assert!(above.y < viewport_center.y);
    }

    #[test]
    fn test_pan_follows_pointer() {
        let mut camera = Camera2d::default();
        let viewport_center = Vec2::new(200.0, 200.0);
        let world = Vec2::new(1.0, 1.0);
        let before = camera.world_to_screen(world, viewport_center);

        camera.pan(Vec2::new(30.0, -12.0));

        let after = camera.world_to_screen(world, viewport_center);
        assert!((after - before - Vec2::new(30.0, -12.0)).length() < EPSILON);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera2d::default();
        camera.zoom_by_scroll(100_000.0);
        assert_eq!(camera.zoom, MAX_ZOOM);
        camera.zoom_by_scroll(-100_000.0);
        assert_eq!(camera.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_fit_contains_extent() {
        let mut camera = Camera2d {
            center: Vec2::new(9.0, 9.0),
            zoom: 1.0,
        };
        camera.fit(10.0, Vec2::new(800.0, 600.0));

        assert_eq!(camera.center, Vec2::ZERO);
        assert!(10.0 * camera.zoom <= 300.0);
    }
}
