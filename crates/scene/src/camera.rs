//! Perspective orbit camera with damped rotation.
//!
//! The camera always looks at `target` and moves on a sphere around it.
//! Pointer drags accumulate a spherical delta that [`OrbitCamera::update`]
//! bleeds off a fraction at a time, so motion keeps gliding briefly after
//! the pointer is released.

use foundation::math::Vec3;

use crate::picking::Ray;

/// Keeps the polar angle away from the poles where the view basis degenerates.
const POLAR_EPSILON: f64 = 1e-6;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub rotate_speed: f64,
    pub zoom_speed: f64,
    /// Fraction of the pending rotation applied per update.
    pub damping: f64,
    pending_theta: f64,
    pending_phi: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 2.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_deg: 70.0,
            aspect: 16.0 / 9.0,
            near: 0.001,
            far: 1000.0,
            min_distance: 1.2,
            max_distance: 3.0,
            rotate_speed: 0.3,
            zoom_speed: 0.2,
            damping: 0.05,
            pending_theta: 0.0,
            pending_phi: 0.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(&self) -> f64 {
        (self.eye - self.target).length()
    }

    pub fn set_aspect(&mut self, aspect: f64) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Queues an orbit from a pointer drag of `(dx_px, dy_px)` on a surface
    /// `surface_height_px` tall. A drag across the full height turns the
    /// camera by `2π · rotate_speed`.
    pub fn orbit(&mut self, dx_px: f64, dy_px: f64, surface_height_px: f64) {
        let h = surface_height_px.max(1.0);
        let k = 2.0 * std::f64::consts::PI * self.rotate_speed / h;
        self.pending_theta -= dx_px * k;
        self.pending_phi -= dy_px * k;
    }

    /// Dollies toward (`delta < 0`) or away from (`delta > 0`) the target.
    pub fn zoom(&mut self, delta: f64) {
        let offset = self.eye - self.target;
        let distance = offset.length();
        if distance <= 0.0 {
            return;
        }
        let next = (distance * (delta * 0.002 * self.zoom_speed).exp())
            .clamp(self.min_distance, self.max_distance);
        self.eye = self.target + offset * (next / distance);
    }

    /// Moves the eye to `eye` looking at the origin, dropping any queued
    /// rotation.
    pub fn look_from(&mut self, eye: Vec3) {
        self.target = Vec3::ZERO;
        self.eye = eye;
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.pending_theta.abs() < 1e-9 && self.pending_phi.abs() < 1e-9
    }

    /// Applies one damping step of the queued rotation.
    pub fn update(&mut self) {
        if self.is_settled() {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
            return;
        }

        let offset = self.eye - self.target;
        let radius = offset.length().clamp(self.min_distance, self.max_distance);
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if offset.length() > 0.0 {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            std::f64::consts::FRAC_PI_2
        };

        let k = self.damping.clamp(0.0, 1.0);
        theta += self.pending_theta * k;
        phi = (phi + self.pending_phi * k)
            .clamp(POLAR_EPSILON, std::f64::consts::PI - POLAR_EPSILON);
        self.pending_theta *= 1.0 - k;
        self.pending_phi *= 1.0 - k;

        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        self.eye = self.target
            + Vec3::new(
                radius * sin_phi * sin_theta,
                radius * cos_phi,
                radius * sin_phi * cos_theta,
            );
    }

    /// Orthonormal view basis `(forward, right, up)`.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.eye)
            .normalized()
            .unwrap_or(Vec3::new(0.0, 0.0, -1.0));
        let right = forward
            .cross(self.up)
            .normalized()
            // Looking straight along `up` (e.g. focused on a pole).
            .or_else(|| forward.cross(Vec3::new(0.0, 0.0, -1.0)).normalized())
            .unwrap_or(Vec3::new(1.0, 0.0, 0.0));
        let up = right.cross(forward);
        (forward, right, up)
    }

    /// Ray from the eye through a point given in normalized device
    /// coordinates.
    pub fn ray_through_ndc(&self, ndc_x: f64, ndc_y: f64) -> Ray {
        let (forward, right, up) = self.basis();
        let tan_half = (self.fov_y_deg.to_radians() * 0.5).tan();
        let dir = forward + right * (ndc_x * tan_half * self.aspect) + up * (ndc_y * tan_half);
        Ray::new(self.eye, dir)
    }

    /// Projects a world point to normalized device coordinates.
    ///
    /// Returns `(ndc_x, ndc_y, depth)` where `depth` is the distance along
    /// the view direction, or `None` when the point is not in front of the
    /// near plane.
    pub fn project_to_ndc(&self, point: Vec3) -> Option<(f64, f64, f64)> {
        let (forward, right, up) = self.basis();
        let d = point - self.eye;
        let depth = d.dot(forward);
        if depth <= self.near || depth >= self.far {
            return None;
        }
        let tan_half = (self.fov_y_deg.to_radians() * 0.5).tan();
        Some((
            d.dot(right) / (depth * tan_half * self.aspect),
            d.dot(up) / (depth * tan_half),
            depth,
        ))
    }

    /// On-screen radius in pixels of a sphere of `world_radius` at `depth`.
    pub fn screen_radius(&self, world_radius: f64, depth: f64, surface_height_px: f64) -> f64 {
        let tan_half = (self.fov_y_deg.to_radians() * 0.5).tan();
        if depth <= 0.0 {
            return 0.0;
        }
        world_radius / (depth * tan_half) * surface_height_px * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::OrbitCamera;
    use foundation::math::Vec3;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = OrbitCamera::default();
        let ray = cam.ray_through_ndc(0.0, 0.0);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 2.0));
        let dir = ray.dir.normalized().unwrap();
        assert_close(dir.z, -1.0, 1e-12);
    }

    #[test]
    fn project_inverts_ray() {
        let mut cam = OrbitCamera::default();
        cam.set_aspect(1.5);
        let ray = cam.ray_through_ndc(0.3, -0.4);
        let point = ray.origin + ray.dir.normalized().unwrap() * 1.7;
        let (x, y, _) = cam.project_to_ndc(point).unwrap();
        assert_close(x, 0.3, 1e-9);
        assert_close(y, -0.4, 1e-9);
        assert!(cam.project_to_ndc(Vec3::new(0.0, 0.0, 5.0)).is_none());
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.zoom(-1.0e6);
        assert_close(cam.distance(), cam.min_distance, 1e-12);
        cam.zoom(1.0e6);
        assert_close(cam.distance(), cam.max_distance, 1e-12);
    }

    #[test]
    fn orbit_glides_and_keeps_distance() {
        let mut cam = OrbitCamera::default();
        cam.orbit(100.0, 0.0, 600.0);
        assert!(!cam.is_settled());
        let before = cam.eye;
        cam.update();
        assert_ne!(cam.eye, before);
        assert_close(cam.distance(), 2.0, 1e-9);
        for _ in 0..2000 {
            cam.update();
        }
        assert!(cam.is_settled());
    }

    #[test]
    fn look_from_pole_has_valid_basis() {
        let mut cam = OrbitCamera::default();
        cam.orbit(50.0, 50.0, 600.0);
        cam.look_from(Vec3::new(0.0, 2.0, 0.0));
        assert!(cam.is_settled());
        let (forward, right, up) = cam.basis();
        assert_close(forward.y, -1.0, 1e-12);
        assert_close(right.length(), 1.0, 1e-12);
        assert_close(up.length(), 1.0, 1e-12);
    }
}
