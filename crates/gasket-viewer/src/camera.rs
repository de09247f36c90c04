//! Orbit camera: drag to rotate the model, scroll to dolly.

use glam::{Mat4, Vec3};

/// Degrees of rotation per logical pixel of drag.
const ROTATE_DEG_PER_PIXEL: f32 = 0.5;

/// Eye-distance change per scroll line.
const DOLLY_PER_LINE: f32 = 0.25;

const DISTANCE_MIN: f32 = 1.2;
const DISTANCE_MAX: f32 = 10.0;

const FOV_Y_DEG: f32 = 45.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

/// Rotates the model under a fixed look-at eye on +Z; horizontal drag spins
/// around Y, vertical drag tilts around X, scroll moves the eye in and out.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    yaw_deg: f32,
    pitch_deg: f32,
    distance: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            distance: 3.0,
        }
    }

    /// Applies a pointer drag in logical pixels.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.yaw_deg += dx * ROTATE_DEG_PER_PIXEL;
        self.pitch_deg += dy * ROTATE_DEG_PER_PIXEL;
    }

    /// Applies scroll input; positive lines move the eye closer.
    pub fn dolly(&mut self, lines: f32) {
        self.distance = (self.distance - lines * DOLLY_PER_LINE).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Column-major model-view-projection matrix for the mesh renderer.
    pub fn mvp(&self, aspect: f32) -> [[f32; 4]; 4] {
        let projection = Mat4::perspective_rh(FOV_Y_DEG.to_radians(), aspect, NEAR, FAR);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.distance), Vec3::ZERO, Vec3::Y);
        // Pitch first, then yaw: matches dragging "grabbing" the model.
        let model =
            Mat4::from_rotation_x(self.pitch_deg.to_radians()) * Mat4::from_rotation_y(self.yaw_deg.to_radians());
        (projection * view * model).to_cols_array_2d()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_accumulates_rotation() {
        let mut cam = OrbitCamera::new();
        cam.drag(10.0, -4.0);
        cam.drag(2.0, 0.0);
        assert_eq!(cam.yaw_deg, 6.0);
        assert_eq!(cam.pitch_deg, -2.0);
    }

    #[test]
    fn dolly_clamps_to_range() {
        let mut cam = OrbitCamera::new();
        cam.dolly(1000.0);
        assert_eq!(cam.distance, DISTANCE_MIN);
        cam.dolly(-1000.0);
        assert_eq!(cam.distance, DISTANCE_MAX);
    }

    #[test]
    fn identity_rotation_keeps_origin_centered() {
        let cam = OrbitCamera::new();
        let mvp = glam::Mat4::from_cols_array_2d(&cam.mvp(4.0 / 3.0));
        let clip = mvp * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
    }
}
