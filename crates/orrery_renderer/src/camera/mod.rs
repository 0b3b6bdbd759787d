pub mod uniform;

pub use uniform::{GlobalsUniform, GpuGlobals, ModelUniform, SceneParams};

use glam::{Mat4, Vec3};

/// CPU-side camera state.  The renderer owns the GPU resources (uniform
/// buffer, bind group); applications inspect and modify this directly.
#[derive(Debug, Clone)]
pub struct Camera {
    // --- view parameters --------------------------------------------------
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    // --- projection parameters --------------------------------------------
    pub fovy: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0f32.to_radians(),
            aspect: 1.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    /// Builds the combined view-projection matrix from the current state.
    pub fn view_projection(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// Call when viewport dimensions change.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn target_projects_to_screen_center() {
        let cam = Camera {
            eye: Vec3::new(0.0, 2.0, 5.0),
            target: Vec3::new(1.0, 0.0, -1.0),
            ..Default::default()
        };
        let clip = cam.view_projection() * cam.target.extend(1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }

    #[test]
    fn points_behind_the_eye_clip_negative() {
        let cam = Camera::default();
        let behind: Vec4 = cam.view_projection() * Vec4::new(0.0, 0.0, 10.0, 1.0);
        assert!(behind.w < 0.0);
    }
}
