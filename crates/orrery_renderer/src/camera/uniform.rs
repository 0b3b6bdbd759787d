/// GPU-side uniform plumbing: the per-frame globals buffer and the
/// per-object model uniform.
///
/// `GpuGlobals` owns the `wgpu::Buffer` holding everything the shaders
/// read once per frame (view-projection, eye, light, material color,
/// clock values) and the group(0) bind group.  `ModelUniform` is the
/// group(1) payload each scene object owns.
use std::sync::Arc;

use glam::{Mat4, Vec4};

use crate::camera::Camera;
use crate::resources::buffer;

/// Frame-constant values marshaled to the GPU before any pass executes.
/// Field order matches the `Globals` struct in `lambert.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalsUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub light_pos: [f32; 4],
    pub light_color: [f32; 4],
    pub material_color: [f32; 4],
    /// Seconds since application start.
    pub time: f32,
    /// Frame counter.
    pub tick: f32,
    pub _pad: [f32; 2],
}

impl GlobalsUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 4],
            light_pos: [0.0, 10.0, 0.0, 1.0],
            light_color: [1.0; 4],
            material_color: [1.0; 4],
            time: 0.0,
            tick: 0.0,
            _pad: [0.0; 2],
        }
    }
}

impl Default for GlobalsUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Light and material values supplied by the application each frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneParams {
    /// World-space light position, `w == 1`.
    pub light_pos: Vec4,
    /// Linear RGBA light color.
    pub light_color: Vec4,
    /// Linear RGBA base color applied to every object.
    pub material_color: Vec4,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            light_pos: Vec4::new(0.0, 10.0, 0.0, 1.0),
            light_color: Vec4::ONE,
            material_color: Vec4::new(0.7, 0.7, 0.7, 1.0),
        }
    }
}

/// Per-object uniform: model matrix plus its inverse transpose so normals
/// survive non-uniform scaling.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub model_inv_tr: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn from_matrix(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            model_inv_tr: model.inverse().transpose().to_cols_array_2d(),
        }
    }
}

/// GPU residence of [`GlobalsUniform`]: the buffer and its group(0) bind
/// group.
pub struct GpuGlobals {
    pub uniform: GlobalsUniform,
    pub buffer: Arc<wgpu::Buffer>,
    pub bind_group: Arc<wgpu::BindGroup>,
}

impl GpuGlobals {
    /// Allocates the uniform buffer and bind group.  `layout` must carry a
    /// single `UNIFORM` buffer entry at binding 0.
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let uniform = GlobalsUniform::new();
        let buf = buffer::create_uniform(device, "Globals Uniform Buffer", &uniform);

        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buf.as_entire_binding(),
            }],
        }));

        Self {
            uniform,
            buffer: buf,
            bind_group,
        }
    }

    /// Marshals the fresh frame values into the GPU buffer.  Call once
    /// per frame, before any render pass executes.
    pub fn sync(
        &mut self,
        queue: &wgpu::Queue,
        camera: &Camera,
        scene: &SceneParams,
        time: f32,
        tick: f32,
    ) {
        self.uniform.view_proj = camera.view_projection().to_cols_array_2d();
        self.uniform.eye = camera.eye.extend(1.0).to_array();
        self.uniform.light_pos = scene.light_pos.to_array();
        self.uniform.light_color = scene.light_color.to_array();
        self.uniform.material_color = scene.material_color.to_array();
        self.uniform.time = time;
        self.uniform.tick = tick;
        buffer::update_uniform(queue, &self.buffer, &self.uniform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn globals_uniform_is_16_byte_aligned() {
        // WGSL uniform blocks require 16-byte struct size alignment.
        assert_eq!(std::mem::size_of::<GlobalsUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<ModelUniform>(), 128);
    }

    #[test]
    fn model_uniform_inverse_transpose_fixes_scaled_normals() {
        // Scale a +y normal by a non-uniform matrix: multiplying by the
        // plain model matrix would skew it; the inverse transpose keeps
        // it parallel to +y.
        let model = Mat4::from_scale(Vec3::new(2.0, 0.5, 1.0));
        let u = ModelUniform::from_matrix(model);
        let inv_tr = Mat4::from_cols_array_2d(&u.model_inv_tr);
        let n = (inv_tr * Vec4::new(0.0, 1.0, 0.0, 0.0)).truncate().normalize();
        assert!(n.distance(Vec3::Y) < 1e-6);
    }
}
