//! The demo application: scene construction, per-frame updates, and the
//! winit event plumbing.
//!
//! The scene is a tessellated planet icosphere at the origin, a moon
//! icosphere orbiting it, a reference cube, and a ground quad.  The
//! bracket keys re-tessellate the planet live: the mesh is regenerated
//! from scratch and swapped in whole — meshes are never mutated after
//! construction.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use anyhow::Context as _;
use glam::{Mat4, Vec3, Vec4};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orrery_geometry::primitives::{cube, icosphere, square};
use orrery_renderer::Renderer;

use crate::clock::FrameClock;
use crate::config::DemoConfig;
use crate::surface::SurfaceState;

const PLANET_RADIUS: f32 = 1.5;
const MOON_RADIUS: f32 = 0.4;
const MOON_SUBDIVISIONS: u32 = 2;
const MOON_ORBIT_RADIUS: f32 = 3.0;
const LIGHT_DISTANCE: f32 = 10.0;
const LIGHT_AZIMUTH_DEG: f32 = 60.0;

/// Converts spherical coordinates (degrees) to a cartesian point, `w == 1`.
fn spherical_to_cartesian(theta_deg: f32, distance: f32, azimuth_deg: f32) -> Vec4 {
    let theta = theta_deg.to_radians();
    let azimuth = azimuth_deg.to_radians();

    let x = distance * azimuth.sin() * theta.sin();
    let y = distance * azimuth.cos();
    let z = distance * azimuth.sin() * theta.cos();

    Vec4::new(x, y, z, 1.0)
}

pub struct DemoApp {
    config: DemoConfig,
    window: Option<Arc<Window>>,
    gfx: Option<SurfaceState>,
    clock: FrameClock,

    planet_subdivisions: u32,
    planet: usize,
    moon: usize,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        let planet_subdivisions = config.planet_subdivisions;
        Self {
            config,
            window: None,
            gfx: None,
            clock: FrameClock::new(),
            planet_subdivisions,
            planet: 0,
            moon: 0,
        }
    }

    fn build_scene(&mut self, renderer: &mut Renderer) -> anyhow::Result<()> {
        renderer.camera.eye = Vec3::new(0.0, 1.5, 7.0);
        renderer.camera.target = Vec3::ZERO;

        // The original demo's grey base color under a white sun.
        renderer.scene_params.material_color =
            Vec4::new(180.0 / 255.0, 180.0 / 255.0, 180.0 / 255.0, 1.0);
        renderer.scene_params.light_color = Vec4::ONE;

        let planet = icosphere::generate(Vec3::ZERO, PLANET_RADIUS, self.planet_subdivisions)
            .context("planet mesh")?;
        self.planet = renderer.add_object("Planet", &planet, Mat4::IDENTITY);

        let moon =
            icosphere::generate(Vec3::ZERO, MOON_RADIUS, MOON_SUBDIVISIONS).context("moon mesh")?;
        self.moon = renderer.add_object(
            "Moon",
            &moon,
            Mat4::from_translation(Vec3::new(MOON_ORBIT_RADIUS, 0.8, 0.0)),
        );

        renderer.add_object(
            "Cube",
            &cube::generate(Vec3::ZERO),
            Mat4::from_translation(Vec3::new(-3.5, -0.4, 0.0)) * Mat4::from_scale(Vec3::splat(0.6)),
        );

        // Quad faces +z; tip it back to face +y and stretch it into a floor.
        renderer.add_object(
            "Ground",
            &square::generate(Vec3::ZERO),
            Mat4::from_translation(Vec3::new(0.0, -2.5, 0.0))
                * Mat4::from_rotation_x(-FRAC_PI_2)
                * Mat4::from_scale(Vec3::splat(10.0)),
        );

        Ok(())
    }

    /// Regenerates the planet at `level` and swaps the GPU mesh.  On a
    /// rejected level the current mesh stays untouched — generation
    /// fails before anything is uploaded.
    fn set_planet_subdivisions(&mut self, level: u32) {
        if level == self.planet_subdivisions {
            return;
        }
        let Some(gfx) = &mut self.gfx else { return };

        match icosphere::generate(Vec3::ZERO, PLANET_RADIUS, level) {
            Ok(mesh) => {
                gfx.renderer.replace_mesh(self.planet, "Planet", &mesh);
                self.planet_subdivisions = level;
                log::info!(
                    "planet tessellation level {level}: {} triangles",
                    mesh.triangle_count()
                );
            }
            Err(err) => {
                log::warn!(
                    "keeping tessellation level {}: {err}",
                    self.planet_subdivisions
                );
            }
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::BracketRight => {
                self.set_planet_subdivisions(self.planet_subdivisions + 1)
            }
            KeyCode::BracketLeft => {
                self.set_planet_subdivisions(self.planet_subdivisions.saturating_sub(1))
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("window creation failed: {err}");
                event_loop.exit();
                return;
            }
        };

        let mut gfx = match pollster::block_on(SurfaceState::new(
            window.clone(),
            self.config.width,
            self.config.height,
            self.config.vsync,
        )) {
            Ok(gfx) => gfx,
            Err(err) => {
                log::error!("GPU initialisation failed: {err:#}");
                event_loop.exit();
                return;
            }
        };

        if let Err(err) = self.build_scene(&mut gfx.renderer) {
            log::error!("scene construction failed: {err:#}");
            event_loop.exit();
            return;
        }

        log::info!(
            "scene ready — [ and ] change tessellation (level {})",
            self.planet_subdivisions
        );

        self.window = Some(window);
        self.gfx = Some(gfx);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gfx) = &mut self.gfx {
                    gfx.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, code),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let (Some(gfx), Some(window)) = (&mut self.gfx, &self.window) else {
            return;
        };

        let stamp = self.clock.tick();
        if stamp.tick > 0 && stamp.tick % 240 == 0 {
            log::debug!(
                "frame {} ({:.1} fps)",
                stamp.tick,
                1.0 / stamp.delta.max(1e-6)
            );
        }

        // The sun drifts slowly around the scene; the moon orbits the
        // planet.  Both are plain per-frame parameter updates, no mesh is
        // rebuilt for motion.
        let theta_deg = -30.0 + stamp.elapsed * 4.0;
        gfx.renderer.scene_params.light_pos =
            spherical_to_cartesian(theta_deg, LIGHT_DISTANCE, LIGHT_AZIMUTH_DEG);

        let orbit = stamp.elapsed * 0.5;
        gfx.renderer.set_object_transform(
            self.moon,
            Mat4::from_translation(Vec3::new(
                orbit.cos() * MOON_ORBIT_RADIUS,
                0.8,
                orbit.sin() * MOON_ORBIT_RADIUS,
            )),
        );

        let frame = match gfx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = (gfx.config.width, gfx.config.height);
                gfx.resize(w, h);
                return;
            }
            Err(err) => {
                log::warn!("skipping frame: {err}");
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gfx.renderer.begin_frame();
        gfx.renderer
            .render(&mut encoder, &view, stamp.elapsed, stamp.tick as f32);
        gfx.renderer.context.queue.submit(Some(encoder.finish()));
        frame.present();

        window.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spherical_poles_and_equator() {
        // Azimuth 0 points straight up regardless of theta.
        let up = spherical_to_cartesian(123.0, 5.0, 0.0);
        assert!(up.x.abs() < 1e-4 && (up.y - 5.0).abs() < 1e-4 && up.z.abs() < 1e-4);

        // Theta 0 at azimuth 90 lies on +z.
        let fwd = spherical_to_cartesian(0.0, 2.0, 90.0);
        assert!(fwd.x.abs() < 1e-4 && fwd.y.abs() < 1e-4 && (fwd.z - 2.0).abs() < 1e-4);
    }

    #[test]
    fn spherical_output_is_homogeneous_point() {
        assert_eq!(spherical_to_cartesian(45.0, 10.0, 60.0).w, 1.0);
    }

    #[test]
    fn spherical_preserves_distance() {
        let p = spherical_to_cartesian(-30.0, 10.0, 60.0);
        assert!((p.truncate().length() - 10.0).abs() < 1e-4);
    }
}
