//! Flat-Shaded Ray Casting Library
//!
//! Renders a scene of colored spheres lit by a single point light: one
//! primary ray per pixel, one shadow ray per hit, hard shadows, no bounces.

use nalgebra::Vector3;

pub mod cameras;
pub mod objects;
pub mod render;
pub mod scene;
pub mod utils;

use scene::Scene;

pub type Vec3 = Vector3<f64>;
pub type Point = Vec3;
pub type Color = Vec3;

/// Prelude
pub mod prelude {
    pub use crate::cameras::{Camera, CameraConfig, Frustum};
    pub use crate::objects::{Sphere, SphereConfig};
    pub use crate::render::{render, Image, RenderConfig};
    pub use crate::scene::{Scene, SceneConfig};
    pub use crate::{Color, Point, Ray, Vec3};
}

/// The ray in ray casting
#[derive(Debug, Clone)]
pub struct Ray {
    pub orig: Point,
    pub dir: Vec3,
}
impl Ray {
    /// The direction is normalized on construction. A zero direction
    /// normalizes to a NaN vector and is not guarded.
    pub fn new(orig: Point, dir: Vec3) -> Self {
        Self {
            orig,
            dir: dir.normalize(),
        }
    }

    pub fn get(&self, t: f64) -> Point {
        self.orig + t * self.dir
    }

    /// Shade the ray against the scene.
    ///
    /// Finds the nearest sphere along the ray, then casts a shadow ray from
    /// the hit point toward the light, skipping the hit sphere itself. An
    /// occluded hit is pure black, a lit one is the sphere's color scaled by
    /// the cosine between the inward normal and the hit-to-light vector. The
    /// cosine is left unclamped until output quantization.
    pub fn get_color(&self, scene: &Scene) -> Color {
        if let Some(hit) = scene.try_hit(self, f64::INFINITY, &[]) {
            let to_light = scene.light - hit.p;
            let shadow_ray = Ray::new(hit.p, to_light);
            if scene
                .try_hit(&shadow_ray, to_light.norm(), &[hit.index])
                .is_some()
            {
                return Color::zeros();
            }

            let sphere = &scene.spheres[hit.index];
            return sphere.color
                * utils::cos_angle(&(sphere.center - hit.p), &(hit.p - scene.light));
        }
        Color::zeros()
    }
}
