//! Objects
use crate::{utils, utils::SerdeVector, Color, Point, Ray};
use serde::{Deserialize, Serialize};

/// A solid-color sphere
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
}
impl Sphere {
    pub fn new(center: Point, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn from_config(config: SphereConfig) -> Self {
        Self::new(config.center.into(), config.radius, config.color.into())
    }

    /// Geometric ray-sphere test, entry root only.
    ///
    /// A negative discriminant means the ray's line misses the sphere. A
    /// negative entry distance means the sphere lies behind the ray origin,
    /// or the origin is already past the entry point; neither counts as a
    /// hit, so rays started inside a sphere never report its far side.
    pub fn try_hit(&self, ray: &Ray) -> Option<Point> {
        let a = self.center - ray.orig;
        let cos = utils::cos_angle(&ray.dir, &a);

        let discriminant = a.norm_squared() * (cos * cos - 1.0) + self.radius * self.radius;
        if discriminant < 0.0 {
            return None;
        }

        let m = a.norm() * cos - discriminant.sqrt();
        if m < 0.0 {
            return None;
        }
        Some(ray.get(m))
    }
}

/// Sphere config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereConfig {
    pub center: SerdeVector,
    pub radius: f64,
    pub color: SerdeVector,
}
