//! Scene and nearest-hit queries
use crate::{objects::Sphere, objects::SphereConfig, utils::SerdeVector, Point, Ray};
use serde::{Deserialize, Serialize};

/// Represents the nearest hit along a ray
#[derive(Debug, Clone)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Point,
    /// Distance from the ray origin
    pub distance: f64,
    /// Index of the hit sphere in the scene
    pub index: usize,
}

/// All spheres plus the single point light
#[derive(Debug, Clone)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub light: Point,
}
impl Scene {
    pub fn new(spheres: Vec<Sphere>, light: Point) -> Self {
        Self { spheres, light }
    }

    pub fn from_config(config: SceneConfig) -> Self {
        Self::new(
            config
                .spheres
                .into_iter()
                .map(Sphere::from_config)
                .collect(),
            config.light.into(),
        )
    }

    /// Find the nearest sphere hit along a ray.
    ///
    /// Spheres whose index appears in `excluded` are skipped; the list holds
    /// at most one entry in practice, so a linear membership test is enough.
    /// Candidates are compared by squared distance, seeded with
    /// `max_distance^2`, and only a strictly closer hit replaces the current
    /// winner; exact ties keep the first sphere in iteration order.
    pub fn try_hit(&self, ray: &Ray, max_distance: f64, excluded: &[usize]) -> Option<HitRecord> {
        let mut sqr_min_distance = max_distance * max_distance;
        let mut hr_final = None;

        for (i, sphere) in self.spheres.iter().enumerate() {
            if excluded.contains(&i) {
                continue;
            }

            if let Some(p) = sphere.try_hit(ray) {
                let sqr_distance = (ray.orig - p).norm_squared();
                if sqr_distance < sqr_min_distance {
                    sqr_min_distance = sqr_distance;
                    hr_final = Some(HitRecord {
                        p,
                        distance: sqr_distance.sqrt(),
                        index: i,
                    });
                }
            }
        }
        hr_final
    }
}

/// Scene config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub spheres: Vec<SphereConfig>,
    pub light: SerdeVector,
}
