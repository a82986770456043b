//! Utils

use nalgebra::Vector3;
type Vec3 = Vector3<f64>;
use super::Color;
use image::Rgb;
use serde::{Deserialize, Serialize};

/// Cosine of the angle between two vectors
///
/// NaN when either vector has zero length; callers that care must not pass
/// degenerate inputs.
pub fn cos_angle(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b) / (a.norm() * b.norm())
}

/// Rotate a vector in spherical coordinates
///
/// Recovers `(r, phi, theta)` from the input, adds the requested deltas and
/// rebuilds a Cartesian vector of the same magnitude. The azimuth comes back
/// through `acos`, which drops its sign; inputs with a negative y component
/// rotate mirrored. When the XY projection vanishes the azimuth is taken as
/// zero so that axis-aligned vectors stay rotatable.
pub fn rotate(v: &Vec3, d_phi: f64, d_theta: f64) -> Vec3 {
    let r = v.norm();
    let theta = cos_angle(v, &Vec3::z()).acos() + d_theta;

    let flat = Vec3::new(v[0], v[1], 0.0);
    let phi_0 = if flat.norm_squared() == 0.0 {
        0.0
    } else {
        cos_angle(&flat, &Vec3::x()).acos()
    };
    let phi = phi_0 + d_phi;

    Vec3::new(
        r * theta.sin() * phi.cos(),
        r * theta.sin() * phi.sin(),
        r * theta.cos(),
    )
}

/// Linear interpolation between two vectors
///
/// `t` is unconstrained and extrapolates outside `[0, 1]`.
pub fn interpolate(a: &Vec3, b: &Vec3, t: f64) -> Vec3 {
    a + (b - a) * t
}

pub fn get_pixel(color: &Color) -> Rgb<u8> {
    Rgb([
        scale_color(color[0]),
        scale_color(color[1]),
        scale_color(color[2]),
    ])
}

/// Clamp a channel to [0, 1] and scale it to between 0 and 255
fn scale_color(val: f64) -> u8 {
    (255.0 * val.min(1.0).max(0.0)) as u8
}

/// Serializable stand-in for a vector, used by the config structs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SerdeVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl From<SerdeVector> for Vec3 {
    fn from(v: SerdeVector) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}
impl From<Vec3> for SerdeVector {
    fn from(v: Vec3) -> Self {
        Self {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }
}
