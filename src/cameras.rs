//! Cameras and configs for cameras
use crate::utils::{self, SerdeVector};
use crate::{Point, Ray, Vec3};
use serde::{Deserialize, Serialize};

/// Camera Config
///
/// Fields of view are given in degrees; construction converts to radians and
/// normalizes the forward direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: SerdeVector,
    pub forward: SerdeVector,
    pub h_fov_deg: f64,
    pub v_fov_deg: f64,
}

/// Pinhole camera
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point,
    pub forward: Vec3,
    pub h_fov: f64,
    pub v_fov: f64,
}
impl Camera {
    pub fn new(position: Point, forward: Vec3, h_fov: f64, v_fov: f64) -> Self {
        Self {
            position,
            forward: forward.normalize(),
            h_fov,
            v_fov,
        }
    }

    pub fn from_config(config: CameraConfig) -> Self {
        Self::new(
            config.position.into(),
            config.forward.into(),
            config.h_fov_deg.to_radians(),
            config.v_fov_deg.to_radians(),
        )
    }

    /// Build the view frustum.
    ///
    /// The forward direction is rotated by each half field of view and each
    /// corner is the sum of its two adjacent edge rotations, in top-left,
    /// top-right, bottom-right, bottom-left order. Corner magnitudes are an
    /// artifact of the construction, not unit vectors; screen rays normalize
    /// at the end.
    pub fn view(&self) -> Frustum {
        let r0 = utils::rotate(&self.forward, self.h_fov / 2.0, 0.0);
        let r1 = utils::rotate(&self.forward, 0.0, -self.v_fov / 2.0);
        let r2 = utils::rotate(&self.forward, -self.h_fov / 2.0, 0.0);
        let r3 = utils::rotate(&self.forward, 0.0, self.v_fov / 2.0);

        Frustum {
            origin: self.position,
            corners: [r0 + r1, r1 + r2, r2 + r3, r3 + r0],
        }
    }
}

/// The four corner directions bounding the camera's field of view
///
/// Built once per render, immutable afterwards; every screen ray is a
/// bilinear interpolation between the corners.
#[derive(Debug, Clone)]
pub struct Frustum {
    origin: Point,
    corners: [Vec3; 4],
}
impl Frustum {
    pub fn corners(&self) -> &[Vec3; 4] {
        &self.corners
    }

    /// Derive the ray through pixel `(col, row)`.
    ///
    /// `tw = col / width` and `th = row / height` land in `[0, 1)`; the top
    /// and bottom frustum edges are interpolated horizontally, then the
    /// result vertically.
    pub fn screen_ray(&self, width: u32, height: u32, col: u32, row: u32) -> Ray {
        let tw = col as f64 / width as f64;
        let th = row as f64 / height as f64;

        let top = utils::interpolate(&self.corners[0], &self.corners[1], tw);
        let bottom = utils::interpolate(&self.corners[3], &self.corners[2], tw);
        Ray::new(self.origin, utils::interpolate(&top, &bottom, th))
    }
}
