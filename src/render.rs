//! Parallel render dispatch
use image::RgbImage;
use indicatif::ProgressBar;
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{cameras::Camera, cameras::CameraConfig, scene::Scene, scene::SceneConfig, utils, Color};

/// Top-level render config: image size plus camera and scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
}

/// Row-major buffer of linear, unclamped colors
#[derive(Debug, Clone)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}
impl Image {
    /// Quantize to an 8-bit buffer, clamping each channel to [0, 1]
    pub fn to_rgb8(&self) -> RgbImage {
        let mut buffer = RgbImage::new(self.width, self.height);
        for (col, row, pixel) in buffer.enumerate_pixels_mut() {
            *pixel = utils::get_pixel(&self.pixels[(row * self.width + col) as usize]);
        }
        buffer
    }
}

/// Render the scene into a row-major image buffer.
///
/// The frustum is built once, then every pixel is an independent pure map
/// over its flat index: derive the screen ray, shade it. Workers share only
/// the read-only camera, scene and frustum, and each owns exactly one output
/// cell, so the result is identical for any thread count.
pub fn render(camera: &Camera, scene: &Scene, width: u32, height: u32) -> Image {
    let frustum = camera.view();

    info!(
        "Rendering {width}x{height} on {} threads",
        rayon::current_num_threads()
    );
    let start = std::time::Instant::now();
    let bar = ProgressBar::new(width as u64 * height as u64);

    let pixels: Vec<Color> = (0..width as usize * height as usize)
        .into_par_iter()
        .map(|index| {
            let row = (index / width as usize) as u32;
            let col = (index % width as usize) as u32;
            let color = frustum.screen_ray(width, height, col, row).get_color(scene);
            bar.inc(1);
            color
        })
        .collect();
    bar.finish();
    info!("Rendered in {:.2?}", start.elapsed());

    Image {
        width,
        height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{objects::Sphere, Point, Vec3};

    fn red_sphere_camera() -> Camera {
        Camera::new(
            Point::new(0.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, 1.0),
            60.0_f64.to_radians(),
            60.0_f64.to_radians(),
        )
    }

    fn red_sphere() -> Sphere {
        Sphere::new(Point::zeros(), 2.0, Color::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn single_pixel_of_lit_sphere_is_red() {
        let scene = Scene::new(vec![red_sphere()], Point::new(5.0, 5.0, -5.0));
        let image = render(&red_sphere_camera(), &scene, 1, 1);
        assert_eq!(image.pixels.len(), 1);
        let pixel = image.pixels[0];
        assert!(pixel[0] > 0.0, "expected a lit red pixel, got {pixel:?}");
        assert_eq!(pixel[1], 0.0);
        assert_eq!(pixel[2], 0.0);
    }

    #[test]
    fn occluder_between_surface_and_light_blacks_the_pixel() {
        // The second sphere sits halfway between the first hit point and the
        // light, clear of the primary ray.
        let scene = Scene::new(
            vec![
                red_sphere(),
                Sphere::new(Point::new(2.07, 2.5, -3.4), 1.5, Color::new(1.0, 1.0, 1.0)),
            ],
            Point::new(5.0, 5.0, -5.0),
        );
        let image = render(&red_sphere_camera(), &scene, 1, 1);
        assert_eq!(image.pixels[0], Color::zeros());
    }

    #[test]
    fn empty_scene_renders_all_black() {
        let scene = Scene::new(vec![], Point::new(0.0, 0.0, 0.0));
        let image = render(&red_sphere_camera(), &scene, 8, 6);
        assert_eq!(image.pixels.len(), 48);
        assert!(image.pixels.iter().all(|p| *p == Color::zeros()));
    }

    #[test]
    fn repeated_renders_are_identical() {
        let scene = Scene::new(vec![red_sphere()], Point::new(5.0, 5.0, -5.0));
        let camera = red_sphere_camera();
        let first = render(&camera, &scene, 16, 16);
        let second = render(&camera, &scene, 16, 16);
        assert_eq!(first.pixels, second.pixels);
    }

    #[test]
    fn quantization_clamps_and_scales() {
        let image = Image {
            width: 2,
            height: 1,
            pixels: vec![Color::new(1.0, 0.0, 0.5), Color::new(-0.2, 2.0, 1.0)],
        };
        let buffer = image.to_rgb8();
        assert_eq!(buffer.get_pixel(0, 0).0, [255, 0, 127]);
        assert_eq!(buffer.get_pixel(1, 0).0, [0, 255, 255]);
    }

    #[test]
    fn config_yaml_decodes_into_camera_and_scene() {
        let yaml = r#"
width: 4
height: 3
camera:
  position: { x: 0.0, y: 0.0, z: -5.0 }
  forward: { x: 0.0, y: 0.0, z: 1.0 }
  h_fov_deg: 70.0
  v_fov_deg: 40.0
scene:
  spheres:
    - center: { x: 0.0, y: 0.0, z: 0.0 }
      radius: 1.0
      color: { x: 1.0, y: 0.0, z: 0.0 }
  light: { x: 5.0, y: 5.0, z: -5.0 }
"#;
        let config: RenderConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.width, 4);
        let camera = Camera::from_config(config.camera);
        assert!((camera.h_fov - 70.0_f64.to_radians()).abs() < 1e-12);
        let scene = Scene::from_config(config.scene);
        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.spheres[0].color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(scene.light, Point::new(5.0, 5.0, -5.0));
    }
}
