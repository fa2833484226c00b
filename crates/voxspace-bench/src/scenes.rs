use voxspace_core::camera::Camera;
use voxspace_core::constants::{DEFAULT_ELEVATION, DEFAULT_HORIZON};

/// Configuration for a single benchmark scene: a generated map and a
/// scripted camera path over it.
pub struct SceneConfig {
    pub name: &'static str,
    pub output_width: u32,
    pub output_height: u32,
    pub map_size: usize,
    pub seed: u64,
    /// Largest terrain feature size in cells.
    pub feature_size: f64,
    pub start: [f64; 2],
    pub heading_deg: f64,
    pub horizon: f64,
    pub elevation: f64,
    /// Heading change per frame, radians.
    pub turn_per_frame: f64,
    /// Forward movement per frame, map cells.
    pub advance_per_frame: f64,
}

impl SceneConfig {
    pub fn start_camera(&self) -> Camera {
        let mut camera = Camera::new(self.start[0], self.start[1]);
        camera.angle = self.heading_deg.to_radians();
        camera.horizon = self.horizon;
        camera.elevation = self.elevation;
        camera
    }

    /// Move the camera one frame along the scripted path.
    pub fn step(&self, camera: &mut Camera) {
        camera.turn(self.turn_per_frame);
        camera.advance(self.advance_per_frame);
    }
}

/// Return the standard suite of benchmark scenes, low to high resolution.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "cruise-320x240",
            output_width: 320,
            output_height: 240,
            map_size: 1024,
            seed: 42,
            feature_size: 128.0,
            start: [512.0, 512.0],
            heading_deg: 45.0,
            horizon: DEFAULT_HORIZON,
            elevation: DEFAULT_ELEVATION,
            turn_per_frame: 0.0,
            advance_per_frame: 0.8,
        },
        SceneConfig {
            name: "bank-640x480",
            output_width: 640,
            output_height: 480,
            map_size: 1024,
            seed: 42,
            feature_size: 128.0,
            start: [300.0, 700.0],
            heading_deg: 0.0,
            horizon: DEFAULT_HORIZON,
            elevation: 180.0,
            turn_per_frame: 0.01,
            advance_per_frame: 1.0,
        },
        SceneConfig {
            name: "low-glide-800x600",
            output_width: 800,
            output_height: 600,
            map_size: 2048,
            seed: 7,
            feature_size: 256.0,
            start: [1024.0, 1024.0],
            heading_deg: 120.0,
            horizon: 220.0,
            elevation: 60.0,
            turn_per_frame: -0.004,
            advance_per_frame: 1.5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_names_unique() {
        let scenes = standard_scenes();
        for (i, a) in scenes.iter().enumerate() {
            for b in &scenes[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_start_camera_uses_scene_pose() {
        let scene = &standard_scenes()[1];
        let cam = scene.start_camera();
        assert_eq!(cam.position.x, 300.0);
        assert_eq!(cam.position.y, 700.0);
        assert_eq!(cam.angle, 0.0);
        assert_eq!(cam.elevation, 180.0);
    }

    #[test]
    fn test_step_moves_forward() {
        let scene = &standard_scenes()[1];
        let mut cam = scene.start_camera();
        let before = cam.position;
        scene.step(&mut cam);
        assert!((cam.angle - 0.01).abs() < 1e-12);
        assert!((cam.position - before).length() > 0.99);
    }
}
