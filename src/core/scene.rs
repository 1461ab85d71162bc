use glam::{Mat4, Vec3};

// Camera framing shared by projection and orbit math.
pub const CAMERA_FOVY_RADIANS: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_RADIUS: f32 = 2.0; // initial eye distance from the mesh

// Mesh spin per second of elapsed time, around X and Y.
pub const MESH_ROT_X_PER_SEC: f32 = 0.02;
pub const MESH_ROT_Y_PER_SEC: f32 = 0.03;

// Backing-store pixel ratio is clamped to bound GPU cost on dense displays.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Orbit interaction tuning
pub const ORBIT_ROTATE_PER_PX: f32 = 0.005; // radians per dragged pixel
pub const ORBIT_ZOOM_PER_LINE: f32 = 0.1; // radius change per wheel step
pub const ORBIT_RADIUS_MIN: f32 = 0.9;
pub const ORBIT_RADIUS_MAX: f32 = 12.0;
pub const ORBIT_POLAR_EPS: f32 = 0.05; // keep the eye off the poles

/// Current drawing surface dimensions in CSS pixels plus the display's pixel
/// ratio. Constructed at startup and replaced (not mutated in place) by the
/// resize path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        (self.width / self.height.max(1.0)) as f32
    }

    pub fn clamped_pixel_ratio(&self) -> f64 {
        self.pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Backing-store size in physical pixels, never zero.
    pub fn physical_size(&self) -> (u32, u32) {
        let r = self.clamped_pixel_ratio();
        let w = (self.width * r) as u32;
        let h = (self.height * r) as u32;
        (w.max(1), h.max(1))
    }

    /// The resize handler builds a fresh descriptor from the new dimensions
    /// rather than mutating shared state.
    pub fn resized(&self, width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }
}

/// Spherical-coordinate orbit around a fixed target: pointer drags steer
/// azimuth/polar, the wheel moves the radius. Angles and radius are clamped
/// so the view matrix stays well-defined.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: CAMERA_RADIUS,
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
        }
    }
}

impl OrbitCamera {
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        self.azimuth -= dx_px * ORBIT_ROTATE_PER_PX;
        self.polar = (self.polar - dy_px * ORBIT_ROTATE_PER_PX).clamp(
            ORBIT_POLAR_EPS,
            std::f32::consts::PI - ORBIT_POLAR_EPS,
        );
    }

    pub fn zoom(&mut self, wheel_delta: f32) {
        self.radius = (self.radius + wheel_delta * ORBIT_ZOOM_PER_LINE)
            .clamp(ORBIT_RADIUS_MIN, ORBIT_RADIUS_MAX);
    }

    pub fn eye(&self) -> Vec3 {
        let x = self.radius * self.polar.sin() * self.azimuth.sin();
        let y = self.radius * self.polar.cos();
        let z = self.radius * self.polar.sin() * self.azimuth.cos();
        self.target + Vec3::new(x, y, z)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(CAMERA_FOVY_RADIANS, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
        proj * self.view_matrix()
    }
}

/// Mesh orientation after `elapsed_sec` seconds: small fixed multiples of
/// elapsed time about X and Y.
pub fn mesh_rotation(elapsed_sec: f32) -> (f32, f32) {
    (
        MESH_ROT_X_PER_SEC * elapsed_sec,
        MESH_ROT_Y_PER_SEC * elapsed_sec,
    )
}

pub fn model_matrix(elapsed_sec: f32) -> Mat4 {
    let (rx, ry) = mesh_rotation(elapsed_sec);
    Mat4::from_rotation_x(rx) * Mat4::from_rotation_y(ry)
}
