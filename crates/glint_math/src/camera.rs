use glam::{Mat4, Vec3, Vec4};

/// Pinhole camera for primary ray generation.
///
/// The camera looks down its `forward` axis; `right` and `up` are derived from it
/// (world +Y is the reference up) each time [`Camera::camera_to_world`] runs.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
    /// Full vertical field of view in degrees
    pub fov_angle: f32,
    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl Camera {
    /// Create a new camera at `origin` looking down +Z.
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        Self {
            origin,
            fov_angle,
            forward: Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
        }
    }

    /// Set the viewing direction.
    pub fn with_forward(mut self, forward: Vec3) -> Self {
        self.forward = forward;
        self
    }

    /// `tan(fov / 2)`, the half-height of the image plane at distance 1.
    pub fn fov_scale(&self) -> f32 {
        (self.fov_angle.to_radians() / 2.0).tan()
    }

    /// Rebuild the orthonormal basis and return the camera-to-world matrix.
    ///
    /// Columns are right, up, forward and the origin. Call once per frame
    /// before rendering.
    pub fn camera_to_world(&mut self) -> Mat4 {
        self.forward = self.forward.normalize();
        self.right = Vec3::Y.cross(self.forward).normalize();
        self.up = self.forward.cross(self.right).normalize();

        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.forward.extend(0.0),
            Vec4::new(self.origin.x, self.origin.y, self.origin.z, 1.0),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}
