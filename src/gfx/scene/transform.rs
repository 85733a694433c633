//! Replayable affine transforms.
//!
//! Nodes need a per-call-site way to be repositioned between frames. Instead
//! of storing closures, a [`Transform`] records a list of affine steps and
//! replays them into a fresh matrix on every recompute. Steps compose left
//! to right: each later step acts in the local frame established by the
//! earlier ones, so `Transform::identity().scale(2.0).translate(1.0, 0.0, 0.0)`
//! scales a point that was first translated.

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};

#[derive(Clone, Debug)]
enum Step {
    Translate(Vector3<f32>),
    RotateX(Deg<f32>),
    RotateY(Deg<f32>),
    RotateZ(Deg<f32>),
    Scale(f32),
    ScaleXyz(Vector3<f32>),
    Matrix(Matrix4<f32>),
}

impl Step {
    fn matrix(&self) -> Matrix4<f32> {
        match *self {
            Step::Translate(v) => Matrix4::from_translation(v),
            Step::RotateX(angle) => Matrix4::from_angle_x(angle),
            Step::RotateY(angle) => Matrix4::from_angle_y(angle),
            Step::RotateZ(angle) => Matrix4::from_angle_z(angle),
            Step::Scale(factor) => Matrix4::from_scale(factor),
            Step::ScaleXyz(v) => Matrix4::from_nonuniform_scale(v.x, v.y, v.z),
            Step::Matrix(m) => m,
        }
    }
}

/// An ordered list of affine steps replayed into a [`Matrix4`] on demand.
#[derive(Clone, Debug, Default)]
pub struct Transform {
    steps: Vec<Step>,
}

impl Transform {
    /// The empty transform, replaying to the identity matrix.
    pub fn identity() -> Self {
        Self::default()
    }

    /// A transform that replays a precomputed matrix.
    ///
    /// Escape hatch for callers that rebuild a matrix themselves each frame.
    pub fn from_matrix(matrix: Matrix4<f32>) -> Self {
        Self {
            steps: vec![Step::Matrix(matrix)],
        }
    }

    /// Append a translation.
    pub fn translate(mut self, x: f32, y: f32, z: f32) -> Self {
        self.steps.push(Step::Translate(Vector3::new(x, y, z)));
        self
    }

    /// Append a rotation around the X axis.
    pub fn rotate_x(mut self, angle: Deg<f32>) -> Self {
        self.steps.push(Step::RotateX(angle));
        self
    }

    /// Append a rotation around the Y axis.
    pub fn rotate_y(mut self, angle: Deg<f32>) -> Self {
        self.steps.push(Step::RotateY(angle));
        self
    }

    /// Append a rotation around the Z axis.
    pub fn rotate_z(mut self, angle: Deg<f32>) -> Self {
        self.steps.push(Step::RotateZ(angle));
        self
    }

    /// Append a uniform scale.
    pub fn scale(mut self, factor: f32) -> Self {
        self.steps.push(Step::Scale(factor));
        self
    }

    /// Append a non-uniform scale.
    pub fn scale_xyz(mut self, x: f32, y: f32, z: f32) -> Self {
        self.steps.push(Step::ScaleXyz(Vector3::new(x, y, z)));
        self
    }

    /// Whether this transform has no steps.
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Replay the steps into a matrix.
    pub fn matrix(&self) -> Matrix4<f32> {
        self.steps
            .iter()
            .fold(Matrix4::identity(), |acc, step| acc * step.matrix())
    }
}
