//! This module contains the math utils that mainly comes from `cgmath`.

pub mod matrix;

pub mod prelude {
    pub use super::matrix::Matrix;
    pub use cgmath::{Deg, Matrix4, Rad, SquareMatrix, Vector3, Vector4};
}
