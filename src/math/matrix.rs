use std::ops::Mul;

use cgmath::{self, Deg, Matrix4, Point3, SquareMatrix, Transform, Vector3};

/// A 4x4 transform matrix stored in row-major order, `m[row][col]`.
///
/// Vectors are treated as columns that get multiplied from the right, so the
/// translation lives in the fourth column. OpenGL expects the transpose of this
/// layout, which is what `to_column_major` produces at upload time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub m: [[f32; 4]; 4],
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub fn new(rows: [[f32; 4]; 4]) -> Self {
        Matrix { m: rows }
    }

    #[inline]
    pub fn identity() -> Self {
        Matrix::IDENTITY
    }

    #[inline]
    pub fn from_translation(x: f32, y: f32, z: f32) -> Self {
        Matrix4::from_translation(Vector3::new(x, y, z)).into()
    }

    #[inline]
    pub fn from_scale(sx: f32, sy: f32, sz: f32) -> Self {
        Matrix4::from_nonuniform_scale(sx, sy, sz).into()
    }

    /// Rotation about the x-axis, `angle` in degrees.
    #[inline]
    pub fn from_angle_x(angle: f32) -> Self {
        Matrix4::from_angle_x(Deg(angle)).into()
    }

    /// Rotation about the y-axis, `angle` in degrees.
    #[inline]
    pub fn from_angle_y(angle: f32) -> Self {
        Matrix4::from_angle_y(Deg(angle)).into()
    }

    /// Rotation about the z-axis, `angle` in degrees.
    #[inline]
    pub fn from_angle_z(angle: f32) -> Self {
        Matrix4::from_angle_z(Deg(angle)).into()
    }

    /// A perspective projection with the vertical field of view `fov_y` in degrees.
    ///
    /// If `z_far <= z_near`, the far plane is placed at infinity, which is what
    /// stencil shadow volumes need.
    pub fn perspective(fov_y: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        if z_far <= z_near {
            let cot = 1.0 / (fov_y.to_radians() * 0.5).tan();

            return Matrix::new([
                [cot / aspect, 0.0, 0.0, 0.0],
                [0.0, cot, 0.0, 0.0],
                [0.0, 0.0, -1.0, -2.0 * z_near],
                [0.0, 0.0, -1.0, 0.0],
            ]);
        }

        cgmath::perspective(Deg(fov_y), aspect, z_near, z_far).into()
    }

    #[inline]
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        cgmath::frustum(left, right, bottom, top, z_near, z_far).into()
    }

    #[inline]
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Self {
        cgmath::ortho(left, right, bottom, top, z_near, z_far).into()
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        cgmath::Matrix::transpose(&Matrix4::from(*self)).into()
    }

    /// Returns the inverse of this matrix, or `None` if it is singular.
    #[inline]
    pub fn try_inverse(&self) -> Option<Self> {
        Matrix4::from(*self).invert().map(Matrix::from)
    }

    /// Returns the inverse of this matrix. A singular matrix has no inverse, in
    /// that case the identity is returned.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or(Matrix::IDENTITY)
    }

    /// Post-multiplies a translation, `M = M * T`.
    #[inline]
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        *self = *self * Matrix::from_translation(x, y, z);
    }

    /// Post-multiplies a scale, `M = M * S`.
    #[inline]
    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) {
        *self = *self * Matrix::from_scale(sx, sy, sz);
    }

    /// Post-multiplies a rotation about the x-axis, `M = M * R`.
    #[inline]
    pub fn rotate_x(&mut self, angle: f32) {
        *self = *self * Matrix::from_angle_x(angle);
    }

    /// Post-multiplies a rotation about the y-axis, `M = M * R`.
    #[inline]
    pub fn rotate_y(&mut self, angle: f32) {
        *self = *self * Matrix::from_angle_y(angle);
    }

    /// Post-multiplies a rotation about the z-axis, `M = M * R`.
    #[inline]
    pub fn rotate_z(&mut self, angle: f32) {
        *self = *self * Matrix::from_angle_z(angle);
    }

    /// Transforms the point `(x, y, z, 1)`, including the division by `w`.
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let v = Matrix4::from(*self).transform_point(Point3::new(p[0], p[1], p[2]));
        [v.x, v.y, v.z]
    }

    /// The sixteen elements in the order `glLoadMatrixf` expects them, which is
    /// the transpose of our row-major layout.
    pub fn to_column_major(&self) -> [f32; 16] {
        let columns: [[f32; 4]; 4] = Matrix4::from(*self).into();

        let mut out = [0.0; 16];
        for (i, column) in columns.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(column);
        }

        out
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        (Matrix4::from(self) * Matrix4::from(rhs)).into()
    }
}

impl From<Matrix> for Matrix4<f32> {
    fn from(v: Matrix) -> Self {
        // The rows of `v` are the columns of its transpose.
        cgmath::Matrix::transpose(&Matrix4::from(v.m))
    }
}

impl From<Matrix4<f32>> for Matrix {
    fn from(v: Matrix4<f32>) -> Self {
        Matrix::new(cgmath::Matrix::transpose(&v).into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn translate_moves_points() {
        let mut m = Matrix::identity();
        m.translate(1.0, 2.0, 3.0);
        assert_eq!(m.transform_point([0.0, 0.0, 0.0]), [1.0, 2.0, 3.0]);
        assert_eq!(m, Matrix::from_translation(1.0, 2.0, 3.0));
    }

    #[test]
    fn translate_post_multiplies() {
        let mut m = Matrix::from_scale(2.0, 2.0, 2.0);
        m.translate(1.0, 0.0, 0.0);

        // The translation is applied first, then scaled.
        assert_eq!(m.transform_point([0.0, 0.0, 0.0]), [2.0, 0.0, 0.0]);
    }

    #[test]
    fn column_major_layout() {
        let m = Matrix::from_translation(5.0, 6.0, 7.0);
        let cm = m.to_column_major();
        assert_eq!(&cm[12..15], &[5.0, 6.0, 7.0]);
        assert_eq!(cm[3], 0.0);
        assert_eq!(cm[15], 1.0);
    }

    #[test]
    fn cgmath_roundtrip_keeps_layout() {
        let m = Matrix::from_translation(1.0, 2.0, 3.0);
        let c = Matrix4::from(m);
        assert_eq!(c.w.x, 1.0);
        assert_eq!(c.w.y, 2.0);
        assert_eq!(Matrix::from(c), m);
    }

    #[test]
    fn products_agree_with_cgmath() {
        let a = Matrix::from_angle_y(30.0) * Matrix::from_translation(1.0, 2.0, 3.0);
        let b = Matrix::from_scale(2.0, 3.0, 4.0);

        let c = Matrix4::from(a) * Matrix4::from(b);
        assert_eq!(Matrix::from(c), a * b);
        assert_eq!(a.transpose().transpose(), a);
        assert_eq!(a.transpose().m[3][0], a.m[0][3]);
    }

    #[test]
    fn points_are_divided_by_w() {
        let m = Matrix::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
        ]);

        assert_eq!(m.transform_point([2.0, 4.0, 6.0]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn singular_inverse_is_identity() {
        let zero = Matrix::new([[0.0; 4]; 4]);
        assert!(zero.try_inverse().is_none());
        assert_eq!(zero.inverse(), Matrix::identity());
    }
}
