use std::cell::Cell;

use crate::math::prelude::Matrix;

use super::{Age, DepRelMatrix, MatrixId};

/// A matrix that is set directly by its owner and depends on nothing.
///
/// Every mutation increments the age by one. Mutators take `&self`, because
/// roots are usually shared with the nodes derived from them through an `Rc`;
/// derived nodes only ever see the read-only `DepRelMatrix` side.
#[derive(Debug)]
pub struct RootMatrix {
    id: MatrixId,
    value: Cell<Matrix>,
    age: Cell<Age>,
}

impl Default for RootMatrix {
    fn default() -> Self {
        RootMatrix::identity()
    }
}

/// Cloning creates a new logical matrix: a fresh id and age 0, only the value
/// is shared.
impl Clone for RootMatrix {
    fn clone(&self) -> Self {
        RootMatrix::new(self.value.get())
    }
}

impl RootMatrix {
    #[inline]
    pub fn new(value: Matrix) -> Self {
        RootMatrix::with_age(value, 0)
    }

    #[inline]
    pub fn identity() -> Self {
        RootMatrix::new(Matrix::IDENTITY)
    }

    /// Creates a root that starts out at `age`.
    pub fn with_age(value: Matrix, age: Age) -> Self {
        RootMatrix {
            id: MatrixId::next(),
            value: Cell::new(value),
            age: Cell::new(age),
        }
    }

    /// Overwrites the value.
    pub fn set_matrix(&self, value: Matrix) {
        self.value.set(value);
        self.touch();
    }

    #[inline]
    pub fn translate(&self, x: f32, y: f32, z: f32) {
        self.modify(|m| m.translate(x, y, z));
    }

    /// Uniform scale.
    #[inline]
    pub fn scale(&self, s: f32) {
        self.modify(|m| m.scale(s, s, s));
    }

    #[inline]
    pub fn scale_xyz(&self, sx: f32, sy: f32, sz: f32) {
        self.modify(|m| m.scale(sx, sy, sz));
    }

    #[inline]
    pub fn rotate_x(&self, angle: f32) {
        self.modify(|m| m.rotate_x(angle));
    }

    #[inline]
    pub fn rotate_y(&self, angle: f32) {
        self.modify(|m| m.rotate_y(angle));
    }

    #[inline]
    pub fn rotate_z(&self, angle: f32) {
        self.modify(|m| m.rotate_z(angle));
    }

    fn modify<F>(&self, func: F)
    where
        F: FnOnce(&mut Matrix),
    {
        let mut value = self.value.get();
        func(&mut value);
        self.value.set(value);
        self.touch();
    }

    #[inline]
    fn touch(&self) {
        self.age.set(self.age.get() + 1);
    }
}

impl DepRelMatrix for RootMatrix {
    #[inline]
    fn id(&self) -> MatrixId {
        self.id
    }

    #[inline]
    fn age(&self) -> Age {
        self.age.get()
    }

    #[inline]
    fn matrix(&self) -> Matrix {
        self.value.get()
    }

    /// Roots are always current.
    #[inline]
    fn update(&self) {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_mutation_ages() {
        let root = RootMatrix::identity();
        assert_eq!(root.age(), 0);

        root.set_matrix(Matrix::from_scale(2.0, 2.0, 2.0));
        root.translate(1.0, 0.0, 0.0);
        root.scale(0.5);
        root.rotate_x(90.0);
        root.rotate_y(90.0);
        root.rotate_z(90.0);
        assert_eq!(root.age(), 6);

        let _ = root.matrix();
        let _ = root.id();
        root.update();
        assert_eq!(root.age(), 6);
    }

    #[test]
    fn clone_is_a_new_matrix() {
        let root = RootMatrix::identity();
        root.translate(1.0, 2.0, 3.0);
        root.translate(1.0, 2.0, 3.0);

        let copy = root.clone();
        assert_ne!(copy.id(), root.id());
        assert_eq!(copy.age(), 0);
        assert_eq!(copy.matrix(), root.matrix());

        copy.translate(1.0, 0.0, 0.0);
        assert_ne!(copy.matrix(), root.matrix());
    }
}
