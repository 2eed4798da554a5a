//! The named matrices of a renderer.

use std::rc::Rc;

use crate::math::prelude::Matrix;

use super::backends::Backend;
use super::matrix::{DepRelMatrix, InverseMatrix, ProductMatrix, RootMatrix};
use super::state::types::MatrixSlot;
use super::state::StateCache;

/// The matrices every renderer keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatrixName {
    ModelToWorld,
    WorldToView,
    Projection,
}

impl MatrixName {
    pub const ALL: [MatrixName; 3] = [
        MatrixName::ModelToWorld,
        MatrixName::WorldToView,
        MatrixName::Projection,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            MatrixName::ModelToWorld => 0,
            MatrixName::WorldToView => 1,
            MatrixName::Projection => 2,
        }
    }
}

/// The root matrix of every `MatrixName` with a stack each, their inverses and
/// the model-view matrix `WorldToView * ModelToWorld`.
///
/// Derived matrices are brought up to date by their accessors, so everything
/// returned from here can be passed to `StateCache::load_matrix` directly.
#[derive(Debug)]
pub struct MatrixSet {
    roots: [Rc<RootMatrix>; 3],
    stacks: [Vec<Matrix>; 3],
    inverses: [InverseMatrix; 3],
    model_view: ProductMatrix,
}

impl Default for MatrixSet {
    fn default() -> Self {
        MatrixSet::new()
    }
}

impl MatrixSet {
    /// Creates a set with all matrices at identity.
    pub fn new() -> Self {
        // Roots start at age 1, so that nothing derived from them is mistaken
        // for up to date.
        let roots = [
            Rc::new(RootMatrix::with_age(Matrix::IDENTITY, 1)),
            Rc::new(RootMatrix::with_age(Matrix::IDENTITY, 1)),
            Rc::new(RootMatrix::with_age(Matrix::IDENTITY, 1)),
        ];

        let inverses = [
            InverseMatrix::new(roots[0].clone()),
            InverseMatrix::new(roots[1].clone()),
            InverseMatrix::new(roots[2].clone()),
        ];

        let model_view = ProductMatrix::new(
            roots[MatrixName::WorldToView.index()].clone(),
            roots[MatrixName::ModelToWorld.index()].clone(),
        );

        MatrixSet {
            roots,
            stacks: [Vec::new(), Vec::new(), Vec::new()],
            inverses,
            model_view,
        }
    }

    #[inline]
    pub fn matrix(&self, name: MatrixName) -> Matrix {
        self.roots[name.index()].matrix()
    }

    #[inline]
    pub fn matrix_inv(&self, name: MatrixName) -> Matrix {
        self.inverses[name.index()].get()
    }

    #[inline]
    pub fn matrix_model_view(&self) -> Matrix {
        self.model_view.get()
    }

    /// The root node of `name`. Clone the `Rc` to derive further matrices from it.
    #[inline]
    pub fn dep_rel_matrix(&self, name: MatrixName) -> &Rc<RootMatrix> {
        &self.roots[name.index()]
    }

    /// The up to date inverse node of `name`.
    pub fn dep_rel_matrix_inv(&self, name: MatrixName) -> &InverseMatrix {
        let v = &self.inverses[name.index()];
        v.update();
        v
    }

    /// The up to date model-view node.
    pub fn dep_rel_matrix_model_view(&self) -> &ProductMatrix {
        self.model_view.update();
        &self.model_view
    }

    #[inline]
    pub fn set_matrix(&mut self, name: MatrixName, value: Matrix) {
        self.roots[name.index()].set_matrix(value);
    }

    #[inline]
    pub fn translate(&mut self, name: MatrixName, x: f32, y: f32, z: f32) {
        self.roots[name.index()].translate(x, y, z);
    }

    #[inline]
    pub fn scale(&mut self, name: MatrixName, s: f32) {
        self.roots[name.index()].scale(s);
    }

    #[inline]
    pub fn rotate_x(&mut self, name: MatrixName, angle: f32) {
        self.roots[name.index()].rotate_x(angle);
    }

    #[inline]
    pub fn rotate_y(&mut self, name: MatrixName, angle: f32) {
        self.roots[name.index()].rotate_y(angle);
    }

    #[inline]
    pub fn rotate_z(&mut self, name: MatrixName, angle: f32) {
        self.roots[name.index()].rotate_z(angle);
    }

    /// Saves the current value of `name`.
    pub fn push_matrix(&mut self, name: MatrixName) {
        let v = self.roots[name.index()].matrix();
        self.stacks[name.index()].push(v);
    }

    /// Restores the last saved value of `name`. Returns `false` without touching
    /// anything if nothing has been saved.
    pub fn pop_matrix(&mut self, name: MatrixName) -> bool {
        match self.stacks[name.index()].pop() {
            Some(v) => {
                self.roots[name.index()].set_matrix(v);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn stack_depth(&self, name: MatrixName) -> usize {
        self.stacks[name.index()].len()
    }

    /// Loads the projection and model-view matrices, as needed before drawing
    /// with the fixed-function pipeline.
    pub fn upload<B: Backend>(&self, cache: &mut StateCache<B>) {
        cache.load_matrix(
            MatrixSlot::Projection,
            &**self.dep_rel_matrix(MatrixName::Projection),
        );
        cache.load_matrix(MatrixSlot::ModelView, self.dep_rel_matrix_model_view());
    }
}
