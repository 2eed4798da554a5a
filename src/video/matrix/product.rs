use std::cell::Cell;
use std::fmt;

use crate::math::prelude::Matrix;

use super::{Age, DepRelMatrix, MatrixId, MatrixRef};

/// The product `a * b` of two source matrices. The order matters.
///
/// The age of a product is the sum of the ages of its sources, and it is
/// recomputed whenever that sum exceeds its own age. Sums of different
/// products can collide, so a product must never be told apart from another
/// one by age alone.
pub struct ProductMatrix {
    id: MatrixId,
    a: MatrixRef,
    b: MatrixRef,
    value: Cell<Matrix>,
    age: Cell<Age>,
    stale: Cell<bool>,
    recomputations: Cell<u64>,
}

impl ProductMatrix {
    /// Creates the product `a * b`. The first `update()` always computes.
    pub fn new(a: MatrixRef, b: MatrixRef) -> Self {
        ProductMatrix {
            id: MatrixId::next(),
            a,
            b,
            value: Cell::new(Matrix::IDENTITY),
            age: Cell::new(0),
            stale: Cell::new(true),
            recomputations: Cell::new(0),
        }
    }

    /// The left-hand and right-hand sources.
    #[inline]
    pub fn sources(&self) -> (&MatrixRef, &MatrixRef) {
        (&self.a, &self.b)
    }

    /// Updates and returns the current value.
    #[inline]
    pub fn get(&self) -> Matrix {
        self.update();
        self.value.get()
    }

    /// How many times the product has actually been computed.
    #[inline]
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }
}

impl DepRelMatrix for ProductMatrix {
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

    fn update(&self) {
        self.a.update();
        self.b.update();

        let age = self.a.age() + self.b.age();
        if self.stale.get() || age > self.age.get() {
            self.value.set(self.a.matrix() * self.b.matrix());
            self.age.set(age);
            self.stale.set(false);
            self.recomputations.set(self.recomputations.get() + 1);
        }
    }
}

impl fmt::Debug for ProductMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ProductMatrix")
            .field("id", &self.id)
            .field("a", &self.a.id())
            .field("b", &self.b.id())
            .field("age", &self.age.get())
            .field("stale", &self.stale.get())
            .finish()
    }
}
