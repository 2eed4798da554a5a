use std::cell::Cell;
use std::fmt;

use crate::math::prelude::Matrix;

use super::{Age, DepRelMatrix, MatrixId, MatrixRef};

/// The inverse of a source matrix.
///
/// `update()` re-inverts only if the source is strictly older than this node.
/// The age of the inverse follows the age of its source.
pub struct InverseMatrix {
    id: MatrixId,
    source: MatrixRef,
    value: Cell<Matrix>,
    age: Cell<Age>,
    stale: Cell<bool>,
    recomputations: Cell<u64>,
}

impl InverseMatrix {
    /// Creates a new inverse of `source`. The first `update()` always computes.
    pub fn new(source: MatrixRef) -> Self {
        InverseMatrix {
            id: MatrixId::next(),
            source,
            value: Cell::new(Matrix::IDENTITY),
            age: Cell::new(0),
            stale: Cell::new(true),
            recomputations: Cell::new(0),
        }
    }

    /// Redirects this node to a different source.
    ///
    /// The node denotes a different logical matrix afterwards, so it takes a
    /// fresh id and recomputes on the next `update()`.
    pub fn set_source(&mut self, source: MatrixRef) {
        self.source = source;
        self.id = MatrixId::next();
        self.stale.set(true);
    }

    #[inline]
    pub fn source(&self) -> &MatrixRef {
        &self.source
    }

    /// Updates and returns the current value.
    #[inline]
    pub fn get(&self) -> Matrix {
        self.update();
        self.value.get()
    }

    /// How many times the inverse has actually been computed.
    #[inline]
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }
}

impl DepRelMatrix for InverseMatrix {
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
        self.source.update();

        let age = self.source.age();
        if self.stale.get() || age > self.age.get() {
            self.value.set(self.source.matrix().inverse());
            self.age.set(age);
            self.stale.set(false);
            self.recomputations.set(self.recomputations.get() + 1);
        }
    }
}

impl fmt::Debug for InverseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("InverseMatrix")
            .field("id", &self.id)
            .field("source", &self.source.id())
            .field("age", &self.age.get())
            .field("stale", &self.stale.get())
            .finish()
    }
}
