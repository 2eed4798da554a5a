//! Matrices with dependency relationships.
//!
//! A [`RootMatrix`](struct.RootMatrix.html) is set directly by its owner. An
//! [`InverseMatrix`](struct.InverseMatrix.html) or a
//! [`ProductMatrix`](struct.ProductMatrix.html) is derived from other matrices and
//! caches its value until one of its sources changes.
//!
//! Every node carries an _age_ that grows whenever its value changes, and an _id_
//! that is unique for the lifetime of the process. A derived node only looks at
//! its immediate sources: `update()` first updates the sources, then compares
//! their ages against its own and recomputes only if a source has grown older.
//! Staleness therefore propagates through arbitrarily deep compositions without
//! anybody knowing the topology.
//!
//! Consumers that keep their own copy of a matrix, like the state cache keeping
//! what has been uploaded into each matrix slot, remember the `(id, age)` pair.
//! The age alone is not enough: two different matrices can easily have the same
//! age.
//!
//! ```rust
//! use std::rc::Rc;
//! use matsys::prelude::*;
//!
//! let model = Rc::new(RootMatrix::identity());
//! let view = Rc::new(RootMatrix::identity());
//!
//! let model_view = ProductMatrix::new(view.clone(), model.clone());
//! let inverse = InverseMatrix::new(model.clone());
//!
//! model.translate(1.0, 2.0, 3.0);
//!
//! model_view.update();
//! inverse.update();
//! assert_eq!(inverse.matrix().transform_point([1.0, 2.0, 3.0]), [0.0, 0.0, 0.0]);
//! ```

mod inverse;
mod product;
mod root;

pub use self::inverse::InverseMatrix;
pub use self::product::ProductMatrix;
pub use self::root::RootMatrix;

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::math::prelude::Matrix;

/// The change counter of a matrix. A higher age than previously observed
/// means "this matrix has changed since".
pub type Age = u64;

/// Identifies a logical matrix. Ids are handed out from a process-wide counter
/// and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatrixId(u64);

impl MatrixId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        MatrixId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MatrixId({})", self.0)
    }
}

/// The common interface of all matrix nodes.
pub trait DepRelMatrix {
    /// The process-unique id of this node.
    fn id(&self) -> MatrixId;

    /// The age of the current value. Only meaningful after `update()`.
    fn age(&self) -> Age;

    /// The current value. Only meaningful after `update()`.
    fn matrix(&self) -> Matrix;

    /// Brings the value up to date with all transitive sources.
    fn update(&self);
}

/// A shared reference to a source node.
pub type MatrixRef = Rc<dyn DepRelMatrix>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = MatrixId::next();
        let b = MatrixId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
