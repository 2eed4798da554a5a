//! The video core of the material system, which sits between the shaders and the
//! fixed-function OpenGL pipeline.
//!
//! # Matrices
//!
//! Renderers keep a handful of _root_ matrices (model-to-world, world-to-view,
//! projection) that are set directly, and a number of matrices that are derived
//! from them (inverses, the model-view product). Derived matrices are described
//! by [`matrix`](matrix/index.html) nodes that recompute themselves only when one
//! of their sources has grown older, and [`MatrixSet`](matrices/struct.MatrixSet.html)
//! bundles the common setup.
//!
//! # State Cache
//!
//! Shaders push dozens of state changes per draw call, and most of them are
//! redundant in steady state. [`StateCache`](state/struct.StateCache.html) keeps a
//! shadow copy of the pipeline state and only forwards the calls that actually
//! change something to its [`Backend`](backends/trait.Backend.html).
//!
//! ```rust
//! use matsys::prelude::*;
//!
//! let mut cache = StateCache::new(RecordingBackend::default());
//! let mut matrices = MatrixSet::new();
//!
//! matrices.translate(MatrixName::ModelToWorld, 0.0, 0.0, -10.0);
//! matrices.upload(&mut cache);
//!
//! // Nothing has changed since the last upload, so nothing is issued.
//! cache.backend_mut().clear();
//! matrices.upload(&mut cache);
//! assert!(cache.backend().calls().is_empty());
//! ```
//!
//! Both pieces are single-threaded by construction: matrix nodes use interior
//! mutability and shared ownership through `Rc`, so neither they nor a
//! `StateCache` holding them can leave the thread that owns the context.

pub mod backends;
pub mod errors;
pub mod matrices;
pub mod matrix;
pub mod settings;
pub mod state;

/// The maximum number of texture units the state cache tracks.
pub const MAX_TEXTURE_UNITS: usize = 8;

/// The number of numbered extra matrix slots, `MATRIX0` .. `MATRIX31`.
pub const MAX_EXTRA_MATRICES: usize = 32;

pub mod prelude {
    pub use super::backends::headless::HeadlessBackend;
    pub use super::backends::recorder::{Call, RecordingBackend};
    pub use super::backends::{Backend, BackendCapabilities};
    pub use super::matrices::{MatrixName, MatrixSet};
    pub use super::matrix::{
        Age, DepRelMatrix, InverseMatrix, MatrixId, MatrixRef, ProductMatrix, RootMatrix,
    };
    pub use super::settings::VideoParams;
    pub use super::state::prelude::*;
}
