//! # matsys
//!
//! The rendering core of a material system that drives immediate-mode OpenGL.
//! It is made of two pieces that every renderer backend and every shader
//! leans on:
//!
//! * [`video::matrix`](video/matrix/index.html): matrices that know which other
//! matrices they are derived from. A derived matrix (an inverse, a product)
//! is recomputed only when one of its sources has actually changed, which is
//! detected by comparing integer _ages_ instead of matrix contents.
//!
//! * [`video::state`](video/state/index.html): a shadow copy of the complete
//! fixed-function pipeline state. Every state-changing call is turned into a
//! conditional write, so redundant driver calls are never issued.
//!
//! ```rust
//! use matsys::prelude::*;
//!
//! let mut cache = StateCache::new(RecordingBackend::default());
//! cache.backend_mut().clear();
//!
//! cache.enable(Capability::Blend);
//! cache.enable(Capability::Blend);
//! assert_eq!(cache.backend().calls().len(), 1);
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod errors;
pub mod math;
pub mod prelude;
pub mod video;
