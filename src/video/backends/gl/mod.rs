pub mod backend;
pub mod capabilities;
pub mod legacy;
pub mod types;

pub use self::backend::GLBackend;
