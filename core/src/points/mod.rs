//! The deduplicating point registry and synthetic point naming.

pub mod naming;
pub use naming::NameGenerator;

pub mod registry;
pub use registry::PointRegistry;
