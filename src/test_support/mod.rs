//! Builders, object mothers and collaborator doubles shared by the tests.

mod doubles;

pub use builders::*;
pub use doubles::*;
