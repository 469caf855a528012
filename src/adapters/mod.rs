//! In-process implementations of the checkout collaborators.

pub mod order_store;
pub mod gateway;
pub mod email;

pub use order_store::*;
pub use gateway::*;
pub use email::*;
