pub mod item;
pub mod user;
pub mod cart;
pub mod order;

pub use item::*;
pub use user::*;
pub use cart::*;
pub use order::*;
