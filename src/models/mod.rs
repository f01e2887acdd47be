mod cart;
mod order;
mod product;
mod wishlist;

pub use cart::*;
pub use order::*;
pub use product::*;
pub use wishlist::*;
