pub mod cart_queries;
pub mod order_queries;
pub mod product_queries;
pub mod wishlist_queries;
