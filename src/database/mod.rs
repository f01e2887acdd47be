mod connection;

pub use connection::{check_health, create_pool};

#[cfg(test)]
pub(crate) use connection::{test_file_pool, test_pool};
