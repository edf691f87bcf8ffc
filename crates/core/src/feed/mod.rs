//! Feed post types and post/transaction link rules.

pub mod types;

pub use types::Post;
