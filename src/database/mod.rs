pub mod connection;
pub mod query_builder;

pub use connection::*;
pub use query_builder::*;
