pub mod endpoint;
pub(crate) mod executor;
pub mod query;
