pub mod representation;
pub mod time_bound;
