pub mod events;
pub mod measurements;
pub mod stations;
