pub mod envelope;
pub mod group;
pub mod session;
pub mod time_slot;
