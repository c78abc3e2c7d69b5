pub mod inbound;
pub mod lending;
pub mod restoration;
pub mod stuff;
