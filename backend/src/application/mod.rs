// Application layer - use cases
// Orchestrates domain logic through the ports it defines

pub mod courses;
pub mod ports;
pub mod videos;
