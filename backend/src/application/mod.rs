// Application layer - commands, queries and the ports they drive
// Orchestrates domain logic, depends on domain layer only

pub mod commands;
pub mod ports;
pub mod queries;
