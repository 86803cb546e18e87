// Input adapters

pub mod command_intake;

pub use command_intake::CommandIntake;
