pub mod appointment;
pub mod board;
