//! Model module - cooling law and Euler stepper

mod cooling;
mod euler;

pub use cooling::{CoolingModel, DEFAULT_AMBIENT_C, DEFAULT_COOLING_RATE};
pub use euler::{euler_predictions, step_size};
