// Library exports for testing and potential external use

pub mod common;
pub mod console;
pub mod math;

pub use math::{checked_factorial, evaluate, factorial};
