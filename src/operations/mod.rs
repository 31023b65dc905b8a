pub mod arithmetic;
pub mod comparison;
pub mod consistency;

pub use arithmetic::BinaryOperation;
