mod amount;
mod expense;

pub use amount::*;
pub use expense::*;
