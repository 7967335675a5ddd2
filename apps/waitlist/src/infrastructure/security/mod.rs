pub mod validation;

pub use validation::{SignupValidator, validate};
