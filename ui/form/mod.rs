mod input_error;
mod validation;

pub use self::input_error::*;
pub use self::validation::*;
