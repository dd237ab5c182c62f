mod config;
mod notification;
mod style;
mod validation;
mod vote;

pub use self::config::*;
pub use self::notification::*;
pub use self::style::*;
pub use self::validation::*;
pub use self::vote::*;
