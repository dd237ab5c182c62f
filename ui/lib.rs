mod dom;
mod flash_message;
mod form;
mod notification;
mod style;
mod timer;

pub use self::dom::*;
pub use self::flash_message::*;
pub use self::form::*;
pub use self::notification::*;
pub use self::style::*;
pub use self::timer::*;
