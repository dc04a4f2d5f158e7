mod consent;
mod notification;

pub use consent::*;
pub use notification::*;
