mod consent;
mod notification;

pub use consent::ConsentServiceImpl;
pub use notification::{NotificationServiceImpl, NotificationSettings};
