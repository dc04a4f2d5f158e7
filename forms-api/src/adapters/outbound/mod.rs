mod mailer;
mod sheets;

pub use mailer::SendGridMailer;
pub use sheets::SheetsConsentStore;
