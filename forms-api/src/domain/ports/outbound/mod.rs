mod consent_store;
mod mailer;
#[cfg(test)]
mod mock;

pub use consent_store::*;
pub use mailer::*;
#[cfg(test)]
pub use mock::*;
