mod consent;
mod email;
mod fields;
mod submission;

pub use consent::*;
pub use email::*;
pub use fields::*;
pub use submission::*;
