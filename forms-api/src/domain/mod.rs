mod error;
pub mod models;
pub mod ports;
pub mod services;
mod template;

pub use error::*;
pub use template::*;
