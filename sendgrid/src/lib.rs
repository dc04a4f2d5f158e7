mod client;
mod mail;

pub use client::*;
pub use mail::*;
