pub mod config;
pub mod contact;
pub mod mail;
pub mod routes;

pub use config::*;
pub use contact::*;
pub use mail::*;
pub use routes::*;
