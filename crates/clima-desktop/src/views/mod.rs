//! Application screens

mod login;
mod weather;

pub use login::Login;
pub use weather::Weather;
