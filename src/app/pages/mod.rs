//! Page components rendered inside the shell.

mod home;

pub use home::Home;
