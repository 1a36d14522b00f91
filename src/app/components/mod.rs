//! Shared UI components for the page shell.

pub mod layout;
pub mod theme;

pub use layout::AppShell;
pub use theme::{use_color_scheme, ColorSchemeContext, ColorSchemeProvider, ColorSchemeToggle};
