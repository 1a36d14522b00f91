//! Moon Shell
//!
//! A page shell with a light/dark color scheme persisted in a cookie.
//!
//! This library provides:
//! - The color scheme preference model, resolver and controller
//! - A Dioxus component tree (context provider, toggle, header shell)
//! - Server-side rendering and HTTP routes (axum)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Preference model (shared)
pub mod theme;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ssr;
