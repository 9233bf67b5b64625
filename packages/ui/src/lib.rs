//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
