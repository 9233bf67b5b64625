//! # User model for registered accounts
//!
//! Defines the two representations of a PostDesk user:
//!
//! ## [`User`] (server only)
//!
//! The complete database row from the `users` table. It derives [`sqlx::FromRow`] so it
//! can be loaded directly from queries and contains every column:
//!
//! - `id` — primary key (SQLite `AUTOINCREMENT` integer).
//! - `email` / `login` — unique profile fields collected at signup.
//! - `password_digest` — hex SHA-256 digest of the account password.
//!
//! The [`User::to_info`] method projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! A client-safe subset that is `Serialize + Deserialize + PartialEq` and can cross the
//! server/client boundary via Dioxus server functions. It omits the password digest.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub password_digest: String,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email.clone(),
            login: self.login.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub login: String,
}

impl UserInfo {
    /// Get display name, falling back to email if the login is empty.
    pub fn display_name(&self) -> &str {
        if self.login.is_empty() {
            &self.email
        } else {
            &self.login
        }
    }
}
