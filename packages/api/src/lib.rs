//! # API crate — shared fullstack server functions for PostDesk
//!
//! This crate defines every Dioxus server function that the web and desktop
//! frontends call, along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Password digesting, signup validation predicates, session keys |
//! | [`db`] | `server` | SQLite connection pool (lazy `OnceCell` singleton) and per-table queries |
//! | [`models`] | — | Database models (`User`, `Note`) and their client-safe projections |
//! | [`settings`] | — | The key/value environment file holding the bot token and channel link |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`
//! - **Notes**: `create_note`, `list_notes`, `delete_note`
//! - **Settings**: `get_app_settings`, `save_app_settings`

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
pub mod settings;

pub use models::{parse_priority, NoteInfo, NoteSort, UserInfo};
pub use settings::AppSettings;

#[cfg(feature = "server")]
async fn require_user(session: &tower_sessions::Session) -> Result<i64, ServerFnError> {
    let user_id: Option<i64> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    user_id.ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let user_id: Option<i64> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = db::users::find_by_id(pool, user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new account.
///
/// Checks run in a fixed order and the first failure is the single reported
/// error: email format, email uniqueness, login uniqueness, password
/// strength, confirmation match. The caller is expected to reject empty
/// fields before calling. Registration does not log the user in; the signup
/// page navigates back to login on success.
#[cfg(feature = "server")]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    login: String,
    password: String,
    password_confirm: String,
) -> Result<UserInfo, ServerFnError> {
    let email = email.trim().to_lowercase();
    let login = login.trim().to_string();

    if !auth::is_valid_email(&email) {
        return Err(ServerFnError::new("Invalid email format"));
    }

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if db::users::email_exists(pool, &email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    {
        return Err(ServerFnError::new("This email is already taken"));
    }

    if db::users::login_exists(pool, &login)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
    {
        return Err(ServerFnError::new("This login is already taken"));
    }

    if !auth::is_valid_password(&password) {
        return Err(ServerFnError::new("Invalid password"));
    }

    if password != password_confirm {
        return Err(ServerFnError::new("Passwords do not match"));
    }

    let digest = auth::digest_password(&password);
    let user = db::users::insert_user(pool, &email, &login, &digest)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = user.id, "registered new user");

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    login: String,
    password: String,
    password_confirm: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    let email = email.trim().to_lowercase();
    let digest = auth::digest_password(&password);

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = db::users::find_by_credentials(pool, &email, &digest)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Create a note for the authenticated user.
#[cfg(feature = "server")]
#[post("/api/notes", session: tower_sessions::Session)]
pub async fn create_note(note: String, priority: i64) -> Result<NoteInfo, ServerFnError> {
    let user_id = require_user(&session).await?;

    let note = note.trim().to_string();
    if note.is_empty() {
        return Err(ServerFnError::new("Note text is required"));
    }
    if !(1..=3).contains(&priority) {
        return Err(ServerFnError::new("Priority must be between 1 and 3"));
    }

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row = db::notes::insert_note(pool, user_id, &note, priority)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/notes")]
pub async fn create_note(note: String, priority: i64) -> Result<NoteInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the authenticated user's notes, filtered by a search substring and
/// ordered by a sort label ("Priority" or "Date"; anything else sorts by
/// priority).
#[cfg(feature = "server")]
#[get("/api/notes", session: tower_sessions::Session)]
pub async fn list_notes(search: String, sort: String) -> Result<Vec<NoteInfo>, ServerFnError> {
    let user_id = require_user(&session).await?;
    let sort = NoteSort::from_label(&sort);

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows = db::notes::search_for_user(pool, user_id, &search, sort)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|n| n.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/notes")]
pub async fn list_notes(search: String, sort: String) -> Result<Vec<NoteInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete one of the authenticated user's notes by id. Deleting an id that
/// is already gone succeeds with no effect.
#[cfg(feature = "server")]
#[post("/api/notes/delete", session: tower_sessions::Session)]
pub async fn delete_note(id: i64) -> Result<(), ServerFnError> {
    let user_id = require_user(&session).await?;

    let pool = db::get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    db::notes::delete_note(pool, user_id, id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/delete")]
pub async fn delete_note(id: i64) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the app settings for the dashboard. A value saved earlier in this
/// session is preferred over the settings file.
#[cfg(feature = "server")]
#[get("/api/settings", session: tower_sessions::Session)]
pub async fn get_app_settings() -> Result<AppSettings, ServerFnError> {
    use crate::settings::{EnvFile, CHANNEL_LINK, TOKEN_BOT};

    let session_token: Option<String> = session
        .get(TOKEN_BOT)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let session_channel: Option<String> = session
        .get(CHANNEL_LINK)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let env = EnvFile::open_default();
    let token_bot = match session_token {
        Some(v) => Some(v),
        None => env.get(TOKEN_BOT).map_err(|e| ServerFnError::new(e.to_string()))?,
    };
    let channel_link = match session_channel {
        Some(v) => Some(v),
        None => env
            .get(CHANNEL_LINK)
            .map_err(|e| ServerFnError::new(e.to_string()))?,
    };

    Ok(AppSettings {
        token_bot,
        channel_link,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/settings")]
pub async fn get_app_settings() -> Result<AppSettings, ServerFnError> {
    Ok(AppSettings::default())
}

/// Save the app settings: write both keys to the settings file and mirror
/// them into the session.
#[cfg(feature = "server")]
#[post("/api/settings", session: tower_sessions::Session)]
pub async fn save_app_settings(
    token_bot: String,
    channel_link: String,
) -> Result<AppSettings, ServerFnError> {
    use crate::settings::{EnvFile, CHANNEL_LINK, TOKEN_BOT};

    let token_bot = token_bot.trim().to_string();
    let channel_link = channel_link.trim().to_string();

    let env = EnvFile::open_default();
    env.set(TOKEN_BOT, &token_bot)
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    env.set(CHANNEL_LINK, &channel_link)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(TOKEN_BOT, token_bot.clone())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(CHANNEL_LINK, channel_link.clone())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!("saved app settings");

    Ok(AppSettings {
        token_bot: Some(token_bot),
        channel_link: Some(channel_link),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/settings")]
pub async fn save_app_settings(
    token_bot: String,
    channel_link: String,
) -> Result<AppSettings, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
