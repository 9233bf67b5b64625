//! Queries against the `users` table.
//!
//! Each operation borrows the shared pool and executes one statement.
//! Constraint violations and connection failures propagate as [`sqlx::Error`];
//! the server-function boundary turns them into user-facing messages.

use sqlx::SqlitePool;

use crate::models::User;

/// Check whether an email is already registered.
pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Check whether a login is already taken.
pub async fn login_exists(pool: &SqlitePool, login: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE login = ?")
        .bind(login)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Insert a new user and return the stored row.
pub async fn insert_user(
    pool: &SqlitePool,
    email: &str,
    login: &str,
    password_digest: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as("INSERT INTO users (email, login, password_digest) VALUES (?, ?, ?) RETURNING *")
        .bind(email)
        .bind(login)
        .bind(password_digest)
        .fetch_one(pool)
        .await
}

/// Look up a user by email and password digest. `None` means the credentials
/// don't match any account.
pub async fn find_by_credentials(
    pool: &SqlitePool,
    email: &str,
    password_digest: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE email = ? AND password_digest = ?")
        .bind(email)
        .bind(password_digest)
        .fetch_optional(pool)
        .await
}

/// Look up a user by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::digest_password;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_register_and_uniqueness_checks() {
        let pool = test_pool().await;

        assert!(!email_exists(&pool, "a@x.com").await.unwrap());
        assert!(!login_exists(&pool, "alice").await.unwrap());

        let user = insert_user(&pool, "a@x.com", "alice", &digest_password("P@ssw0rd1"))
            .await
            .unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.login, "alice");

        assert!(email_exists(&pool, "a@x.com").await.unwrap());
        assert!(login_exists(&pool, "alice").await.unwrap());

        // The UNIQUE constraint rejects a second row with the same email.
        let dup = insert_user(&pool, "a@x.com", "alice2", &digest_password("P@ssw0rd1")).await;
        assert!(dup.is_err());
    }

    #[tokio::test]
    async fn test_login_matches_digest_only() {
        let pool = test_pool().await;
        let digest = digest_password("P@ssw0rd1");
        let user = insert_user(&pool, "a@x.com", "alice", &digest).await.unwrap();

        let found = find_by_credentials(&pool, "a@x.com", &digest).await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));

        let wrong = find_by_credentials(&pool, "a@x.com", &digest_password("wrong0000"))
            .await
            .unwrap();
        assert!(wrong.is_none());

        let unknown = find_by_credentials(&pool, "b@x.com", &digest).await.unwrap();
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let pool = test_pool().await;
        let user = insert_user(&pool, "a@x.com", "alice", "digest").await.unwrap();

        assert!(find_by_id(&pool, user.id).await.unwrap().is_some());
        assert!(find_by_id(&pool, user.id + 1).await.unwrap().is_none());
    }
}
