//! Queries against the `notes` table.
//!
//! Listing accepts a search substring and a [`NoteSort`]; the sort key is a
//! closed enum mapped to a fixed ORDER BY clause, so no caller-supplied
//! string ever reaches the query text.

use sqlx::SqlitePool;

use crate::models::{Note, NoteSort};

/// Insert a note for a user and return the stored row.
pub async fn insert_note(
    pool: &SqlitePool,
    user_id: i64,
    note: &str,
    priority: i64,
) -> Result<Note, sqlx::Error> {
    sqlx::query_as("INSERT INTO notes (user_id, note, priority) VALUES (?, ?, ?) RETURNING *")
        .bind(user_id)
        .bind(note)
        .bind(priority)
        .fetch_one(pool)
        .await
}

/// List all notes belonging to a user, in insertion order.
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM notes WHERE user_id = ? ORDER BY id")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// List a user's notes whose text contains `search`, ordered by `sort`.
///
/// The match is a case-insensitive substring; LIKE wildcards in the search
/// term are escaped so they match literally.
pub async fn search_for_user(
    pool: &SqlitePool,
    user_id: i64,
    search: &str,
    sort: NoteSort,
) -> Result<Vec<Note>, sqlx::Error> {
    let order = match sort {
        NoteSort::Priority => "priority ASC, id ASC",
        NoteSort::Date => "created_at DESC, id DESC",
    };
    let sql = format!(
        "SELECT * FROM notes WHERE user_id = ? AND note LIKE ? ESCAPE '\\' ORDER BY {order}"
    );
    sqlx::query_as(&sql)
        .bind(user_id)
        .bind(format!("%{}%", escape_like(search)))
        .fetch_all(pool)
        .await
}

/// Delete one of a user's notes by id. Deleting an id that no longer exists
/// is not an error.
pub async fn delete_note(pool: &SqlitePool, user_id: i64, note_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
        .bind(note_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::db::users::insert_user;

    async fn seed_user(pool: &SqlitePool, email: &str, login: &str) -> i64 {
        insert_user(pool, email, login, "digest").await.unwrap().id
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "a@x.com", "alice").await;

        insert_note(&pool, user, "Buy milk", 2).await.unwrap();
        let notes = list_for_user(&pool, user).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].note, "Buy milk");
        assert_eq!(notes[0].priority, 2);
        assert_eq!(notes[0].user_id, user);
    }

    #[tokio::test]
    async fn test_listing_is_scoped_to_user() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "a@x.com", "alice").await;
        let bob = seed_user(&pool, "b@x.com", "bob").await;

        insert_note(&pool, alice, "alice's note", 1).await.unwrap();
        insert_note(&pool, bob, "bob's note", 1).await.unwrap();

        let notes = search_for_user(&pool, alice, "", NoteSort::Priority)
            .await
            .unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].note, "alice's note");
    }

    #[tokio::test]
    async fn test_search_substring() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "a@x.com", "alice").await;

        insert_note(&pool, user, "Buy milk", 2).await.unwrap();
        insert_note(&pool, user, "Call the bank", 1).await.unwrap();
        insert_note(&pool, user, "buy stamps", 3).await.unwrap();

        // Case-insensitive substring match.
        let hits = search_for_user(&pool, user, "buy", NoteSort::Priority)
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|n| n.note.to_lowercase().contains("buy")));

        // LIKE wildcards match literally, not as patterns.
        let none = search_for_user(&pool, user, "%", NoteSort::Priority)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_sort_orders() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "a@x.com", "alice").await;

        insert_note(&pool, user, "third", 3).await.unwrap();
        insert_note(&pool, user, "first", 1).await.unwrap();
        insert_note(&pool, user, "second", 2).await.unwrap();

        let by_priority = search_for_user(&pool, user, "", NoteSort::Priority)
            .await
            .unwrap();
        let priorities: Vec<i64> = by_priority.iter().map(|n| n.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3]);

        // Date sort is newest-first; ids break ties within one timestamp.
        let by_date = search_for_user(&pool, user, "", NoteSort::Date).await.unwrap();
        let texts: Vec<&str> = by_date.iter().map(|n| n.note.as_str()).collect();
        assert_eq!(texts, vec!["second", "first", "third"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let pool = test_pool().await;
        let user = seed_user(&pool, "a@x.com", "alice").await;

        let note = insert_note(&pool, user, "Buy milk", 2).await.unwrap();
        delete_note(&pool, user, note.id).await.unwrap();
        assert!(list_for_user(&pool, user).await.unwrap().is_empty());

        // Second delete of the same id succeeds with no effect.
        delete_note(&pool, user, note.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_ignores_other_users_notes() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "a@x.com", "alice").await;
        let bob = seed_user(&pool, "b@x.com", "bob").await;

        let note = insert_note(&pool, alice, "alice's note", 1).await.unwrap();
        delete_note(&pool, bob, note.id).await.unwrap();
        assert_eq!(list_for_user(&pool, alice).await.unwrap().len(), 1);
    }
}
