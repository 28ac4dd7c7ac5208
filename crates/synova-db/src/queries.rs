use anyhow::Result;
use rusqlite::Connection;

use crate::Database;
use crate::models::UserRow;

impl Database {
    // -- Users --

    pub fn create_user(&self, id: &str, email: &str, password_hash: &str, tier: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO users (id, email, password, tier) VALUES (?1, ?2, ?3, ?4)",
                (id, email, password_hash, tier),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "email", email))
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "id", id))
    }

    // -- Usage accounting --

    pub fn increment_message_count(&self, user_id: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE users SET message_count = message_count + 1 WHERE id = ?1",
                [user_id],
            )?;
            Ok(())
        })
    }

    /// Start a fresh quota day: zero the counter and stamp the rollover.
    pub fn reset_message_count(&self, user_id: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE users SET message_count = 0, last_reset = datetime('now') WHERE id = ?1",
                [user_id],
            )?;
            Ok(())
        })
    }

    // -- Messages --

    pub fn insert_message(
        &self,
        id: &str,
        user_id: &str,
        message: &str,
        response: &str,
        tier: &str,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO messages (id, user_id, message, response, tier) VALUES (?1, ?2, ?3, ?4, ?5)",
                (id, user_id, message, response, tier),
            )?;
            Ok(())
        })
    }

    // -- Aggregates --

    pub fn count_users_by_tier(&self) -> Result<Vec<(String, i64)>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT tier, COUNT(*) FROM users GROUP BY tier")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn count_messages(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}

fn query_user(conn: &Connection, column: &str, value: &str) -> Result<Option<UserRow>> {
    // `column` is one of two fixed names, never caller input.
    let sql = format!(
        "SELECT id, email, password, tier, message_count, last_reset, created_at
         FROM users WHERE {} = ?1",
        column
    );
    let mut stmt = conn.prepare(&sql)?;

    let row = stmt
        .query_row([value], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                email: row.get(1)?,
                password: row.get(2)?,
                tier: row.get(3)?,
                message_count: row.get(4)?,
                last_reset: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .optional()?;

    Ok(row)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    fn db_with_user(id: &str, email: &str, tier: &str) -> Database {
        let db = Database::open_in_memory().unwrap();
        db.create_user(id, email, "argon2-hash", tier).unwrap();
        db
    }

    #[test]
    fn create_and_fetch_user() {
        let db = db_with_user("u1", "a@example.com", "terrestrial");

        let by_email = db.get_user_by_email("a@example.com").unwrap().unwrap();
        assert_eq!(by_email.id, "u1");
        assert_eq!(by_email.tier, "terrestrial");
        assert_eq!(by_email.message_count, 0);

        let by_id = db.get_user_by_id("u1").unwrap().unwrap();
        assert_eq!(by_id.email, "a@example.com");
    }

    #[test]
    fn unknown_users_come_back_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_user_by_email("nobody@example.com").unwrap().is_none());
        assert!(db.get_user_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let db = db_with_user("u1", "a@example.com", "terrestrial");
        let second = db.create_user("u2", "a@example.com", "other-hash", "terrestrial");
        assert!(second.is_err());
    }

    #[test]
    fn counter_increments_and_resets() {
        let db = db_with_user("u1", "a@example.com", "terrestrial");

        db.increment_message_count("u1").unwrap();
        db.increment_message_count("u1").unwrap();
        assert_eq!(db.get_user_by_id("u1").unwrap().unwrap().message_count, 2);

        // Backdate the rollover stamp, then reset.
        db.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE users SET last_reset = datetime('now', '-1 day') WHERE id = 'u1'",
                [],
            )?;
            Ok(())
        })
        .unwrap();
        let stale = db.get_user_by_id("u1").unwrap().unwrap().last_reset;

        db.reset_message_count("u1").unwrap();
        let user = db.get_user_by_id("u1").unwrap().unwrap();
        assert_eq!(user.message_count, 0);
        assert_ne!(user.last_reset, stale);
    }

    #[test]
    fn messages_append_and_count() {
        let db = db_with_user("u1", "a@example.com", "aerial");
        assert_eq!(db.count_messages().unwrap(), 0);

        db.insert_message("m1", "u1", "hello", "Welcome!", "aerial").unwrap();
        db.insert_message("m2", "u1", "again", "Welcome!", "aerial").unwrap();
        assert_eq!(db.count_messages().unwrap(), 2);
    }

    #[test]
    fn message_rows_require_a_real_user() {
        let db = Database::open_in_memory().unwrap();
        let orphan = db.insert_message("m1", "ghost", "hi", "resp", "terrestrial");
        assert!(orphan.is_err());
    }

    #[test]
    fn users_are_counted_by_tier() {
        let db = db_with_user("u1", "a@example.com", "terrestrial");
        db.create_user("u2", "b@example.com", "h", "terrestrial").unwrap();
        db.create_user("u3", "c@example.com", "h", "celestial").unwrap();

        let mut counts = db.count_users_by_tier().unwrap();
        counts.sort();
        assert_eq!(
            counts,
            vec![("celestial".to_string(), 1), ("terrestrial".to_string(), 2)]
        );
    }
}
