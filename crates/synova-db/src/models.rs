/// Database row types — these map directly to SQLite rows.
/// Tier stays a plain string here; the API layer parses it.
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub tier: String,
    pub message_count: i64,
    pub last_reset: String,
    pub created_at: String,
}
