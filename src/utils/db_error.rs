/// Name of the unique constraint guarding link tokens.
pub const TOKEN_UNIQUE_CONSTRAINT: &str = "smart_links_token_key";

pub fn is_unique_violation_on_token(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(TOKEN_UNIQUE_CONSTRAINT))
}
