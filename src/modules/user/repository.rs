use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

/// Local mirror of an identity-provider account. Rows are provisioned on
/// first authenticated request; the claim columns are the slow-path source
/// of truth when a token predates a claim change.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub is_admin: bool,
    pub is_owner: bool,
    pub created_at: NaiveDateTime,
    pub last_sign_in: Option<NaiveDateTime>,
}

pub enum Error {
    UnexpectedError,
}

pub fn is_admin(user: &User) -> bool {
    user.is_admin
}

pub async fn upsert<'e, E: PgExecutor<'e>>(e: E, uid: String, email: String) -> Result<User, Error> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (uid, email, last_sign_in)
        VALUES ($1, $2, NOW())
        ON CONFLICT (uid)
        DO UPDATE SET email = EXCLUDED.email, last_sign_in = NOW()
        RETURNING *
        ",
    )
    .bind(uid.clone())
    .bind(email)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to upsert user {}: {}", uid, err);
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<User>, Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch users: {}", err);
            Error::UnexpectedError
        })
}

/// Flips the admin claim, leaving every other claim untouched. Returns
/// false when no such user exists.
pub async fn set_admin<'e, E: PgExecutor<'e>>(
    e: E,
    uid: String,
    is_admin: bool,
) -> Result<bool, Error> {
    sqlx::query("UPDATE users SET is_admin = $2 WHERE uid = $1")
        .bind(uid.clone())
        .bind(is_admin)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update admin claim for {}: {}",
                uid,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn set_owner<'e, E: PgExecutor<'e>>(
    e: E,
    uid: String,
    is_owner: bool,
) -> Result<bool, Error> {
    sqlx::query("UPDATE users SET is_owner = $2 WHERE uid = $1")
        .bind(uid.clone())
        .bind(is_owner)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update owner claim for {}: {}",
                uid,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count users: {}", err);
            Error::UnexpectedError
        })
}
