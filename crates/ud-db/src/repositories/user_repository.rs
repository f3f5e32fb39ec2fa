//! User repository - the `users` table of the on-device cache.
//!
//! Writes are insert-or-replace on the primary key. Nothing here enforces
//! uniqueness of `email`; callers that de-duplicate by email do a lookup first
//! (see [`UserRepository::insert_if_email_absent`]) and that check is not
//! race-safe.

use crate::{DbError, Result as DbErrorResult};

use ud_core::UserRecord;

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    dni: String,
    active: i64,
    avatar: Option<String>,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            national_id: row.dni,
            active: row.active != 0,
            avatar_uri: row.avatar.filter(|a| !a.is_empty()),
        }
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace by primary key. A record without an id gets a fresh one.
    ///
    /// Returns the id of the written row.
    pub async fn upsert(&self, user: &UserRecord) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
                INSERT OR REPLACE INTO users (
                    id, first_name, last_name, email, dni, active, avatar
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.national_id)
        .bind(user.active)
        .bind(&user.avatar_uri)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert only when no row carries the same email.
    ///
    /// The record's id is kept when it is free. When another row already owns
    /// it the record gets a fresh id, so an existing row is never replaced.
    ///
    /// Returns `true` when a row was written.
    pub async fn insert_if_email_absent(&self, user: &UserRecord) -> DbErrorResult<bool> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Ok(false);
        }

        let id_taken = match user.id {
            Some(id) => self.find_by_id(id).await?.is_some(),
            None => false,
        };

        if id_taken {
            debug!(
                "Id {:?} already in use, inserting {} under a new id",
                user.id, user.email
            );
            let mut record = user.clone();
            record.id = None;
            self.upsert(&record).await?;
        } else {
            self.upsert(user).await?;
        }

        Ok(true)
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, first_name, last_name, email, dni, active, avatar
                FROM users
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, first_name, last_name, email, dni, active, avatar
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }

    /// First row (lowest id) with a matching email.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, first_name, last_name, email, dni, active, avatar
                FROM users
                WHERE email = ?
                ORDER BY id
                LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRecord::from))
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Update every column of an existing row. Returns `false` if no row matched.
    pub async fn update(&self, user: &UserRecord) -> DbErrorResult<bool> {
        let id = user.id.ok_or_else(|| DbError::MissingId {
            email: user.email.clone(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let result = sqlx::query(
            r#"
                UPDATE users
                SET first_name = ?, last_name = ?, email = ?, dni = ?,
                    active = ?, avatar = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.national_id)
        .bind(user.active)
        .bind(&user.avatar_uri)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Refresh the remote-owned columns of rows matching `email`.
    /// `dni` and `active` belong to the device and are left alone.
    pub async fn refresh_profile(&self, user: &UserRecord) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET first_name = ?, last_name = ?, avatar = ?
                WHERE email = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.avatar_uri)
        .bind(&user.email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_active(&self, id: i64, active: bool) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET active = ? WHERE id = ?")
            .bind(active)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
