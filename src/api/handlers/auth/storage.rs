//! Database helpers for users and one-time codes.

use super::utils::is_unique_violation;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

/// Outcome when attempting to create a new user row.
#[derive(Debug)]
pub(super) enum InsertUserOutcome {
    Created(Uuid),
    Conflict,
}

/// Outcome when consuming the most recent one-time code for an email.
#[derive(Debug)]
pub(super) enum ConsumeOutcome {
    Consumed,
    Missing,
    Mismatch,
    Expired,
}

/// Minimal fields needed to authenticate a user.
pub(super) struct UserRecord {
    pub(super) id: Uuid,
    pub(super) email: String,
    pub(super) password_hash: Option<String>,
}

pub(super) async fn user_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    let query = "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1) AS exists";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .fetch_one(pool)
        .instrument(span)
        .await?;

    Ok(row.get("exists"))
}

/// Insert a new user, `password_hash` is NULL for OTP-only registrations.
pub(super) async fn insert_user(
    pool: &PgPool,
    email: &str,
    password_hash: Option<&str>,
) -> Result<InsertUserOutcome, sqlx::Error> {
    let query = "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .instrument(span)
        .await;

    match row {
        Ok(row) => Ok(InsertUserOutcome::Created(row.get("id"))),
        Err(err) if is_unique_violation(&err) => Ok(InsertUserOutcome::Conflict),
        Err(err) => Err(err),
    }
}

pub(super) async fn lookup_user(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    let query = "SELECT id, email, password_hash FROM users WHERE email = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .fetch_optional(pool)
        .instrument(span)
        .await?;

    Ok(row.map(|row| UserRecord {
        id: row.get("id"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
    }))
}

/// Replace any stored codes for this email with a fresh one.
///
/// Delete and insert run in one transaction so the invariant of at most one
/// honored code holds at commit. Two concurrent issuances can still leave the
/// loser's code behind for a moment, consumption only honors the newest row
/// so the stale one is dead weight until the next replace or consume.
pub(super) async fn replace_code(
    pool: &PgPool,
    email: &str,
    code: &str,
    ttl_seconds: i64,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let query = "DELETE FROM one_time_codes WHERE email = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "DELETE",
        db.statement = query
    );
    sqlx::query(query)
        .bind(email)
        .execute(&mut *tx)
        .instrument(span)
        .await?;

    let query = r"
        INSERT INTO one_time_codes (email, code, expires_at)
        VALUES ($1, $2, NOW() + ($3 * INTERVAL '1 second'))
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    sqlx::query(query)
        .bind(email)
        .bind(code)
        .bind(ttl_seconds)
        .execute(&mut *tx)
        .instrument(span)
        .await?;

    tx.commit().await
}

/// Check the submitted code against the newest stored one and consume it.
///
/// Only the most recent row per email is honored. On a valid match every
/// code for the email is deleted so a code can never be used twice. An
/// expired match is rejected on read and left in place, the next issuance
/// purges it. `FOR UPDATE` serializes concurrent attempts on the same row,
/// the loser of the race sees no rows and gets `Missing`.
pub(super) async fn consume_latest_code(
    pool: &PgPool,
    email: &str,
    submitted: &str,
) -> Result<ConsumeOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let query = r"
        SELECT code, expires_at
        FROM one_time_codes
        WHERE email = $1
        ORDER BY created_at DESC
        LIMIT 1
        FOR UPDATE
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .fetch_optional(&mut *tx)
        .instrument(span)
        .await?;

    let Some(row) = row else {
        let _ = tx.rollback().await;
        return Ok(ConsumeOutcome::Missing);
    };

    let stored: String = row.get("code");
    let expires_at: DateTime<Utc> = row.get("expires_at");

    if stored != submitted.trim() {
        let _ = tx.rollback().await;
        return Ok(ConsumeOutcome::Mismatch);
    }

    if expires_at < Utc::now() {
        let _ = tx.rollback().await;
        return Ok(ConsumeOutcome::Expired);
    }

    let query = "DELETE FROM one_time_codes WHERE email = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "DELETE",
        db.statement = query
    );
    sqlx::query(query)
        .bind(email)
        .execute(&mut *tx)
        .instrument(span)
        .await?;

    tx.commit().await?;

    Ok(ConsumeOutcome::Consumed)
}
