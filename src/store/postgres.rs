//! Postgres-backed fruit store.

use super::FruitStore;
use crate::error::StoreError;
use crate::model::Fruit;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use uuid::Uuid;

pub const FRUITS_TABLE: &str = "fruits";

const COLUMNS: &str = "id, name, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct FruitRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FruitRow> for Fruit {
    fn from(row: FruitRow) -> Self {
        Fruit {
            id: row.id.to_string(),
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Clone)]
pub struct PgFruitStore {
    pool: PgPool,
}

impl PgFruitStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Waits for checked-out connections to be returned, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Ids that are not UUIDs can never match a row.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::try_parse(id).ok()
}

#[async_trait]
impl FruitStore for PgFruitStore {
    async fn create(&self, name: &str) -> Result<Fruit, StoreError> {
        let sql = format!(
            "INSERT INTO {} (id, name) VALUES ($1, $2) RETURNING {}",
            FRUITS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row: FruitRow = sqlx::query_as(&sql)
            .bind(Uuid::new_v4())
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Fruit>, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, FRUITS_TABLE);
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<FruitRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(Fruit::from))
    }

    async fn find_all(&self) -> Result<Vec<Fruit>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY created_at DESC, seq DESC",
            COLUMNS, FRUITS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<FruitRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Fruit::from).collect())
    }

    async fn update_by_id(&self, id: &str, name: &str) -> Result<Option<Fruit>, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let sql = format!(
            "UPDATE {} SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            FRUITS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<FruitRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Fruit::from))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Fruit>, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING {}", FRUITS_TABLE, COLUMNS);
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<FruitRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(Fruit::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the fruits table if it does not exist. `seq` orders records created
/// within the same timestamp.
pub async fn ensure_fruits_table(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            name TEXT NOT NULL CHECK (btrim(name) <> ''),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        FRUITS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    let index = format!(
        "CREATE INDEX IF NOT EXISTS {0}_created_idx ON {0} (created_at DESC, seq DESC)",
        FRUITS_TABLE
    );
    sqlx::query(&index).execute(pool).await?;
    Ok(())
}

/// Connect to the server's `postgres` database and create the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), StoreError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| StoreError::Unavailable("DATABASE_URL: no database path".into()))?;
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((db, q)) => (db.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
