use crate::db::models::{DbUser, Tool, ToolFields, decode_list, encode_list};
use crate::db::schema::SQLITE_INIT;
use crate::error::CmsError;
use crate::service::password::{PasswordMatch, check_password_blocking, hash_password_blocking};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

const TOOL_COLUMNS: &str = "id, name, description, category, seoTitle, seoDescription, \
     longDescription, features, useCases, steps";

/// Owner of all persisted state: tools, users and sessions.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and initialize the schema.
    ///
    /// The pool is capped at one connection which is never recycled, so an
    /// in-memory database lives as long as the store.
    pub async fn connect(database_url: &str) -> Result<Self, CmsError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_opts)
            .await?;
        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    pub async fn open_in_memory() -> Result<Self, CmsError> {
        Self::connect("sqlite::memory:").await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CmsError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the administrator credential when `users` is empty.
    /// Returns whether a row was inserted.
    pub async fn seed_admin_if_empty(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, CmsError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(false);
        }
        let hash = hash_password_blocking(password.to_string()).await?;
        sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(hash)
            .execute(&self.pool)
            .await?;
        info!(username, "seeded administrator account");
        Ok(true)
    }

    /// Delete every tool and insert `tools` in a single transaction.
    /// Returns the number of rows inserted.
    pub async fn replace_all_tools(&self, tools: &[Tool]) -> Result<usize, CmsError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM tools").execute(&mut *tx).await?;

        for tool in tools {
            sqlx::query(
                r#"
                INSERT INTO tools (
                    id, name, description, category, seoTitle, seoDescription,
                    longDescription, features, useCases, steps
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&tool.id)
            .bind(&tool.name)
            .bind(&tool.description)
            .bind(&tool.category)
            .bind(&tool.seo_title)
            .bind(&tool.seo_description)
            .bind(&tool.long_description)
            .bind(encode_list(&tool.features)?)
            .bind(encode_list(&tool.use_cases)?)
            .bind(encode_list(&tool.steps)?)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(tools.len())
    }

    pub async fn get_all_tools(&self) -> Result<Vec<Tool>, CmsError> {
        let rows = sqlx::query(&format!("SELECT {TOOL_COLUMNS} FROM tools ORDER BY rowid"))
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_tool).collect()
    }

    pub async fn get_tool_by_id(&self, id: &str) -> Result<Tool, CmsError> {
        let row = sqlx::query(&format!("SELECT {TOOL_COLUMNS} FROM tools WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CmsError::ToolNotFound)?;
        Self::row_to_tool(row)
    }

    /// Overwrite all mutable columns of tool `id`.
    pub async fn update_tool(&self, id: &str, fields: &ToolFields) -> Result<(), CmsError> {
        let result = sqlx::query(
            r#"UPDATE tools SET
                name = ?,
                description = ?,
                category = ?,
                seoTitle = ?,
                seoDescription = ?,
                longDescription = ?,
                features = ?,
                useCases = ?,
                steps = ?
              WHERE id = ?"#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.category)
        .bind(&fields.seo_title)
        .bind(&fields.seo_description)
        .bind(&fields.long_description)
        .bind(encode_list(&fields.features)?)
        .bind(encode_list(&fields.use_cases)?)
        .bind(encode_list(&fields.steps)?)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CmsError::ToolNotFound);
        }
        Ok(())
    }

    pub async fn find_user(&self, username: &str) -> Result<Option<DbUser>, CmsError> {
        let row = sqlx::query("SELECT username, password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| -> Result<DbUser, CmsError> {
            Ok(DbUser {
                username: r.try_get("username")?,
                password: r.try_get("password")?,
            })
        })
        .transpose()
    }

    /// Return the user whose stored password matches. Plaintext rows that
    /// match are upgraded to an Argon2 hash in place.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<DbUser>, CmsError> {
        let user = self.find_user(username).await?;
        // a missing user is checked against a dummy hash so timing does not reveal it
        let outcome = check_password_blocking(
            user.as_ref().map(|u| u.password.clone()),
            password.to_string(),
        )
        .await?;
        let Some(mut user) = user else {
            return Ok(None);
        };
        match outcome {
            PasswordMatch::Hashed => Ok(Some(user)),
            PasswordMatch::Legacy => {
                let hash = hash_password_blocking(password.to_string()).await?;
                sqlx::query("UPDATE users SET password = ? WHERE username = ?")
                    .bind(&hash)
                    .bind(&user.username)
                    .execute(&self.pool)
                    .await?;
                info!(username = %user.username, "upgraded plaintext password to argon2");
                user.password = hash;
                Ok(Some(user))
            }
            PasswordMatch::Mismatch => Ok(None),
        }
    }

    pub async fn create_session(
        &self,
        token: &str,
        username: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), CmsError> {
        sqlx::query("INSERT INTO sessions (token, username, expires_at) VALUES (?, ?, ?)")
            .bind(token)
            .bind(username)
            .bind(to_timestamp(expires_at))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Username owning `token`, if the session has not expired at `now`.
    pub async fn session_user(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, CmsError> {
        let row = sqlx::query("SELECT username, expires_at FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let username: String = row.try_get("username")?;
        let expires_str: String = row.try_get("expires_at")?;
        let expires_at = DateTime::parse_from_rfc3339(&expires_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);
        Ok((expires_at > now).then_some(username))
    }

    pub async fn delete_session(&self, token: &str) -> Result<bool, CmsError> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn purge_expired_sessions(&self, now: DateTime<Utc>) -> Result<u64, CmsError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(to_timestamp(now))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    fn row_to_tool(row: SqliteRow) -> Result<Tool, CmsError> {
        let text = |col: &str| -> Result<String, CmsError> {
            let v: Option<String> = row.try_get(col)?;
            Ok(v.unwrap_or_default())
        };
        let list = |col: &str| -> Result<Vec<String>, CmsError> {
            let v: Option<String> = row.try_get(col)?;
            Ok(decode_list(v.as_deref()))
        };

        Ok(Tool {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: text("description")?,
            category: text("category")?,
            seo_title: text("seoTitle")?,
            seo_description: text("seoDescription")?,
            long_description: text("longDescription")?,
            features: list("features")?,
            use_cases: list("useCases")?,
            steps: list("steps")?,
        })
    }
}

/// Fixed-width UTC form so stored timestamps compare correctly as text.
fn to_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}
