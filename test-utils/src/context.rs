use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Same inactivity expiry the application configures for real sessions.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// An in-memory SQLite database plus an optional session stored in it.
///
/// The database is opened on first use. The session table is only migrated when a
/// test asks for a session, so plain repository tests never create it.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    async fn connect(&mut self) -> Result<(), TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }
        Ok(())
    }

    async fn open_session(&mut self) -> Result<(), TestError> {
        self.connect().await?;
        if self.session.is_some() {
            return Ok(());
        }

        let Some(db) = self.db.as_ref() else {
            return Ok(());
        };

        let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        store
            .migrate()
            .await
            .map_err(|e| TestError::Session(e.to_string()))?;

        self.session = Some(Session::new(
            None,
            Arc::new(store),
            Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
        ));

        Ok(())
    }

    /// Returns the database, connecting on first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        self.connect().await?;
        self.db.as_ref().ok_or(TestError::NotInitialized("database"))
    }

    /// Runs CREATE TABLE statements against the database.
    ///
    /// Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the session, creating its table and the session itself on first call.
    ///
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    /// AuthSession::new(session).set_user_id(1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        self.open_session().await?;
        self.session.as_ref().ok_or(TestError::NotInitialized("session"))
    }

    /// Returns the database and session together for tests that need both borrowed at once.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.open_session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            (None, _) => Err(TestError::NotInitialized("database")),
            (_, None) => Err(TestError::NotInitialized("session")),
        }
    }
}
