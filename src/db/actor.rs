use crate::db::models::{DbCommit, DbRepository};
use crate::db::schema::SQLITE_INIT;
use crate::error::PytoriError;
use crate::store::{Commit, RecordStore, Repository};
use async_trait::async_trait;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

#[derive(Debug)]
pub enum DbActorMessage {
    /// Get a repository by primary key (`None` when absent).
    GetRepository(i64, RpcReplyPort<Result<Option<Repository>, PytoriError>>),

    /// List every repository ordered by id.
    ListRepositories(RpcReplyPort<Result<Vec<Repository>, PytoriError>>),

    /// List merged commits of one repository ordered by commit id.
    QueryMergedCommits(i64, RpcReplyPort<Result<Vec<Commit>, PytoriError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn get_repository(&self, id: i64) -> Result<Option<Repository>, PytoriError> {
        ractor::call!(self.actor, DbActorMessage::GetRepository, id).map_err(|e| {
            PytoriError::RactorError(format!("DbActor GetRepository RPC failed: {e}"))
        })?
    }

    pub async fn list_repositories(&self) -> Result<Vec<Repository>, PytoriError> {
        ractor::call!(self.actor, DbActorMessage::ListRepositories).map_err(|e| {
            PytoriError::RactorError(format!("DbActor ListRepositories RPC failed: {e}"))
        })?
    }

    pub async fn query_merged_commits(
        &self,
        repository_id: i64,
    ) -> Result<Vec<Commit>, PytoriError> {
        ractor::call!(self.actor, DbActorMessage::QueryMergedCommits, repository_id).map_err(
            |e| PytoriError::RactorError(format!("DbActor QueryMergedCommits RPC failed: {e}")),
        )?
    }
}

#[async_trait]
impl RecordStore for DbActorHandle {
    async fn get_repository(&self, id: i64) -> Result<Option<Repository>, PytoriError> {
        DbActorHandle::get_repository(self, id).await
    }

    async fn query_merged_commits(
        &self,
        repository_id: i64,
    ) -> Result<Vec<Commit>, PytoriError> {
        DbActorHandle::query_merged_commits(self, repository_id).await
    }

    async fn list_all_repositories(&self) -> Result<Vec<Repository>, PytoriError> {
        self.list_repositories().await
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let pool = connect(database_url.as_str())
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        // Reads run on their own tasks so one slow scan never holds the mailbox.
        let pool = state.pool.clone();
        match message {
            DbActorMessage::GetRepository(id, reply) => {
                tokio::spawn(async move {
                    let _ = reply.send(get_repository(&pool, id).await);
                });
            }
            DbActorMessage::ListRepositories(reply) => {
                tokio::spawn(async move {
                    let _ = reply.send(list_repositories(&pool).await);
                });
            }
            DbActorMessage::QueryMergedCommits(repository_id, reply) => {
                tokio::spawn(async move {
                    let _ = reply.send(query_merged_commits(&pool, repository_id).await);
                });
            }
        }
        Ok(())
    }
}

async fn get_repository(pool: &SqlitePool, id: i64) -> Result<Option<Repository>, PytoriError> {
    let row = sqlx::query_as::<_, DbRepository>(
        r#"
        SELECT id, name, status
        FROM pytori_repos
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Repository::from))
}

async fn list_repositories(pool: &SqlitePool) -> Result<Vec<Repository>, PytoriError> {
    let rows = sqlx::query_as::<_, DbRepository>(
        r#"
        SELECT id, name, status
        FROM pytori_repos
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Repository::from).collect())
}

async fn query_merged_commits(
    pool: &SqlitePool,
    repository_id: i64,
) -> Result<Vec<Commit>, PytoriError> {
    let rows = sqlx::query_as::<_, DbCommit>(
        r#"
        SELECT id, repository_id, current_word, review_comment, theme, is_merged, merged_on
        FROM pytori_commits
        WHERE repository_id = ? AND is_merged = 1
        ORDER BY id
        "#,
    )
    .bind(repository_id)
    .fetch_all(pool)
    .await?;

    debug!(repository_id, rows = rows.len(), "Merged commits fetched");
    rows.into_iter().map(Commit::try_from).collect()
}

/// Opens a WAL-mode SQLite pool, creating the database file if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, PytoriError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    Ok(pool)
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, PytoriError> {
    // Unnamed: tests spawn several actors in one process.
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| PytoriError::StoreUnavailable(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

pub async fn apply_schema(pool: &SqlitePool) -> Result<(), PytoriError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
