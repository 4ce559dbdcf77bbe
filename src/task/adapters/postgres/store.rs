//! `PostgreSQL` store implementation for task persistence.

use super::{
    models::{TaskRow, UpsertTaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskTitle},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the task store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

/// Classifies pool and join failures for one store call.
#[derive(Debug, Clone, Copy)]
pub(crate) enum StoreOp {
    /// A list/lookup call; failures surface as `Unavailable`.
    Read,
    /// An upsert/remove call; failures surface as `WriteFailed`.
    Write,
}

impl StoreOp {
    fn error(self, err: impl std::error::Error + Send + Sync + 'static) -> TaskStoreError {
        match self {
            Self::Read => TaskStoreError::unavailable(err),
            Self::Write => TaskStoreError::write_failed(err),
        }
    }
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Builds a pooled store for the given database URL.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] when the pool cannot be
    /// established.
    pub fn connect(database_url: &str) -> TaskStoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .map_err(TaskStoreError::unavailable)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, op: StoreOp, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(|err| op.error(err))?;
            f(&mut connection)
        })
        .await
        .map_err(|err| op.error(err))?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(StoreOp::Read, |connection| {
            let rows = tasks::table
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::unavailable)?;
            rows.into_iter()
                .map(|row| row_to_task(row, StoreOp::Read))
                .collect()
        })
        .await
    }

    async fn upsert(&self, task: Task) -> TaskStoreResult<Task> {
        let row = to_upsert_row(&task);
        self.run_blocking(StoreOp::Write, move |connection| {
            let stored = diesel::insert_into(tasks::table)
                .values(&row)
                .on_conflict(tasks::id)
                .do_update()
                .set(&row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskStoreError::write_failed)?;
            row_to_task(stored, StoreOp::Write)
        })
        .await
    }

    async fn remove(&self, id: TaskId) -> TaskStoreResult<()> {
        self.run_blocking(StoreOp::Write, move |connection| {
            // Zero affected rows means the id was already absent, which the
            // port contract treats as success.
            diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskStoreError::write_failed)?;
            Ok(())
        })
        .await
    }
}

/// Maps a domain task onto its insert-or-update row.
pub(crate) fn to_upsert_row(task: &Task) -> UpsertTaskRow {
    UpsertTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        completed: task.completed(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

/// Maps a stored row back onto the domain task, re-validating the title.
pub(crate) fn row_to_task(row: TaskRow, op: StoreOp) -> TaskStoreResult<Task> {
    let title = TaskTitle::new(row.title).map_err(|err| op.error(err))?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title,
        description: row.description,
        completed: row.completed,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(Task::from_persisted(data))
}
