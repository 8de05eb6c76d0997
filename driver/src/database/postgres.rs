use std::num::NonZeroU32;
use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::{ErrorDetail, KernelError};

use crate::error::ConvertError;
use crate::{env, env_opt};

pub use self::{author::*, book::*};

mod author;
mod book;

static POSTGRES_URL: &str = "POSTGRES_URL";
static POSTGRES_MAX_CONNECTIONS: &str = "POSTGRES_MAX_CONNECTIONS";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const REFERENCE_MISSING: &str = "Referenced author does not exist";

// language=postgresql
const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS author (
        id         SERIAL PRIMARY KEY,
        first_name VARCHAR(56)  NOT NULL,
        last_name  VARCHAR(128) NOT NULL,
        CONSTRAINT uq_author_name UNIQUE (first_name, last_name)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS book (
        id           SERIAL PRIMARY KEY,
        title        VARCHAR(255) NOT NULL UNIQUE,
        description  VARCHAR(512) NOT NULL,
        publish_date DATE         NOT NULL,
        author_id    INTEGER      NOT NULL REFERENCES author (id) ON DELETE CASCADE,
        isbn         VARCHAR(13)
    )
    "#,
];

fn parse_max_connections(value: &str) -> error_stack::Result<u32, KernelError> {
    value
        .parse::<NonZeroU32>()
        .map(NonZeroU32::get)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| {
            format!("{POSTGRES_MAX_CONNECTIONS} must be a positive integer, got `{value}`")
        })
}

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let max_connections = match env_opt(POSTGRES_MAX_CONNECTIONS)? {
            Some(value) => parse_max_connections(&value)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&url)
            .await
            .convert_error()?;
        tracing::info!(max_connections, "Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Creates the `author` and `book` tables when they are missing.
    pub async fn prepare_schema(&self) -> error_stack::Result<(), KernelError> {
        let mut con = self.pool.acquire().await.convert_error()?;
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&mut *con)
                .await
                .convert_error()?;
        }
        Ok(())
    }
}

pub struct PostgresConnection(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresConnection {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresConnection;
    async fn transact(&self) -> error_stack::Result<PostgresConnection, KernelError> {
        let con = self.pool.begin().await.convert_error()?;
        Ok(PostgresConnection(con))
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match &error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            Error::RowNotFound => Report::from(error).change_context(KernelError::NotFound),
            Error::Database(database) if database.is_unique_violation() => {
                let constraint = database.constraint().unwrap_or_default().to_string();
                tracing::debug!(%constraint, "Unique constraint violated");
                Report::from(error)
                    .change_context(KernelError::Conflict)
                    .attach_printable(format!("Violated constraint: {constraint}"))
            }
            Error::Database(database) if database.is_foreign_key_violation() => {
                let constraint = database.constraint().unwrap_or_default().to_string();
                tracing::debug!(%constraint, "Foreign key constraint violated");
                Report::from(error)
                    .change_context(KernelError::Conflict)
                    .attach_printable(format!("Violated constraint: {constraint}"))
                    .attach_printable(ErrorDetail::new(REFERENCE_MISSING))
            }
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
