use sqlx::PgConnection;

use kernel::interface::query::AuthorQuery;
use kernel::interface::update::AuthorModifier;
use kernel::prelude::entity::{Author, AuthorDraft, AuthorFirstName, AuthorId, AuthorLastName};
use kernel::KernelError;

use crate::database::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for PostgresAuthorRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::find_by_id(con, id).await
    }

    async fn find_by_name(
        &self,
        con: &mut PostgresConnection,
        first_name: &AuthorFirstName,
        last_name: &AuthorLastName,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::find_by_name(con, first_name, last_name).await
    }
}

#[async_trait::async_trait]
impl AuthorModifier for PostgresAuthorRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        author: &AuthorDraft,
    ) -> error_stack::Result<Author, KernelError> {
        PgAuthorInternal::create(con, author).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        author: &Author,
    ) -> error_stack::Result<Author, KernelError> {
        PgAuthorInternal::update(con, author).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::delete(con, author_id).await
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: i32,
    first_name: String,
    last_name: String,
}

impl From<AuthorRow> for Author {
    fn from(value: AuthorRow) -> Self {
        Author::new(
            AuthorId::new(value.id),
            AuthorFirstName::new(value.first_name),
            AuthorLastName::new(value.last_name),
        )
    }
}

pub(in crate::database) struct PgAuthorInternal;

impl PgAuthorInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Author>, KernelError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name
            FROM author
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name
            FROM author
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Author::from))
    }

    async fn find_by_name(
        con: &mut PgConnection,
        first_name: &AuthorFirstName,
        last_name: &AuthorLastName,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name
            FROM author
            WHERE first_name = $1 AND last_name = $2
            "#,
        )
        .bind(first_name.as_ref())
        .bind(last_name.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Author::from))
    }

    async fn create(
        con: &mut PgConnection,
        author: &AuthorDraft,
    ) -> error_stack::Result<Author, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            INSERT INTO author (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(Author::from(row))
    }

    async fn update(
        con: &mut PgConnection,
        author: &Author,
    ) -> error_stack::Result<Author, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            UPDATE author
            SET first_name = $2, last_name = $3
            WHERE id = $1
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(author.id().as_ref())
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(Author::from(row))
    }

    async fn delete(
        con: &mut PgConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM author
            WHERE id = $1
            "#,
        )
        .bind(author_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
