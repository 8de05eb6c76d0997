use sqlx::PgConnection;
use time::Date;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    AuthorId, Book, BookDescription, BookDraft, BookFilter, BookId, BookIsbn, BookPublishDate,
    BookTitle,
};
use kernel::KernelError;

use crate::database::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con, filter).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_by_title(
        &self,
        con: &mut PostgresConnection,
        title: &BookTitle,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_title(con, title).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        book: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        book: &Book,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, book_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i32,
    title: String,
    description: String,
    publish_date: Date,
    author_id: i32,
    isbn: Option<String>,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookDescription::new(value.description),
            BookPublishDate::new(value.publish_date),
            AuthorId::new(value.author_id),
            value.isbn.map(BookIsbn::new),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_all(
        con: &mut PgConnection,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let title: Option<&String> = filter.title.as_ref().map(AsRef::as_ref);
        let publish_date: Option<Date> = filter.publish_date.map(Date::from);
        let author_id: Option<i32> = filter.author_id.map(i32::from);
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, description, publish_date, author_id, isbn
            FROM book
            WHERE ($1::VARCHAR IS NULL OR title = $1)
              AND ($2::DATE IS NULL OR publish_date = $2)
              AND ($3::INTEGER IS NULL OR author_id = $3)
            ORDER BY id
            "#,
        )
        .bind(title)
        .bind(publish_date)
        .bind(author_id)
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, description, publish_date, author_id, isbn
            FROM book
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn find_by_title(
        con: &mut PgConnection,
        title: &BookTitle,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, description, publish_date, author_id, isbn
            FROM book
            WHERE title = $1
            "#,
        )
        .bind(title.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn create(con: &mut PgConnection, book: &BookDraft) -> error_stack::Result<Book, KernelError> {
        let isbn: Option<&String> = book.isbn().as_ref().map(AsRef::as_ref);
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            INSERT INTO book (title, description, publish_date, author_id, isbn)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, publish_date, author_id, isbn
            "#,
        )
        .bind(book.title().as_ref())
        .bind(book.description().as_ref())
        .bind(book.publish_date().as_ref())
        .bind(book.author_id().as_ref())
        .bind(isbn)
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(Book::from(row))
    }

    async fn update(con: &mut PgConnection, book: &Book) -> error_stack::Result<Book, KernelError> {
        let isbn: Option<&String> = book.isbn().as_ref().map(AsRef::as_ref);
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            UPDATE book
            SET title = $2, description = $3, publish_date = $4, author_id = $5, isbn = $6
            WHERE id = $1
            RETURNING id, title, description, publish_date, author_id, isbn
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.description().as_ref())
        .bind(book.publish_date().as_ref())
        .bind(book.author_id().as_ref())
        .bind(isbn)
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(Book::from(row))
    }

    async fn delete(con: &mut PgConnection, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM book
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
