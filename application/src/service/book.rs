use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Applier, AuthorId, BookDescription, BookDraft, BookFilter, BookId, BookIsbn, BookPatch,
    BookPublishDate, BookTitle,
};
use kernel::{ErrorDetail, KernelError};

use crate::service::explain_conflict;
use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};

pub const BOOK_EXISTS: &str = "Book with such title exists.";

#[async_trait::async_trait]
pub trait GetAllBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let filter = BookFilter {
            title: dto
                .title
                .filter(|title| !title.is_empty())
                .map(BookTitle::new),
            publish_date: dto.publish_date.map(BookPublishDate::new),
            author_id: dto.author_id.map(AuthorId::new),
        };
        let books = self.book_query().find_all(&mut connection, &filter).await?;
        tracing::debug!(count = books.len(), ?filter, "Listed books");

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookQuery + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let title = BookTitle::new(dto.title);
        let existing = self
            .book_query()
            .find_by_title(&mut connection, &title)
            .await?;
        if existing.is_some() {
            return Err(
                Report::new(KernelError::Conflict).attach_printable(ErrorDetail::new(BOOK_EXISTS))
            );
        }

        let draft = BookDraft::new(
            title,
            BookDescription::new(dto.description),
            BookPublishDate::new(dto.publish_date),
            AuthorId::new(dto.author_id),
            dto.isbn.map(BookIsbn::new),
        );
        let book = self
            .book_modifier()
            .create(&mut connection, &draft)
            .await
            .map_err(|report| explain_conflict(report, BOOK_EXISTS))?;
        connection.commit().await?;

        tracing::info!(id = book.id().as_ref(), "Created book");
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService: 'static + Sync + Send + DependOnBookQuery + DependOnBookModifier {
    /// Returns `None` when no book has the requested id.
    async fn update_book(
        &self,
        dto: UpdateBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let Some(mut book) = self.book_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        book.apply(BookPatch {
            title: dto.title.map(BookTitle::new),
            description: dto.description.map(BookDescription::new),
            publish_date: dto.publish_date.map(BookPublishDate::new),
            author_id: dto.author_id.map(AuthorId::new),
            isbn: dto.isbn.map(|isbn| isbn.map(BookIsbn::new)),
        });
        let book = self
            .book_modifier()
            .update(&mut connection, &book)
            .await
            .map_err(|report| explain_conflict(report, BOOK_EXISTS))?;
        connection.commit().await?;

        tracing::info!(id = id.as_ref(), "Updated book");
        Ok(Some(BookDto::from(book)))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookQuery + DependOnBookModifier {
    /// Returns `false` when no book has the requested id.
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        if self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        tracing::info!(id = id.as_ref(), "Deleted book");
        Ok(true)
    }
}

impl<T> DeleteBookService for T where T: DependOnBookQuery + DependOnBookModifier {}
