//! In-memory stand-in for the PostgreSQL driver.
//!
//! Enforces the same constraints as the real schema (unique name pair, unique title, author
//! reference, cascade on author removal) and only publishes staged changes on commit.

use std::collections::BTreeMap;
use std::sync::Arc;

use error_stack::Report;
use tokio::sync::Mutex;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::update::{
    AuthorModifier, BookModifier, DependOnAuthorModifier, DependOnBookModifier,
};
use kernel::prelude::entity::{
    Author, AuthorDraft, AuthorFirstName, AuthorId, AuthorLastName, Book, BookDraft, BookFilter,
    BookId, BookTitle,
};
use kernel::{ErrorDetail, KernelError};

#[derive(Debug, Clone, Default)]
struct Tables {
    authors: BTreeMap<i32, Author>,
    books: BTreeMap<i32, Book>,
    author_sequence: i32,
    book_sequence: i32,
}

impl Tables {
    fn name_taken(
        &self,
        first_name: &AuthorFirstName,
        last_name: &AuthorLastName,
        except: Option<&AuthorId>,
    ) -> bool {
        self.authors.values().any(|author| {
            Some(author.id()) != except
                && author.first_name() == first_name
                && author.last_name() == last_name
        })
    }

    fn title_taken(&self, title: &BookTitle, except: Option<&BookId>) -> bool {
        self.books
            .values()
            .any(|book| Some(book.id()) != except && book.title() == title)
    }

    fn check_author_exists(&self, author_id: &AuthorId) -> error_stack::Result<(), KernelError> {
        if self.authors.contains_key(author_id.as_ref()) {
            Ok(())
        } else {
            Err(Report::new(KernelError::Conflict)
                .attach_printable("book_author_id_fkey")
                .attach_printable(ErrorDetail::new("Referenced author does not exist")))
        }
    }
}

fn matches(filter: &BookFilter, book: &Book) -> bool {
    filter.title.as_ref().map_or(true, |title| title == book.title())
        && filter
            .publish_date
            .as_ref()
            .map_or(true, |publish_date| publish_date == book.publish_date())
        && filter
            .author_id
            .as_ref()
            .map_or(true, |author_id| author_id == book.author_id())
}

#[derive(Clone, Default)]
pub(crate) struct MemoryDatabase {
    committed: Arc<Mutex<Tables>>,
}

pub(crate) struct MemoryTransaction {
    staged: Tables,
    committed: Arc<Mutex<Tables>>,
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Transaction = MemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let staged = self.committed.lock().await.clone();
        Ok(MemoryTransaction {
            staged,
            committed: Arc::clone(&self.committed),
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        *self.committed.lock().await = self.staged;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

pub(crate) struct MemoryAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for MemoryAuthorRepository {
    type Transaction = MemoryTransaction;

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        Ok(con.staged.authors.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        Ok(con.staged.authors.get(id.as_ref()).cloned())
    }

    async fn find_by_name(
        &self,
        con: &mut MemoryTransaction,
        first_name: &AuthorFirstName,
        last_name: &AuthorLastName,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        Ok(con
            .staged
            .authors
            .values()
            .find(|author| author.first_name() == first_name && author.last_name() == last_name)
            .cloned())
    }
}

#[async_trait::async_trait]
impl AuthorModifier for MemoryAuthorRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        author: &AuthorDraft,
    ) -> error_stack::Result<Author, KernelError> {
        let tables = &mut con.staged;
        if tables.name_taken(author.first_name(), author.last_name(), None) {
            return Err(Report::new(KernelError::Conflict).attach_printable("uq_author_name"));
        }
        tables.author_sequence += 1;
        let id = AuthorId::new(tables.author_sequence);
        let created = Author::new(id, author.first_name().clone(), author.last_name().clone());
        tables.authors.insert(*id.as_ref(), created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        author: &Author,
    ) -> error_stack::Result<Author, KernelError> {
        let tables = &mut con.staged;
        if !tables.authors.contains_key(author.id().as_ref()) {
            return Err(Report::new(KernelError::NotFound));
        }
        if tables.name_taken(author.first_name(), author.last_name(), Some(author.id())) {
            return Err(Report::new(KernelError::Conflict).attach_printable("uq_author_name"));
        }
        tables.authors.insert(*author.id().as_ref(), author.clone());
        Ok(author.clone())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        let tables = &mut con.staged;
        tables.authors.remove(author_id.as_ref());
        tables.books.retain(|_, book| book.author_id() != author_id);
        Ok(())
    }
}

pub(crate) struct MemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for MemoryBookRepository {
    type Transaction = MemoryTransaction;

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con
            .staged
            .books
            .values()
            .filter(|book| matches(filter, book))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.staged.books.get(id.as_ref()).cloned())
    }

    async fn find_by_title(
        &self,
        con: &mut MemoryTransaction,
        title: &BookTitle,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con
            .staged
            .books
            .values()
            .find(|book| book.title() == title)
            .cloned())
    }
}

#[async_trait::async_trait]
impl BookModifier for MemoryBookRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        book: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        let tables = &mut con.staged;
        if tables.title_taken(book.title(), None) {
            return Err(Report::new(KernelError::Conflict).attach_printable("book_title_key"));
        }
        tables.check_author_exists(book.author_id())?;
        tables.book_sequence += 1;
        let id = BookId::new(tables.book_sequence);
        let created = Book::new(
            id,
            book.title().clone(),
            book.description().clone(),
            *book.publish_date(),
            *book.author_id(),
            book.isbn().clone(),
        );
        tables.books.insert(*id.as_ref(), created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<Book, KernelError> {
        let tables = &mut con.staged;
        if !tables.books.contains_key(book.id().as_ref()) {
            return Err(Report::new(KernelError::NotFound));
        }
        if tables.title_taken(book.title(), Some(book.id())) {
            return Err(Report::new(KernelError::Conflict).attach_printable("book_title_key"));
        }
        tables.check_author_exists(book.author_id())?;
        tables.books.insert(*book.id().as_ref(), book.clone());
        Ok(book.clone())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        con.staged.books.remove(book_id.as_ref());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MemoryModule {
    database: MemoryDatabase,
}

impl DependOnDatabaseConnection for MemoryModule {
    type DatabaseConnection = MemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl DependOnAuthorQuery for MemoryModule {
    type AuthorQuery = MemoryAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &MemoryAuthorRepository
    }
}

impl DependOnAuthorModifier for MemoryModule {
    type AuthorModifier = MemoryAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &MemoryAuthorRepository
    }
}

impl DependOnBookQuery for MemoryModule {
    type BookQuery = MemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MemoryBookRepository
    }
}

impl DependOnBookModifier for MemoryModule {
    type BookModifier = MemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &MemoryBookRepository
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use kernel::prelude::entity::{
        AuthorId, Book, BookDescription, BookFilter, BookId, BookPublishDate, BookTitle,
    };

    use super::matches;

    fn dune() -> Book {
        Book::new(
            BookId::new(1),
            BookTitle::new("Dune"),
            BookDescription::new("desert planet"),
            BookPublishDate::new(date!(1965 - 08 - 01)),
            AuthorId::new(1),
            None,
        )
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches(&BookFilter::default(), &dune()));
    }

    #[test]
    fn filters_are_combined_with_and() {
        let filter = BookFilter {
            title: Some(BookTitle::new("Dune")),
            author_id: Some(AuthorId::new(1)),
            ..Default::default()
        };
        assert!(matches(&filter, &dune()));

        let other_author = BookFilter {
            author_id: Some(AuthorId::new(2)),
            ..filter.clone()
        };
        assert!(!matches(&other_author, &dune()));

        let other_title = BookFilter {
            title: Some(BookTitle::new("Emma")),
            ..filter
        };
        assert!(!matches(&other_title, &dune()));
    }
}
