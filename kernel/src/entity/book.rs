mod description;
mod filter;
mod id;
mod isbn;
mod publish_date;
mod title;

pub use self::{description::*, filter::*, id::*, isbn::*, publish_date::*, title::*};
use crate::entity::{Applier, AuthorId};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    description: BookDescription,
    publish_date: BookPublishDate,
    author_id: AuthorId,
    isbn: Option<BookIsbn>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        description: BookDescription,
        publish_date: BookPublishDate,
        author_id: AuthorId,
        isbn: Option<BookIsbn>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            publish_date,
            author_id,
            isbn,
        }
    }
}

/// A book that has not been stored yet.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookDraft {
    title: BookTitle,
    description: BookDescription,
    publish_date: BookPublishDate,
    author_id: AuthorId,
    isbn: Option<BookIsbn>,
}

impl BookDraft {
    pub fn new(
        title: BookTitle,
        description: BookDescription,
        publish_date: BookPublishDate,
        author_id: AuthorId,
        isbn: Option<BookIsbn>,
    ) -> Self {
        Self {
            title,
            description,
            publish_date,
            author_id,
            isbn,
        }
    }
}

/// Partial update of a [`Book`].
///
/// `None` leaves a field untouched. `isbn` is nullable, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BookPatch {
    pub title: Option<BookTitle>,
    pub description: Option<BookDescription>,
    pub publish_date: Option<BookPublishDate>,
    pub author_id: Option<AuthorId>,
    pub isbn: Option<Option<BookIsbn>>,
}

impl Applier<BookPatch> for Book {
    fn apply(&mut self, patch: BookPatch) {
        let BookPatch {
            title,
            description,
            publish_date,
            author_id,
            isbn,
        } = patch;
        self.substitute(|book| {
            if let Some(title) = title {
                *book.title = title;
            }
            if let Some(description) = description {
                *book.description = description;
            }
            if let Some(publish_date) = publish_date {
                *book.publish_date = publish_date;
            }
            if let Some(author_id) = author_id {
                *book.author_id = author_id;
            }
            if let Some(isbn) = isbn {
                *book.isbn = isbn;
            }
        })
    }
}
