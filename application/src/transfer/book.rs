use time::Date;

use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub publish_date: Date,
    pub author_id: i32,
    pub isbn: Option<String>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            description,
            publish_date,
            author_id,
            isbn,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            publish_date: publish_date.into(),
            author_id: author_id.into(),
            isbn: isbn.map(String::from),
        }
    }
}

#[derive(Debug, Default)]
pub struct GetAllBookDto {
    pub title: Option<String>,
    pub publish_date: Option<Date>,
    pub author_id: Option<i32>,
}

pub struct GetBookDto {
    pub id: i32,
}

pub struct CreateBookDto {
    pub title: String,
    pub description: String,
    pub publish_date: Date,
    pub author_id: i32,
    pub isbn: Option<String>,
}

/// `isbn: Some(None)` clears the stored ISBN, `None` keeps it.
#[derive(Default)]
pub struct UpdateBookDto {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub publish_date: Option<Date>,
    pub author_id: Option<i32>,
    pub isbn: Option<Option<String>>,
}

pub struct DeleteBookDto {
    pub id: i32,
}
