use crate::entity::{AuthorId, BookPublishDate, BookTitle};

/// Criteria for listing books. Every present field must match; absent fields match anything.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BookFilter {
    pub title: Option<BookTitle>,
    pub publish_date: Option<BookPublishDate>,
    pub author_id: Option<AuthorId>,
}
