use kernel::prelude::entity::{Author, DestructAuthor};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AuthorDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let DestructAuthor {
            id,
            first_name,
            last_name,
        } = value.into_destruct();
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

pub struct GetAuthorDto {
    pub id: i32,
}

pub struct CreateAuthorDto {
    pub first_name: String,
    pub last_name: String,
}

pub struct UpdateAuthorDto {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub struct DeleteAuthorDto {
    pub id: i32,
}
