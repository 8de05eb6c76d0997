mod id;
mod name;

pub use self::{id::*, name::*};
use crate::entity::Applier;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Author {
    id: AuthorId,
    first_name: AuthorFirstName,
    last_name: AuthorLastName,
}

impl Author {
    pub fn new(id: AuthorId, first_name: AuthorFirstName, last_name: AuthorLastName) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }
}

/// An author that has not been stored yet.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct AuthorDraft {
    first_name: AuthorFirstName,
    last_name: AuthorLastName,
}

impl AuthorDraft {
    pub fn new(first_name: AuthorFirstName, last_name: AuthorLastName) -> Self {
        Self {
            first_name,
            last_name,
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AuthorPatch {
    pub first_name: Option<AuthorFirstName>,
    pub last_name: Option<AuthorLastName>,
}

impl Applier<AuthorPatch> for Author {
    fn apply(&mut self, patch: AuthorPatch) {
        let AuthorPatch {
            first_name,
            last_name,
        } = patch;
        self.substitute(|author| {
            if let Some(first_name) = first_name {
                *author.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                *author.last_name = last_name;
            }
        })
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{
        Applier, Author, AuthorFirstName, AuthorId, AuthorLastName, AuthorPatch,
    };

    fn john_wick() -> Author {
        Author::new(
            AuthorId::new(1),
            AuthorFirstName::new("John"),
            AuthorLastName::new("Wick"),
        )
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut author = john_wick();
        author.apply(AuthorPatch {
            first_name: Some(AuthorFirstName::new("J. K.")),
            last_name: None,
        });
        assert_eq!(author.first_name(), &AuthorFirstName::new("J. K."));
        assert_eq!(author.last_name(), &AuthorLastName::new("Wick"));
        assert_eq!(author.id(), &AuthorId::new(1));
    }

    #[test]
    fn empty_patch_keeps_author() {
        let mut author = john_wick();
        author.apply(AuthorPatch::default());
        assert_eq!(author, john_wick());
    }

    #[test]
    fn explicit_empty_string_is_written() {
        let mut author = john_wick();
        author.apply(AuthorPatch {
            first_name: None,
            last_name: Some(AuthorLastName::new("")),
        });
        assert_eq!(author.last_name(), &AuthorLastName::new(""));
    }
}
