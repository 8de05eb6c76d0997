use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct AuthorFirstName(String);

impl AuthorFirstName {
    pub const MAX_LENGTH: usize = 56;

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct AuthorLastName(String);

impl AuthorLastName {
    pub const MAX_LENGTH: usize = 128;

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
