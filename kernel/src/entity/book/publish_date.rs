use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookPublishDate(Date);

impl BookPublishDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
