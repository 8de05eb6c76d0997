use serde::{Deserialize, Deserializer};
use time::Date;

use application::transfer::{
    CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};
use kernel::prelude::entity::{BookDescription, BookIsbn, BookTitle};

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;
use crate::route::check_length;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    title: String,
    description: String,
    publish_date: Date,
    author_id: i32,
    #[serde(default, rename = "ISBN", alias = "isbn")]
    isbn: Option<String>,
}

/// A missing field keeps the stored value; `"ISBN": null` clears it.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    title: Option<String>,
    description: Option<String>,
    publish_date: Option<Date>,
    author_id: Option<i32>,
    #[serde(
        default,
        rename = "ISBN",
        alias = "isbn",
        deserialize_with = "double_option"
    )]
    isbn: Option<Option<String>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct GetAllRequest {
    title: Option<String>,
    publish_date: Option<Date>,
    author_id: Option<i32>,
}

#[derive(Debug)]
pub struct GetRequest {
    id: i32,
}

impl GetRequest {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteRequest {
    id: i32,
}

impl DeleteRequest {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

fn check_fields(
    title: Option<&str>,
    description: Option<&str>,
    isbn: Option<&str>,
) -> Result<(), ErrorStatus> {
    if let Some(title) = title {
        check_length("title", title, BookTitle::MAX_LENGTH)?;
    }
    if let Some(description) = description {
        check_length("description", description, BookDescription::MAX_LENGTH)?;
    }
    if let Some(isbn) = isbn {
        check_length("ISBN", isbn, BookIsbn::MAX_LENGTH)?;
    }
    Ok(())
}

pub struct Transformer;

impl TryIntake<CreateRequest> for Transformer {
    type To = CreateBookDto;
    type Error = ErrorStatus;
    fn emit(&self, input: CreateRequest) -> Result<Self::To, Self::Error> {
        check_fields(
            Some(&input.title),
            Some(&input.description),
            input.isbn.as_deref(),
        )?;
        Ok(CreateBookDto {
            title: input.title,
            description: input.description,
            publish_date: input.publish_date,
            author_id: input.author_id,
            isbn: input.isbn,
        })
    }
}

impl TryIntake<(i32, UpdateRequest)> for Transformer {
    type To = UpdateBookDto;
    type Error = ErrorStatus;
    fn emit(&self, input: (i32, UpdateRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        check_fields(
            input.title.as_deref(),
            input.description.as_deref(),
            input.isbn.as_ref().and_then(Option::as_deref),
        )?;
        Ok(UpdateBookDto {
            id,
            title: input.title,
            description: input.description,
            publish_date: input.publish_date,
            author_id: input.author_id,
            isbn: input.isbn,
        })
    }
}

impl Intake<GetAllRequest> for Transformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetAllRequest) -> Self::To {
        GetAllBookDto {
            title: input.title.filter(|title| !title.is_empty()),
            publish_date: input.publish_date,
            author_id: input.author_id,
        }
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetBookDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
