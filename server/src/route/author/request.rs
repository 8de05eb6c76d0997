use serde::Deserialize;

use application::transfer::{CreateAuthorDto, DeleteAuthorDto, GetAuthorDto, UpdateAuthorDto};
use kernel::prelude::entity::{AuthorFirstName, AuthorLastName};

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;
use crate::route::check_length;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    first_name: String,
    last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    first_name: Option<String>,
    last_name: Option<String>,
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

fn check_names(first_name: Option<&str>, last_name: Option<&str>) -> Result<(), ErrorStatus> {
    if let Some(first_name) = first_name {
        check_length("first_name", first_name, AuthorFirstName::MAX_LENGTH)?;
    }
    if let Some(last_name) = last_name {
        check_length("last_name", last_name, AuthorLastName::MAX_LENGTH)?;
    }
    Ok(())
}

pub struct Transformer;

impl TryIntake<CreateRequest> for Transformer {
    type To = CreateAuthorDto;
    type Error = ErrorStatus;
    fn emit(&self, input: CreateRequest) -> Result<Self::To, Self::Error> {
        check_names(Some(&input.first_name), Some(&input.last_name))?;
        Ok(CreateAuthorDto {
            first_name: input.first_name,
            last_name: input.last_name,
        })
    }
}

impl TryIntake<(i32, UpdateRequest)> for Transformer {
    type To = UpdateAuthorDto;
    type Error = ErrorStatus;
    fn emit(&self, input: (i32, UpdateRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        check_names(input.first_name.as_deref(), input.last_name.as_deref())?;
        Ok(UpdateAuthorDto {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
        })
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetAuthorDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetAuthorDto { id: input.id }
    }
}

impl Intake<DeleteRequest> for Transformer {
    type To = DeleteAuthorDto;
    fn emit(&self, input: DeleteRequest) -> Self::To {
        DeleteAuthorDto { id: input.id }
    }
}
