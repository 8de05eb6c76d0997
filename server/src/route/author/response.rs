use axum::Json;
use serde::Serialize;

use application::transfer::AuthorDto;

use crate::controller::Exhaust;
use crate::route::MessageResponse;

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: i32,
    first_name: String,
    last_name: String,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        let AuthorDto {
            id,
            first_name,
            last_name,
        } = value;
        Self {
            id,
            first_name,
            last_name,
        }
    }
}

pub struct Presenter;

impl Exhaust<AuthorDto> for Presenter {
    type To = Json<AuthorResponse>;
    fn emit(&self, input: AuthorDto) -> Self::To {
        Json(AuthorResponse::from(input))
    }
}

impl Exhaust<Option<AuthorDto>> for Presenter {
    type To = Option<Json<AuthorResponse>>;
    fn emit(&self, input: Option<AuthorDto>) -> Self::To {
        input.map(AuthorResponse::from).map(Json)
    }
}

impl Exhaust<Vec<AuthorDto>> for Presenter {
    type To = Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        Json(input.into_iter().map(AuthorResponse::from).collect())
    }
}

impl Exhaust<bool> for Presenter {
    type To = Option<Json<MessageResponse>>;
    fn emit(&self, input: bool) -> Self::To {
        input.then(|| Json(MessageResponse::new("Author deleted successfully")))
    }
}
