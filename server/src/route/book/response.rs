use axum::Json;
use serde::Serialize;
use time::Date;

use application::transfer::BookDto;

use crate::controller::Exhaust;
use crate::route::MessageResponse;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: i32,
    title: String,
    description: String,
    publish_date: Date,
    author_id: i32,
    #[serde(rename = "ISBN")]
    isbn: Option<String>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        let BookDto {
            id,
            title,
            description,
            publish_date,
            author_id,
            isbn,
        } = value;
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

pub struct Presenter;

impl Exhaust<BookDto> for Presenter {
    type To = Json<BookResponse>;
    fn emit(&self, input: BookDto) -> Self::To {
        Json(BookResponse::from(input))
    }
}

impl Exhaust<Option<BookDto>> for Presenter {
    type To = Option<Json<BookResponse>>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(BookResponse::from).map(Json)
    }
}

impl Exhaust<Vec<BookDto>> for Presenter {
    type To = Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        Json(input.into_iter().map(BookResponse::from).collect())
    }
}

impl Exhaust<bool> for Presenter {
    type To = Option<Json<MessageResponse>>;
    fn emit(&self, input: bool) -> Self::To {
        input.then(|| Json(MessageResponse::new("Book deleted successfully")))
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use time::macros::date;

    use application::transfer::BookDto;

    use super::BookResponse;

    #[test]
    fn serializes_wire_names() {
        let response = BookResponse::from(BookDto {
            id: 1,
            title: "Dune".into(),
            description: "desert".into(),
            publish_date: date!(2023 - 12 - 01),
            author_id: 2,
            isbn: None,
        });
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "id": 1,
                "title": "Dune",
                "description": "desert",
                "publish_date": "2023-12-01",
                "author_id": 2,
                "ISBN": null,
            })
        );
    }
}
