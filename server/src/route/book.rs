use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::{JsonBody, PathId, QueryParams};

use self::request::{
    CreateRequest, DeleteRequest, GetAllRequest, GetRequest, Transformer, UpdateRequest,
};
use self::response::Presenter;

mod request;
mod response;

const BOOK_NOT_FOUND: &str = "Book not found";
const BOOK_NOT_MATCHED: &str = "Book with such params not found.";

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(
                |State(module): State<AppModule>,
                 WithRejection(Query(req), _): QueryParams<GetAllRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(req)
                        .handle(|dto| async move { module.get_all_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): JsonBody<CreateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, WithRejection(Path(id), _): PathId| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| async move { module.get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)?
                        .ok_or_else(|| ErrorStatus::not_found(BOOK_NOT_MATCHED))
                },
            )
            .put(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): PathId,
                 WithRejection(Json(req), _): JsonBody<UpdateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake((id, req))?
                        .handle(|dto| async move { module.update_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)?
                        .ok_or_else(|| ErrorStatus::not_found(BOOK_NOT_FOUND))
                },
            )
            .delete(
                |State(module): State<AppModule>, WithRejection(Path(id), _): PathId| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteRequest::new(id))
                        .handle(|dto| async move { module.delete_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)?
                        .ok_or_else(|| ErrorStatus::not_found(BOOK_NOT_FOUND))
                },
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::json;

    use application::transfer::BookDto;

    use crate::controller::Exhaust;
    use crate::error::{read_json, ErrorStatus};

    use super::response::Presenter;
    use super::{BOOK_NOT_FOUND, BOOK_NOT_MATCHED};

    #[tokio::test]
    async fn missing_book_on_get_is_not_matched() {
        let response = Presenter
            .emit(None::<BookDto>)
            .ok_or_else(|| ErrorStatus::not_found(BOOK_NOT_MATCHED))
            .into_response();
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Book with such params not found." }));
    }

    #[tokio::test]
    async fn missing_book_on_update_is_not_found() {
        let response = Presenter
            .emit(None::<BookDto>)
            .ok_or_else(|| ErrorStatus::not_found(BOOK_NOT_FOUND))
            .into_response();
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Book not found" }));
    }

    #[tokio::test]
    async fn delete_reports_outcome() {
        let deleted = Presenter
            .emit(true)
            .ok_or_else(|| ErrorStatus::not_found(BOOK_NOT_FOUND));
        let (status, body) = read_json(deleted.into_response()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Book deleted successfully" }));

        let missing = Presenter
            .emit(false)
            .ok_or_else(|| ErrorStatus::not_found(BOOK_NOT_FOUND));
        let (status, body) = read_json(missing.into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Book not found" }));
    }
}
