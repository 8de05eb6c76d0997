use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use application::service::{
    CreateAuthorService, DeleteAuthorService, GetAllAuthorService, GetAuthorService,
    UpdateAuthorService,
};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::{JsonBody, PathId};

use self::request::{CreateRequest, DeleteRequest, GetRequest, Transformer, UpdateRequest};
use self::response::Presenter;

mod request;
mod response;

const AUTHOR_NOT_FOUND: &str = "Author not found";

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/authors",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move { module.get_all_authors().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 WithRejection(Json(req), _): JsonBody<CreateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.create_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/authors/:id",
            get(
                |State(module): State<AppModule>, WithRejection(Path(id), _): PathId| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| async move { module.get_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)?
                        .ok_or_else(|| ErrorStatus::not_found(AUTHOR_NOT_FOUND))
                },
            )
            .put(
                |State(module): State<AppModule>,
                 WithRejection(Path(id), _): PathId,
                 WithRejection(Json(req), _): JsonBody<UpdateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake((id, req))?
                        .handle(|dto| async move { module.update_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)?
                        .ok_or_else(|| ErrorStatus::not_found(AUTHOR_NOT_FOUND))
                },
            )
            .delete(
                |State(module): State<AppModule>, WithRejection(Path(id), _): PathId| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteRequest::new(id))
                        .handle(|dto| async move { module.delete_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)?
                        .ok_or_else(|| ErrorStatus::not_found(AUTHOR_NOT_FOUND))
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

    use application::transfer::AuthorDto;

    use crate::controller::Exhaust;
    use crate::error::{read_json, ErrorStatus};

    use super::response::Presenter;
    use super::AUTHOR_NOT_FOUND;

    fn or_not_found<T>(found: Option<T>) -> Result<T, ErrorStatus> {
        found.ok_or_else(|| ErrorStatus::not_found(AUTHOR_NOT_FOUND))
    }

    #[tokio::test]
    async fn found_author_is_rendered() {
        let author = AuthorDto {
            id: 1,
            first_name: "John".into(),
            last_name: "Wick".into(),
        };
        let response = or_not_found(Presenter.emit(Some(author))).into_response();
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": 1, "first_name": "John", "last_name": "Wick" })
        );
    }

    #[tokio::test]
    async fn missing_author_is_not_found() {
        let response = or_not_found(Presenter.emit(None::<AuthorDto>)).into_response();
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Author not found" }));
    }

    #[tokio::test]
    async fn delete_reports_outcome() {
        let (status, body) = read_json(or_not_found(Presenter.emit(true)).into_response()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Author deleted successfully" }));

        let (status, body) = read_json(or_not_found(Presenter.emit(false)).into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Author not found" }));
    }
}
