use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::error::ErrorStatus;

pub use self::{author::AuthorRouter, book::BookRouter};

mod author;
mod book;

/// Extractors whose rejections are rendered as `{"detail": ...}`.
type JsonBody<T> = WithRejection<Json<T>, ErrorStatus>;
type QueryParams<T> = WithRejection<Query<T>, ErrorStatus>;
type PathId = WithRejection<Path<i32>, ErrorStatus>;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

pub trait RootRouter {
    fn route_root(self) -> Self;
}

impl<S> RootRouter for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn route_root(self) -> Self {
        self.route(
            "/",
            get(|| async { Json(MessageResponse::new("Book Management API")) }),
        )
    }
}

/// Rejects `value` when it is longer than the column backing `field`.
fn check_length(field: &str, value: &str, max: usize) -> Result<(), ErrorStatus> {
    if value.chars().count() > max {
        return Err(ErrorStatus::invalid(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
