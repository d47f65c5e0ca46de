use crate::error::AppError;
use askama::Template;
use axum::{extract::Query, response::Html};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HelloParameters {
    // Accepted and logged, but the page does not depend on it.
    count: Option<i32>,
}

#[derive(Template)]
#[template(path = "hello.html")]
struct HelloTemplate {}

#[tracing::instrument(name = "Some page", skip_all, fields(count = params.count))]
pub async fn hello(
    WithRejection(Query(params), _): WithRejection<Query<HelloParameters>, AppError>,
) -> Result<Html<String>, AppError> {
    let page = HelloTemplate {};
    Ok(Html(page.render()?))
}
