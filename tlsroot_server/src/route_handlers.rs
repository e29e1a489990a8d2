use crate::common::http_utils::{self, logger, AppError};
use anyhow::anyhow;
use axum::{extract::Query, middleware, response::Response, routing::get, Router};
use serde::Deserialize;
use tlsroot_types::RootKind;

/// `GET /?type=<MAP|LOG>&bytes=<hex>`
#[derive(Deserialize, Debug)]
pub struct RootQuery {
    #[serde(rename = "type")]
    pub typ: Option<String>,
    pub bytes: Option<String>,
}

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(decode_root))
        .layer(middleware::from_fn(logger))
}

async fn decode_root(Query(query): Query<RootQuery>) -> Result<Response, AppError> {
    let kind = query
        .typ
        .ok_or_else(|| AppError::bad_request(anyhow!("Missing `type` query parameter.")))?;
    let kind = kind.parse::<RootKind>()?;

    let hex_bytes = query
        .bytes
        .ok_or_else(|| AppError::bad_request(anyhow!("Missing `bytes` query parameter.")))?;
    let bytes = hex::decode(hex_bytes)?;

    let root = tlsroot_types::decode(kind, &bytes)?;
    let json = tlsroot_types::project(&root)?;

    http_utils::ok_json(json)
}
