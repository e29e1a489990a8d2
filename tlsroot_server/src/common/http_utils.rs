use axum::{
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use derive_more::From;
use tlsroot_types::{codec::DecodeError, types::UnknownRootKind};
use tracing::{error, info, warn};

pub async fn logger(req: Request<axum::body::Body>, next: Next) -> impl IntoResponse {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let resp = next.run(req).await;
    info!(%method, %path, status = resp.status().as_u16(), "Served request.");
    resp
}

/// An error carrying the status code it is answered with.
///
/// Any error without a more specific conversion is a 500.
#[derive(From, Debug)]
pub struct AppError(pub StatusCode, pub anyhow::Error);
impl AppError {
    pub fn bad_request<E: Into<anyhow::Error>>(e: E) -> Self {
        Self(StatusCode::BAD_REQUEST, e.into())
    }
}
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self(StatusCode::INTERNAL_SERVER_ERROR, e)
    }
}
impl From<DecodeError> for AppError {
    fn from(e: DecodeError) -> Self {
        Self::bad_request(e)
    }
}
impl From<UnknownRootKind> for AppError {
    fn from(e: UnknownRootKind) -> Self {
        Self::bad_request(e)
    }
}
impl From<hex::FromHexError> for AppError {
    fn from(e: hex::FromHexError) -> Self {
        Self::bad_request(e)
    }
}
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Self(status, err) = self;
        if status.is_server_error() {
            error!(%status, "{err:#}");
        } else {
            warn!(%status, "{err:#}");
        }
        (status, err.to_string()).into_response()
    }
}

pub fn ok_json(body: Vec<u8>) -> Result<Response, AppError> {
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
