pub mod admin;
pub mod login;

use actix_web::{
    HttpRequest, HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, http::StatusCode, http::header, web,
};
use serde_json::json;
use std::time::Duration;

use crate::store::{Fault, Store, StoreError};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(login::login)
        .service(admin::list_collection)
        .service(admin::moderate)
        .service(admin::delete_entry)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

/// Errors are answered with the same `{ success, message }` envelope the
/// portal backend uses, so clients can show the message verbatim.
#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("{0}")]
    AuthError(#[source] StoreError),
    #[error("{0}")]
    Forbidden(#[source] StoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(#[source] StoreError),
    /// A request that was understood but refused; answered with 200.
    #[error("{0}")]
    Refused(#[source] StoreError),
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthError(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Refused(_) => StatusCode::OK,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": self.to_string(),
        }))
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidCredentials | StoreError::InvalidToken => {
                APIError::AuthError(e)
            }
            StoreError::Forbidden => APIError::Forbidden(e),
            StoreError::UnknownCollection | StoreError::NotFound => {
                APIError::NotFound(e)
            }
            StoreError::AlreadyReviewed => APIError::Refused(e),
            StoreError::InvalidStatus(_) => APIError::BadRequest(e.to_string()),
        }
    }
}

/// Token from an `Authorization: Bearer ...` header.
fn bearer_token(request: &HttpRequest) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Check the caller is a signed-in admin.
fn require_admin(request: &HttpRequest, store: &Store) -> Result<(), APIError> {
    store.authorize_admin(bearer_token(request))?;
    Ok(())
}

/// What the next queued fault of a collection does to a request.
enum Scripted {
    /// Answer with this instead of handling the request.
    Replace(HttpResponse),
    /// Handle the request, then hold the answer back.
    Hold(Duration),
    Pass,
}

fn script(store: &Store, collection: &str) -> Scripted {
    let Some(fault) = store.take_fault(collection) else {
        return Scripted::Pass;
    };
    tracing::debug!(?fault, collection, "playing fault");
    match fault {
        Fault::Status(code, message) => {
            let status = StatusCode::from_u16(code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Scripted::Replace(HttpResponse::build(status).json(json!({
                "success": false,
                "message": message,
            })))
        }
        Fault::Envelope(message) => {
            Scripted::Replace(HttpResponse::Ok().json(json!({
                "success": false,
                "message": message,
            })))
        }
        Fault::Malformed => Scripted::Replace(
            HttpResponse::Ok()
                .content_type("text/html")
                .body("<html><body>Bad Gateway</body></html>"),
        ),
        Fault::Delay(duration) => Scripted::Hold(duration),
    }
}

/// Run a handler under the collection's next fault.
async fn scripted(
    store: &Store,
    collection: &str,
    handler: impl FnOnce() -> Result<HttpResponse, APIError>,
) -> Result<HttpResponse, APIError> {
    match script(store, collection) {
        Scripted::Replace(response) => Ok(response),
        Scripted::Hold(duration) => {
            let result = handler();
            tokio::time::sleep(duration).await;
            result
        }
        Scripted::Pass => handler(),
    }
}
