use actix_web::{HttpResponse, post, web};
use payloads::{requests::LoginCredentials, responses::LoginResponse};

use crate::store::Store;

use super::APIError;

#[tracing::instrument(
    skip(credentials, store),
    fields(email = %credentials.email),
)]
#[post("/auth/login")]
pub async fn login(
    credentials: web::Json<LoginCredentials>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let credentials = credentials.into_inner();
    if let Err(message) = payloads::requests::validate_login(
        &credentials.email,
        &credentials.password,
    ) {
        return Err(APIError::BadRequest(message.to_string()));
    }
    let (access_token, expiry) = store.login(
        &credentials.email,
        &credentials.password,
        credentials.user_type,
    )?;
    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token,
        user_type: credentials.user_type,
        expiry,
    }))
}
