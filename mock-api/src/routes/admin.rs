use actix_web::{HttpRequest, HttpResponse, delete, get, route, web};
use payloads::{
    EntityId, ModerationStatus,
    requests::{ActionVerb, ModerationRequest},
};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::store::{self, Store};

use super::{APIError, require_admin, scripted};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    status: Option<String>,
}

#[tracing::instrument(skip(request, store))]
#[get("/admin/{collection}")]
pub async fn list_collection(
    request: HttpRequest,
    path: web::Path<String>,
    query: web::Query<ListQuery>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let collection = path.into_inner();
    scripted(&store, &collection, || {
        require_admin(&request, &store)?;
        // an unrecognized status filter lists everything, like "all"
        let status = query.status.as_deref().and_then(ModerationStatus::parse);
        let documents = store.list(&collection, status)?;
        tracing::debug!(count = documents.len(), "listed");

        let mut body = Map::new();
        body.insert("success".to_string(), json!(true));
        body.insert(
            store::list_field(&collection).to_string(),
            Value::Array(documents),
        );
        Ok(HttpResponse::Ok().json(body))
    })
    .await
}

/// Approve or reject a pending entry (`PATCH .../approve`, `.../reject`)
/// or set the activity status of one (`PUT .../status`).
#[tracing::instrument(skip(request, store))]
#[route("/admin/{collection}/{id}/{action}", method = "PATCH", method = "PUT")]
pub async fn moderate(
    request: HttpRequest,
    path: web::Path<(String, String, String)>,
    body: web::Json<ModerationRequest>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let (collection, id, action) = path.into_inner();
    let id = EntityId(id);
    scripted(&store, &collection, || {
        require_admin(&request, &store)?;
        let status = match (action.as_str(), body.into_inner()) {
            (
                "approve",
                ModerationRequest::Action {
                    action: ActionVerb::Approve,
                },
            ) => {
                store.review(&collection, &id, ModerationStatus::Approved)?;
                ModerationStatus::Approved
            }
            (
                "reject",
                ModerationRequest::Action {
                    action: ActionVerb::Reject,
                },
            ) => {
                store.review(&collection, &id, ModerationStatus::Rejected)?;
                ModerationStatus::Rejected
            }
            ("status", ModerationRequest::Status { status }) => {
                store.set_status(&collection, &id, status)?;
                status
            }
            (action, _) => {
                return Err(APIError::BadRequest(format!(
                    "Unsupported action `{action}`"
                )));
            }
        };
        Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": format!("Status updated to {status}"),
        })))
    })
    .await
}

#[tracing::instrument(skip(request, store))]
#[delete("/admin/{collection}/{id}")]
pub async fn delete_entry(
    request: HttpRequest,
    path: web::Path<(String, String)>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let (collection, id) = path.into_inner();
    scripted(&store, &collection, || {
        require_admin(&request, &store)?;
        store.delete(&collection, &EntityId(id))?;
        Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Deleted successfully",
        })))
    })
    .await
}
