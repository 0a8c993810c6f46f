use serde::{Deserialize, Serialize};

use super::decode_envelope;
use crate::error::Result;
use crate::models::lenient_list;
use crate::models::{PrintTagsRequest, PrintTagsResponse, Tag};
use crate::transport::{path_segment, ApiClient, ApiResponse};

const TAGS_ENDPOINT: &str = "/admin/tags";
const PRINT_TAGS_ENDPOINT: &str = "/admin/print-tags";

#[derive(Debug, Default, Deserialize)]
struct TagsEnvelope {
    #[serde(default, deserialize_with = "lenient_list")]
    tags: Vec<Tag>,
}

/// Admin tag endpoints.
#[derive(Debug, Clone)]
pub struct TagsClient {
    api: ApiClient,
}

impl TagsClient {
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Tag>> {
        let response = self.api.get(TAGS_ENDPOINT).await?;
        Ok(decode_envelope::<TagsEnvelope>(response, "tags list").tags)
    }

    pub async fn get(&self, id: &str) -> Result<Tag> {
        self.api.get(&tag_endpoint(id)).await?.decode("tag")
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<Tag> {
        self.api.post(TAGS_ENDPOINT, data).await?.decode("created tag")
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> Result<Tag> {
        self.api
            .put(&tag_endpoint(id), data)
            .await?
            .decode("updated tag")
    }

    /// Returns the backend's confirmation body untouched.
    pub async fn delete(&self, id: &str) -> Result<ApiResponse> {
        self.api.delete(&tag_endpoint(id)).await
    }

    pub async fn print(&self, request: &PrintTagsRequest) -> Result<PrintTagsResponse> {
        self.api
            .post(PRINT_TAGS_ENDPOINT, request)
            .await?
            .decode("print tags response")
    }
}

fn tag_endpoint(id: &str) -> String {
    format!("{TAGS_ENDPOINT}/{}", path_segment(id))
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;
    use crate::models::TagStatus;
    use crate::test_support::spawn_backend;

    fn tag_json(id: &str, status: &str) -> Value {
        json!({ "tag_id": id, "status": status, "created": "2024-01-01T00:00:00Z" })
    }

    fn router() -> Router {
        Router::new()
            .route(
                "/admin/tags",
                get(|| async { Json(json!({ "tags": [tag_json("T-1", "registered"), tag_json("T-2", "lost")] })) })
                    .post(|Json(body): Json<Value>| async move {
                        Json(tag_json("T-3", body["status"].as_str().unwrap_or("unregistered")))
                    }),
            )
            .route(
                "/admin/tags/{id}",
                get(|Path(id): Path<String>| async move { Json(tag_json(&id, "found")) })
                    .put(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                        Json(tag_json(&id, body["status"].as_str().unwrap_or("found")))
                    })
                    .delete(|Path(id): Path<String>| async move {
                        if id == "locked" {
                            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "locked" })))
                        } else {
                            (StatusCode::OK, Json(json!({ "deleted": id })))
                        }
                    }),
            )
            .route(
                "/admin/print-tags",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({ "file_url": format!("https://files.example.com/{}.pdf", body["quantity"]) }))
                }),
            )
    }

    #[tokio::test]
    async fn list_unwraps_envelope() {
        let client = TagsClient::new(spawn_backend(router()).await);
        let tags = client.list().await.unwrap();
        let ids: Vec<&str> = tags.iter().map(|tag| tag.tag_id.as_str()).collect();
        assert_eq!(ids, vec!["T-1", "T-2"]);
    }

    #[tokio::test]
    async fn list_without_envelope_key_is_empty() {
        let router = Router::new().route("/admin/tags", get(|| async { Json(json!({ "count": 0 })) }));
        let client = TagsClient::new(spawn_backend(router).await);
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_with_malformed_body_is_empty() {
        for body in [json!({ "tags": "oops" }), json!([]), json!({ "tags": { "T-1": {} } })] {
            let router = Router::new().route(
                "/admin/tags",
                get(move || {
                    let body = body.clone();
                    async move { Json(body) }
                }),
            );
            let client = TagsClient::new(spawn_backend(router).await);
            assert!(client.list().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn list_with_text_body_is_empty() {
        let router = Router::new().route("/admin/tags", get(|| async { "maintenance" }));
        let client = TagsClient::new(spawn_backend(router).await);
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sparse_tag_does_not_hide_the_others() {
        let router = Router::new().route(
            "/admin/tags",
            get(|| async {
                Json(json!({ "tags": [tag_json("T-1", "registered"), { "tag_id": "T-2", "status": "lost" }] }))
            }),
        );
        let client = TagsClient::new(spawn_backend(router).await);
        let tags = client.list().await.unwrap();
        let ids: Vec<&str> = tags.iter().map(|tag| tag.tag_id.as_str()).collect();
        assert_eq!(ids, vec!["T-1", "T-2"]);
        assert_eq!(tags[1].status, TagStatus::Lost);
        assert_eq!(tags[1].created.to_string(), "N/A");
    }

    #[tokio::test]
    async fn get_encodes_id_in_path() {
        let client = TagsClient::new(spawn_backend(router()).await);
        let tag = client.get("T 9").await.unwrap();
        assert_eq!(tag.tag_id, "T 9");
        assert_eq!(tag.status, TagStatus::Found);
    }

    #[tokio::test]
    async fn create_and_update_return_records() {
        let client = TagsClient::new(spawn_backend(router()).await);
        let created = client.create(&json!({ "status": "registered" })).await.unwrap();
        assert_eq!(created.tag_id, "T-3");
        assert_eq!(created.status, TagStatus::Registered);

        let updated = client.update("T-1", &json!({ "status": "lost" })).await.unwrap();
        assert_eq!(updated.tag_id, "T-1");
        assert_eq!(updated.status, TagStatus::Lost);
    }

    #[tokio::test]
    async fn delete_returns_confirmation_or_backend_message() {
        let client = TagsClient::new(spawn_backend(router()).await);
        let confirmation = client.delete("T-1").await.unwrap();
        assert_eq!(confirmation, ApiResponse::Json(json!({ "deleted": "T-1" })));

        let error = client.delete("locked").await.unwrap_err();
        assert_eq!(error.to_string(), "locked");
    }

    #[tokio::test]
    async fn print_returns_file_url() {
        let client = TagsClient::new(spawn_backend(router()).await);
        let response = client
            .print(&PrintTagsRequest {
                quantity: 5,
                golf_course: "pebble".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.file_url, "https://files.example.com/5.pdf");
    }
}
