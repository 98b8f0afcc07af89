//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! A transport executes the round-trip in between, keeping this module
//! deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Resource};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Comment, Id, NewPost, Post, PostPatch, PostQuery};

/// Builds requests for, and parses responses from, the posts API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self, query: PostQuery) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/posts{}", query.to_query_string()))
    }

    pub fn build_get_post(&self, id: Id) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/posts/{id}"))
    }

    pub fn build_list_comments(&self, post_id: Id) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/comments?postId={post_id}"))
    }

    pub fn build_create_post(&self, input: &NewPost) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/posts".to_string(), input)
    }

    pub fn build_edit_post(&self, id: Id, input: &NewPost) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, format!("/posts/{id}"), input)
    }

    pub fn build_partial_edit_post(&self, id: Id, input: &PostPatch) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Patch, format!("/posts/{id}"), input)
    }

    pub fn build_delete_post(&self, id: Id) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("/posts/{id}"))
    }

    /// Listing is not id-addressed, so a 404 here is an ordinary `HttpError`.
    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_status(&response, None)?;
        decode(&response)
    }

    pub fn parse_get_post(&self, id: Id, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, Some(Resource::Post(id)))?;
        decode(&response)
    }

    pub fn parse_list_comments(&self, post_id: Id, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        check_status(&response, Some(Resource::Comments { post_id }))?;
        decode(&response)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, None)?;
        decode(&response)
    }

    pub fn parse_edit_post(&self, id: Id, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, Some(Resource::Post(id)))?;
        decode(&response)
    }

    pub fn parse_partial_edit_post(&self, id: Id, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, Some(Resource::Post(id)))?;
        decode(&response)
    }

    /// Returns the status code; the remote answers a delete with an empty object.
    pub fn parse_delete_post(&self, id: Id, response: HttpResponse) -> Result<u16, ApiError> {
        check_status(&response, Some(Resource::Post(id)))?;
        Ok(response.status)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(&self, method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant. A 404 only
/// becomes `NotFound` when the call addresses a specific resource.
fn check_status(response: &HttpResponse, resource: Option<Resource>) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    match resource {
        Some(resource) if response.status == 404 => Err(ApiError::NotFound(resource)),
        _ => Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        }),
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PostsClient {
        PostsClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn new_post() -> NewPost {
        NewPost {
            title: "First time at Elbrus".to_string(),
            body: "That is gonna be fantastic".to_string(),
            user_id: 5,
        }
    }

    #[test]
    fn build_list_posts_produces_correct_request() {
        let req = client().build_list_posts(PostQuery::default());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/posts");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_posts_with_user_filter() {
        let req = client().build_list_posts(PostQuery::by_user(2));
        assert_eq!(req.path, "http://localhost:3000/posts?userId=2");
    }

    #[test]
    fn build_get_post_produces_correct_request() {
        let req = client().build_get_post(3);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/posts/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_list_comments_uses_post_id_query() {
        let req = client().build_list_comments(5);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/comments?postId=5");
    }

    #[test]
    fn build_create_post_produces_correct_request() {
        let req = client().build_create_post(&new_post()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/posts");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "First time at Elbrus");
        assert_eq!(body["userId"], 5);
    }

    #[test]
    fn build_edit_post_uses_put() {
        let req = client().build_edit_post(1, &new_post()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/posts/1");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_partial_edit_post_sends_only_present_fields() {
        let patch = PostPatch {
            body: Some("Fantastic as well".to_string()),
            ..Default::default()
        };
        let req = client().build_partial_edit_post(1, &patch).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["body"], "Fantastic as well");
        assert!(body.get("title").is_none());
    }

    #[test]
    fn build_delete_post_produces_correct_request() {
        let req = client().build_delete_post(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/posts/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PostsClient::new("https://jsonplaceholder.typicode.com/");
        let req = client.build_get_post(1);
        assert_eq!(req.path, "https://jsonplaceholder.typicode.com/posts/1");
    }

    #[test]
    fn parse_get_post_success() {
        let post = client()
            .parse_get_post(1, response(200, r#"{"userId":1,"id":1,"title":"sunt","body":"quia"}"#))
            .unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.user_id, 1);
    }

    #[test]
    fn parse_get_post_not_found() {
        let err = client().parse_get_post(1000, response(404, "{}")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(Resource::Post(1000))));
    }

    #[test]
    fn parse_list_comments_not_found_names_post() {
        let err = client().parse_list_comments(8, response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(Resource::Comments { post_id: 8 })));
    }

    #[test]
    fn parse_list_posts_404_is_http_error() {
        let err = client().parse_list_posts(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 404, .. }));
    }

    #[test]
    fn parse_list_posts_bad_json() {
        let err = client().parse_list_posts(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_create_post_accepts_201() {
        let post = client()
            .parse_create_post(response(
                201,
                r#"{"title":"First time at Elbrus","body":"That is gonna be fantastic","userId":5,"id":101}"#,
            ))
            .unwrap();
        assert_eq!(post.id, 101);
        assert_eq!(post.title, "First time at Elbrus");
    }

    #[test]
    fn parse_create_post_wrong_status() {
        let err = client().parse_create_post(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_edit_post_server_error_is_not_not_found() {
        let err = client().parse_edit_post(1, response(503, "")).unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn parse_partial_edit_post_success() {
        let post = client()
            .parse_partial_edit_post(1, response(200, r#"{"userId":1,"id":1,"title":"patched","body":"quia"}"#))
            .unwrap();
        assert_eq!(post.title, "patched");
    }

    #[test]
    fn parse_delete_post_returns_status() {
        assert_eq!(client().parse_delete_post(1, response(200, "{}")).unwrap(), 200);
    }

    #[test]
    fn parse_delete_post_not_found() {
        let err = client().parse_delete_post(1, response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(Resource::Post(1))));
    }
}
