use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const POSTS_PER_USER: u64 = 10;
pub const USERS: u64 = 10;
pub const COMMENTS_PER_POST: u64 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFilter {
    pub user_id: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentFilter {
    pub post_id: Option<u64>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub posts: BTreeMap<u64, Post>,
    pub comments: Vec<Comment>,
}

impl Store {
    /// 100 posts spread over 10 users, 5 comments each.
    pub fn seeded() -> Self {
        let mut store = Store::default();
        for id in 1..=USERS * POSTS_PER_USER {
            store.posts.insert(
                id,
                Post {
                    user_id: (id - 1) / POSTS_PER_USER + 1,
                    id,
                    title: format!("post {id} title"),
                    body: format!("post {id} body"),
                },
            );
            for n in 1..=COMMENTS_PER_POST {
                let comment_id = (id - 1) * COMMENTS_PER_POST + n;
                store.comments.push(Comment {
                    post_id: id,
                    id: comment_id,
                    name: format!("comment {comment_id}"),
                    email: format!("reader{comment_id}@example.com"),
                    body: format!("comment {comment_id} on post {id}"),
                });
            }
        }
        store
    }

    fn next_post_id(&self) -> u64 {
        self.posts.keys().next_back().map_or(1, |id| id + 1)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    router(Store::seeded())
}

pub fn router(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(replace_post).patch(patch_post).delete(delete_post),
        )
        .route("/posts/{id}/comments", get(post_comments))
        .route("/comments", get(list_comments))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>, Query(filter): Query<PostFilter>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(
        store
            .posts
            .values()
            .filter(|post| filter.user_id.is_none_or(|user_id| post.user_id == user_id))
            .cloned()
            .collect(),
    )
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<NewPost>,
) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    let post = Post {
        user_id: input.user_id,
        id: store.next_post_id(),
        title: input.title,
        body: input.body,
    };
    store.posts.insert(post.id, post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    let store = db.read().await;
    store.posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn replace_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<NewPost>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *post = Post {
        user_id: input.user_id,
        id,
        title: input.title,
        body: input.body,
    };
    Ok(Json(post.clone()))
}

async fn patch_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<PostPatch>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        post.title = title;
    }
    if let Some(body) = input.body {
        post.body = body;
    }
    if let Some(user_id) = input.user_id {
        post.user_id = user_id;
    }
    Ok(Json(post.clone()))
}

/// Answers 200 with an empty object, like the public service.
async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut store = db.write().await;
    store.posts.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    store.comments.retain(|comment| comment.post_id != id);
    Ok(Json(serde_json::json!({})))
}

async fn list_comments(
    State(db): State<Db>,
    Query(filter): Query<CommentFilter>,
) -> Json<Vec<Comment>> {
    let store = db.read().await;
    Json(
        store
            .comments
            .iter()
            .filter(|comment| filter.post_id.is_none_or(|post_id| comment.post_id == post_id))
            .cloned()
            .collect(),
    )
}

async fn post_comments(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Comment>>, StatusCode> {
    let store = db.read().await;
    if !store.posts.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(
        store
            .comments
            .iter()
            .filter(|comment| comment.post_id == id)
            .cloned()
            .collect(),
    ))
}
