//! Blocking client: one method per remote operation.
//!
//! `JsonPlaceholder` pairs the stateless `PostsClient` with a `Transport`.
//! Every method builds one request, executes it once and parses the result.
//! There is no retry and no cache.

use crate::client::PostsClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Comment, Id, NewPost, Post, PostPatch, PostQuery};

#[derive(Debug, Clone)]
pub struct JsonPlaceholder<T = UreqTransport> {
    client: PostsClient,
    transport: T,
}

impl JsonPlaceholder<UreqTransport> {
    /// Client for the public service with the default timeout.
    pub fn new() -> Self {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_transport(&config.base_url, UreqTransport::new(config.timeout))
    }
}

impl Default for JsonPlaceholder<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> JsonPlaceholder<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: PostsClient::new(base_url),
            transport,
        }
    }

    pub fn posts_client(&self) -> &PostsClient {
        &self.client
    }

    pub fn get_post_by_id(&self, id: Id) -> Result<Post, ApiError> {
        let response = self.transport.execute(self.client.build_get_post(id))?;
        self.client.parse_get_post(id, response)
    }

    pub fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_posts_with(PostQuery::default())
    }

    pub fn get_posts_with(&self, query: PostQuery) -> Result<Vec<Post>, ApiError> {
        let response = self.transport.execute(self.client.build_list_posts(query))?;
        self.client.parse_list_posts(response)
    }

    pub fn get_comments_by_post_id(&self, post_id: Id) -> Result<Vec<Comment>, ApiError> {
        let response = self.transport.execute(self.client.build_list_comments(post_id))?;
        self.client.parse_list_comments(post_id, response)
    }

    pub fn create_post(&self, input: &NewPost) -> Result<Post, ApiError> {
        let response = self.transport.execute(self.client.build_create_post(input)?)?;
        self.client.parse_create_post(response)
    }

    /// Replace a post wholesale (PUT).
    pub fn edit_post(&self, id: Id, input: &NewPost) -> Result<Post, ApiError> {
        let response = self.transport.execute(self.client.build_edit_post(id, input)?)?;
        self.client.parse_edit_post(id, response)
    }

    /// Update only the fields present in `input` (PATCH).
    pub fn partial_edit_post(&self, id: Id, input: &PostPatch) -> Result<Post, ApiError> {
        let response = self.transport.execute(self.client.build_partial_edit_post(id, input)?)?;
        self.client.parse_partial_edit_post(id, response)
    }

    /// Returns the HTTP status the server answered with.
    pub fn delete_post(&self, id: Id) -> Result<u16, ApiError> {
        let response = self.transport.execute(self.client.build_delete_post(id))?;
        self.client.parse_delete_post(id, response)
    }
}
