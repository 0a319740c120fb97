//! # HTTP User Client
//!
//! [`UserApi`] over a resource-oriented REST service:
//!
//! | Operation | Method | Path          | Body       |
//! |-----------|--------|---------------|------------|
//! | list      | GET    | `/users`      | none       |
//! | create    | POST   | `/users`      | JSON draft |
//! | update    | PUT    | `/users/{id}` | JSON draft |
//! | delete    | DELETE | `/users/{id}` | none       |

use crate::config::Config;
use crate::model::{Draft, Operation, User, UserId, UserRepr};
use crate::remote::{RemoteError, UserApi};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, instrument};
use url::Url;

/// Client for the remote `/users` resource.
#[derive(Clone, Debug)]
pub struct HttpUserClient {
    client: Client,
    collection: Url,
    members: Url,
}

impl HttpUserClient {
    /// Builds a client from the configured base URL and timeout.
    pub fn new(config: &Config) -> Result<Self, crate::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Self::with_client(client, config.base_url.clone())
    }

    /// Builds a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, mut base_url: Url) -> Result<Self, crate::Error> {
        // Without the trailing slash `join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let collection = base_url.join("users")?;
        let members = base_url.join("users/")?;
        debug!(%collection, "HTTP user client ready");
        Ok(Self {
            client,
            collection,
            members,
        })
    }

    /// `{base}/users`
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// `{base}/users/{id}`
    pub fn member_url(&self, id: UserId) -> Result<Url, url::ParseError> {
        self.members.join(&id.to_string())
    }

    async fn send(operation: Operation, request: RequestBuilder) -> Result<Response, RemoteError> {
        request
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|e| RemoteError::new(operation, e))
    }

    async fn read_user(operation: Operation, response: Response) -> Result<User, RemoteError> {
        let repr: UserRepr = response
            .json()
            .await
            .map_err(|e| RemoteError::new(operation, e))?;
        User::try_from(repr).map_err(|e| RemoteError::new(operation, e))
    }
}

#[async_trait]
impl UserApi for HttpUserClient {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<User>, RemoteError> {
        debug!("Sending request");
        let response = Self::send(Operation::List, self.client.get(self.collection.clone())).await?;
        let reprs: Vec<UserRepr> = response
            .json()
            .await
            .map_err(|e| RemoteError::new(Operation::List, e))?;
        reprs
            .into_iter()
            .map(|repr| User::try_from(repr).map_err(|e| RemoteError::new(Operation::List, e)))
            .collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &Draft) -> Result<User, RemoteError> {
        debug!("Sending request");
        let body = UserRepr::from(draft);
        let request = self.client.post(self.collection.clone()).json(&body);
        let response = Self::send(Operation::Create, request).await?;
        Self::read_user(Operation::Create, response).await
    }

    #[instrument(skip(self))]
    async fn update(&self, id: UserId, draft: &Draft) -> Result<User, RemoteError> {
        debug!("Sending request");
        let body = UserRepr::from(draft);
        let url = self
            .member_url(id)
            .map_err(|e| RemoteError::new(Operation::Update, e))?;
        let request = self.client.put(url).json(&body);
        let response = Self::send(Operation::Update, request).await?;
        Self::read_user(Operation::Update, response).await
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: UserId) -> Result<(), RemoteError> {
        debug!("Sending request");
        let url = self
            .member_url(id)
            .map_err(|e| RemoteError::new(Operation::Delete, e))?;
        Self::send(Operation::Delete, self.client.delete(url)).await?;
        Ok(())
    }
}
