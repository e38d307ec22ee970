// src/client.rs

//! API client: request building, pre-flight checks and response mapping.
//!
//! Services describe a call as an [`ApiRequest`] and pick one of the typed
//! helpers ([`ApiClient::fetch_list`], [`ApiClient::fetch_one`],
//! [`ApiClient::submit`], [`ApiClient::remove`]). The helpers run the
//! request through the transport, normalize the response and map it into
//! DTOs, so every service method returns an [`Outcome`].

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{Failure, FailureKind, Outcome, Reply, Result};
use crate::mapping::{FromRaw, map_list};
use crate::models::{Action, ApiConfig, Entity, Messages};
use crate::response::{CallContext, Shape, interpret};
use crate::session::Session;
use crate::transport::{HttpRequest, HttpTransport, Method, RawResponse, RequestBody, Transport};

/// Longest body excerpt written to the debug log.
const LOG_BODY_LIMIT: usize = 500;

/// Description of one API call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
    authenticated: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            authenticated: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// JSON body from a serializable payload.
    pub fn json_of<T: Serialize>(self, body: &T) -> std::result::Result<Self, Failure> {
        let value = serde_json::to_value(body)
            .map_err(|e| Failure::new(FailureKind::InvalidInput, e.to_string()))?;
        Ok(self.json(value))
    }

    pub fn multipart(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }

    /// Send without a bearer token and skip the login check.
    pub fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Shared handle to the remote API. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    config: Arc<ApiConfig>,
    messages: Arc<Messages>,
    session: Session,
}

impl ApiClient {
    /// Create a client backed by a real HTTP transport.
    pub fn new(config: ApiConfig, messages: Messages, session: Session) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(
            Arc::new(transport),
            config,
            messages,
            session,
        ))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        config: ApiConfig,
        messages: Messages,
        session: Session,
    ) -> Self {
        Self {
            transport,
            config: Arc::new(config),
            messages: Arc::new(messages),
            session,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Same client with a different session.
    pub fn with_session(&self, session: Session) -> Self {
        Self {
            session,
            ..self.clone()
        }
    }

    /// Run pre-flight checks and send the request.
    pub async fn send(&self, request: ApiRequest) -> std::result::Result<RawResponse, Failure> {
        let url = self.resolve_url(&request)?;

        let bearer = if request.authenticated {
            let token = self.session.token().ok_or_else(|| {
                Failure::new(FailureKind::LoginRequired, self.messages.login_required.clone())
            })?;
            Some(token.to_string())
        } else {
            None
        };

        log::debug!("{} {}", request.method.as_str(), url);

        let response = self
            .transport
            .execute(HttpRequest {
                method: request.method,
                url: url.clone(),
                bearer,
                body: request.body,
            })
            .await
            .map_err(|e| {
                log::warn!("{} {} failed: {}", request.method.as_str(), url, e);
                Failure::new(FailureKind::Network, self.messages.network_unreachable.clone())
            })?;

        log::debug!(
            "{} {} -> {} {}",
            request.method.as_str(),
            url,
            response.status,
            excerpt(&response.text)
        );
        Ok(response)
    }

    fn resolve_url(&self, request: &ApiRequest) -> std::result::Result<Url, Failure> {
        let config_failure =
            || Failure::new(FailureKind::Config, self.messages.missing_base_url.clone());

        let base = self.config.base_url().ok_or_else(config_failure)?;
        let joined = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            request.path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined).map_err(|e| {
            log::error!("Invalid API URL {joined}: {e}");
            config_failure()
        })?;

        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    /// Send and interpret the response, returning the raw payload.
    async fn call(
        &self,
        request: ApiRequest,
        shape: Shape,
        context: CallContext,
    ) -> Outcome<Value> {
        let response = self.send(request).await?;
        let normalized = interpret(&response, shape, context, &self.messages)?;
        Ok(Reply::new(normalized.data, normalized.message))
    }

    /// Load a collection and map each element.
    pub async fn fetch_list<T: FromRaw>(&self, request: ApiRequest, entity: Entity) -> Outcome<Vec<T>> {
        let context = CallContext::new(entity, Action::Load);
        let reply = self.call(request, Shape::List, context).await?;
        Ok(reply.map(|data| map_list(&data)))
    }

    /// Load a single record.
    pub async fn fetch_one<T: FromRaw>(&self, request: ApiRequest, entity: Entity) -> Outcome<T> {
        let context = CallContext::new(entity, Action::Load);
        let reply = self.call(request, Shape::Record, context).await?;
        Ok(reply.map(|data| T::from_value(&data)))
    }

    /// Create or update, returning the raw payload. The reply message
    /// falls back to the localized success text.
    pub async fn submit(&self, request: ApiRequest, entity: Entity, action: Action) -> Outcome<Value> {
        let context = CallContext::new(entity, action);
        let mut reply = self.call(request, Shape::Any, context).await?;
        if reply.message.is_none() {
            reply.message = Some(self.messages.succeeded(action, entity));
        }
        Ok(reply)
    }

    /// Create or update, mapping the returned record.
    pub async fn submit_as<T: FromRaw>(
        &self,
        request: ApiRequest,
        entity: Entity,
        action: Action,
    ) -> Outcome<T> {
        let reply = self.submit(request, entity, action).await?;
        Ok(reply.map(|data| T::from_value(&data)))
    }

    /// Delete. The server's message is replaced with the localized success
    /// text when it has none.
    pub async fn remove(&self, request: ApiRequest, entity: Entity) -> Outcome<()> {
        let reply = self.submit(request, entity, Action::Delete).await?;
        Ok(reply.map(|_| ()))
    }
}

fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(LOG_BODY_LIMIT) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
