//! Client of the university directory API.
//!
//! `DirectoryTransport` is the seam between typed requests and the wire:
//! the browser build uses [`HttpTransport`] (gloo-net), tests plug in an
//! in-memory fake.

use std::future::Future;

use contracts::domain::a001_university::aggregate::UniversityDetail;
use contracts::domain::a002_subdivision::aggregate::SubdivisionDetail;
use contracts::domain::a003_study_group::aggregate::StudyGroupDetail;
use contracts::domain::a004_curriculum::aggregate::CurriculumDetail;
use contracts::domain::a005_person::aggregate::PersonDetail;
use contracts::domain::common::{Identifier, ResourceItem};
use contracts::shared::Category;
use contracts::system::auth::{ApiMessage, LoginReply, LoginRequest};
use gloo_net::http::Request;
use leptos::prelude::expect_context;
use serde::de::DeserializeOwned;

use super::api_utils::DirectoryConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text shown inline in the panel that failed.
    ///
    /// A `{message}` body sent by the API is shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Status and body of a finished HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Non-2xx responses become [`ApiError::Status`], with the API's
    /// `{message}` attached when the body carries one.
    pub fn ensure_success(&self) -> Result<(), ApiError> {
        if self.is_success() {
            return Ok(());
        }
        let message = serde_json::from_str::<ApiMessage>(&self.body)
            .ok()
            .map(|m| m.message);
        Err(ApiError::Status {
            status: self.status,
            message,
        })
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.ensure_success()?;
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

pub trait DirectoryTransport {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, ApiError>>;

    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// Browser transport over `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl DirectoryTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        let response = Request::get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<RawResponse, ApiError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

/// Typed read operations of the directory plus the login call.
#[derive(Debug, Clone)]
pub struct DirectoryClient<T> {
    config: DirectoryConfig,
    transport: T,
}

/// The client the application provides through context.
pub type Directory = DirectoryClient<HttpTransport>;

pub fn use_directory() -> Directory {
    expect_context::<Directory>()
}

fn item_path(category: Category, id: &Identifier) -> String {
    format!(
        "{}/{}",
        category.collection_path(),
        urlencoding::encode(id.as_str())
    )
}

impl<T: DirectoryTransport> DirectoryClient<T> {
    pub fn new(config: DirectoryConfig, transport: T) -> Self {
        Self { config, transport }
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = self.config.url(path);
        log::debug!("GET {}", url);
        self.transport.get(&url).await?.decode()
    }

    pub async fn universities(&self) -> Result<Vec<ResourceItem>, ApiError> {
        self.get_json("/universities").await
    }

    pub async fn university(&self, id: &Identifier) -> Result<UniversityDetail, ApiError> {
        let path = format!("/universities/{}", urlencoding::encode(id.as_str()));
        self.get_json(&path).await
    }

    /// Top-level collection of a category, e.g. `GET /study_groups`.
    pub async fn collection(&self, category: Category) -> Result<Vec<ResourceItem>, ApiError> {
        self.get_json(&category.collection_path()).await
    }

    pub async fn subdivision(&self, id: &Identifier) -> Result<SubdivisionDetail, ApiError> {
        self.get_json(&item_path(Category::Subdivisions, id)).await
    }

    pub async fn study_group(&self, id: &Identifier) -> Result<StudyGroupDetail, ApiError> {
        self.get_json(&item_path(Category::StudyGroups, id)).await
    }

    pub async fn curriculum(&self, id: &Identifier) -> Result<CurriculumDetail, ApiError> {
        self.get_json(&item_path(Category::Curriculums, id)).await
    }

    pub async fn person(&self, id: &Identifier) -> Result<PersonDetail, ApiError> {
        self.get_json(&item_path(Category::Persons, id)).await
    }

    /// `POST /auth/login`. A successful reply may have an empty body.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginReply, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Encode(e.to_string()))?;
        let url = self.config.url("/auth/login");
        log::debug!("POST {}", url);
        let response = self.transport.post_json(&url, &body).await?;
        response.ensure_success()?;
        Ok(serde_json::from_str(&response.body).unwrap_or_default())
    }
}
