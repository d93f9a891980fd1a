//! Minimal HTTP abstraction so repositories can be tested without a network.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use strum::Display;
use thiserror::Error;

pub mod imp;

pub type Headers = HashMap<String, String>;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Method {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::default(),
            body: None,
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn text(self, body: &str) -> Self {
        let mut request = self.header("Content-Type", "text/plain");
        request.body = Some(body.as_bytes().to_vec());
        request
    }

    pub fn form<T: Serialize>(self, value: &T) -> Result<Self, HttpError> {
        let body = serde_urlencoded::to_string(value)?;
        let mut request = self.header("Content-Type", "application/x-www-form-urlencoded");
        request.body = Some(body.into_bytes());
        Ok(request)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(HttpError::Status {
                status: self.status,
                body: String::from_utf8_lossy(&self.body).into_owned(),
            })
        }
    }

    pub fn text(&self) -> Result<String, HttpError> {
        String::from_utf8(self.body.to_owned()).map_err(|e| HttpError::Body(e.to_string()))
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_slice(&self.body).map_err(|e| HttpError::Body(e.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid body: {0}")]
    Body(String),
    #[error("Invalid request: {0}")]
    Request(String),
}

impl From<serde_urlencoded::ser::Error> for HttpError {
    fn from(value: serde_urlencoded::ser::Error) -> Self {
        Self::Request(value.to_string())
    }
}
