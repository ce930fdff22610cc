// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::endpoints::DecodeError;
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One request to the publishing server. `fields` is form-encoded into the
/// body for POSTs and must be empty for GETs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    pub method: Method,
    pub target: String,
    pub fields: Vec<(String, String)>,
}

/// A transport failure, as opposed to an application-level rejection the
/// server expressed in a well-formed response body.
#[derive(Debug)]
pub enum TransportError {
    /// The request could not be sent or no response arrived.
    Connect(String),
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The response body could not be read or was not UTF-8.
    Body(String),
    /// The body arrived but its shape was not the endpoint's convention.
    Malformed(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connect(detail) => write!(f, "request failed: {}", detail),
            TransportError::Status(code) => write!(f, "server responded with status {}", code),
            TransportError::Body(detail) => write!(f, "response body unreadable: {}", detail),
            TransportError::Malformed(detail) => {
                write!(f, "response shape not understood: {}", detail)
            }
        }
    }
}

impl Error for TransportError {}

impl From<DecodeError> for TransportError {
    fn from(err: DecodeError) -> Self {
        TransportError::Malformed(err.to_string())
    }
}

/// Seam between the interaction layer and the network. Implementations are
/// single-threaded like the rest of the layer; responses resolve on the
/// same event loop that issued the request.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &WireRequest) -> TransportResult<String>;
}

/// `awc`-backed transport resolving targets against a fixed server origin.
pub struct AwcTransport {
    client: awc::Client,
    base_url: String,
}

impl AwcTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(awc::Client::default(), base_url)
    }

    pub fn with_client(client: awc::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: normalize_origin(base_url.into()),
        }
    }

    fn url_for(&self, target: &str) -> String {
        join_url(&self.base_url, target)
    }
}

fn normalize_origin(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

fn join_url(base_url: &str, target: &str) -> String {
    format!("{}{}", base_url, target)
}

#[async_trait(?Send)]
impl Transport for AwcTransport {
    async fn send(&self, request: &WireRequest) -> TransportResult<String> {
        let url = self.url_for(&request.target);
        log::debug!("{:?} {}", request.method, url);

        let sent = match request.method {
            Method::Post => self.client.post(url.as_str()).send_form(&request.fields).await,
            Method::Get => self.client.get(url.as_str()).send().await,
        };
        let mut response = sent.map_err(|err| TransportError::Connect(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .body()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;
        String::from_utf8(body.to_vec()).map_err(|err| TransportError::Body(err.to_string()))
    }
}
