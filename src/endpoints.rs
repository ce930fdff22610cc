// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! The endpoint table of the publishing server and the decoding of its
//! responses. The server does not speak one convention: some endpoints
//! answer with a literal token, some with a `#`-delimited pair, some with
//! an empty body on success and some with a raw markup fragment. Each
//! endpoint therefore carries its own `DecodeRule`; adding an endpoint is
//! a new table row, not new control flow.

use crate::transport::{Method, WireRequest};
use std::error::Error;
use std::fmt;

/// Token the server sends when a verify or delete action succeeded.
const AFFIRMATIVE: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    CreateUser,
    ChangePassword,
    VerifyComment,
    DeletePost,
    LoadMore { offset: u64 },
}

#[derive(Debug, Clone, Copy)]
enum DecodeRule {
    /// Success iff the body equals the token; anything else is a failure
    /// without a message.
    SuccessToken(&'static str),
    /// Success iff the body is the affirmative token; anything else is
    /// deliberately ignored, not an error.
    AffirmativeOrIgnore,
    /// Success iff the body is the affirmative token; anything else is a
    /// failure without a message.
    AffirmativeOrFail,
    /// Body is `<name>#<error>`; an empty error means success with the
    /// name as payload, otherwise the error is the failure message.
    NameHashError,
    /// An empty body means success; a non-empty body is the failure
    /// message itself.
    EmptyIsSuccess,
    /// The body is a markup payload and always a success.
    RawMarkup,
}

/// Outcome of decoding one server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { payload: Option<String> },
    Failure { message: Option<String> },
    /// The server declined but the endpoint treats that as a no-op.
    Ignored,
}

#[derive(Debug)]
pub struct DecodeError {
    message: String,
}

impl DecodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decode error: {}", self.message)
    }
}

impl Error for DecodeError {}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::LoadMore { .. } => Method::Get,
            _ => Method::Post,
        }
    }

    /// Request target relative to the configured server origin.
    pub fn target(&self) -> String {
        match self {
            Endpoint::Login => "/login".to_string(),
            Endpoint::CreateUser => "/?newUser".to_string(),
            Endpoint::ChangePassword => "/?password".to_string(),
            Endpoint::VerifyComment => "/?verify".to_string(),
            Endpoint::DeletePost => "/?delete".to_string(),
            Endpoint::LoadMore { offset } => format!("/?more={}", offset),
        }
    }

    pub fn request(&self, fields: Vec<(String, String)>) -> WireRequest {
        WireRequest {
            method: self.method(),
            target: self.target(),
            fields,
        }
    }

    fn decode_rule(&self) -> DecodeRule {
        match self {
            Endpoint::Login => DecodeRule::SuccessToken("success"),
            Endpoint::CreateUser => DecodeRule::NameHashError,
            Endpoint::ChangePassword => DecodeRule::EmptyIsSuccess,
            Endpoint::VerifyComment => DecodeRule::AffirmativeOrIgnore,
            Endpoint::DeletePost => DecodeRule::AffirmativeOrFail,
            Endpoint::LoadMore { .. } => DecodeRule::RawMarkup,
        }
    }

    /// Classify a raw response body per this endpoint's wire convention.
    /// A body whose shape the rule cannot interpret at all is a
    /// `DecodeError`; callers fold that into the transport error path.
    pub fn decode(&self, raw: &str) -> Result<SubmissionOutcome, DecodeError> {
        match self.decode_rule() {
            DecodeRule::SuccessToken(token) => {
                if raw == token {
                    Ok(SubmissionOutcome::Success { payload: None })
                } else {
                    Ok(SubmissionOutcome::Failure { message: None })
                }
            }
            DecodeRule::AffirmativeOrIgnore => {
                if raw == AFFIRMATIVE {
                    Ok(SubmissionOutcome::Success { payload: None })
                } else {
                    Ok(SubmissionOutcome::Ignored)
                }
            }
            DecodeRule::AffirmativeOrFail => {
                if raw == AFFIRMATIVE {
                    Ok(SubmissionOutcome::Success { payload: None })
                } else {
                    Ok(SubmissionOutcome::Failure { message: None })
                }
            }
            DecodeRule::NameHashError => match raw.split_once('#') {
                Some((name, "")) => Ok(SubmissionOutcome::Success {
                    payload: Some(name.to_string()),
                }),
                Some((_, error)) => Ok(SubmissionOutcome::Failure {
                    message: Some(error.to_string()),
                }),
                None => Err(DecodeError::new(format!(
                    "Missing '#' separator in response to {}",
                    self.target()
                ))),
            },
            DecodeRule::EmptyIsSuccess => {
                if raw.is_empty() {
                    Ok(SubmissionOutcome::Success { payload: None })
                } else {
                    Ok(SubmissionOutcome::Failure {
                        message: Some(raw.to_string()),
                    })
                }
            }
            DecodeRule::RawMarkup => Ok(SubmissionOutcome::Success {
                payload: Some(raw.to_string()),
            }),
        }
    }
}
