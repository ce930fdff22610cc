// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Form submission orchestration. Each controller serializes its form,
//! sends the request through the transport seam, decodes the response per
//! the endpoint's convention and routes the outcome to the UI handles it
//! was constructed with. A submission is one-shot: `Idle -> Pending ->
//! Idle`, with no retry and no queueing.

pub mod account;
pub mod login;
pub mod moderation;

pub use account::{PasswordChangeForm, UserCreationForm};
pub use login::{LoginForm, LoginIndicators};
pub use moderation::{CommentVerifier, PostDeleter, VERIFIED_BADGE_MARKUP};

use crate::endpoints::{Endpoint, SubmissionOutcome};
use crate::transport::{Transport, TransportError};
use std::cell::Cell;

/// Failure text shown when the server rejects without a message.
pub(crate) const GENERIC_FAILURE: &str = "Something went wrong.";

/// Result of asking a form controller to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDisposition {
    Completed,
    /// A submission on the same form is still pending; nothing was sent
    /// and no UI state changed.
    AlreadyPending,
}

/// Serialize, send, decode. Shared by every controller in this module.
pub(crate) async fn dispatch(
    transport: &dyn Transport,
    endpoint: &Endpoint,
    fields: Vec<(String, String)>,
) -> Result<SubmissionOutcome, TransportError> {
    let request = endpoint.request(fields);
    let body = transport.send(&request).await?;
    endpoint.decode(&body).map_err(TransportError::from)
}

/// Per-form guard rejecting overlapping submissions; see DESIGN.md for
/// the recorded decision.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    pending: Cell<bool>,
}

impl InFlight {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Marks the form pending for the lifetime of the returned token.
    /// `None` when a submission is already pending.
    pub(crate) fn try_begin(&self) -> Option<InFlightToken<'_>> {
        if self.pending.get() {
            return None;
        }
        self.pending.set(true);
        Some(InFlightToken { flag: &self.pending })
    }
}

pub(crate) struct InFlightToken<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for InFlightToken<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
