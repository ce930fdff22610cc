// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Moderation actions wired to single controls rather than forms: comment
//! verification and post deletion. Neither carries an in-flight guard;
//! both are one-click actions whose server handling tolerates repeats.

use super::{dispatch, GENERIC_FAILURE};
use crate::endpoints::{Endpoint, SubmissionOutcome};
use crate::surface::{FragmentHandle, HostPage};
use crate::transport::Transport;
use std::rc::Rc;

/// Markup the status node is swapped for once a comment is verified.
pub const VERIFIED_BADGE_MARKUP: &str =
    "<span class='verification-status verification-verified'>Verified</span>";

pub struct CommentVerifier {
    transport: Rc<dyn Transport>,
    page: Rc<dyn HostPage>,
}

impl CommentVerifier {
    pub fn new(transport: Rc<dyn Transport>, page: Rc<dyn HostPage>) -> Self {
        Self { transport, page }
    }

    /// Ask the server to verify one comment. `status_node` is the
    /// not-yet-verified badge next to that comment; a declined response
    /// leaves it untouched.
    pub async fn verify(&self, post_id: &str, comment_id: &str, status_node: &dyn FragmentHandle) {
        let fields = vec![
            ("postId".to_string(), post_id.to_string()),
            ("commentId".to_string(), comment_id.to_string()),
        ];
        match dispatch(self.transport.as_ref(), &Endpoint::VerifyComment, fields).await {
            Ok(SubmissionOutcome::Success { .. }) => {
                status_node.replace_with(VERIFIED_BADGE_MARKUP);
            }
            Ok(_) => {}
            Err(err) => {
                log::warn!("Comment verification request failed: {}", err);
                self.page.alert(&err.to_string());
            }
        }
    }
}

pub struct PostDeleter {
    transport: Rc<dyn Transport>,
    page: Rc<dyn HostPage>,
    home_location: String,
}

impl PostDeleter {
    pub fn new(
        transport: Rc<dyn Transport>,
        page: Rc<dyn HostPage>,
        home_location: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            page,
            home_location: home_location.into(),
        }
    }

    /// Delete one post; on success the page leaves for the home location.
    pub async fn delete(&self, post_id: &str) {
        let fields = vec![("postId".to_string(), post_id.to_string())];
        match dispatch(self.transport.as_ref(), &Endpoint::DeletePost, fields).await {
            Ok(SubmissionOutcome::Success { .. }) => {
                self.page.navigate(&self.home_location);
            }
            Ok(_) => {
                self.page.alert(GENERIC_FAILURE);
            }
            Err(err) => {
                log::warn!("Post deletion request failed: {}", err);
                self.page.alert(&err.to_string());
            }
        }
    }
}
