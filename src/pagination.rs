// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::endpoints::{Endpoint, SubmissionOutcome};
use crate::surface::{FragmentHandle, HostPage};
use crate::transport::Transport;
use std::rc::Rc;

/// Incremental content loader. Each call is stateless; the host owns the
/// offset and advances it after a successful splice.
pub struct MoreLoader {
    transport: Rc<dyn Transport>,
    placeholder: Rc<dyn FragmentHandle>,
    page: Rc<dyn HostPage>,
}

impl MoreLoader {
    pub fn new(
        transport: Rc<dyn Transport>,
        placeholder: Rc<dyn FragmentHandle>,
        page: Rc<dyn HostPage>,
    ) -> Self {
        Self {
            transport,
            placeholder,
            page,
        }
    }

    /// Fetch the content page at `offset` and splice the returned markup
    /// verbatim into the placeholder. On a transport failure the
    /// placeholder is left untouched.
    pub async fn load(&self, offset: u64) {
        let endpoint = Endpoint::LoadMore { offset };
        let request = endpoint.request(Vec::new());
        let body = match self.transport.send(&request).await {
            Ok(body) => body,
            Err(err) => {
                log::warn!("Load-more request at offset {} failed: {}", offset, err);
                self.page.alert(&err.to_string());
                return;
            }
        };
        match endpoint.decode(&body) {
            Ok(SubmissionOutcome::Success { payload }) => {
                self.placeholder
                    .replace_with(payload.as_deref().unwrap_or_default());
            }
            // Markup decoding has no failure arm.
            Ok(_) | Err(_) => {}
        }
    }
}
