// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::{dispatch, InFlight, SubmitDisposition};
use crate::endpoints::{Endpoint, SubmissionOutcome};
use crate::surface::{FormHandle, HostPage, IndicatorHandle};
use crate::transport::Transport;
use std::rc::Rc;
use std::time::Duration;

/// The three status elements the login page owns: credentials accepted,
/// credentials rejected, request failed.
pub struct LoginIndicators {
    pub valid: Rc<dyn IndicatorHandle>,
    pub invalid: Rc<dyn IndicatorHandle>,
    pub transport_error: Rc<dyn IndicatorHandle>,
}

pub struct LoginForm {
    transport: Rc<dyn Transport>,
    form: Rc<dyn FormHandle>,
    indicators: LoginIndicators,
    page: Rc<dyn HostPage>,
    reload_delay: Duration,
    in_flight: InFlight,
}

impl LoginForm {
    pub fn new(
        transport: Rc<dyn Transport>,
        form: Rc<dyn FormHandle>,
        indicators: LoginIndicators,
        page: Rc<dyn HostPage>,
        reload_delay: Duration,
    ) -> Self {
        Self {
            transport,
            form,
            indicators,
            page,
            reload_delay,
            in_flight: InFlight::new(),
        }
    }

    /// Submit the current credentials. On success the session is
    /// established server-side, so the page schedules a full reload to
    /// pick it up.
    pub async fn submit(&self) -> SubmitDisposition {
        let Some(_token) = self.in_flight.try_begin() else {
            log::debug!("Login submit ignored, a submission is already pending");
            return SubmitDisposition::AlreadyPending;
        };

        match dispatch(self.transport.as_ref(), &Endpoint::Login, self.form.fields()).await {
            Ok(SubmissionOutcome::Success { .. }) => {
                self.indicators.valid.show();
                self.page.schedule_reload(self.reload_delay);
            }
            Ok(SubmissionOutcome::Failure { .. }) | Ok(SubmissionOutcome::Ignored) => {
                self.indicators.invalid.show();
            }
            Err(err) => {
                log::warn!("Login request failed: {}", err);
                self.indicators.transport_error.show();
            }
        }
        SubmitDisposition::Completed
    }

    /// Host calls this when the user resumes typing into a credential
    /// field.
    pub fn reset_error_indicators(&self) {
        self.indicators.invalid.hide();
        self.indicators.transport_error.hide();
    }
}
