// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Account management forms: user creation and password change.

use super::{dispatch, InFlight, SubmitDisposition, GENERIC_FAILURE};
use crate::endpoints::{Endpoint, SubmissionOutcome};
use crate::surface::{FormHandle, HostPage, IndicatorHandle};
use crate::transport::Transport;
use std::rc::Rc;

pub struct UserCreationForm {
    transport: Rc<dyn Transport>,
    form: Rc<dyn FormHandle>,
    error_label: Rc<dyn IndicatorHandle>,
    page: Rc<dyn HostPage>,
    in_flight: InFlight,
}

impl UserCreationForm {
    pub fn new(
        transport: Rc<dyn Transport>,
        form: Rc<dyn FormHandle>,
        error_label: Rc<dyn IndicatorHandle>,
        page: Rc<dyn HostPage>,
    ) -> Self {
        Self {
            transport,
            form,
            error_label,
            page,
            in_flight: InFlight::new(),
        }
    }

    pub async fn submit(&self) -> SubmitDisposition {
        let Some(_token) = self.in_flight.try_begin() else {
            log::debug!("User creation submit ignored, a submission is already pending");
            return SubmitDisposition::AlreadyPending;
        };

        match dispatch(
            self.transport.as_ref(),
            &Endpoint::CreateUser,
            self.form.fields(),
        )
        .await
        {
            Ok(SubmissionOutcome::Success { payload }) => {
                let name = payload.unwrap_or_default();
                self.page.alert(&format!("User '{}' created!", name));
                self.form.reset();
            }
            Ok(SubmissionOutcome::Failure { message }) => {
                self.error_label
                    .set_message(message.as_deref().unwrap_or(GENERIC_FAILURE));
                self.error_label.show();
            }
            Ok(SubmissionOutcome::Ignored) => {}
            Err(err) => {
                log::warn!("User creation request failed: {}", err);
                self.page.alert(&err.to_string());
            }
        }
        SubmitDisposition::Completed
    }

    /// Keystroke hook: hide the error label while the user edits.
    pub fn reset_error_indicator(&self) {
        self.error_label.hide();
    }
}

pub struct PasswordChangeForm {
    transport: Rc<dyn Transport>,
    form: Rc<dyn FormHandle>,
    error_label: Rc<dyn IndicatorHandle>,
    page: Rc<dyn HostPage>,
    home_location: String,
    in_flight: InFlight,
}

impl PasswordChangeForm {
    pub fn new(
        transport: Rc<dyn Transport>,
        form: Rc<dyn FormHandle>,
        error_label: Rc<dyn IndicatorHandle>,
        page: Rc<dyn HostPage>,
        home_location: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            form,
            error_label,
            page,
            home_location: home_location.into(),
            in_flight: InFlight::new(),
        }
    }

    pub async fn submit(&self) -> SubmitDisposition {
        let Some(_token) = self.in_flight.try_begin() else {
            log::debug!("Password change submit ignored, a submission is already pending");
            return SubmitDisposition::AlreadyPending;
        };

        match dispatch(
            self.transport.as_ref(),
            &Endpoint::ChangePassword,
            self.form.fields(),
        )
        .await
        {
            Ok(SubmissionOutcome::Success { .. }) => {
                self.page.alert("Password successfully changed!");
                self.page.navigate(&self.home_location);
            }
            Ok(SubmissionOutcome::Failure { message }) => {
                self.error_label
                    .set_message(message.as_deref().unwrap_or(GENERIC_FAILURE));
                self.error_label.show();
            }
            Ok(SubmissionOutcome::Ignored) => {}
            Err(err) => {
                log::warn!("Password change request failed: {}", err);
                self.page.alert(&err.to_string());
            }
        }
        SubmitDisposition::Completed
    }

    pub fn reset_error_indicator(&self) {
        self.error_label.hide();
    }
}
