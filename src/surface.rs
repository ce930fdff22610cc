// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Handles onto the host page. The host constructs each controller with
//! the concrete handles it owns; the layer never looks anything up in a
//! shared document at call time.

use std::time::Duration;

/// A visibility-toggled status element, e.g. an inline error label.
pub trait IndicatorHandle {
    fn show(&self);
    fn hide(&self);
    fn set_message(&self, text: &str);
}

/// A named form the host page owns.
pub trait FormHandle {
    /// Current field values in document order, ready for form encoding.
    fn fields(&self) -> Vec<(String, String)>;
    /// Clear all fields back to their initial values.
    fn reset(&self);
}

/// A document node whose content can be swapped for server markup.
pub trait FragmentHandle {
    fn replace_with(&self, markup: &str);
}

/// Page-level effects that outlive any single control.
pub trait HostPage {
    fn alert(&self, message: &str);
    fn navigate(&self, location: &str);
    fn schedule_reload(&self, delay: Duration);
}
