// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod config;
pub mod endpoints;
pub mod forms;
pub mod pagination;
pub mod prefs;
pub mod surface;
pub mod tags;
pub mod transport;

// Re-export commonly used items for convenience
pub use endpoints::{Endpoint, SubmissionOutcome};
pub use forms::SubmitDisposition;
pub use transport::{AwcTransport, Transport, TransportError, WireRequest};
