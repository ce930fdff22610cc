// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Cookie-backed preference storage, e.g. the commenter nickname the host
//! page prefills at load.

use std::rc::Rc;

/// Read/write contract onto the page's cookie string. `read` returns the
/// full `;`-separated cookie string; `write` takes one `name=value` pair
/// with no expiry attributes (session-scoped by browser default).
pub trait CookieJar {
    fn read(&self) -> String;
    fn write(&self, pair: &str);
}

pub struct PreferenceStore {
    name: String,
    jar: Rc<dyn CookieJar>,
}

impl PreferenceStore {
    pub fn new(name: impl Into<String>, jar: Rc<dyn CookieJar>) -> Self {
        Self {
            name: name.into(),
            jar,
        }
    }

    pub fn load(&self) -> Option<String> {
        parse_cookie(&self.jar.read(), &self.name)
    }

    /// The value is stored as-is; no validation.
    pub fn save(&self, value: &str) {
        self.jar.write(&format!("{}={}", self.name, value));
    }
}

/// Extract the value of `name` from a `;`-separated cookie string. Keys
/// match exactly and empty values count as absent.
pub fn parse_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
