// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::atomic::{AtomicU64, Ordering};

const TAG_ID_PREFIX: &str = "tag-container-";

/// Strictly monotonic id source for tag rows. Ids are never reused within
/// the allocator's lifetime, so a remove-then-add sequence cannot produce
/// a duplicate.
#[derive(Debug, Default)]
pub struct TagIdAllocator {
    next: AtomicU64,
}

impl TagIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", TAG_ID_PREFIX, id)
    }
}
