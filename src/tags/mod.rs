// This file is part of the product Quillside.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! The tag entry widget of the post editor: an append-only, individually
//! removable list of tag rows behind a single text input.

pub mod ids;

use ids::TagIdAllocator;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// One read-only tag row. Ordering is implicit by position in the
/// collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    id: String,
    value: String,
}

impl TagEntry {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    EmptyInput,
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::EmptyInput => write!(f, "Tag input must not be empty"),
        }
    }
}

impl Error for TagError {}

/// What the host page renders for the widget. The collection owns the
/// entry state; the surface only mirrors it.
pub trait TagSurface {
    /// Render a read-only row for the entry, with its removal control.
    fn append_entry(&self, entry: &TagEntry);
    /// Drop the row with the given id.
    fn remove_entry(&self, id: &str);
    fn mark_input_invalid(&self);
    fn clear_input_marker(&self);
    fn clear_input(&self);
}

pub struct TagCollection {
    entries: Vec<TagEntry>,
    ids: TagIdAllocator,
    surface: Rc<dyn TagSurface>,
}

impl TagCollection {
    pub fn new(surface: Rc<dyn TagSurface>) -> Self {
        Self {
            entries: Vec::new(),
            ids: TagIdAllocator::new(),
            surface,
        }
    }

    /// Append a tag for the current input. Empty input marks the field
    /// invalid and changes nothing; any other input becomes a new row and
    /// clears the field.
    pub fn add_tag(&mut self, raw_input: &str) -> Result<TagEntry, TagError> {
        if raw_input.is_empty() {
            self.surface.mark_input_invalid();
            return Err(TagError::EmptyInput);
        }
        let entry = TagEntry {
            id: self.ids.next_id(),
            value: raw_input.to_string(),
        };
        self.surface.append_entry(&entry);
        self.surface.clear_input();
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Keystroke hook: clear the invalid marker once the user resumes
    /// typing.
    pub fn reset_input_appearance(&self) {
        self.surface.clear_input_marker();
    }

    /// Remove the entry with the given id. Absent ids are a silent no-op,
    /// so a removal closure captured at row creation stays safe to invoke.
    pub fn remove_tag(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() != before {
            self.surface.remove_entry(id);
        }
    }

    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
