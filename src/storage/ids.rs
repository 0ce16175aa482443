use crate::config::{IdMode, ReadlistSettings};
use crate::error::{ReadlistError, Result};
use std::collections::HashSet;

const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Produces identifiers for new records, given the ids already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdGenerator {
    mode: IdMode,
    length: usize,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_settings(&ReadlistSettings::default())
    }
}

impl IdGenerator {
    pub fn new(mode: IdMode, length: usize) -> Self {
        Self {
            mode,
            length: length.max(1),
        }
    }

    pub fn from_settings(settings: &ReadlistSettings) -> Self {
        Self::new(settings.id_mode, settings.id_length)
    }

    /// Fails with [`ReadlistError::Storage`] once no free id can be produced.
    pub fn next_id<'a>(&self, existing: impl IntoIterator<Item = &'a str>) -> Result<String> {
        match self.mode {
            IdMode::Sequential => next_sequential(existing),
            IdMode::Random => self.next_random(existing),
        }
    }

    fn next_random<'a>(&self, existing: impl IntoIterator<Item = &'a str>) -> Result<String> {
        let taken: HashSet<&str> = existing.into_iter().collect();
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let id = nanoid::format(nanoid::rngs::default, &ALPHABET, self.length);
            if !taken.contains(id.as_str()) {
                return Ok(id);
            }
        }
        Err(ReadlistError::Storage(format!(
            "No free {}-character id after {} attempts",
            self.length, MAX_RANDOM_ATTEMPTS
        )))
    }
}

/// Non-numeric ids are ignored when looking for the current maximum.
fn next_sequential<'a>(existing: impl IntoIterator<Item = &'a str>) -> Result<String> {
    let max = existing
        .into_iter()
        .filter_map(|id| id.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    max.checked_add(1)
        .map(|next| next.to_string())
        .ok_or_else(|| ReadlistError::Storage(format!("No sequential id left after {}", max)))
}
