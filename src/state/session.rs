//! Session state: the currently displayed record and the ban list
//!
//! Everything the view reads lives here. Each transition runs to
//! completion inside a single `update` call, so there is no locking.

use rand::Rng;

use super::ban_list::BanList;
use super::data::ImageRecord;
use super::selector;

#[derive(Debug, Default)]
pub struct Session {
    selected: Option<ImageRecord>,
    bans: BanList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record currently on display, if any
    pub fn selected(&self) -> Option<&ImageRecord> {
        self.selected.as_ref()
    }

    pub fn bans(&self) -> &BanList {
        &self.bans
    }

    /// Apply a fetch result: pick a record avoiding banned distances and
    /// make it the selection.
    ///
    /// An empty list leaves the session untouched and returns `None`.
    pub fn apply_records<R>(&mut self, records: Vec<ImageRecord>, rng: &mut R) -> Option<&ImageRecord>
    where
        R: Rng + ?Sized,
    {
        let picked = {
            let selection = selector::pick(&records, &self.bans, rng)?;
            if selection.exhausted {
                log::warn!(
                    "⚠️  No unbanned image after {} attempts, showing {} anyway",
                    selection.attempts,
                    selection.record.distance_label()
                );
            } else {
                log::debug!("Selected {} after {} attempt(s)", selection.record.identifier, selection.attempts);
            }
            selection.record.clone()
        };

        self.selected = Some(picked);
        self.selected.as_ref()
    }

    /// Ban the distance of the current selection.
    ///
    /// Returns the banned label, or `None` if nothing is selected or the
    /// label was already banned.
    pub fn ban_current(&mut self) -> Option<String> {
        let label = self.selected.as_ref()?.distance_label();
        if self.bans.ban(label.clone()) {
            Some(label)
        } else {
            None
        }
    }

    pub fn unban(&mut self, label: &str) {
        self.bans.unban(label);
    }
}
