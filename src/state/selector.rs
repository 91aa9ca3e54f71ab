//! Ban-aware random image selection
//!
//! Sampling is best-effort: after `MAX_ATTEMPTS` draws that all land on
//! banned distances, the last draw is returned anyway. This keeps the
//! selection bounded on small or heavily banned record lists.

use rand::seq::SliceRandom;
use rand::Rng;

use super::ban_list::BanList;
use super::data::ImageRecord;

/// Maximum number of random draws per selection
pub const MAX_ATTEMPTS: usize = 10;

/// Outcome of a selection
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub record: &'a ImageRecord,
    /// Number of draws used (1..=MAX_ATTEMPTS)
    pub attempts: usize,
    /// True when the budget ran out and `record` is still banned
    pub exhausted: bool,
}

/// Pick a random record whose distance is not banned.
///
/// Returns `None` only when `records` is empty.
pub fn pick<'a, R>(records: &'a [ImageRecord], bans: &BanList, rng: &mut R) -> Option<Selection<'a>>
where
    R: Rng + ?Sized,
{
    pick_with(records, bans, |candidates| candidates.choose(&mut *rng))
}

/// Same as [`pick`], with the draw supplied by the caller.
///
/// `draw` receives the full record list and returns one of its elements.
/// A `None` from `draw` ends the selection early and is returned as is,
/// so for a non-empty list `None` means the draw gave up.
pub fn pick_with<'a, F>(records: &'a [ImageRecord], bans: &BanList, mut draw: F) -> Option<Selection<'a>>
where
    F: FnMut(&'a [ImageRecord]) -> Option<&'a ImageRecord>,
{
    if records.is_empty() {
        return None;
    }

    let mut attempts = 0;
    loop {
        let record = draw(records)?;
        attempts += 1;

        let banned = bans.contains(&record.distance_label());
        if !banned || attempts >= MAX_ATTEMPTS {
            return Some(Selection {
                record,
                attempts,
                exhausted: banned,
            });
        }
    }
}
