//! Ban list panel

use iced::widget::{button, column, text, Column};
use iced::{Alignment, Element};

use crate::state::ban_list::BanList;
use crate::Message;

/// Shown instead of the list while nothing is banned
pub const EMPTY_PLACEHOLDER: &str = "No banned distances yet.";

/// Caption of the unban button for one entry
pub fn entry_caption(label: &str) -> String {
    format!("{} miles ✕", label)
}

/// Unban button captions in ban order, or `None` when the placeholder
/// should be shown instead
pub fn entry_captions(bans: &BanList) -> Option<Vec<String>> {
    if bans.is_empty() {
        return None;
    }
    Some(bans.iter().map(entry_caption).collect())
}

/// "Ban List" heading followed by one unban button per entry,
/// or the placeholder when the list is empty
pub fn view(bans: &BanList) -> Element<'_, Message> {
    let entries: Element<'_, Message> = match entry_captions(bans) {
        None => text(EMPTY_PLACEHOLDER).size(16).into(),
        Some(captions) => {
            let buttons: Vec<Element<'_, Message>> = bans
                .iter()
                .zip(captions)
                .map(|(label, caption)| {
                    button(text(caption).size(14))
                        .on_press(Message::Unban(label.to_string()))
                        .padding([4, 10])
                        .into()
                })
                .collect();

            Column::with_children(buttons)
                .spacing(6)
                .align_x(Alignment::Center)
                .into()
        }
    };

    column![text("Ban List").size(28), entries]
        .spacing(12)
        .align_x(Alignment::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_caption() {
        assert_eq!(entry_caption("91403"), "91403 miles ✕");
    }

    #[test]
    fn test_placeholder_for_empty_list() {
        assert!(entry_captions(&BanList::new()).is_none());
    }

    #[test]
    fn test_captions_follow_ban_order() {
        let mut bans = BanList::new();
        bans.ban("300");
        bans.ban("100");

        assert_eq!(
            entry_captions(&bans).unwrap(),
            vec!["300 miles ✕".to_string(), "100 miles ✕".to_string()]
        );

        bans.unban("300");
        bans.unban("100");
        assert!(entry_captions(&bans).is_none());
    }
}
