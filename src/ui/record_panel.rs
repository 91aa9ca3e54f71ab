//! Selected image panel: the picture and its metadata

use iced::widget::{button, image, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::data::ImageRecord;
use crate::{Message, PreviewState};

/// Displayed edge length of the Earth image
const IMAGE_SIZE: f32 = 480.0;

/// Metadata lines shown under the image, in display order
pub fn metadata_lines(record: &ImageRecord) -> Vec<String> {
    vec![
        format!("Identifier: {}", record.identifier),
        format!("Date: {}", record.date),
        format!("Caption: {}", record.caption),
        format!(
            "Coords: Lat {}, Lon {}",
            record.centroid_coordinates.lat, record.centroid_coordinates.lon
        ),
    ]
}

pub fn distance_line(record: &ImageRecord) -> String {
    format!("Distance from Earth: {} miles", record.distance_label())
}

/// Image (or its loading state), metadata, and the Ban button
pub fn view<'a>(record: &'a ImageRecord, preview: Option<&'a PreviewState>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match preview {
        Some(PreviewState::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(IMAGE_SIZE))
            .height(Length::Fixed(IMAGE_SIZE))
            .into(),
        Some(PreviewState::Failed) => text("image did not load").size(16).into(),
        Some(PreviewState::Loading) | None => text("Loading image...").size(16).into(),
    };

    let mut info: Column<'a, Message> = Column::new().spacing(6);
    for line in metadata_lines(record) {
        info = info.push(text(line).size(16));
    }
    info = info.push(
        row![
            text(distance_line(record)).size(16),
            button("Ban").on_press(Message::BanCurrent).padding([4, 12]),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    );

    row![picture, info]
        .spacing(30)
        .align_y(Alignment::Center)
        .into()
}
