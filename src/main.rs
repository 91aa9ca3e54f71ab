use iced::widget::{button, column, container, image, scrollable, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use std::sync::Arc;

mod config;
mod epic;
mod state;
mod ui;

use config::Config;
use epic::{EpicClient, FetchError};
use state::data::ImageRecord;
use state::session::Session;

/// Download state of the selected record's PNG
#[derive(Debug, Clone)]
pub enum PreviewState {
    Loading,
    Ready(image::Handle),
    Failed,
}

/// Preview of one specific record, so late downloads can be matched
#[derive(Debug, Clone)]
struct Preview {
    identifier: String,
    state: PreviewState,
}

/// Main application state
struct EpicExplorer {
    client: EpicClient,
    /// Selected record and ban list
    session: Session,
    preview: Option<Preview>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Discover!"
    Discover,
    /// Record listing arrived (or failed)
    RecordsFetched(Result<Vec<ImageRecord>, Arc<FetchError>>),
    /// PNG download for `identifier` finished
    ImageLoaded {
        identifier: String,
        result: Result<Vec<u8>, Arc<FetchError>>,
    },
    /// Ban the distance of the image on display
    BanCurrent,
    /// Remove a distance label from the ban list
    Unban(String),
}

impl EpicExplorer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        if !config.has_api_key() {
            log::warn!("⚠️  EPIC_API_KEY is not set, requests will likely be rejected");
        }
        log::info!("🛰️  EPIC Explorer initialized against {}", config.api_base);

        (Self::with_client(EpicClient::new(config)), Task::none())
    }

    fn with_client(client: EpicClient) -> Self {
        EpicExplorer {
            client,
            session: Session::new(),
            preview: None,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Discover => {
                log::info!("🔭 Fetching EPIC records...");
                let client = self.client.clone();
                Task::perform(
                    async move { client.fetch_records().await.map_err(Arc::new) },
                    Message::RecordsFetched,
                )
            }
            Message::RecordsFetched(Ok(records)) => {
                let Some(record) = self.session.apply_records(records, &mut rand::thread_rng()) else {
                    return Task::none();
                };
                let identifier = record.identifier.clone();
                let url = self.client.image_url(record);

                // Same record again: keep a pending or finished download, retry a failed one
                let in_hand = self.preview.as_ref().is_some_and(|p| {
                    p.identifier == identifier && !matches!(p.state, PreviewState::Failed)
                });
                if in_hand {
                    return Task::none();
                }

                self.preview = Some(Preview {
                    identifier: identifier.clone(),
                    state: PreviewState::Loading,
                });

                let client = self.client.clone();
                Task::perform(
                    async move { client.fetch_image(url).await.map_err(Arc::new) },
                    move |result| Message::ImageLoaded {
                        identifier: identifier.clone(),
                        result,
                    },
                )
            }
            Message::RecordsFetched(Err(error)) => {
                log::error!("❌ Failed to fetch EPIC data: {}", error);
                Task::none()
            }
            Message::ImageLoaded { identifier, result } => {
                match self.preview.as_mut() {
                    Some(preview) if preview.identifier == identifier => {
                        preview.state = match result {
                            Ok(bytes) => PreviewState::Ready(image::Handle::from_bytes(bytes)),
                            Err(error) => {
                                log::error!("❌ Failed to load image {}: {}", identifier, error);
                                PreviewState::Failed
                            }
                        };
                    }
                    _ => log::debug!("Ignoring stale image download for {}", identifier),
                }
                Task::none()
            }
            Message::BanCurrent => {
                if let Some(label) = self.session.ban_current() {
                    log::info!("🚫 Banned distance {} miles ({} banned)", label, self.session.bans().len());
                }
                Task::none()
            }
            Message::Unban(label) => {
                self.session.unban(&label);
                log::info!("↩️  Unbanned distance {} miles", label);
                Task::none()
            }
        }
    }

    /// Selected record and the download state of its image, if anything
    /// is on display
    fn displayed(&self) -> Option<(&ImageRecord, Option<&PreviewState>)> {
        let record = self.session.selected()?;
        let preview = self
            .preview
            .as_ref()
            .filter(|p| p.identifier == record.identifier)
            .map(|p| &p.state);
        Some((record, preview))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content: Column<Message> = column![
            text("NASA EPIC Imaging").size(48),
            text("Discover unique perspectives of the Earth").size(22),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        if let Some((record, preview)) = self.displayed() {
            content = content.push(ui::record_panel::view(record, preview));
        }

        content = content
            .push(
                button("Discover!")
                    .on_press(Message::Discover)
                    .padding(10),
            )
            .push(ui::ban_panel::view(self.session.bans()));

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application(
        "NASA EPIC Imaging",
        EpicExplorer::update,
        EpicExplorer::view,
    )
    .theme(EpicExplorer::theme)
    .centered()
    .run_with(EpicExplorer::new)
}
