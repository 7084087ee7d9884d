mod app;
pub mod settings;

use std::path::PathBuf;

use app::{App, AppAction, AppMessage, Screen};
use settings::Settings;
use suisend_ui::screens::landing;

use iced::event::Status;
use iced::{window, Element, Event, Subscription, Task};
use tracing_subscriber::EnvFilter;

/// Top-level Iced application wrapper.
///
/// Bridges the `App` state machine to the Iced runtime by converting
/// `AppAction` returns into `iced::Task` effects.
struct SuiSendApp {
    app: App,
    settings: Settings,
}

impl Default for SuiSendApp {
    fn default() -> Self {
        let settings = Settings::load();
        Self {
            app: App::new(&settings),
            settings,
        }
    }
}

impl SuiSendApp {
    fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        let action = self.app.update(message);
        match action {
            AppAction::None => Task::none(),
            AppAction::OpenFilePicker => Task::perform(pick_files(), |paths| match paths {
                Some(paths) => AppMessage::FilesPicked(paths),
                None => AppMessage::FilePickCancelled,
            }),
            AppAction::SubmitTransfer { files, config } => {
                // Transport, wallet, and encryption live outside this
                // client; submission is a hand-off.
                tracing::info!(
                    recipient = %config.recipient,
                    title = %config.title,
                    access = %config.transfer_type,
                    duration = %config.duration,
                    encrypted = config.encryption_enabled,
                    file_count = files.len(),
                    "transfer submitted"
                );
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, AppMessage> {
        match self.app.screen {
            Screen::Landing => self.app.landing.view().map(AppMessage::Landing),
            Screen::Auth => self.app.auth.view().map(AppMessage::Auth),
            Screen::FileList => self.app.file_list.view().map(AppMessage::FileList),
            Screen::Transfer => self.app.transfer.view().map(AppMessage::Transfer),
        }
    }

    fn subscription(&self) -> Subscription<AppMessage> {
        iced::event::listen_with(handle_window_event)
    }

    fn theme(&self) -> iced::Theme {
        match self.settings.theme {
            settings::Theme::Light => iced::Theme::Light,
            settings::Theme::Dark => iced::Theme::Dark,
        }
    }
}

/// Map window-level file drag events onto landing screen messages.
///
/// iced reports one dropped path per event; the state machine ignores these
/// whenever the landing screen is not active.
fn handle_window_event(
    event: Event,
    _status: Status,
    _window: window::Id,
) -> Option<AppMessage> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => {
            Some(AppMessage::Landing(landing::Message::DragEntered))
        }
        Event::Window(window::Event::FilesHoveredLeft) => {
            Some(AppMessage::Landing(landing::Message::DragLeft))
        }
        Event::Window(window::Event::FileDropped(path)) => Some(AppMessage::Landing(
            landing::Message::FilesDropped(vec![path]),
        )),
        _ => None,
    }
}

/// Open the native multi-file picker dialog.
///
/// Returns the selected paths, or None if cancelled.
async fn pick_files() -> Option<Vec<PathBuf>> {
    let handles = rfd::AsyncFileDialog::new()
        .set_title("Add files")
        .pick_files()
        .await?;
    Some(handles.iter().map(|h| h.path().to_path_buf()).collect())
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("suisend starting");

    iced::application("Sui Send", SuiSendApp::update, SuiSendApp::view)
        .subscription(SuiSendApp::subscription)
        .theme(SuiSendApp::theme)
        .run()
}
