//! Top-level application state with navigation between screens.
//!
//! The Elm architecture state machine: `Screen` tracks which screen is
//! active, and `update()` routes messages to the screens, translating their
//! actions into navigation and shell-level `AppAction`s.

use std::path::PathBuf;

use suisend_ui::screens::auth::{self, AuthScreen};
use suisend_ui::screens::file_list::{self, FileListScreen};
use suisend_ui::screens::landing::{self, LandingScreen};
use suisend_ui::screens::transfer::{self, TransferScreen};
use suisend_ui::types::{FileKind, TransferConfig, TransferFile};

use crate::settings::Settings;

/// Navigation state: which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Auth,
    FileList,
    Transfer,
}

/// An authenticated session. `email` is `None` for the simulated OAuth path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: Option<String>,
}

/// Top-level application message.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Messages from the landing screen, including window-level drag events
    /// forwarded by the shell subscription.
    Landing(landing::Message),
    /// Messages from the auth screen.
    Auth(auth::Message),
    /// Messages from the file list screen.
    FileList(file_list::Message),
    /// Messages from the transfer screen.
    Transfer(transfer::Message),
    /// The native file dialog returned a selection.
    FilesPicked(Vec<PathBuf>),
    /// The native file dialog was cancelled.
    FilePickCancelled,
}

/// Result of processing an app message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    None,
    /// Open the native file picker.
    OpenFilePicker,
    /// Hand a completed transfer order to the external pipeline.
    SubmitTransfer {
        files: Vec<TransferFile>,
        config: TransferConfig,
    },
}

/// Top-level application state.
pub struct App {
    /// Current screen.
    pub screen: Screen,
    /// Landing screen state.
    pub landing: LandingScreen,
    /// Auth screen state.
    pub auth: AuthScreen,
    /// File list screen state.
    pub file_list: FileListScreen,
    /// Transfer screen state.
    pub transfer: TransferScreen,
    /// Present once the user has authenticated.
    pub session: Option<Session>,
    /// Monotonic source for file record ids.
    next_file_id: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl App {
    /// Build the screens, seeding chrome and form defaults from settings.
    pub fn new(settings: &Settings) -> Self {
        let wallet_address = settings.wallet_address();
        Self {
            screen: Screen::Landing,
            landing: LandingScreen::default(),
            auth: AuthScreen::default(),
            file_list: FileListScreen::default().with_wallet_address(wallet_address.clone()),
            transfer: TransferScreen {
                wallet_address,
                config: TransferConfig {
                    duration: settings.default_duration,
                    ..TransferConfig::default()
                },
                ..TransferScreen::default()
            },
            session: None,
            next_file_id: 0,
        }
    }

    /// Handle a top-level message and return an action.
    pub fn update(&mut self, message: AppMessage) -> AppAction {
        match message {
            AppMessage::Landing(msg) => {
                // Window-level drag events arrive regardless of screen.
                if self.screen != Screen::Landing {
                    return AppAction::None;
                }
                let action = self.landing.update(msg);
                match action {
                    landing::Action::None => AppAction::None,
                    landing::Action::OpenFilePicker => AppAction::OpenFilePicker,
                    landing::Action::UploadFiles(paths) => {
                        self.register_files(paths);
                        self.screen = if self.session.is_some() {
                            Screen::FileList
                        } else {
                            Screen::Auth
                        };
                        AppAction::None
                    }
                }
            }
            AppMessage::Auth(msg) => {
                let action = self.auth.update(msg);
                match action {
                    auth::Action::None => AppAction::None,
                    auth::Action::Authenticate { email } => {
                        tracing::info!(via_email = email.is_some(), "authenticated");
                        self.session = Some(Session { email });
                        self.screen = Screen::FileList;
                        AppAction::None
                    }
                    auth::Action::ReturnToLanding => {
                        self.screen = Screen::Landing;
                        AppAction::None
                    }
                }
            }
            AppMessage::FileList(msg) => {
                let action = self.file_list.update(msg);
                match action {
                    file_list::Action::None => AppAction::None,
                    file_list::Action::AddMoreFiles => AppAction::OpenFilePicker,
                    file_list::Action::StartUpload => {
                        self.screen = Screen::Transfer;
                        AppAction::None
                    }
                }
            }
            AppMessage::Transfer(msg) => {
                let action = self.transfer.update(msg);
                match action {
                    transfer::Action::None => AppAction::None,
                    transfer::Action::AddFiles => AppAction::OpenFilePicker,
                    transfer::Action::Submit(config) => AppAction::SubmitTransfer {
                        files: self.transfer.files.clone(),
                        config,
                    },
                }
            }
            AppMessage::FilesPicked(paths) => {
                if self.screen == Screen::Landing {
                    // Route through the landing screen so its capture
                    // contract (empty-selection guard, navigation) applies.
                    return self.update(AppMessage::Landing(landing::Message::FilesPicked(paths)));
                }
                if paths.is_empty() {
                    return AppAction::None;
                }
                self.register_files(paths);
                AppAction::None
            }
            AppMessage::FilePickCancelled => AppAction::None,
        }
    }

    /// Turn captured paths into file records and register them with the
    /// file-bearing screens.
    fn register_files(&mut self, paths: Vec<PathBuf>) {
        for path in paths {
            self.next_file_id += 1;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let file = TransferFile {
                id: format!("file-{}", self.next_file_id),
                name,
                kind: FileKind::from_path(&path),
            };
            self.file_list.file_added(file.clone());
            self.transfer.file_added(file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suisend_ui::types::{ExpiryDuration, TransferType};

    fn drop_on_landing(app: &mut App, path: &str) -> AppAction {
        app.update(AppMessage::Landing(landing::Message::FilesDropped(vec![
            PathBuf::from(path),
        ])))
    }

    #[test]
    fn starts_on_landing_screen() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Landing);
        assert!(app.session.is_none());
        assert!(app.file_list.files.is_empty());
    }

    #[test]
    fn settings_seed_chrome_and_form() {
        let settings = Settings {
            wallet_address: "0xddkKKjQvPoPQgpoSzhpuwoo".to_string(),
            default_duration: ExpiryDuration::SevenDays,
            ..Settings::default()
        };
        let app = App::new(&settings);
        assert!(app.file_list.wallet_address.is_some());
        assert!(app.transfer.wallet_address.is_some());
        assert_eq!(app.transfer.config.duration, ExpiryDuration::SevenDays);
    }

    #[test]
    fn drop_registers_files_and_goes_to_auth() {
        let mut app = App::default();
        let action = drop_on_landing(&mut app, "/tmp/photo.png");
        assert_eq!(action, AppAction::None);
        assert_eq!(app.screen, Screen::Auth);
        assert_eq!(app.file_list.files.len(), 1);
        assert_eq!(app.transfer.files.len(), 1);
        assert_eq!(app.file_list.files[0].id, "file-1");
        assert_eq!(app.file_list.files[0].name, "photo.png");
        assert_eq!(app.file_list.files[0].kind, FileKind::Image);
    }

    #[test]
    fn drop_with_session_skips_auth() {
        let mut app = App::default();
        app.update(AppMessage::Auth(auth::Message::ContinueWithGoogle));
        assert_eq!(app.screen, Screen::FileList);

        app.screen = Screen::Landing;
        drop_on_landing(&mut app, "/tmp/song.mp3");
        assert_eq!(app.screen, Screen::FileList);
    }

    #[test]
    fn landing_picker_flow() {
        let mut app = App::default();
        let action = app.update(AppMessage::Landing(landing::Message::PickFiles));
        assert_eq!(action, AppAction::OpenFilePicker);

        app.update(AppMessage::FilesPicked(vec![PathBuf::from("/tmp/a.pdf")]));
        assert_eq!(app.screen, Screen::Auth);
        assert_eq!(app.file_list.files.len(), 1);
    }

    #[test]
    fn cancelled_picker_is_a_noop() {
        let mut app = App::default();
        app.update(AppMessage::Landing(landing::Message::PickFiles));

        assert_eq!(
            app.update(AppMessage::FilePickCancelled),
            AppAction::None
        );
        assert_eq!(app.update(AppMessage::FilesPicked(Vec::new())), AppAction::None);
        assert_eq!(app.screen, Screen::Landing);
        assert!(app.file_list.files.is_empty());
    }

    #[test]
    fn drag_events_ignored_off_landing() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");
        assert_eq!(app.screen, Screen::Auth);

        app.update(AppMessage::Landing(landing::Message::DragEntered));
        assert!(!app.landing.drag_active);

        let before = app.file_list.files.len();
        drop_on_landing(&mut app, "/tmp/b.pdf");
        assert_eq!(app.file_list.files.len(), before);
        assert_eq!(app.screen, Screen::Auth);
    }

    #[test]
    fn email_auth_records_session() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");

        app.update(AppMessage::Auth(auth::Message::EmailChanged(
            "alice@example.com".to_string(),
        )));
        app.update(AppMessage::Auth(auth::Message::SubmitEmail));

        assert_eq!(app.screen, Screen::FileList);
        assert_eq!(
            app.session,
            Some(Session {
                email: Some("alice@example.com".to_string())
            })
        );
    }

    #[test]
    fn google_auth_records_session_without_email() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");

        app.update(AppMessage::Auth(auth::Message::ContinueWithGoogle));
        assert_eq!(app.screen, Screen::FileList);
        assert_eq!(app.session, Some(Session { email: None }));
    }

    #[test]
    fn empty_email_submit_stays_on_auth() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");

        app.update(AppMessage::Auth(auth::Message::SubmitEmail));
        assert_eq!(app.screen, Screen::Auth);
        assert!(app.session.is_none());
    }

    #[test]
    fn wallet_button_returns_to_landing() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");

        app.update(AppMessage::Auth(auth::Message::ConnectWallet));
        assert_eq!(app.screen, Screen::Landing);
        assert!(app.session.is_none());
    }

    #[test]
    fn add_more_files_from_file_list() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");
        app.update(AppMessage::Auth(auth::Message::ContinueWithGoogle));

        let action = app.update(AppMessage::FileList(file_list::Message::AddMoreFiles));
        assert_eq!(action, AppAction::OpenFilePicker);

        app.update(AppMessage::FilesPicked(vec![PathBuf::from("/tmp/b.mp4")]));
        assert_eq!(app.screen, Screen::FileList);
        assert_eq!(app.file_list.files.len(), 2);
        assert_eq!(app.transfer.files.len(), 2);
        assert_eq!(app.file_list.files[1].kind, FileKind::Video);
    }

    #[test]
    fn start_upload_goes_to_transfer() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");
        app.update(AppMessage::Auth(auth::Message::ContinueWithGoogle));

        app.update(AppMessage::FileList(file_list::Message::StartUpload));
        assert_eq!(app.screen, Screen::Transfer);
    }

    #[test]
    fn file_ids_stay_unique_across_batches() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");
        app.update(AppMessage::Auth(auth::Message::ContinueWithGoogle));
        app.update(AppMessage::FilesPicked(vec![
            PathBuf::from("/tmp/a.pdf"),
            PathBuf::from("/tmp/c.png"),
        ]));

        let ids: Vec<&str> = app.file_list.files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["file-1", "file-2", "file-3"]);
    }

    #[test]
    fn submit_blocked_until_required_fields() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");
        app.update(AppMessage::Auth(auth::Message::ContinueWithGoogle));
        app.update(AppMessage::FileList(file_list::Message::StartUpload));

        let action = app.update(AppMessage::Transfer(transfer::Message::Submit));
        assert_eq!(action, AppAction::None);
        assert!(app.transfer.error.is_some());
    }

    #[test]
    fn full_flow_produces_transfer_order() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/photo.png");
        app.update(AppMessage::Auth(auth::Message::ContinueWithGoogle));
        app.update(AppMessage::FileList(file_list::Message::StartUpload));

        app.update(AppMessage::Transfer(transfer::Message::RecipientChanged(
            "bob@example.com".to_string(),
        )));
        app.update(AppMessage::Transfer(transfer::Message::TitleChanged(
            "Photos".to_string(),
        )));
        app.update(AppMessage::Transfer(transfer::Message::TransferTypeSelected(
            TransferType::Wallet,
        )));
        app.update(AppMessage::Transfer(transfer::Message::EncryptionChanged(
            true,
        )));

        let action = app.update(AppMessage::Transfer(transfer::Message::Submit));
        match action {
            AppAction::SubmitTransfer { files, config } => {
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].name, "photo.png");
                assert_eq!(config.recipient, "bob@example.com");
                assert_eq!(config.title, "Photos");
                assert_eq!(config.transfer_type, TransferType::Wallet);
                assert!(config.encryption_enabled);
            }
            other => panic!("expected a transfer order, got {other:?}"),
        }
    }

    #[test]
    fn transfer_add_files_opens_picker() {
        let mut app = App::default();
        drop_on_landing(&mut app, "/tmp/a.pdf");
        app.update(AppMessage::Auth(auth::Message::ContinueWithGoogle));
        app.update(AppMessage::FileList(file_list::Message::StartUpload));

        let action = app.update(AppMessage::Transfer(transfer::Message::AddFiles));
        assert_eq!(action, AppAction::OpenFilePicker);

        app.update(AppMessage::FilesPicked(vec![PathBuf::from("/tmp/d.wav")]));
        assert_eq!(app.screen, Screen::Transfer);
        assert_eq!(app.transfer.files.len(), 2);
    }
}
