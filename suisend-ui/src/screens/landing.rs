//! Landing screen: capture files via drag-and-drop or the native picker.
//!
//! The first screen shown. Captured files are forwarded to the caller, which
//! owns the upload pipeline and the navigation that follows.

use std::path::PathBuf;

use iced::widget::{button, column, container, text};
use iced::{Alignment, Border, Element, Length, Renderer, Theme};

use crate::header;

/// Messages emitted by the landing screen.
///
/// Drag messages are fed in by the caller from window-level events; iced
/// reports drops one path at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A file drag entered the window.
    DragEntered,
    /// The drag left without dropping.
    DragLeft,
    /// Files were dropped onto the window.
    FilesDropped(Vec<PathBuf>),
    /// User clicked "Upload File".
    PickFiles,
    /// The native picker returned a selection.
    FilesPicked(Vec<PathBuf>),
}

/// Result of processing a landing screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No external action needed.
    None,
    /// Open the native file picker.
    OpenFilePicker,
    /// Forward the captured files to the upload pipeline and move on.
    UploadFiles(Vec<PathBuf>),
}

/// State of the landing screen.
#[derive(Debug, Clone, Default)]
pub struct LandingScreen {
    /// Whether a drag is currently hovering over the window.
    pub drag_active: bool,
}

impl LandingScreen {
    /// Handle a message and return any external action to perform.
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::DragEntered => {
                self.drag_active = true;
                Action::None
            }
            Message::DragLeft => {
                self.drag_active = false;
                Action::None
            }
            Message::FilesDropped(paths) => {
                self.drag_active = false;
                if paths.is_empty() {
                    return Action::None;
                }
                tracing::info!(count = paths.len(), "files dropped");
                Action::UploadFiles(paths)
            }
            Message::PickFiles => Action::OpenFilePicker,
            Message::FilesPicked(paths) => {
                if paths.is_empty() {
                    return Action::None;
                }
                tracing::info!(count = paths.len(), "files picked");
                Action::UploadFiles(paths)
            }
        }
    }

    /// Render the landing screen.
    pub fn view(&self) -> Element<'_, Message, Theme, Renderer> {
        let hero = column![
            text("Send it. Own it. On Chain").size(56),
            text("Powered by Sui").size(20),
        ]
        .spacing(10)
        .align_x(Alignment::Center);

        let drop_hint = if self.drag_active {
            "Drop files to upload"
        } else {
            "or drag and drop a file"
        };

        let upload_btn = button(text("Upload File")).on_press(Message::PickFiles);

        let drag_active = self.drag_active;
        let drop_zone = container(
            column![upload_btn, text(drop_hint).size(14)]
                .spacing(16)
                .align_x(Alignment::Center),
        )
        .padding(60)
        .width(Length::Fixed(480.0))
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let border_color = if drag_active {
                palette.primary.strong.color
            } else {
                palette.background.strong.color
            };
            container::Style {
                background: drag_active.then(|| palette.background.weak.color.into()),
                border: Border {
                    color: border_color,
                    width: 2.0,
                    radius: 16.0.into(),
                },
                ..container::Style::default()
            }
        });

        let content = column![header::header(), hero, drop_zone]
            .spacing(40)
            .align_x(Alignment::Center)
            .padding(20);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let screen = LandingScreen::default();
        assert!(!screen.drag_active);
    }

    #[test]
    fn drag_enter_and_leave_toggle() {
        let mut screen = LandingScreen::default();
        screen.update(Message::DragEntered);
        assert!(screen.drag_active);
        screen.update(Message::DragLeft);
        assert!(!screen.drag_active);
    }

    #[test]
    fn drop_forwards_files_and_clears_drag() {
        let mut screen = LandingScreen::default();
        screen.update(Message::DragEntered);

        let paths = vec![PathBuf::from("/tmp/photo.png")];
        let action = screen.update(Message::FilesDropped(paths.clone()));
        assert_eq!(action, Action::UploadFiles(paths));
        assert!(!screen.drag_active);
    }

    #[test]
    fn empty_drop_is_ignored() {
        let mut screen = LandingScreen::default();
        screen.update(Message::DragEntered);
        let action = screen.update(Message::FilesDropped(Vec::new()));
        assert_eq!(action, Action::None);
        assert!(!screen.drag_active);
    }

    #[test]
    fn upload_button_opens_picker() {
        let mut screen = LandingScreen::default();
        let action = screen.update(Message::PickFiles);
        assert_eq!(action, Action::OpenFilePicker);
    }

    #[test]
    fn picker_selection_forwards_files() {
        let mut screen = LandingScreen::default();
        let paths = vec![
            PathBuf::from("/tmp/song.mp3"),
            PathBuf::from("/tmp/clip.mp4"),
        ];
        let action = screen.update(Message::FilesPicked(paths.clone()));
        assert_eq!(action, Action::UploadFiles(paths));
    }

    #[test]
    fn cancelled_picker_is_ignored() {
        let mut screen = LandingScreen::default();
        let action = screen.update(Message::FilesPicked(Vec::new()));
        assert_eq!(action, Action::None);
    }
}
