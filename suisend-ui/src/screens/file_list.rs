//! File list screen: review added files before configuring the transfer.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Renderer, Theme};

use crate::header;
use crate::types::TransferFile;

/// Messages emitted by the file list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// User clicked "Add more files".
    AddMoreFiles,
    /// User clicked "Start Upload".
    StartUpload,
}

/// Result of processing a file list message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No external action needed.
    None,
    /// Open the native file picker.
    AddMoreFiles,
    /// Proceed to the transfer configuration form.
    StartUpload,
}

/// File list screen state.
#[derive(Debug, Clone, Default)]
pub struct FileListScreen {
    /// Files supplied by the caller.
    pub files: Vec<TransferFile>,
    /// Wallet address shown in the page chrome (None hides the badge).
    pub wallet_address: Option<String>,
}

impl FileListScreen {
    /// Create with a wallet address for the page chrome.
    pub fn with_wallet_address(mut self, address: Option<String>) -> Self {
        self.wallet_address = address;
        self
    }

    /// Register a newly added file. Duplicate ids are ignored.
    pub fn file_added(&mut self, file: TransferFile) {
        if !self.files.iter().any(|f| f.id == file.id) {
            tracing::info!(file_id = %file.id, file_name = %file.name, "file added");
            self.files.push(file);
        }
    }

    /// Handle a message and return any external action.
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::AddMoreFiles => Action::AddMoreFiles,
            Message::StartUpload => Action::StartUpload,
        }
    }

    /// Render the file list screen.
    pub fn view(&self) -> Element<'_, Message, Theme, Renderer> {
        let badge = container(text("Added Files").size(14)).padding([6.0, 12.0]).style(
            |theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(palette.primary.weak.color.into()),
                    text_color: Some(palette.primary.strong.color),
                    ..container::Style::default()
                }
            },
        );

        let mut file_rows = column![].spacing(10);
        for file in &self.files {
            let checkbox_slot = container(text(""))
                .width(Length::Fixed(18.0))
                .height(Length::Fixed(18.0))
                .style(container::bordered_box);
            let entry = container(
                row![
                    text("•").size(18),
                    text(file.name.as_str()).size(15),
                    iced::widget::horizontal_space(),
                    checkbox_slot,
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            )
            .padding(12)
            .width(Length::Fixed(520.0))
            .style(container::bordered_box);
            file_rows = file_rows.push(entry);
        }

        if self.files.is_empty() {
            file_rows = file_rows.push(text("No files added yet").size(13));
        }

        let add_btn = button(text("+ Add more files"))
            .on_press(Message::AddMoreFiles)
            .style(button::text);

        let upload_btn = button(text("Start Upload"))
            .on_press(Message::StartUpload)
            .padding([12.0, 32.0]);

        let mut content = column![header::header()].spacing(20).align_x(Alignment::Center);
        if let Some(address) = &self.wallet_address {
            content = content.push(header::wallet_badge(address));
        }
        content = content
            .push(badge)
            .push(scrollable(file_rows).height(Length::Shrink))
            .push(add_btn)
            .push(upload_btn);

        container(content.padding(20))
            .center_x(Length::Fill)
            .into()
    }
}
