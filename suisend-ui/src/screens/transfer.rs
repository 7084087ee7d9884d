//! Transfer screen: configure recipient, access control, and expiry for the
//! captured files, then hand the draft to the caller on submit.

use iced::widget::{button, column, container, pick_list, radio, row, text, text_input};
use iced::{Alignment, Element, Length, Renderer, Theme};

use crate::header;
use crate::types::{ExpiryDuration, TransferConfig, TransferFile, TransferType};

/// Messages emitted by the transfer screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Access type selected from the pick list.
    TransferTypeSelected(TransferType),
    /// Encryption switched on or off.
    EncryptionChanged(bool),
    /// Recipient text input changed.
    RecipientChanged(String),
    /// Title text input changed.
    TitleChanged(String),
    /// Message text input changed.
    MessageChanged(String),
    /// Expiry duration selected from the pick list.
    DurationSelected(ExpiryDuration),
    /// User clicked "Add more files".
    AddFiles,
    /// User submitted the form.
    Submit,
}

/// Result of processing a transfer screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No external action needed.
    None,
    /// Open the native file picker.
    AddFiles,
    /// Hand the completed draft to the transfer pipeline.
    Submit(TransferConfig),
}

/// Transfer screen state.
#[derive(Debug, Clone, Default)]
pub struct TransferScreen {
    /// Files included in the transfer, supplied by the caller.
    pub files: Vec<TransferFile>,
    /// Draft configuration, accumulated field-by-field.
    pub config: TransferConfig,
    /// Wallet address shown in the page chrome (None hides the badge).
    pub wallet_address: Option<String>,
    /// Required-field error to display.
    pub error: Option<String>,
}

impl TransferScreen {
    /// Register a newly added file. Duplicate ids are ignored.
    pub fn file_added(&mut self, file: TransferFile) {
        if !self.files.iter().any(|f| f.id == file.id) {
            self.files.push(file);
        }
    }

    /// Handle a message and return any external action.
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::TransferTypeSelected(transfer_type) => {
                self.config.transfer_type = transfer_type;
                Action::None
            }
            Message::EncryptionChanged(enabled) => {
                self.config.encryption_enabled = enabled;
                Action::None
            }
            Message::RecipientChanged(recipient) => {
                self.config.recipient = recipient;
                self.error = None;
                Action::None
            }
            Message::TitleChanged(title) => {
                self.config.title = title;
                self.error = None;
                Action::None
            }
            Message::MessageChanged(message) => {
                self.config.message = message;
                Action::None
            }
            Message::DurationSelected(duration) => {
                self.config.duration = duration;
                Action::None
            }
            Message::AddFiles => Action::AddFiles,
            Message::Submit => {
                if self.config.recipient.trim().is_empty() {
                    self.error = Some("Recipient is required".to_string());
                    return Action::None;
                }
                if self.config.title.trim().is_empty() {
                    self.error = Some("Title is required".to_string());
                    return Action::None;
                }
                self.error = None;
                tracing::info!(
                    recipient = %self.config.recipient,
                    title = %self.config.title,
                    access = %self.config.transfer_type,
                    duration = %self.config.duration,
                    encrypted = self.config.encryption_enabled,
                    file_count = self.files.len(),
                    "transfer configured"
                );
                Action::Submit(self.config.clone())
            }
        }
    }

    /// Render the transfer screen.
    pub fn view(&self) -> Element<'_, Message, Theme, Renderer> {
        let title = text("Setup Encryption").size(32);
        let subtitle = text("Powered by Sui").size(16);

        // Uploaded files card
        let mut file_rows = column![].spacing(8);
        for file in &self.files {
            file_rows = file_rows.push(
                row![
                    text(file.kind.glyph()).size(16),
                    text(file.name.as_str()).size(14),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            );
        }
        if self.files.is_empty() {
            file_rows = file_rows.push(text("No files added yet").size(13));
        }
        let add_btn = button(text("+ Add more files"))
            .on_press(Message::AddFiles)
            .style(button::text);
        let files_card = container(
            column![section_badge("Uploaded file"), file_rows, add_btn].spacing(12),
        )
        .padding(20)
        .width(Length::Fixed(560.0))
        .style(container::bordered_box);

        // Access control card
        let access_label = text("Select your access type (e.g Wallet, NFT, SBT, Email)").size(14);
        let access_picker = pick_list(
            TransferType::ALL,
            Some(self.config.transfer_type),
            Message::TransferTypeSelected,
        )
        .width(Length::Fixed(250.0));

        let encryption_label = text("Encryption").size(14);
        let encryption_row = row![
            radio(
                "Off",
                false,
                Some(self.config.encryption_enabled),
                Message::EncryptionChanged
            ),
            radio(
                "On",
                true,
                Some(self.config.encryption_enabled),
                Message::EncryptionChanged
            ),
        ]
        .spacing(15);

        let recipients_entered = usize::from(!self.config.recipient.trim().is_empty());
        let send_to_row = row![
            text("Send to").size(14),
            iced::widget::horizontal_space(),
            text(format!("{recipients_entered} of 5")).size(12),
        ]
        .width(Length::Fixed(250.0))
        .align_y(Alignment::Center);
        let recipient_input = text_input("Enter email address", &self.config.recipient)
            .on_input(Message::RecipientChanged)
            .padding(8)
            .width(Length::Fixed(250.0));

        let title_label = text("Title").size(14);
        let title_input = text_input("Give your transfer a title", &self.config.title)
            .on_input(Message::TitleChanged)
            .padding(8)
            .width(Length::Fixed(250.0));

        let message_label = text("Message").size(14);
        let message_input = text_input("Optional", &self.config.message)
            .on_input(Message::MessageChanged)
            .padding(8)
            .width(Length::Fixed(250.0));

        let duration_picker = pick_list(
            ExpiryDuration::ALL,
            Some(self.config.duration),
            Message::DurationSelected,
        )
        .width(Length::Fixed(250.0));

        let send_btn = button(text("Send ↗"))
            .on_press(Message::Submit)
            .padding([12.0, 32.0]);

        let error_display: Element<'_, Message, Theme, Renderer> = if let Some(err) = &self.error {
            text(err.as_str())
                .size(13)
                .color(iced::Color::from_rgb(1.0, 0.3, 0.3))
                .into()
        } else {
            text("").into()
        };

        let access_card = container(
            column![
                section_badge("Access Control"),
                access_label,
                access_picker,
                encryption_label,
                encryption_row,
                send_to_row,
                recipient_input,
                title_label,
                title_input,
                message_label,
                message_input,
                duration_picker,
                send_btn,
                error_display,
            ]
            .spacing(10),
        )
        .padding(20)
        .width(Length::Fixed(560.0))
        .style(container::bordered_box);

        let mut content = column![header::header()].spacing(16).align_x(Alignment::Center);
        if let Some(address) = &self.wallet_address {
            content = content.push(header::wallet_badge(address));
        }
        content = content
            .push(title)
            .push(subtitle)
            .push(files_card)
            .push(access_card);

        container(content.padding(20))
            .center_x(Length::Fill)
            .into()
    }
}

/// Small pill label that heads each form card.
fn section_badge<'a>(label: &'a str) -> Element<'a, Message, Theme, Renderer> {
    container(text(label).size(13))
        .padding([5.0, 10.0])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.primary.weak.color.into()),
                text_color: Some(palette.primary.strong.color),
                ..container::Style::default()
            }
        })
        .into()
}
