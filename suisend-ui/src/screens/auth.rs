//! Auth screen: sign in with an email address or simulated OAuth.
//!
//! Credentials are forwarded to the caller; no authentication backend lives
//! here. The wallet button returns the user to the landing screen.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Renderer, Theme};

use crate::header;

/// Messages emitted by the auth screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Email text input changed.
    EmailChanged(String),
    /// User clicked "Continue with Google".
    ContinueWithGoogle,
    /// User submitted the email form.
    SubmitEmail,
    /// User clicked "Connect your wallet".
    ConnectWallet,
}

/// Result of processing an auth screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No external action needed.
    None,
    /// Forward the credential to the caller. `email` is `None` for the
    /// simulated OAuth path.
    Authenticate { email: Option<String> },
    /// Return to the landing screen.
    ReturnToLanding,
}

/// State of the auth screen.
#[derive(Debug, Clone, Default)]
pub struct AuthScreen {
    /// Current email input text.
    pub email: String,
}

impl AuthScreen {
    /// Handle a message and return any external action to perform.
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::EmailChanged(email) => {
                self.email = email;
                Action::None
            }
            Message::ContinueWithGoogle => Action::Authenticate { email: None },
            Message::SubmitEmail => {
                let email = self.email.trim();
                if email.is_empty() {
                    return Action::None;
                }
                Action::Authenticate {
                    email: Some(email.to_string()),
                }
            }
            Message::ConnectWallet => Action::ReturnToLanding,
        }
    }

    /// Render the auth screen.
    pub fn view(&self) -> Element<'_, Message, Theme, Renderer> {
        let title = text("It take 5 seconds to create an account").size(26);

        let google_btn = button(text("Continue with Google"))
            .on_press(Message::ContinueWithGoogle)
            .padding(14)
            .width(Length::Fixed(360.0));

        let divider = text("— OR —").size(14);

        let email_input = text_input("Enter your email", &self.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::SubmitEmail)
            .padding(10)
            .width(Length::Fixed(250.0));
        let email_btn = button(text("Continue")).on_press(Message::SubmitEmail);
        let email_row = row![email_input, email_btn]
            .spacing(10)
            .align_y(Alignment::Center);

        let wallet_btn = button(text("Connect your wallet"))
            .on_press(Message::ConnectWallet)
            .padding(14)
            .width(Length::Fixed(360.0));

        let footer = column![
            text("By using this website, you agree to our Terms of Use and our Privacy Policy.")
                .size(12),
            text("Need help? Reach out to us at support@suiquest.com").size(12),
        ]
        .spacing(4)
        .align_x(Alignment::Center);

        let content = column![
            header::header(),
            title,
            google_btn,
            divider,
            email_row,
            wallet_btn,
            footer,
        ]
        .spacing(20)
        .align_x(Alignment::Center)
        .padding(40);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
