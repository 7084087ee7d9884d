//! Page chrome shared by every screen: brand header and wallet badge.

use iced::widget::{container, row, text};
use iced::{Alignment, Element, Length};

/// Static branding element shown at the top of each screen.
pub fn header<'a, Message: 'a>() -> Element<'a, Message> {
    let logo = container(text("▶").size(12))
        .padding(6)
        .style(|theme: &iced::Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.strong.color.into()),
                text_color: Some(palette.background.base.color),
                ..container::Style::default()
            }
        });

    let brand = row![logo, text("Sui Send").size(20)]
        .spacing(8)
        .align_y(Alignment::Center);

    container(brand)
        .center_x(Length::Fill)
        .padding([24.0, 0.0])
        .into()
}

/// Wallet chip with a truncated address, shown when the shell supplies one.
pub fn wallet_badge<'a, Message: 'a>(address: &str) -> Element<'a, Message> {
    let chip = container(row![text("Wallet").size(14)].spacing(6))
        .padding([6.0, 12.0])
        .style(|theme: &iced::Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.strong.color.into()),
                text_color: Some(palette.background.base.color),
                ..container::Style::default()
            }
        });

    let badge = row![chip, text(truncate_address(address)).size(14)]
        .spacing(10)
        .align_y(Alignment::Center);

    container(badge).center_x(Length::Fill).into()
}

/// Middle-ellipsis truncation for wallet addresses ("ddkKKj.....uwoo").
pub fn truncate_address(address: &str) -> String {
    const HEAD: usize = 6;
    const TAIL: usize = 4;
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= HEAD + TAIL {
        return address.to_string();
    }
    let head: String = chars[..HEAD].iter().collect();
    let tail: String = chars[chars.len() - TAIL..].iter().collect();
    format!("{head}.....{tail}")
}
