use iced::widget::{
    container,
    text,
};

use iced::{
    alignment,
    theme,
    Color,
    Element,
    Length,
};

use crate::Message;

const ERROR_RED: Color = Color{r: 0.8, g: 0.2, b: 0.2, a: 1.0};

/// Shown when the fetch settles with a failure; the message arrives
/// verbatim from the client
pub fn error_banner(message: &str) -> Element<'static, Message>{
    container(
        text(format!("Error: {message}"))
            .style(theme::Text::Color(ERROR_RED))
            .width(Length::Fill)
            .horizontal_alignment(alignment::Horizontal::Center)
    )
        .height(Length::Fill)
        .center_y()
        .padding(20)
        .into()
}
