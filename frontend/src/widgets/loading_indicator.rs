use iced::widget::{
    column,
    container,
    text,
};

use iced::{
    Alignment,
    Element,
    Length,
};

use iced_aw::Spinner;

use crate::Message;

/// Shown from launch until the fetch settles
pub fn loading_indicator() -> Element<'static, Message>{
    container(
        column![
            Spinner::new(),
            text("Loading holidays..."),
        ]
            .align_items(Alignment::Center)
            .spacing(8)
    )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}
