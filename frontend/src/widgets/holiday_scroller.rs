use iced::widget::{
    column,
    scrollable,
    text,
    Column,
};

use iced::{
    theme,
    Color,
    Element,
    Length,
};

use backend::Holiday;

use crate::Message;

const NAME_SIZE: u16 = 20;
const CAPTION_SIZE: u16 = 12;

const DATE_GRAY: Color = Color{r: 0.5, g: 0.5, b: 0.5, a: 1.0};

/// One row per holiday, in exactly the order the server sent them
pub fn holiday_scroller(holidays: &[Holiday]) -> Element<'static, Message>{
    scrollable(
        Column::with_children(
            holidays
                .iter()
                .map(holiday_row)
                .collect()
        )
            .width(Length::Fill)
            .spacing(12)
            .padding([40, 20, 40, 20])
    )
        .width(Length::Fill)
        .into()
}

fn holiday_row(holiday: &Holiday) -> Element<'static, Message>{
    let mut lines = column![
        text(&holiday.name).size(NAME_SIZE),
        text(&holiday.date).style(theme::Text::Color(DATE_GRAY)),
    ];

    if let Some(types) = holiday.types.as_deref().filter(|types| !types.is_empty()){
        lines = lines.push(
            text(format!("Type: {}", types.join(", ")))
                .size(CAPTION_SIZE)
        );
    }

    lines.into()
}
