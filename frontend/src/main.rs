use iced::widget::container;

use iced::{
    executor,
    Application,
    Command,
    Element,
    Length,
    Settings,
    Theme,
};

use backend::{
    fetch_holidays,
    CountryCode,
    FetchError,
    Holiday,
    Year,
};

mod widgets;
use widgets::error_banner;
use widgets::holiday_scroller;
use widgets::loading_indicator;

const YEAR: u16 = 2025;
const COUNTRY_CODE: &str = "IN";
const COUNTRY_NAME: &str = "India";

fn main() {
    HolidayApp::run(Settings::default())
        .expect("Application failed");
}

#[derive(Debug, Clone)]
pub enum Message{
    HolidaysFetched(Result<Vec<Holiday>, FetchError>),
}

/// What the screen is showing; the three cases are exclusive by
/// construction and the last two are terminal
#[derive(Debug, Clone)]
pub enum LoadState{
    Loading,
    Failed(String),
    Loaded(Vec<Holiday>),
}

impl LoadState{
    #[must_use] pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[must_use] pub fn error_message(&self) -> Option<&str> {
        match self{
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use] pub fn holidays(&self) -> &[Holiday] {
        match self{
            LoadState::Loaded(holidays) => holidays,
            _ => &[],
        }
    }
}

struct HolidayApp{
    state: LoadState,
}

impl Application for HolidayApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Self::Message>) {
        let year = Year::try_from(YEAR).expect("Year constant should have four digits");
        let country = CountryCode::try_from(COUNTRY_CODE).expect("Country constant should be two uppercase letters");

        (
            Self{state: LoadState::Loading},
            // The one fetch this screen ever issues; the runtime hands the
            // settled result back to update() as a message
            Command::perform(fetch_holidays(year, country), Message::HolidaysFetched),
        )
    }

    fn title(&self) -> String {
        format!("{COUNTRY_NAME} Holidays {YEAR}")
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message{
            Message::HolidaysFetched(Ok(holidays)) => self.state = LoadState::Loaded(holidays),
            Message::HolidaysFetched(Err(error))   => self.state = LoadState::Failed(error.to_string()),
        }

        Command::none()
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let content: Element<Message> = match &self.state{
            LoadState::Loading => loading_indicator(),
            LoadState::Failed(message) => error_banner(message),
            LoadState::Loaded(holidays) => holiday_scroller(holidays),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
