pub mod holiday_scroller;
pub use holiday_scroller::holiday_scroller;

pub mod loading_indicator;
pub use loading_indicator::loading_indicator;

pub mod error_banner;
pub use error_banner::error_banner;
