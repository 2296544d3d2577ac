pub mod holiday;
pub use holiday::Holiday;

pub mod request;
pub use request::{
    CountryCode,
    Year,
};

pub mod client;
pub use client::{
    fetch_holidays,
    FetchError,
};

pub mod utils;
