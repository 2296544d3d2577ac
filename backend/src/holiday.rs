use serde::{
    Serialize,
    Deserialize,
};

use chrono::NaiveDate;

use anyhow::Result;

use crate::utils::parse_date;

/// One public holiday as the API reports it
///
/// `date` is the `YYYY-MM-DD` wire string and is unique within a single
/// response; it is kept as a string so re-encoding reproduces it exactly.
/// Unknown fields in the wire object are ignored.
#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: String,
    pub local_name: String,
    pub name: String,
    /// Category tags; a missing key and a JSON `null` both mean none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

impl Holiday {
    /// Returns the holiday's date as a typed calendar date
    ///
    /// # Errors
    /// Returns an error if `date` is not a `YYYY-MM-DD` string
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        parse_date(&self.date)
    }
}
