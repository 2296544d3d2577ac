use thiserror::Error;

use crate::{
    CountryCode,
    Holiday,
    Year,
};

/// Host serving the public-holiday API
pub const DEFAULT_ENDPOINT: &str = "https://date.nager.at";

/// Why a fetch settled without holidays
///
/// The UI renders the `Display` text verbatim and never matches on the
/// variant, so nothing downstream depends on which cause occurred.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError{
    /// The request produced no response (DNS, refused connection, timeout)
    /// or the response body could not be read
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body was not a well-formed array of holiday records
    #[error("decoding error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError{
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for FetchError{
    fn from(error: serde_json::Error) -> Self {
        FetchError::Decode(error.to_string())
    }
}

/// Builds the URL of the public-holiday listing for one year and country
#[must_use] pub fn public_holidays_url(base_url: &str, year: Year, country: CountryCode) -> String {
    format!("{base_url}/api/v3/PublicHolidays/{year}/{country}")
}

/// Fetches the public holidays for one year and country
///
/// Issues a single GET with no custom headers and no retry; every call is
/// an independent request with no shared state.
///
/// # Errors
/// Returns a `FetchError` when the request cannot be sent, the server
/// answers with a non-2xx status, or the body does not decode
pub async fn fetch_holidays(year: Year, country: CountryCode) -> Result<Vec<Holiday>, FetchError> {
    fetch_holidays_from(DEFAULT_ENDPOINT, year, country).await
}

/// Same as [`fetch_holidays`] against an explicit host, so tests can point
/// the client at a local server
///
/// # Errors
/// As [`fetch_holidays`]
pub async fn fetch_holidays_from(base_url: &str, year: Year, country: CountryCode) -> Result<Vec<Holiday>, FetchError> {
    let url = public_holidays_url(base_url, year, country);

    let response = reqwest::get(url).await?;

    let status = response.status();
    if !status.is_success(){
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;

    decode_holidays(&body)
}

/// Decodes a JSON array of holiday records
///
/// Strict on the required string fields of each record, lenient on
/// `types`; the output order is exactly the array order.
///
/// # Errors
/// Returns `FetchError::Decode` when the body is not such an array
pub fn decode_holidays(body: &str) -> Result<Vec<Holiday>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests{
    use tokio::io::{
        AsyncReadExt,
        AsyncWriteExt,
    };
    use tokio::net::TcpListener;

    use super::*;

    fn year(value: u16) -> Year {
        Year::try_from(value).unwrap()
    }

    fn country(code: &str) -> CountryCode {
        code.parse().unwrap()
    }

    /// Serves exactly one connection with a canned response, then closes
    async fn spawn_one_shot_server(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len(),
        );

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            // Drain the request headers before answering
            let mut request = [0u8; 1024];
            let mut read = 0;
            while !request[..read].windows(4).any(|window| window == b"\r\n\r\n"){
                let n = stream.read(&mut request[read..]).await.unwrap();
                if n == 0 {
                    break;
                }
                read += n;
            }

            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{address}")
    }

    #[test]
    fn test_url_substitution(){
        assert_eq!(
            public_holidays_url(DEFAULT_ENDPOINT, year(2025), country("IN")),
            "https://date.nager.at/api/v3/PublicHolidays/2025/IN",
        );
    }

    #[test]
    fn test_decode_preserves_order(){
        let body = r#"[
            {"date":"2025-01-26","localName":"गणतंत्र दिवस","name":"Republic Day","types":["Public"]},
            {"date":"2025-08-15","localName":"स्वतंत्रता दिवस","name":"Independence Day","types":["Public"]},
            {"date":"2025-10-02","localName":"गांधी जयंती","name":"Gandhi Jayanti","types":["Public"]}
        ]"#;

        let holidays = decode_holidays(body).unwrap();

        assert_eq!(
            holidays.iter().map(|h| h.name.as_str()).collect::<Vec<_>>(),
            ["Republic Day", "Independence Day", "Gandhi Jayanti"],
        );
    }

    #[tokio::test]
    async fn test_fetch_decodes_holiday_array(){
        let base = spawn_one_shot_server(
            "HTTP/1.1 200 OK",
            r#"[{"date":"2025-01-26","localName":"गणतंत्र दिवस","name":"Republic Day","types":["Public"]}]"#,
        ).await;

        let holidays = fetch_holidays_from(&base, year(2025), country("IN")).await.unwrap();

        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].date, "2025-01-26");
        assert_eq!(holidays[0].local_name, "गणतंत्र दिवस");
        assert_eq!(holidays[0].name, "Republic Day");
        assert_eq!(holidays[0].types, Some(vec!["Public".to_string()]));
    }

    #[tokio::test]
    async fn test_fetch_empty_array_is_success(){
        let base = spawn_one_shot_server("HTTP/1.1 200 OK", "[]").await;

        let holidays = fetch_holidays_from(&base, year(2025), country("IN")).await.unwrap();

        assert!(holidays.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reports_http_status(){
        let base = spawn_one_shot_server("HTTP/1.1 500 Internal Server Error", "").await;

        let error = fetch_holidays_from(&base, year(2025), country("IN")).await.unwrap_err();

        assert_eq!(error, FetchError::Status(500));
        assert!(!error.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reports_unreachable_server(){
        // Bind to grab a free port, then drop the listener so connecting
        // to it is refused
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let error = fetch_holidays_from(&base, year(2025), country("IN")).await.unwrap_err();

        assert!(matches!(error, FetchError::Transport(_)));
        assert!(!error.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reports_malformed_json(){
        let base = spawn_one_shot_server("HTTP/1.1 200 OK", "{not json").await;

        let error = fetch_holidays_from(&base, year(2025), country("IN")).await.unwrap_err();

        assert!(matches!(error, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_reports_missing_required_field(){
        let base = spawn_one_shot_server(
            "HTTP/1.1 200 OK",
            r#"[{"date":"2025-01-26","localName":"गणतंत्र दिवस"}]"#,
        ).await;

        let error = fetch_holidays_from(&base, year(2025), country("IN")).await.unwrap_err();

        assert!(matches!(error, FetchError::Decode(_)));
        assert!(error.to_string().contains("name"));
    }
}
