use serde::Deserialize;

/// Base URL of the public endoflife.date API.
pub const API_BASE: &str = "https://endoflife.date/api";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("No data available for {0} {1}.")]
    NoData(String, String),
    #[error("Failed to retrieve data for {0} {1} (status: {2}).")]
    RequestFailed(String, String, u16),
    #[error("Failed to retrieve data for {0} {1}: {2}")]
    Transport(String, String, String),
    #[error("Failed to parse data for {0} {1}: {2}")]
    InvalidData(String, String, String),
}

/// A single field of the endoflife.date cycle response that is documented as
/// "date or boolean". `eol` is `false` while no end-of-life date has been
/// scheduled; `extendedSupport` follows the same convention.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DateOrFlag {
    Date(String),
    Flag(bool),
}

/// The subset of the endoflife.date cycle response this tool consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct EolRecord {
    pub eol: DateOrFlag,
    #[serde(rename = "extendedSupport")]
    pub extended_support: Option<DateOrFlag>,
}

fn release_url(distro: &str, release: &str) -> String {
    format!("{}/{}/{}.json", API_BASE, distro, release)
}

fn classify_status(
    status: reqwest::StatusCode,
    distro: &str,
    release: &str,
) -> Result<(), FetchError> {
    match status {
        reqwest::StatusCode::OK => Ok(()),
        reqwest::StatusCode::NOT_FOUND => {
            Err(FetchError::NoData(distro.to_string(), release.to_string()))
        }
        status => Err(FetchError::RequestFailed(
            distro.to_string(),
            release.to_string(),
            status.as_u16(),
        )),
    }
}

/// Fetches the cycle record for a distro release from the endoflife.date API.
///
/// # Arguments
///
/// * `distro` - The distro identifier, used verbatim as a URL path segment (e.g. "ubuntu").
/// * `release` - The release identifier, used verbatim as a URL path segment (e.g. "22.04").
///
/// # Returns
///
/// * `Ok(EolRecord)` - The parsed cycle record on HTTP 200.
/// * `Err(FetchError::NoData)` - On HTTP 404, i.e. the API knows no such distro/release.
/// * `Err(FetchError)` - On any other status, transport failure, or undecodable body.
pub async fn fetch_release(distro: &str, release: &str) -> Result<EolRecord, FetchError> {
    let url = release_url(distro, release);

    let response = reqwest::get(&url)
        .await
        .map_err(|e| FetchError::Transport(distro.to_string(), release.to_string(), e.to_string()))?;

    classify_status(response.status(), distro, release)?;

    response
        .json::<EolRecord>()
        .await
        .map_err(|e| FetchError::InvalidData(distro.to_string(), release.to_string(), e.to_string()))
}
