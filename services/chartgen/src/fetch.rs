//! Dataset retrieval: one HTTP GET per run, or a local file for offline use.
//!
//! No retries and no partial rendering: any failure here aborts the run.

use std::path::Path;
use std::time::Duration;

use heatmap_common::Dataset;
use reqwest::Client;
use thiserror::Error;
use tracing::instrument;

/// Errors while loading the dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dataset endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Dataset is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Invalid(#[from] heatmap_common::HeatmapError),
}

/// Build the HTTP client used for the single dataset fetch.
pub fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(30))
        .build()?;
    Ok(client)
}

/// Fetch and validate the dataset.
#[instrument(skip(client))]
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<Dataset, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.text().await?;
    let dataset = Dataset::from_json(&body)?;
    dataset.validate()?;
    Ok(dataset)
}

/// Read and validate a dataset from a local JSON file.
pub fn read_dataset(path: &Path) -> Result<Dataset, FetchError> {
    let body = std::fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let dataset = Dataset::from_json(&body)?;
    dataset.validate()?;
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_read_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"baseTemperature":8.0,"monthlyVariance":[{{"year":1990,"month":1,"variance":-0.5}}]}}"#
        )
        .unwrap();

        let dataset = read_dataset(file.path()).unwrap();
        assert_eq!(dataset.record_count(), 1);
        assert_eq!(dataset.base_temperature, 8.0);
    }

    #[test]
    fn test_read_dataset_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            read_dataset(file.path()),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_read_dataset_rejects_invalid_month() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"baseTemperature":8.0,"monthlyVariance":[{{"year":1990,"month":0,"variance":0.5}}]}}"#
        )
        .unwrap();
        assert!(matches!(
            read_dataset(file.path()),
            Err(FetchError::Invalid(_))
        ));
    }

    #[test]
    fn test_read_dataset_missing_file() {
        let result = read_dataset(Path::new("/nonexistent/global-temperature.json"));
        assert!(matches!(result, Err(FetchError::Io { .. })));
    }
}
