//! USCCB readings provider implementation using reqwest.

use std::time::Duration;

use chrono::NaiveDate;
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, MassType};
use crate::ports::ReadingsProvider;

const DEFAULT_BASE_URL: &str = "https://bible.usccb.org/bible/readings/";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP transport for the USCCB daily-readings endpoint.
///
/// Readings live under `{base}/{MMDDYY}{type-suffix}.cfm`. Availability of a
/// mass type is probed with HEAD; the document body is the raw reading text
/// handed to the parser.
#[derive(Debug, Clone)]
pub struct UsccbHttpProvider {
    base_url: Url,
    client: Client,
}

impl UsccbHttpProvider {
    /// Create a provider against the default USCCB endpoint.
    pub fn new() -> Result<Self, AppError> {
        let base_url = Url::parse(DEFAULT_BASE_URL).map_err(|e| AppError::Provider {
            message: format!("Invalid base URL: {}", e),
            status: None,
        })?;
        Self::with_base_url(base_url)
    }

    /// Create a provider against a custom endpoint (tests, mirrors).
    pub fn with_base_url(base_url: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Provider {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { base_url, client })
    }

    fn readings_url(&self, date: NaiveDate, mass_type: MassType) -> Result<Url, AppError> {
        let path = format!("{}{}.cfm", date.format("%m%d%y"), mass_type.url_suffix());
        self.base_url.join(&path).map_err(|e| AppError::Provider {
            message: format!("Invalid readings URL '{}': {}", path, e),
            status: None,
        })
    }
}

impl ReadingsProvider for UsccbHttpProvider {
    fn mass_types(&self, date: NaiveDate) -> Result<Vec<MassType>, AppError> {
        let mut available = Vec::new();

        for mass_type in MassType::ALL {
            let url = self.readings_url(date, mass_type)?;
            let response = self.client.head(url.clone()).send().map_err(|e| {
                AppError::Provider { message: format!("HTTP request failed: {}", e), status: None }
            })?;

            debug!("probe {}: {}", url, response.status());
            if response.status().is_success() {
                available.push(mass_type);
            }
        }

        Ok(available)
    }

    fn reading_text(&self, date: NaiveDate, mass_type: MassType) -> Result<String, AppError> {
        let url = self.readings_url(date, mass_type)?;
        let response = self.client.get(url.clone()).send().map_err(|e| AppError::Provider {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        debug!("fetch {}: {}", url, status);

        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(AppError::ReadingsNotFound { date });
        }

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = if body.trim().is_empty() {
                "Readings request failed".to_string()
            } else {
                body
            };
            return Err(AppError::Provider { message, status: Some(status.as_u16()) });
        }

        response.text().map_err(|e| AppError::Provider {
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })
    }
}
