//! HTTP Geocode Client
//!
//! Looks up postal codes with `GET {base_url}/{country}/{postal_code}` and
//! reads the first place of the response.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, trace};

use crate::client::{GeocodeClient, LookupOutcome};
use crate::config::Config;
use crate::error::{GeocodeError, LookupFailure, Result};
use crate::geo::{Coordinate, PostalCode};
use crate::models::PlacesResponse;

/// reqwest-backed geocode client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpGeocodeClient {
    client: Client,
    base_url: Url,
    country: String,
}

impl HttpGeocodeClient {
    /// Creates a client for `base_url` and the given country path segment.
    ///
    /// Fails only on configuration problems: an unparseable base URL, a
    /// zero timeout, or a TLS backend that cannot be initialized.
    pub fn new(
        base_url: impl AsRef<str>,
        country: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        if timeout.is_zero() {
            return Err(GeocodeError::InvalidConfig(
                "request timeout must be greater than 0".to_string(),
            ));
        }

        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| GeocodeError::InvalidConfig(format!("invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GeocodeError::InvalidConfig(format!(
                "base URL cannot carry a path: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeocodeError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            country: country.into(),
        })
    }

    /// Creates a client from the service settings of a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, config.country.clone(), config.timeout())
    }

    /// Lookup URL for a postal code; path segments are percent-encoded.
    pub fn lookup_url(&self, postal_code: &PostalCode) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&self.country)
                .push(postal_code.as_str());
        }
        url
    }

    async fn fetch(
        &self,
        postal_code: &PostalCode,
    ) -> std::result::Result<Option<Coordinate>, LookupFailure> {
        let url = self.lookup_url(postal_code);
        trace!(%url, "Geocode request");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Unknown postal codes are answered with 404 and an empty object
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LookupFailure::Status(status.as_u16()));
        }

        let body: PlacesResponse = response.json().await?;
        Ok(body.first_coordinate())
    }
}

#[async_trait]
impl GeocodeClient for HttpGeocodeClient {
    async fn resolve(&self, postal_code: &PostalCode) -> LookupOutcome {
        match self.fetch(postal_code).await {
            Ok(Some(coordinate)) => LookupOutcome::Found(coordinate),
            Ok(None) => {
                debug!(postal_code = %postal_code, "No place found for postal code");
                LookupOutcome::NotFound
            }
            Err(failure) => LookupOutcome::Failed(failure),
        }
    }
}
