//! Blocking HTTP client for the concierge backend API.
//!
//! One thin repository over the four backend calls the client consumes:
//! the tier and meal-plan collections, the contact inquiry, and the
//! service booking. Responses are decoded strictly; a malformed record
//! rejects the whole collection.

use crate::domain::{ContactRequest, MembershipTier, NutriMealPlan, ServiceBookingRequest};
use crate::infrastructure::ClientConfig;
use thiserror::Error;

/// Failure of a backend call.
///
/// The UI collapses every variant into one generic error state; the
/// distinction only matters for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),
}

/// Client for the backend REST API.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    api_base: String,
}

impl ApiClient {
    /// Builds a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            http,
            api_base: config.api_base(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Fetches the membership tier collection.
    pub fn list_membership_tiers(&self) -> Result<Vec<MembershipTier>, ApiError> {
        let response = self.http.get(self.url("/membership-tiers")).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json()?)
    }

    /// Fetches the NutriMeal plan collection.
    pub fn list_nutrimeal_plans(&self) -> Result<Vec<NutriMealPlan>, ApiError> {
        let response = self.http.get(self.url("/nutrimeal-plans")).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json()?)
    }

    /// Submits a contact inquiry. Any 2xx response counts as accepted.
    pub fn submit_contact(&self, request: &ContactRequest) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/contact")).json(request).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(())
    }

    /// Submits a service booking. Any 2xx response counts as accepted.
    pub fn submit_booking(&self, request: &ServiceBookingRequest) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/service-request"))
            .json(request)
            .send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
