//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Route query between two countries, taken from the request path.
///
/// Codes are passed through as received; normalization happens in the
/// routing library so every caller shares the same rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteRequest {
    /// Origin country code (cca3).
    pub origin: String,

    /// Destination country code (cca3).
    pub destination: String,
}

impl RouteRequest {
    /// Build a request from raw path segments.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl Validate for RouteRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.origin.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'origin' country code is required and cannot be empty",
                request_id,
            )));
        }

        if self.destination.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'destination' country code is required and cannot be empty",
                request_id,
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_request_valid() {
        let req = RouteRequest::new("CZE", "ita");
        assert!(req.validate("test").is_ok());
    }

    #[test]
    fn test_route_request_unknown_codes_pass_validation() {
        let req = RouteRequest::new("XXX", "not-a-code");
        assert!(req.validate("test").is_ok());
    }

    #[test]
    fn test_route_request_blank_origin() {
        let req = RouteRequest::new("  ", "ITA");
        let err = req.validate("req-1").unwrap_err();
        assert!(err.detail.as_deref().unwrap().contains("'origin'"));
        assert_eq!(err.instance.as_deref(), Some("req-1"));
        assert_eq!(err.status, 400);
    }

    #[test]
    fn test_route_request_blank_destination() {
        let req = RouteRequest::new("CZE", "");
        let err = req.validate("test").unwrap_err();
        assert!(err.detail.as_deref().unwrap().contains("'destination'"));
    }
}
