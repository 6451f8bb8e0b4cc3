use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use super::form::SubmissionAttempt;
use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Could not reach the booking service: {0}")]
    Network(String),
    #[error("The booking service rejected the request (status {status})")]
    Rejected { status: u16 },
    #[error("Could not encode the booking request: {0}")]
    Encode(String),
}

/// Where booking requests go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingGateway {
    /// Waits `delay_ms` and reports success.
    Simulated { delay_ms: u32 },
    Http { endpoint: String },
}

impl BookingGateway {
    pub fn from_config() -> Self {
        match config::get_booking_endpoint() {
            Some(endpoint) => BookingGateway::Http { endpoint: endpoint.to_string() },
            None => BookingGateway::Simulated { delay_ms: config::SUBMIT_DELAY_MS },
        }
    }

    pub async fn submit(&self, attempt: &SubmissionAttempt) -> Result<(), SubmitError> {
        match self {
            BookingGateway::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                Ok(())
            }
            BookingGateway::Http { endpoint } => {
                let response = Request::post(endpoint)
                    .json(attempt)
                    .map_err(|e| SubmitError::Encode(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| SubmitError::Network(e.to_string()))?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(SubmitError::Rejected { status: response.status() })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn debug_builds_simulate_with_fixed_delay() {
        assert_eq!(BookingGateway::from_config(), BookingGateway::Simulated { delay_ms: 1_500 });
    }

    #[test]
    fn errors_read_as_user_messages() {
        assert_eq!(
            SubmitError::Rejected { status: 503 }.to_string(),
            "The booking service rejected the request (status 503)"
        );
        assert_eq!(
            SubmitError::Network("timed out".into()).to_string(),
            "Could not reach the booking service: timed out"
        );
    }
}
