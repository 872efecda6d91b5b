//! Simulated one-time-code sign-in
//!
//! There is no authentication backend: the flow collects a name and phone,
//! waits a fixed latency standing in for a network round trip, and accepts a
//! single configured demo code. A verified [`UserIdentity`] is handed back to
//! the caller, who passes it to [`SessionStore::login`].
//!
//! [`SessionStore::login`]: crate::session::SessionStore::login

use crate::core::AuthError;
use crate::flows::cancellable_delay;
use shared::models::UserIdentity;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Where the diner is in the sign-in flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OtpStep {
    /// Entering name and phone
    #[default]
    Details,
    /// Entering the code
    Verify,
}

/// Two-step sign-in state
#[derive(Debug, Clone)]
pub struct OtpFlow {
    step: OtpStep,
    name: String,
    phone: String,
    expected_code: String,
    latency: Duration,
}

impl OtpFlow {
    pub fn new(expected_code: impl Into<String>, latency: Duration) -> Self {
        Self {
            step: OtpStep::Details,
            name: String::new(),
            phone: String::new(),
            expected_code: expected_code.into(),
            latency,
        }
    }

    pub fn step(&self) -> OtpStep {
        self.step
    }

    /// Submit name and phone and "send" the code
    ///
    /// Empty details are rejected without waiting.
    pub async fn send_code(
        &mut self,
        name: &str,
        phone: &str,
        cancel: &CancellationToken,
    ) -> Result<(), AuthError> {
        let (name, phone) = (name.trim(), phone.trim());
        if name.is_empty() || phone.is_empty() {
            return Err(AuthError::MissingDetails);
        }

        cancellable_delay(self.latency, cancel)
            .await
            .map_err(|_| AuthError::Cancelled)?;

        self.name = name.to_string();
        self.phone = phone.to_string();
        self.step = OtpStep::Verify;
        debug!(phone = %self.phone, "Verification code sent");
        Ok(())
    }

    /// Check the code; on success returns the identity to log in with
    ///
    /// A wrong code keeps the flow on the verification step so the diner can
    /// retry or go back.
    pub async fn verify(
        &mut self,
        code: &str,
        cancel: &CancellationToken,
    ) -> Result<UserIdentity, AuthError> {
        if self.step != OtpStep::Verify {
            return Err(AuthError::NotAwaitingCode);
        }

        cancellable_delay(self.latency, cancel)
            .await
            .map_err(|_| AuthError::Cancelled)?;

        if code.trim() != self.expected_code {
            debug!("Rejected verification code");
            return Err(AuthError::InvalidCode {
                hint: self.expected_code.clone(),
            });
        }

        info!(name = %self.name, "Phone verified");
        Ok(UserIdentity::new(self.name.clone(), self.phone.clone()))
    }

    /// Return to editing name and phone
    pub fn back(&mut self) {
        self.step = OtpStep::Details;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> OtpFlow {
        OtpFlow::new("1234", Duration::from_millis(1000))
    }

    #[tokio::test(start_paused = true)]
    async fn test_happy_path() {
        let cancel = CancellationToken::new();
        let mut flow = flow();

        flow.send_code(" Alice ", "555-0100", &cancel).await.unwrap();
        assert_eq!(flow.step(), OtpStep::Verify);

        let identity = flow.verify("1234", &cancel).await.unwrap();
        assert_eq!(identity, UserIdentity::new("Alice", "555-0100"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_details() {
        let cancel = CancellationToken::new();
        let mut flow = flow();

        assert_eq!(
            flow.send_code("", "555", &cancel).await,
            Err(AuthError::MissingDetails)
        );
        assert_eq!(
            flow.send_code("Bob", "   ", &cancel).await,
            Err(AuthError::MissingDetails)
        );
        assert_eq!(flow.step(), OtpStep::Details);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_code_stays_on_verify() {
        let cancel = CancellationToken::new();
        let mut flow = flow();
        flow.send_code("Alice", "555", &cancel).await.unwrap();

        let err = flow.verify("0000", &cancel).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCode { hint: "1234".to_string() });
        assert_eq!(flow.step(), OtpStep::Verify);

        // Retry succeeds
        assert!(flow.verify("1234", &cancel).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_before_send_and_back() {
        let cancel = CancellationToken::new();
        let mut flow = flow();
        assert_eq!(
            flow.verify("1234", &cancel).await,
            Err(AuthError::NotAwaitingCode)
        );

        flow.send_code("Alice", "555", &cancel).await.unwrap();
        flow.back();
        assert_eq!(flow.step(), OtpStep::Details);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_send() {
        let cancel = CancellationToken::new();
        let mut flow = flow();
        cancel.cancel();

        assert_eq!(
            flow.send_code("Alice", "555", &cancel).await,
            Err(AuthError::Cancelled)
        );
        assert_eq!(flow.step(), OtpStep::Details);
    }
}
