//! FIPS 140-3 / CMVP compliance framework.
//!
//! Provides a self-test infrastructure for FIPS module validation:
//! - **State machine**: PreOperational → SelfTesting → Operational / Error
//! - **KAT**: Known Answer Tests for the approved digest algorithms
//!
//! All functionality is gated behind `#[cfg(feature = "fips")]`.

mod kat;

use shs_types::CmvpError;

/// FIPS module operational states (FIPS 140-3 §10.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FipsState {
    /// Initial state before self-tests have been run.
    PreOperational,
    /// Self-tests are currently executing.
    SelfTesting,
    /// All self-tests passed; module is ready for use.
    Operational,
    /// A self-test failed; module must not be used.
    Error,
}

/// FIPS module that manages self-test state and execution.
///
/// # Usage
///
/// ```no_run
/// use shs_crypto::fips::FipsModule;
///
/// let mut module = FipsModule::new();
/// module.run_self_tests().expect("FIPS self-tests failed");
/// assert!(module.is_operational());
/// ```
pub struct FipsModule {
    state: FipsState,
}

impl FipsModule {
    /// Create a new FIPS module in `PreOperational` state.
    pub fn new() -> Self {
        FipsModule {
            state: FipsState::PreOperational,
        }
    }

    /// Return the current module state.
    pub fn state(&self) -> FipsState {
        self.state
    }

    /// Return true if the module is in the `Operational` state.
    pub fn is_operational(&self) -> bool {
        self.state == FipsState::Operational
    }

    /// Run all digest Known Answer Tests.
    ///
    /// On success, transitions to `Operational`.
    /// On failure, transitions to `Error` and returns the first failure.
    pub fn run_self_tests(&mut self) -> Result<(), CmvpError> {
        if self.state == FipsState::Error {
            return Err(CmvpError::InvalidState);
        }

        self.state = FipsState::SelfTesting;

        if let Err(e) = kat::run_all_kat() {
            self.state = FipsState::Error;
            return Err(e);
        }

        self.state = FipsState::Operational;
        Ok(())
    }
}

impl Default for FipsModule {
    fn default() -> Self {
        Self::new()
    }
}
