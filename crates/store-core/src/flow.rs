//! # Checkout Flow State Machine
//!
//! The per-attempt submission lifecycle, keyed by price identifier.
//!
//! A single slot guards the whole storefront: while one checkout is in
//! flight, a "buy" action for any price is rejected. The guard is released
//! on every failure path and deliberately kept through the redirect, since
//! navigation is about to unload the page.

use crate::error::StoreError;

/// Named states of one checkout attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    /// No attempt in progress
    Idle,
    /// Session-creation request outstanding for this price
    Submitting { price_id: String },
    /// Session created; browser navigation handed off
    Redirecting { price_id: String },
    /// Attempt failed; terminal until the next `begin`
    Failed { price_id: String },
}

/// Result of a "buy" action against the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginOutcome {
    /// Guard acquired; caller must issue exactly one session-creation call
    Started,
    /// Another attempt holds the guard; the action is a no-op
    AlreadyInFlight,
}

/// Submission guard and error state for the storefront
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    state: FlowState,
    error_message: Option<&'static str>,
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::Idle
    }
}

impl CheckoutFlow {
    /// Create a flow in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to start a checkout for `price_id`.
    ///
    /// Rejected while any attempt is submitting or redirecting. Starting a
    /// fresh attempt clears the previous error before anything else happens.
    pub fn begin(&mut self, price_id: &str) -> BeginOutcome {
        match self.state {
            FlowState::Submitting { .. } | FlowState::Redirecting { .. } => {
                BeginOutcome::AlreadyInFlight
            }
            FlowState::Idle | FlowState::Failed { .. } => {
                self.error_message = None;
                self.state = FlowState::Submitting {
                    price_id: price_id.to_string(),
                };
                BeginOutcome::Started
            }
        }
    }

    /// Record a failed attempt: release the guard and surface the generic
    /// user-facing message for the error kind.
    pub fn fail(&mut self, error: &StoreError) {
        match std::mem::take(&mut self.state) {
            FlowState::Submitting { price_id } => {
                self.error_message = Some(error.user_message());
                self.state = FlowState::Failed { price_id };
            }
            other => self.state = other,
        }
    }

    /// Record a successful session creation: the guard stays held because
    /// the page is about to unload.
    pub fn redirect(&mut self) {
        match std::mem::take(&mut self.state) {
            FlowState::Submitting { price_id } => {
                self.state = FlowState::Redirecting { price_id };
            }
            other => self.state = other,
        }
    }

    /// The price currently holding the guard, if any
    pub fn in_flight(&self) -> Option<&str> {
        match &self.state {
            FlowState::Submitting { price_id } | FlowState::Redirecting { price_id } => {
                Some(price_id)
            }
            FlowState::Idle | FlowState::Failed { .. } => None,
        }
    }

    /// Whether the control for `price_id` should render as loading.
    ///
    /// Only the in-flight price is loading; other prices render as normal
    /// idle even while the guard is held.
    pub fn is_loading(&self, price_id: &str) -> bool {
        self.in_flight() == Some(price_id)
    }

    /// The active user-visible error, if any
    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    /// Current state (for rendering)
    pub fn state(&self) -> &FlowState {
        &self.state
    }
}
