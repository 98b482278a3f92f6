//! Shizuku capability state machine.
//!
//! Tracks whether the privileged helper's binder is reachable and whether
//! the user has granted the permission. The state lives in a single owned
//! object behind update methods; the app context wraps it in a signal so
//! the UI observes changes reactively. All mutation happens on the UI
//! thread via the hosting framework's callback delivery.

/// Observable availability/grant state of the privileged helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapabilityState {
    /// Binder not reachable; the permission request action is disabled.
    #[default]
    Unavailable,
    /// Binder reachable, permission not granted; requesting is enabled.
    AvailableNotGranted,
    /// Binder reachable and permission granted.
    AvailableGranted,
}

/// Owned capability state plus the outstanding permission request code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capability {
    state: CapabilityState,
    pending: Option<u32>,
}

impl Capability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CapabilityState {
        self.state
    }

    pub fn binder_available(&self) -> bool {
        self.state != CapabilityState::Unavailable
    }

    pub fn granted(&self) -> bool {
        self.state == CapabilityState::AvailableGranted
    }

    /// Whether the user-initiated permission request action is enabled.
    pub fn can_request(&self) -> bool {
        self.state == CapabilityState::AvailableNotGranted
    }

    /// Binder-availability observer reported the helper reachable.
    pub fn binder_received(&mut self) {
        if self.state == CapabilityState::Unavailable {
            self.state = CapabilityState::AvailableNotGranted;
        }
    }

    /// Binder-availability observer reported the helper lost.
    ///
    /// Reverts any state to `Unavailable` and forgets the outstanding
    /// request; a result for it can no longer arrive.
    pub fn binder_died(&mut self) {
        self.state = CapabilityState::Unavailable;
        self.pending = None;
    }

    /// Record a user-initiated permission request.
    ///
    /// Returns `true` if the request should be forwarded to the helper.
    /// In every other state this is a no-op, not an error.
    pub fn begin_request(&mut self, code: u32) -> bool {
        if self.can_request() {
            self.pending = Some(code);
            true
        } else {
            false
        }
    }

    /// Asynchronous permission-result callback from the helper.
    ///
    /// Updates state iff `code` matches the outstanding request; results
    /// for other requesters are ignored. A denied result leaves the state
    /// in `AvailableNotGranted` with no error surfaced.
    pub fn permission_result(&mut self, code: u32, granted: bool) {
        if self.pending != Some(code) {
            return;
        }
        self.pending = None;
        if granted && self.state == CapabilityState::AvailableNotGranted {
            self.state = CapabilityState::AvailableGranted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_unavailable() {
        let cap = Capability::new();
        assert_eq!(cap.state(), CapabilityState::Unavailable);
        assert!(!cap.binder_available());
        assert!(!cap.granted());
        assert!(!cap.can_request());
    }

    #[test]
    fn test_request_is_noop_while_binder_unavailable() {
        let mut cap = Capability::new();
        assert!(!cap.begin_request(1));
        assert_eq!(cap.state(), CapabilityState::Unavailable);

        // A result that could never have been requested is also ignored.
        cap.permission_result(1, true);
        assert_eq!(cap.state(), CapabilityState::Unavailable);
    }

    #[test]
    fn test_binder_received_enables_requesting() {
        let mut cap = Capability::new();
        cap.binder_received();
        assert_eq!(cap.state(), CapabilityState::AvailableNotGranted);
        assert!(cap.can_request());
    }

    #[test]
    fn test_matching_grant_transitions_to_granted() {
        let mut cap = Capability::new();
        cap.binder_received();
        assert!(cap.begin_request(114514));
        cap.permission_result(114514, true);
        assert_eq!(cap.state(), CapabilityState::AvailableGranted);
        assert!(!cap.can_request());
    }

    #[test]
    fn test_non_matching_code_leaves_state_unchanged() {
        let mut cap = Capability::new();
        cap.binder_received();
        assert!(cap.begin_request(114514));
        cap.permission_result(42, true);
        assert_eq!(cap.state(), CapabilityState::AvailableNotGranted);

        // The outstanding request is still live and can complete later.
        cap.permission_result(114514, true);
        assert_eq!(cap.state(), CapabilityState::AvailableGranted);
    }

    #[test]
    fn test_denied_result_stays_not_granted() {
        let mut cap = Capability::new();
        cap.binder_received();
        assert!(cap.begin_request(7));
        cap.permission_result(7, false);
        assert_eq!(cap.state(), CapabilityState::AvailableNotGranted);
        // The request is consumed; the user may try again.
        assert!(cap.can_request());
    }

    #[test]
    fn test_granted_state_ignores_further_requests() {
        let mut cap = Capability::new();
        cap.binder_received();
        assert!(cap.begin_request(1));
        cap.permission_result(1, true);
        assert!(!cap.begin_request(2));
        assert_eq!(cap.state(), CapabilityState::AvailableGranted);
    }

    #[test]
    fn test_binder_loss_reverts_any_state() {
        let mut cap = Capability::new();
        cap.binder_received();
        assert!(cap.begin_request(1));
        cap.binder_died();
        assert_eq!(cap.state(), CapabilityState::Unavailable);

        // The forgotten request's late result must not resurrect state.
        cap.permission_result(1, true);
        assert_eq!(cap.state(), CapabilityState::Unavailable);

        cap.binder_received();
        cap.binder_received();
        assert_eq!(cap.state(), CapabilityState::AvailableNotGranted);
    }
}
