//! Admin access gate.
//!
//! | identity loading | identity | admin loading | admin flag | state           |
//! |------------------|----------|---------------|------------|-----------------|
//! | yes              | any      | any           | any        | initializing    |
//! | no               | absent   | any           | any        | unauthenticated |
//! | no               | present  | any           | `true`     | authorized      |
//! | no               | present  | no            | `false`    | unauthorized    |
//! | no               | present  | otherwise     |            | initializing    |
//!
//! Entering `unauthenticated` or `unauthorized` issues exactly one redirect.
//! Re-evaluating into the same state issues none.

use std::sync::Arc;

use serde::Serialize;

use barber_core::enums::AccessState;
use barber_core::identity::Identity;

/// Fire-and-forget navigation side effect.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn redirect(&self, path: &str) {
        (**self).redirect(path);
    }
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn redirect(&self, path: &str) {
        (**self).redirect(path);
    }
}

/// Everything the gate reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateInputs {
    pub identity_loading: bool,
    pub identity: Option<Identity>,
    pub admin_flag_loading: bool,
    pub admin_flag: Option<bool>,
}

impl GateInputs {
    /// Inputs while the identity provider is still restoring a session.
    #[must_use]
    pub fn identity_loading() -> Self {
        Self {
            identity_loading: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Signed in, admin flag not yet known.
    #[must_use]
    pub fn checking(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            admin_flag_loading: true,
            ..Self::default()
        }
    }

    /// Signed in with a settled admin flag.
    #[must_use]
    pub fn settled(identity: Identity, is_admin: bool) -> Self {
        Self {
            identity: Some(identity),
            admin_flag: Some(is_admin),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.identity_loading || self.admin_flag_loading
    }
}

/// Pure state function over the inputs.
#[must_use]
pub const fn evaluate(inputs: &GateInputs) -> AccessState {
    if inputs.identity_loading {
        return AccessState::Initializing;
    }
    if inputs.identity.is_none() {
        return AccessState::Unauthenticated;
    }
    match (inputs.admin_flag_loading, inputs.admin_flag) {
        (_, Some(true)) => AccessState::Authorized,
        (false, Some(false)) => AccessState::Unauthorized,
        _ => AccessState::Initializing,
    }
}

/// Redirect targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePaths {
    pub sign_in: String,
    pub home: String,
}

impl Default for GatePaths {
    fn default() -> Self {
        Self {
            sign_in: "/auth".into(),
            home: "/".into(),
        }
    }
}

impl GatePaths {
    fn target(&self, state: AccessState) -> Option<&str> {
        match state {
            AccessState::Unauthenticated => Some(&self.sign_in),
            AccessState::Unauthorized => Some(&self.home),
            AccessState::Initializing | AccessState::Authorized => None,
        }
    }
}

/// Value the gate exposes to the protected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateStatus {
    pub state: AccessState,
    pub is_authorized: bool,
    pub is_loading: bool,
}

/// Stateful gate: remembers the last state so redirects fire once per change.
pub struct AccessGate<N> {
    navigator: N,
    paths: GatePaths,
    state: AccessState,
}

impl<N: Navigator> AccessGate<N> {
    pub fn new(navigator: N) -> Self {
        Self::with_paths(navigator, GatePaths::default())
    }

    pub const fn with_paths(navigator: N, paths: GatePaths) -> Self {
        Self {
            navigator,
            paths,
            state: AccessState::Initializing,
        }
    }

    pub const fn state(&self) -> AccessState {
        self.state
    }

    pub const fn paths(&self) -> &GatePaths {
        &self.paths
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Redirect target for the current state, if it has one.
    pub fn redirect_target(&self) -> Option<&str> {
        self.paths.target(self.state)
    }

    /// Re-evaluate against `inputs`, redirecting if the state just changed
    /// into one that has a redirect target.
    pub fn update(&mut self, inputs: &GateInputs) -> GateStatus {
        let next = evaluate(inputs);
        if next != self.state {
            tracing::debug!(
                from = %self.state,
                to = %next,
                settled = next.is_terminal(),
                "access gate transition"
            );
            self.state = next;
            if let Some(path) = self.paths.target(next) {
                tracing::warn!(state = %next, path, "redirecting away from admin area");
                self.navigator.redirect(path);
            }
        }
        GateStatus {
            state: next,
            is_authorized: next == AccessState::Authorized,
            is_loading: inputs.is_loading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::RecordingNavigator;

    fn someone() -> Identity {
        Identity::new("user-1")
    }

    fn inputs(
        identity_loading: bool,
        signed_in: bool,
        admin_flag_loading: bool,
        admin_flag: Option<bool>,
    ) -> GateInputs {
        GateInputs {
            identity_loading,
            identity: signed_in.then(someone),
            admin_flag_loading,
            admin_flag,
        }
    }

    #[rstest]
    #[case::identity_loading(inputs(true, false, false, None), AccessState::Initializing)]
    #[case::identity_loading_ignores_flag(inputs(true, true, false, Some(true)), AccessState::Initializing)]
    #[case::signed_out(inputs(false, false, false, None), AccessState::Unauthenticated)]
    #[case::signed_out_with_stale_flag(inputs(false, false, false, Some(true)), AccessState::Unauthenticated)]
    #[case::admin(inputs(false, true, false, Some(true)), AccessState::Authorized)]
    #[case::admin_while_refreshing(inputs(false, true, true, Some(true)), AccessState::Authorized)]
    #[case::not_admin(inputs(false, true, false, Some(false)), AccessState::Unauthorized)]
    #[case::not_admin_while_refreshing(inputs(false, true, true, Some(false)), AccessState::Initializing)]
    #[case::flag_loading(inputs(false, true, true, None), AccessState::Initializing)]
    #[case::flag_unknown(inputs(false, true, false, None), AccessState::Initializing)]
    fn transition_table(#[case] inputs: GateInputs, #[case] expected: AccessState) {
        assert_eq!(evaluate(&inputs), expected);
    }

    #[test]
    fn unauthenticated_redirects_once_to_sign_in() {
        let nav = RecordingNavigator::default();
        let mut gate = AccessGate::new(&nav);

        let status = gate.update(&GateInputs::signed_out());
        gate.update(&GateInputs::signed_out());

        assert_eq!(status.state, AccessState::Unauthenticated);
        assert!(!status.is_authorized);
        assert!(!status.is_loading);
        assert_eq!(nav.redirects(), vec!["/auth"]);
    }

    #[test]
    fn signed_in_non_admin_redirects_home_after_loading() {
        let nav = RecordingNavigator::default();
        let mut gate = AccessGate::new(&nav);

        let status = gate.update(&GateInputs::identity_loading());
        assert_eq!(status.state, AccessState::Initializing);
        assert!(status.is_loading);

        let status = gate.update(&GateInputs::checking(someone()));
        assert_eq!(status.state, AccessState::Initializing);
        assert!(status.is_loading);
        assert!(nav.redirects().is_empty());

        let status = gate.update(&GateInputs::settled(someone(), false));
        assert_eq!(status.state, AccessState::Unauthorized);
        assert_eq!(nav.redirects(), vec!["/"]);
    }

    #[test]
    fn admin_is_authorized_without_redirect() {
        let nav = RecordingNavigator::default();
        let mut gate = AccessGate::new(&nav);

        gate.update(&GateInputs::checking(someone()));
        let status = gate.update(&GateInputs::settled(someone(), true));

        assert_eq!(
            status,
            GateStatus {
                state: AccessState::Authorized,
                is_authorized: true,
                is_loading: false,
            }
        );
        assert!(nav.redirects().is_empty());
        assert_eq!(gate.redirect_target(), None);
    }

    #[test]
    fn sign_out_after_authorized_redirects_to_sign_in() {
        let nav = RecordingNavigator::default();
        let mut gate = AccessGate::new(&nav);

        gate.update(&GateInputs::settled(someone(), true));
        gate.update(&GateInputs::signed_out());

        assert_eq!(gate.state(), AccessState::Unauthenticated);
        assert_eq!(nav.redirects(), vec!["/auth"]);
    }

    #[test]
    fn leaving_and_reentering_a_state_redirects_again() {
        let nav = RecordingNavigator::default();
        let mut gate = AccessGate::new(&nav);

        gate.update(&GateInputs::signed_out());
        gate.update(&GateInputs::identity_loading());
        gate.update(&GateInputs::signed_out());

        assert_eq!(nav.redirects(), vec!["/auth", "/auth"]);
    }

    #[test]
    fn custom_paths_are_used() {
        let nav = RecordingNavigator::default();
        let paths = GatePaths {
            sign_in: "/login".into(),
            home: "/shop".into(),
        };
        let mut gate = AccessGate::with_paths(&nav, paths);

        gate.update(&GateInputs::settled(someone(), false));
        assert_eq!(gate.redirect_target(), Some("/shop"));
        gate.update(&GateInputs::signed_out());

        assert_eq!(nav.redirects(), vec!["/shop", "/login"]);
    }
}
