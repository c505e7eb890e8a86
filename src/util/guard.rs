//! Route guard for the authenticated area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every staff page sits under one layout; the layout installs this guard so
//! the pages themselves never re-check the session.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether the current session may not stay on a protected route.
pub fn should_redirect_to_login(session: &SessionState) -> bool {
    !session.is_authenticated()
}

/// Redirect to `/login` whenever the session drops to anonymous.
///
/// The navigation replaces the history entry, so Back from the login page
/// does not lead into the protected area.
pub fn install_login_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_redirect_to_login(&session.get()) {
            let options = NavigateOptions { replace: true, ..Default::default() };
            navigate("/login", options);
        }
    });
}
