//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived session and interaction signals plus the
//! reducer dispatch callback. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    launch,
    model::{InteractionState, SessionState},
    reducer::{reduce_session, SessionAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop session state and dispatching
/// [`SessionAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive session state signal.
    pub state: RwSignal<SessionState>,
    /// Reactive pointer drag/resize interaction signal.
    pub interaction: RwSignal<InteractionState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<SessionAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: SessionAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and applies
/// any launch request encoded in the boot URL.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(SessionState::default());
    let interaction = create_rw_signal(InteractionState::default());

    let dispatch = Callback::new(move |action: SessionAction| {
        let mut session = state.get_untracked();
        let mut pointer = interaction.get_untracked();
        let previous_session = session.clone();
        let previous_pointer = pointer;

        reduce_session(&mut session, &mut pointer, action);

        if session != previous_session {
            state.set(session);
        }
        if pointer != previous_pointer {
            interaction.set(pointer);
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        dispatch,
    };

    provide_context(runtime);

    apply_boot_launch_request(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

fn apply_boot_launch_request(runtime: DesktopRuntimeContext) {
    let request = match launch::current_launch_request() {
        Ok(Some(request)) => request,
        Ok(None) => return,
        Err(err) => {
            logging::warn!("ignoring launch link: {err}");
            return;
        }
    };

    for id in request.open {
        let action = if request.maximized {
            SessionAction::OpenMaximized { id }
        } else {
            SessionAction::Open { id }
        };
        runtime.dispatch_action(action);
    }
}
