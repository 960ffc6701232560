use super::*;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    // Clicks that bubble up to the window dismiss the start menu; the taskbar
    // and the menu panel stop propagation so clicks inside them do not.
    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if runtime.state.get_untracked().start_menu_open {
            runtime.dispatch_action(SessionAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <button
                class="start-button"
                aria-haspopup="menu"
                aria-expanded=move || state.get().start_menu_open
                on:click=move |_| runtime.dispatch_action(SessionAction::ToggleStartMenu)
            >
                <span class="taskbar-glyph" aria-hidden="true">
                    <Icon icon=IconName::Launcher size=IconSize::Sm />
                </span>
                <span>"Start"</span>
            </button>

            <div class="taskbar-divider" aria-hidden="true"></div>

            <div class="taskbar-running-strip" role="group" aria-label="Open windows">
                <For each=move || state.get().open_windows key=|id| id.as_str() let:id>
                    {{
                        let descriptor = *desktop_content::descriptor(id);
                        view! {
                            <button
                                class=move || {
                                    let session = state.get();
                                    taskbar_window_button_class(
                                        session.active_window == Some(id),
                                        session.is_minimized(id),
                                    )
                                }
                                aria-pressed=move || state.get().active_window == Some(id)
                                title=descriptor.title
                                on:click=move |_| {
                                    runtime.dispatch_action(SessionAction::Activate { id });
                                }
                            >
                                <img
                                    class="taskbar-app-icon"
                                    src=descriptor.icon_src
                                    alt=""
                                    draggable="false"
                                />
                                <span class="taskbar-app-label">{descriptor.title}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-tray">
                <img
                    class="taskbar-tray-icon"
                    src="/icons/volume.png"
                    alt=""
                    draggable="false"
                />
                <span class="taskbar-clock">
                    {move || format_clock_label(clock_now.get())}
                </span>
            </div>
        </footer>
    }
}
