//! Desktop shell UI composition and interaction surfaces.

mod start_menu;
mod taskbar;
mod window;

use std::time::Duration;

use leptos::*;

use self::{start_menu::StartMenu, taskbar::Taskbar, window::DesktopWindow};
use crate::{
    host,
    model::{PointerPosition, ResizeEdge, MINIMIZE_ANIMATION_MS},
    reducer::SessionAction,
};
use desktop_content::ContentId;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, Icon, IconName,
    IconSize,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: wallpaper, icon grid, window layer,
/// taskbar, and start menu.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let pointer_session_live = Signal::derive(move || {
        let interaction = runtime.interaction.get();
        interaction.dragging.is_some() || interaction.resizing.is_some()
    });

    view! {
        <div class="desktop-shell" data-ui-kind="desktop-root">
            <DesktopBackdrop>
                <img class="desktop-wallpaper" src="/bg.jpg" alt="" draggable="false" />

                <DesktopIconGrid>
                    <For
                        each=move || desktop_content::registry_items()
                        key=|item| item.id.as_str()
                        let:item
                    >
                        {{
                            let id = item.id;
                            view! {
                                <DesktopIconButton
                                    title=item.title
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(SessionAction::Open { id });
                                    })
                                    on_dblclick=Callback::new(move |_| {
                                        runtime.dispatch_action(SessionAction::OpenMaximized { id });
                                    })
                                >
                                    <img
                                        class="desktop-icon-image"
                                        src=item.icon_src
                                        alt=""
                                        draggable="false"
                                    />
                                    <span class="desktop-icon-label">{item.title}</span>
                                </DesktopIconButton>
                            }
                        }}
                    </For>
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For each=move || state.get().open_windows key=|id| id.as_str() let:id>
                        <DesktopWindow id=id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <Taskbar />
            <StartMenu />

            <Show when=move || pointer_session_live.get() fallback=|| ()>
                <PointerInteractionListeners />
            </Show>
        </div>
    }
}

#[component]
/// Window-level pointer listeners, mounted only while a drag or resize
/// session is live. Mounting attaches the listeners; unmounting (session end
/// or shell teardown) removes them in `on_cleanup`, so no listener outlives
/// its interaction.
fn PointerInteractionListeners() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        let viewport = host::viewport_size();
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_some() {
            runtime.dispatch_action(SessionAction::UpdateMove { pointer, viewport });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(SessionAction::UpdateResize { pointer, viewport });
        }
    });
    let up_listener =
        window_event_listener(ev::pointerup, move |_| end_pointer_session(runtime));
    let cancel_listener =
        window_event_listener(ev::pointercancel, move |_| end_pointer_session(runtime));

    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    });
}

fn end_pointer_session(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(SessionAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(SessionAction::EndResize);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_clock_label(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, snapshot.minute, suffix)
}

fn taskbar_window_button_class(active: bool, minimized: bool) -> String {
    let mut class = String::from("taskbar-window-button");
    if active {
        class.push_str(" active");
    }
    if minimized {
        class.push_str(" minimized");
    }
    class
}

fn window_frame_class(active: bool, maximized: bool, closing: bool) -> String {
    let mut class = String::from("desktop-window");
    if active {
        class.push_str(" active");
    }
    if maximized {
        class.push_str(" maximized");
    }
    if closing {
        class.push_str(" closing");
    }
    class
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::SouthEast => "edge-se",
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_label_uses_twelve_hour_time() {
        assert_eq!(
            format_clock_label(ClockSnapshot { hour: 0, minute: 5 }),
            "12:05 AM"
        );
        assert_eq!(
            format_clock_label(ClockSnapshot {
                hour: 12,
                minute: 0
            }),
            "12:00 PM"
        );
        assert_eq!(
            format_clock_label(ClockSnapshot {
                hour: 17,
                minute: 42
            }),
            "5:42 PM"
        );
    }

    #[test]
    fn taskbar_buttons_flag_active_and_minimized_entries() {
        assert_eq!(taskbar_window_button_class(false, false), "taskbar-window-button");
        assert_eq!(
            taskbar_window_button_class(true, false),
            "taskbar-window-button active"
        );
        assert_eq!(
            taskbar_window_button_class(false, true),
            "taskbar-window-button minimized"
        );
    }

    #[test]
    fn window_frames_compose_state_classes() {
        assert_eq!(window_frame_class(false, false, false), "desktop-window");
        assert_eq!(
            window_frame_class(true, true, true),
            "desktop-window active maximized closing"
        );
    }

    #[test]
    fn resize_edges_map_to_stable_class_tokens() {
        assert_eq!(resize_edge_class(ResizeEdge::South), "edge-s");
        assert_eq!(resize_edge_class(ResizeEdge::East), "edge-e");
        assert_eq!(resize_edge_class(ResizeEdge::SouthEast), "edge-se");
    }
}
