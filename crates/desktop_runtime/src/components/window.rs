use super::*;
use leptos::leptos_dom::helpers::TimeoutHandle;

#[component]
pub(super) fn DesktopWindow(id: ContentId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let descriptor = *desktop_content::descriptor(id);

    let minimized = Signal::derive(move || state.get().is_minimized(id));
    let maximized = Signal::derive(move || state.get().is_maximized(id));
    let active = Signal::derive(move || state.get().active_window == Some(id));

    // Minimize plays a short shrink transition before the window leaves the
    // layer; the pending dispatch is cancelled if the window is torn down
    // first.
    let closing = create_rw_signal(false);
    let minimize_timer = store_value(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = minimize_timer.get_value() {
            handle.clear();
        }
    });

    let complete_minimize = move || {
        minimize_timer.set_value(None);
        closing.set(false);
        runtime.dispatch_action(SessionAction::Minimize { id });
    };
    let begin_minimize = move |_: web_sys::MouseEvent| {
        if closing.get_untracked() {
            return;
        }
        closing.set(true);
        match set_timeout_with_handle(
            complete_minimize,
            Duration::from_millis(MINIMIZE_ANIMATION_MS),
        ) {
            Ok(handle) => minimize_timer.set_value(Some(handle)),
            // No timer host; skip the transition and minimize at once.
            Err(_) => complete_minimize(),
        }
    };

    let close = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(SessionAction::Close { id });
    };
    let toggle_maximize = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(SessionAction::ToggleMaximize { id });
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        host::try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(SessionAction::TitleBarPress {
            id,
            timestamp_ms: ev.time_stamp(),
        });
        // BeginMove is a reducer no-op while maximized, including the press
        // that just toggled maximize on.
        runtime.dispatch_action(SessionAction::BeginMove {
            id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <Show when=move || !minimized.get() fallback=|| ()>
            {move || {
                let geometry_style = if maximized.get() {
                    String::new()
                } else {
                    let (position, size) = state.with(|s| (s.position_of(id), s.size_of(id)));
                    format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;",
                        position.x, position.y, size.width, size.height
                    )
                };

                view! {
                    <section
                        class=window_frame_class(active.get(), maximized.get(), closing.get())
                        style=geometry_style
                        role="dialog"
                        aria-label=descriptor.title
                    >
                        <header class="titlebar" on:pointerdown=begin_move>
                            <div class="titlebar-title">
                                <img
                                    class="titlebar-icon"
                                    src=descriptor.icon_src
                                    alt=""
                                    draggable="false"
                                />
                                <span>{descriptor.title}</span>
                            </div>
                            <div class="titlebar-controls">
                                <button
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        begin_minimize(ev);
                                    }
                                >
                                    <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                                </button>
                                <button
                                    aria-label=if maximized.get() {
                                        "Restore window"
                                    } else {
                                        "Maximize window"
                                    }
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        toggle_maximize(ev);
                                    }
                                >
                                    <Icon
                                        icon=if maximized.get() {
                                            IconName::WindowRestore
                                        } else {
                                            IconName::WindowMaximize
                                        }
                                        size=IconSize::Xs
                                    />
                                </button>
                                <button
                                    class="titlebar-close"
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        close(ev);
                                    }
                                >
                                    <Icon icon=IconName::Dismiss size=IconSize::Xs />
                                </button>
                            </div>
                        </header>
                        <div class="menu-strip" aria-hidden="true">
                            <span>"File"</span>
                            <span>"Edit"</span>
                            <span>"View"</span>
                            <span>"Help"</span>
                        </div>
                        <div class="window-body">
                            {desktop_content::render_content(id)}
                        </div>
                        <Show when=move || !maximized.get() fallback=|| ()>
                            <WindowResizeHandle id=id edge=ResizeEdge::South />
                            <WindowResizeHandle id=id edge=ResizeEdge::East />
                            <WindowResizeHandle id=id edge=ResizeEdge::SouthEast />
                        </Show>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn WindowResizeHandle(id: ContentId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        host::try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(SessionAction::BeginResize { id, edge });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
