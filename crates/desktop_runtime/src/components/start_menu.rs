use super::*;

// The recent panel is static display content; there is no recency tracking.
const RECENT_ITEMS: [(&str, &str); 3] = [
    ("Recent Projects", "/icons/recent.png"),
    ("My Documents", "/icons/documents.png"),
    ("My Pictures", "/icons/pictures.png"),
];

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <div
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-banner">
                    <img
                        class="start-menu-avatar"
                        src="/icons/user.png"
                        alt=""
                        draggable="false"
                    />
                    <span class="start-menu-user">"Ali Saad"</span>
                </div>

                <div class="start-menu-columns">
                    <div class="start-menu-programs">
                        <For
                            each=move || desktop_content::registry_items()
                            key=|item| item.id.as_str()
                            let:item
                        >
                            {{
                                let id = item.id;
                                view! {
                                    <button
                                        role="menuitem"
                                        class="start-menu-item"
                                        on:click=move |_| {
                                            runtime.dispatch_action(SessionAction::Open { id });
                                        }
                                    >
                                        <img
                                            class="start-menu-item-icon"
                                            src=item.icon_src
                                            alt=""
                                            draggable="false"
                                        />
                                        <span>{item.title}</span>
                                    </button>
                                }
                            }}
                        </For>
                    </div>

                    <div class="start-menu-recent">
                        <div class="start-menu-recent-heading">"Recent"</div>
                        {RECENT_ITEMS
                            .iter()
                            .map(|(label, icon_src)| {
                                view! {
                                    <button role="menuitem" class="start-menu-recent-item">
                                        <img src=*icon_src alt="" draggable="false" />
                                        <span>{*label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="start-menu-footer">
                    <button class="start-menu-footer-item">
                        <img src="/icons/logoff.png" alt="" draggable="false" />
                        <span>"Log Off"</span>
                    </button>
                    <button class="start-menu-footer-item">
                        <img src="/icons/shutdown.png" alt="" draggable="false" />
                        <span>"Shut Down"</span>
                    </button>
                </div>
            </div>
        </Show>
    }
}
