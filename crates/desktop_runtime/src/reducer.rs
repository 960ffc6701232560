//! Actions and transition logic for the desktop session.

use desktop_content::ContentId;

use crate::model::{
    cascade_position, DragSession, InteractionState, PointerPosition, Position, ResizeEdge,
    ResizeSession, SessionState, Size, TitleBarPress, Viewport, DOUBLE_PRESS_WINDOW_MS,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TASKBAR_HEIGHT_PX,
};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Actions accepted by [`reduce_session`] to mutate [`SessionState`].
///
/// Actions referencing an id that is not open are defensive no-ops: ids come
/// from the closed content registry, so an unknown id is a stale event, not an
/// error.
pub enum SessionAction {
    /// Open a registry window, or re-activate it if already open.
    Open {
        /// Window to open.
        id: ContentId,
    },
    /// Open a registry window and force it maximized (desktop-icon
    /// double-click).
    OpenMaximized {
        /// Window to open maximized.
        id: ContentId,
    },
    /// Close a window.
    Close {
        /// Window to close.
        id: ContentId,
    },
    /// Hide a window from the window layer, keeping its taskbar entry.
    Minimize {
        /// Window to minimize.
        id: ContentId,
    },
    /// Flip a window between maximized and windowed layout.
    ToggleMaximize {
        /// Window to toggle.
        id: ContentId,
    },
    /// Un-minimize and focus a window (taskbar click).
    Activate {
        /// Window to activate.
        id: ContentId,
    },
    /// Overwrite a window's stored position. Ignored while maximized.
    SetPosition {
        /// Window to reposition.
        id: ContentId,
        /// New top-left position.
        position: Position,
    },
    /// Overwrite a window's stored extent, floored at the managed minimums.
    /// Ignored while maximized.
    SetSize {
        /// Window to resize.
        id: ContentId,
        /// New extent.
        size: Size,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Begin dragging a window by its titlebar. Ignored while maximized.
    BeginMove {
        /// Window being dragged.
        id: ContentId,
        /// Pointer position at press time.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag. The viewport is read at event time so host
    /// resizes change the clamp bounds live.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current host viewport.
        viewport: Viewport,
    },
    /// End the active drag.
    EndMove,
    /// Begin resizing a window from an edge or corner. Ignored while
    /// maximized.
    BeginResize {
        /// Window being resized.
        id: ContentId,
        /// Affordance being dragged.
        edge: ResizeEdge,
    },
    /// Update an in-progress resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current host viewport.
        viewport: Viewport,
    },
    /// End the active resize.
    EndResize,
    /// Record a titlebar press; two presses on the same window within
    /// [`DOUBLE_PRESS_WINDOW_MS`] toggle maximize.
    TitleBarPress {
        /// Window whose titlebar was pressed.
        id: ContentId,
        /// Event timestamp in milliseconds.
        timestamp_ms: f64,
    },
}

/// Applies a [`SessionAction`] to the session state tree.
///
/// This function is the authoritative transition engine for window lifecycle,
/// geometry, activation, and start-menu visibility. All transitions are total
/// over in-memory state; UI edge cases (maximized drag/resize, sub-minimum
/// extents, re-opening an open window) resolve by policy rather than error.
pub fn reduce_session(
    state: &mut SessionState,
    interaction: &mut InteractionState,
    action: SessionAction,
) {
    match action {
        SessionAction::Open { id } => {
            open_window(state, id);
        }
        SessionAction::OpenMaximized { id } => {
            open_window(state, id);
            state.maximized.insert(id, true);
        }
        SessionAction::Close { id } => {
            state.open_windows.retain(|open| *open != id);
            state.minimized.remove(&id);
            if state.active_window == Some(id) {
                state.active_window = None;
            }
            // Geometry and maximized entries stay behind; they are inert and
            // reset by the next open.
            if interaction.dragging.map(|session| session.id) == Some(id) {
                interaction.dragging = None;
            }
            if interaction.resizing.map(|session| session.id) == Some(id) {
                interaction.resizing = None;
            }
        }
        SessionAction::Minimize { id } => {
            if !state.is_open(id) {
                return;
            }
            state.minimized.insert(id);
            if state.active_window == Some(id) {
                state.active_window = None;
            }
        }
        SessionAction::ToggleMaximize { id } => {
            if !state.is_open(id) {
                return;
            }
            let flag = state.maximized.entry(id).or_insert(false);
            *flag = !*flag;
        }
        SessionAction::Activate { id } => {
            if !state.is_open(id) {
                return;
            }
            state.minimized.remove(&id);
            state.active_window = Some(id);
        }
        SessionAction::SetPosition { id, position } => {
            if !state.is_open(id) || state.is_maximized(id) {
                return;
            }
            state.window_positions.insert(id, position);
        }
        SessionAction::SetSize { id, size } => {
            if !state.is_open(id) || state.is_maximized(id) {
                return;
            }
            state.window_sizes.insert(id, size.clamped_min());
        }
        SessionAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        SessionAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        SessionAction::BeginMove { id, pointer } => {
            if !state.is_open(id) || state.is_maximized(id) {
                return;
            }
            let origin = state.position_of(id);
            interaction.dragging = Some(DragSession {
                id,
                grab_offset: Position {
                    x: pointer.x - origin.x,
                    y: pointer.y - origin.y,
                },
            });
        }
        SessionAction::UpdateMove { pointer, viewport } => {
            let Some(session) = interaction.dragging else {
                return;
            };
            if state.is_maximized(session.id) {
                return;
            }
            let size = state.size_of(session.id);
            let position = clamp_drag_position(pointer, session.grab_offset, size, viewport);
            state.window_positions.insert(session.id, position);
        }
        SessionAction::EndMove => {
            interaction.dragging = None;
        }
        SessionAction::BeginResize { id, edge } => {
            if !state.is_open(id) || state.is_maximized(id) {
                return;
            }
            interaction.resizing = Some(ResizeSession { id, edge });
        }
        SessionAction::UpdateResize { pointer, viewport } => {
            let Some(session) = interaction.resizing else {
                return;
            };
            if state.is_maximized(session.id) {
                return;
            }
            let origin = state.position_of(session.id);
            let size = resize_from_corner(
                state.size_of(session.id),
                session.edge,
                origin,
                pointer,
                viewport,
            );
            state.window_sizes.insert(session.id, size);
        }
        SessionAction::EndResize => {
            interaction.resizing = None;
        }
        SessionAction::TitleBarPress { id, timestamp_ms } => {
            let is_double_press = interaction
                .last_titlebar_press
                .map(|press| {
                    press.id == id && timestamp_ms - press.timestamp_ms < DOUBLE_PRESS_WINDOW_MS
                })
                .unwrap_or(false);
            if is_double_press && state.is_open(id) {
                let flag = state.maximized.entry(id).or_insert(false);
                *flag = !*flag;
            }
            interaction.last_titlebar_press = Some(TitleBarPress { id, timestamp_ms });
        }
    }
}

/// Appends `id` to the open set if absent, assigning cascade geometry, then
/// activates it. Opening always dismisses the start menu.
fn open_window(state: &mut SessionState, id: ContentId) {
    if !state.is_open(id) {
        let position = cascade_position(state.open_windows.len());
        state.open_windows.push(id);
        state.window_positions.insert(id, position);
        state.window_sizes.insert(id, Size::default());
        state.maximized.insert(id, false);
    }
    state.minimized.remove(&id);
    state.active_window = Some(id);
    state.start_menu_open = false;
}

/// Clamps a dragged window so it cannot leave the viewport or slide under the
/// taskbar.
fn clamp_drag_position(
    pointer: PointerPosition,
    grab_offset: Position,
    size: Size,
    viewport: Viewport,
) -> Position {
    Position {
        x: (pointer.x - grab_offset.x).clamp(0, (viewport.width - size.width).max(0)),
        y: (pointer.y - grab_offset.y)
            .clamp(0, (viewport.height - size.height - TASKBAR_HEIGHT_PX).max(0)),
    }
}

/// Recomputes a window extent during a bottom-right resize. The position is
/// untouched; only the dragged sides move.
fn resize_from_corner(
    current: Size,
    edge: ResizeEdge,
    origin: Position,
    pointer: PointerPosition,
    viewport: Viewport,
) -> Size {
    let mut size = current;
    if edge.resizes_east() {
        size.width = (pointer.x - origin.x)
            .clamp(MIN_WINDOW_WIDTH, (viewport.width - origin.x).max(MIN_WINDOW_WIDTH));
    }
    if edge.resizes_south() {
        size.height = (pointer.y - origin.y).clamp(
            MIN_WINDOW_HEIGHT,
            (viewport.height - origin.y - TASKBAR_HEIGHT_PX).max(MIN_WINDOW_HEIGHT),
        );
    }
    size
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 800,
    };

    fn session() -> (SessionState, InteractionState) {
        (SessionState::default(), InteractionState::default())
    }

    fn dispatch(
        state: &mut SessionState,
        interaction: &mut InteractionState,
        actions: impl IntoIterator<Item = SessionAction>,
    ) {
        for action in actions {
            reduce_session(state, interaction, action);
        }
    }

    #[test]
    fn open_activates_and_cascades() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::Open {
                id: ContentId::AboutMe,
            }],
        );

        assert_eq!(state.open_windows, vec![ContentId::AboutMe]);
        assert_eq!(state.active_window, Some(ContentId::AboutMe));
        assert!(!state.is_minimized(ContentId::AboutMe));
        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 50, y: 50 }
        );
        assert_eq!(
            state.size_of(ContentId::AboutMe),
            Size {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT
            }
        );
    }

    #[test]
    fn cascade_offsets_follow_open_count() {
        let (mut state, mut interaction) = session();

        for (k, id) in [
            ContentId::AboutMe,
            ContentId::MyProjects,
            ContentId::MySkills,
            ContentId::Contact,
        ]
        .into_iter()
        .enumerate()
        {
            dispatch(&mut state, &mut interaction, [SessionAction::Open { id }]);
            let expected = 50 + 30 * k as i32;
            assert_eq!(
                state.position_of(id),
                Position {
                    x: expected,
                    y: expected
                }
            );
        }
    }

    #[test]
    fn reopening_an_open_window_reactivates_without_recascading() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::Open {
                    id: ContentId::MyProjects,
                },
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
            ],
        );

        assert_eq!(
            state.open_windows,
            vec![ContentId::AboutMe, ContentId::MyProjects]
        );
        assert_eq!(state.active_window, Some(ContentId::AboutMe));
        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 50, y: 50 }
        );
    }

    #[test]
    fn reopening_after_close_recascades_at_the_new_count() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::Open {
                    id: ContentId::MyProjects,
                },
                SessionAction::Close {
                    id: ContentId::AboutMe,
                },
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
            ],
        );

        // One window was open when about_me came back, so it cascades as the
        // second window rather than restoring its old origin slot.
        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 80, y: 80 }
        );
        assert_eq!(
            state.open_windows,
            vec![ContentId::MyProjects, ContentId::AboutMe]
        );
    }

    #[test]
    fn open_maximized_forces_the_flag() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::OpenMaximized {
                id: ContentId::MySkills,
            }],
        );

        assert!(state.is_maximized(ContentId::MySkills));
        assert_eq!(state.active_window, Some(ContentId::MySkills));
    }

    #[test]
    fn reopen_after_close_resets_a_stale_maximized_flag() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::OpenMaximized {
                    id: ContentId::AboutMe,
                },
                SessionAction::Close {
                    id: ContentId::AboutMe,
                },
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
            ],
        );

        assert!(!state.is_maximized(ContentId::AboutMe));
    }

    #[test]
    fn close_removes_the_window_and_clears_active() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::Close {
                    id: ContentId::AboutMe,
                },
            ],
        );

        assert!(state.open_windows.is_empty());
        assert_eq!(state.active_window, None);
        // Stale geometry is allowed to remain.
        assert!(state.window_positions.contains_key(&ContentId::AboutMe));
    }

    #[test]
    fn close_cancels_a_live_drag_on_the_same_window() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::BeginMove {
                    id: ContentId::AboutMe,
                    pointer: PointerPosition { x: 60, y: 60 },
                },
                SessionAction::Close {
                    id: ContentId::AboutMe,
                },
            ],
        );

        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn minimize_then_activate_restores_and_is_idempotent() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::Minimize {
                    id: ContentId::AboutMe,
                },
            ],
        );
        assert!(state.is_minimized(ContentId::AboutMe));
        assert_eq!(state.active_window, None);
        assert!(state.is_open(ContentId::AboutMe));

        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::Activate {
                id: ContentId::AboutMe,
            }],
        );
        let restored = state.clone();
        assert!(!restored.is_minimized(ContentId::AboutMe));
        assert_eq!(restored.active_window, Some(ContentId::AboutMe));

        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::Activate {
                id: ContentId::AboutMe,
            }],
        );
        assert_eq!(state, restored);
    }

    #[test]
    fn taskbar_scenario_matches_the_reference_walkthrough() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::Open {
                id: ContentId::AboutMe,
            }],
        );
        assert_eq!(state.open_windows, vec![ContentId::AboutMe]);
        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 50, y: 50 }
        );

        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::Open {
                id: ContentId::MyProjects,
            }],
        );
        assert_eq!(
            state.open_windows,
            vec![ContentId::AboutMe, ContentId::MyProjects]
        );
        assert_eq!(
            state.position_of(ContentId::MyProjects),
            Position { x: 80, y: 80 }
        );
        assert_eq!(state.active_window, Some(ContentId::MyProjects));

        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::Minimize {
                id: ContentId::AboutMe,
            }],
        );
        // Taskbar still lists both; only my_projects stays in the window
        // layer.
        assert_eq!(
            state.open_windows,
            vec![ContentId::AboutMe, ContentId::MyProjects]
        );
        assert!(state.is_minimized(ContentId::AboutMe));
        assert!(!state.is_minimized(ContentId::MyProjects));

        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::Close {
                id: ContentId::MyProjects,
            }],
        );
        assert_eq!(state.active_window, None);
        assert_eq!(state.open_windows, vec![ContentId::AboutMe]);
        assert!(state.is_minimized(ContentId::AboutMe));
    }

    #[test]
    fn open_dismisses_the_start_menu() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::ToggleStartMenu,
                SessionAction::Open {
                    id: ContentId::Contact,
                },
            ],
        );

        assert!(!state.start_menu_open);
    }

    #[test]
    fn start_menu_toggles_and_closes() {
        let (mut state, mut interaction) = session();

        dispatch(&mut state, &mut interaction, [SessionAction::ToggleStartMenu]);
        assert!(state.start_menu_open);
        dispatch(&mut state, &mut interaction, [SessionAction::ToggleStartMenu]);
        assert!(!state.start_menu_open);
        dispatch(&mut state, &mut interaction, [SessionAction::ToggleStartMenu]);
        dispatch(&mut state, &mut interaction, [SessionAction::CloseStartMenu]);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn drag_follows_the_pointer_minus_the_grab_offset() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                // Grab 10px into the titlebar from the window's (50, 50).
                SessionAction::BeginMove {
                    id: ContentId::AboutMe,
                    pointer: PointerPosition { x: 60, y: 60 },
                },
                SessionAction::UpdateMove {
                    pointer: PointerPosition { x: 210, y: 140 },
                    viewport: VIEWPORT,
                },
            ],
        );

        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 200, y: 130 }
        );

        dispatch(&mut state, &mut interaction, [SessionAction::EndMove]);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn drag_clamps_to_the_viewport_and_taskbar_reserve() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::BeginMove {
                    id: ContentId::AboutMe,
                    pointer: PointerPosition { x: 50, y: 50 },
                },
                SessionAction::UpdateMove {
                    pointer: PointerPosition { x: -500, y: -500 },
                    viewport: VIEWPORT,
                },
            ],
        );
        assert_eq!(state.position_of(ContentId::AboutMe), Position { x: 0, y: 0 });

        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::UpdateMove {
                pointer: PointerPosition { x: 5000, y: 5000 },
                viewport: VIEWPORT,
            }],
        );
        // 1280 - 600 wide, 800 - 400 tall - 40 taskbar.
        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 680, y: 360 }
        );
    }

    #[test]
    fn drag_bounds_track_the_live_viewport() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::BeginMove {
                    id: ContentId::AboutMe,
                    pointer: PointerPosition { x: 50, y: 50 },
                },
                SessionAction::UpdateMove {
                    pointer: PointerPosition { x: 5000, y: 5000 },
                    viewport: Viewport {
                        width: 700,
                        height: 700,
                    },
                },
            ],
        );

        // A 600x400 window in a 700x700 viewport parks at (100, 260).
        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 100, y: 260 }
        );
    }

    #[test]
    fn maximized_windows_ignore_drag_and_geometry_writes() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::OpenMaximized {
                    id: ContentId::AboutMe,
                },
                SessionAction::SetPosition {
                    id: ContentId::AboutMe,
                    position: Position { x: 5, y: 5 },
                },
                SessionAction::SetSize {
                    id: ContentId::AboutMe,
                    size: Size {
                        width: 900,
                        height: 700,
                    },
                },
                SessionAction::BeginMove {
                    id: ContentId::AboutMe,
                    pointer: PointerPosition { x: 60, y: 60 },
                },
                SessionAction::BeginResize {
                    id: ContentId::AboutMe,
                    edge: ResizeEdge::SouthEast,
                },
            ],
        );

        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 50, y: 50 }
        );
        assert_eq!(state.size_of(ContentId::AboutMe), Size::default());
        assert_eq!(interaction.dragging, None);
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn unmaximizing_restores_the_last_explicit_geometry() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::SetPosition {
                    id: ContentId::AboutMe,
                    position: Position { x: 120, y: 90 },
                },
                SessionAction::SetSize {
                    id: ContentId::AboutMe,
                    size: Size {
                        width: 640,
                        height: 480,
                    },
                },
                SessionAction::ToggleMaximize {
                    id: ContentId::AboutMe,
                },
                SessionAction::ToggleMaximize {
                    id: ContentId::AboutMe,
                },
            ],
        );

        assert!(!state.is_maximized(ContentId::AboutMe));
        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 120, y: 90 }
        );
        assert_eq!(
            state.size_of(ContentId::AboutMe),
            Size {
                width: 640,
                height: 480
            }
        );
    }

    #[test]
    fn resize_floors_at_the_minimum_extent() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::BeginResize {
                    id: ContentId::AboutMe,
                    edge: ResizeEdge::SouthEast,
                },
                SessionAction::UpdateResize {
                    pointer: PointerPosition { x: 51, y: 51 },
                    viewport: VIEWPORT,
                },
            ],
        );

        assert_eq!(
            state.size_of(ContentId::AboutMe),
            Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT
            }
        );
    }

    #[test]
    fn resize_caps_at_the_viewport_minus_the_window_origin() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::BeginResize {
                    id: ContentId::AboutMe,
                    edge: ResizeEdge::SouthEast,
                },
                SessionAction::UpdateResize {
                    pointer: PointerPosition { x: 9000, y: 9000 },
                    viewport: VIEWPORT,
                },
            ],
        );

        // Origin (50, 50): width caps at 1280-50, height at 800-50-40.
        assert_eq!(
            state.size_of(ContentId::AboutMe),
            Size {
                width: 1230,
                height: 710
            }
        );
    }

    #[test]
    fn single_edge_resizes_leave_the_other_extent_alone() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::BeginResize {
                    id: ContentId::AboutMe,
                    edge: ResizeEdge::East,
                },
                SessionAction::UpdateResize {
                    pointer: PointerPosition { x: 850, y: 9000 },
                    viewport: VIEWPORT,
                },
            ],
        );
        assert_eq!(
            state.size_of(ContentId::AboutMe),
            Size {
                width: 800,
                height: DEFAULT_WINDOW_HEIGHT
            }
        );

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::EndResize,
                SessionAction::BeginResize {
                    id: ContentId::AboutMe,
                    edge: ResizeEdge::South,
                },
                SessionAction::UpdateResize {
                    pointer: PointerPosition { x: 9000, y: 550 },
                    viewport: VIEWPORT,
                },
            ],
        );
        assert_eq!(
            state.size_of(ContentId::AboutMe),
            Size {
                width: 800,
                height: 500
            }
        );
        // Resizing never moves the window.
        assert_eq!(
            state.position_of(ContentId::AboutMe),
            Position { x: 50, y: 50 }
        );
    }

    #[test]
    fn set_size_floors_below_minimum_extents() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::SetSize {
                    id: ContentId::AboutMe,
                    size: Size {
                        width: 10,
                        height: 10,
                    },
                },
            ],
        );

        assert_eq!(
            state.size_of(ContentId::AboutMe),
            Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT
            }
        );
    }

    #[test]
    fn double_press_toggles_maximize_once_per_qualifying_pair() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::TitleBarPress {
                    id: ContentId::AboutMe,
                    timestamp_ms: 1000.0,
                },
                SessionAction::TitleBarPress {
                    id: ContentId::AboutMe,
                    timestamp_ms: 1200.0,
                },
            ],
        );
        assert!(state.is_maximized(ContentId::AboutMe));

        // A third press beyond the window does not toggle again.
        dispatch(
            &mut state,
            &mut interaction,
            [SessionAction::TitleBarPress {
                id: ContentId::AboutMe,
                timestamp_ms: 1700.0,
            }],
        );
        assert!(state.is_maximized(ContentId::AboutMe));
    }

    #[test]
    fn presses_on_different_windows_do_not_pair() {
        let (mut state, mut interaction) = session();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Open {
                    id: ContentId::AboutMe,
                },
                SessionAction::Open {
                    id: ContentId::MyProjects,
                },
                SessionAction::TitleBarPress {
                    id: ContentId::AboutMe,
                    timestamp_ms: 1000.0,
                },
                SessionAction::TitleBarPress {
                    id: ContentId::MyProjects,
                    timestamp_ms: 1100.0,
                },
            ],
        );

        assert!(!state.is_maximized(ContentId::AboutMe));
        assert!(!state.is_maximized(ContentId::MyProjects));
    }

    #[test]
    fn operations_on_ids_that_are_not_open_are_no_ops() {
        let (mut state, mut interaction) = session();
        let before = state.clone();

        dispatch(
            &mut state,
            &mut interaction,
            [
                SessionAction::Minimize {
                    id: ContentId::Contact,
                },
                SessionAction::Activate {
                    id: ContentId::Contact,
                },
                SessionAction::ToggleMaximize {
                    id: ContentId::Contact,
                },
                SessionAction::SetPosition {
                    id: ContentId::Contact,
                    position: Position { x: 9, y: 9 },
                },
                SessionAction::Close {
                    id: ContentId::Contact,
                },
            ],
        );

        assert_eq!(state, before);
        assert_eq!(interaction, InteractionState::default());
    }
}
