use std::collections::{HashMap, HashSet};

use desktop_content::ContentId;
use serde::{Deserialize, Serialize};

/// Height of the taskbar strip reserved at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 40;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Width assigned to a window the first time it opens.
pub const DEFAULT_WINDOW_WIDTH: i32 = 600;
/// Height assigned to a window the first time it opens.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;
/// Top-left origin of the window cascade.
pub const CASCADE_ORIGIN_PX: i32 = 50;
/// Cascade shift between successive newly-opened windows.
pub const CASCADE_STEP_PX: i32 = 30;
/// Two titlebar presses closer than this toggle maximize.
pub const DOUBLE_PRESS_WINDOW_MS: f64 = 300.0;
/// Delay between the minimize control firing and the window leaving the
/// window layer, so the shrink transition can play.
pub const MINIMIZE_ANIMATION_MS: u64 = 200;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Top-left window corner in viewport pixels.
pub struct Position {
    /// Horizontal offset from the viewport's left edge.
    pub x: i32,
    /// Vertical offset from the viewport's top edge.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window extent in pixels, independent of position.
pub struct Size {
    /// Current window width.
    pub width: i32,
    /// Current window height.
    pub height: i32,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Size {
    /// Raises both extents to the managed minimums.
    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Host viewport extent, read from the environment at interaction time.
pub struct Viewport {
    /// Full viewport width.
    pub width: i32,
    /// Full viewport height, taskbar included.
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer location in viewport pixels.
pub struct PointerPosition {
    /// Horizontal pointer offset.
    pub x: i32,
    /// Vertical pointer offset.
    pub y: i32,
}

/// Initial position of the `open_count`-th distinct window to open.
///
/// The cascade is monotonic with no wraparound; windows opened many times in
/// sequence drift toward the bottom-right and may leave the viewport. Accepted
/// behavior, inherited from the reference shell.
pub fn cascade_position(open_count: usize) -> Position {
    let shift = CASCADE_STEP_PX * open_count as i32;
    Position {
        x: CASCADE_ORIGIN_PX + shift,
        y: CASCADE_ORIGIN_PX + shift,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Canonical desktop session state. One instance lives in the runtime
/// provider and is mutated only through [`crate::reducer::reduce_session`].
pub struct SessionState {
    /// Currently-open windows, unique, in insertion order.
    pub open_windows: Vec<ContentId>,
    /// The single focused window, if any.
    pub active_window: Option<ContentId>,
    /// Stored top-left positions. Entries may outlive their window; stale
    /// entries are inert and overwritten on reopen.
    pub window_positions: HashMap<ContentId, Position>,
    /// Stored window extents, same staleness rules as positions.
    pub window_sizes: HashMap<ContentId, Size>,
    /// Maximized flags. A maximized window's stored geometry is ignored for
    /// layout but retained, so un-maximizing restores the last explicit
    /// geometry.
    pub maximized: HashMap<ContentId, bool>,
    /// Windows hidden from the window layer but still present in the taskbar.
    pub minimized: HashSet<ContentId>,
    /// Whether the start menu panel is open.
    pub start_menu_open: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            open_windows: Vec::new(),
            active_window: None,
            window_positions: HashMap::new(),
            window_sizes: HashMap::new(),
            maximized: HashMap::new(),
            minimized: HashSet::new(),
            start_menu_open: false,
        }
    }
}

impl SessionState {
    /// Whether `id` is currently open.
    pub fn is_open(&self, id: ContentId) -> bool {
        self.open_windows.contains(&id)
    }

    /// Whether `id` is open but hidden from the window layer.
    pub fn is_minimized(&self, id: ContentId) -> bool {
        self.minimized.contains(&id)
    }

    /// Whether `id` currently fills the area above the taskbar.
    pub fn is_maximized(&self, id: ContentId) -> bool {
        self.maximized.get(&id).copied().unwrap_or(false)
    }

    /// Stored top-left position of `id`, origin if never assigned.
    pub fn position_of(&self, id: ContentId) -> Position {
        self.window_positions.get(&id).copied().unwrap_or_default()
    }

    /// Stored extent of `id`, the default extent if never assigned.
    pub fn size_of(&self, id: ContentId) -> Size {
        self.window_sizes.get(&id).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Resize affordances exposed on a window frame. Only the south and east
/// sides are resizable; windows grow and shrink from the bottom-right.
pub enum ResizeEdge {
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Bottom-right corner.
    SouthEast,
}

impl ResizeEdge {
    /// Whether dragging this affordance changes the window width.
    pub const fn resizes_east(self) -> bool {
        matches!(self, Self::East | Self::SouthEast)
    }

    /// Whether dragging this affordance changes the window height.
    pub const fn resizes_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A live titlebar drag.
pub struct DragSession {
    /// Window under manipulation.
    pub id: ContentId,
    /// Pointer offset from the window's top-left at press time.
    pub grab_offset: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A live edge/corner resize.
pub struct ResizeSession {
    /// Window under manipulation.
    pub id: ContentId,
    /// Affordance being dragged.
    pub edge: ResizeEdge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A recorded titlebar press, for double-press maximize detection.
pub struct TitleBarPress {
    /// Window whose titlebar was pressed.
    pub id: ContentId,
    /// Event timestamp in milliseconds.
    pub timestamp_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Pointer interaction sessions. Drag and resize are mutually exclusive and
/// at most one window is under direct manipulation at a time.
pub struct InteractionState {
    /// Live titlebar drag, if any.
    pub dragging: Option<DragSession>,
    /// Live resize, if any.
    pub resizing: Option<ResizeSession>,
    /// Most recent titlebar press.
    pub last_titlebar_press: Option<TitleBarPress>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cascade_steps_diagonally_from_the_origin() {
        assert_eq!(cascade_position(0), Position { x: 50, y: 50 });
        assert_eq!(cascade_position(1), Position { x: 80, y: 80 });
        assert_eq!(cascade_position(4), Position { x: 170, y: 170 });
    }

    #[test]
    fn geometry_lookups_fall_back_to_defaults() {
        let state = SessionState::default();
        assert_eq!(
            state.position_of(ContentId::Contact),
            Position { x: 0, y: 0 }
        );
        assert_eq!(
            state.size_of(ContentId::Contact),
            Size {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT
            }
        );
        assert!(!state.is_maximized(ContentId::Contact));
    }

    #[test]
    fn size_floor_applies_to_both_extents() {
        let size = Size {
            width: 120,
            height: 900,
        };
        assert_eq!(
            size.clamped_min(),
            Size {
                width: MIN_WINDOW_WIDTH,
                height: 900
            }
        );
    }
}
