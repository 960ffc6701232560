pub mod components;
pub mod host;
pub mod launch;
pub mod model;
pub mod reducer;

mod runtime_context;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_session, SessionAction};
