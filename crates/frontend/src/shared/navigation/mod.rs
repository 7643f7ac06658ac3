pub mod route;
pub mod selection;

pub use route::{DirectoryRoute, RouteError, RouteLevel};
pub use selection::{highlighted_row, is_router_navigation, DetailKey, SelectionState};
