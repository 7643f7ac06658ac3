//! Category tab bar of the university view.
//!
//! - `tab_labels` - labels of the category tabs
//! - `category_tabs` - the tab bar itself, driven by the route only

pub mod category_tabs;
pub mod tab_labels;

pub use category_tabs::CategoryTabs;
pub use tab_labels::category_label;
