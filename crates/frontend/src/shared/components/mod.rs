pub mod load_state_view;
pub mod not_found;
pub mod page_header;
pub mod resource_list_panel;

pub use load_state_view::LoadStateView;
pub use not_found::NotFound;
pub use page_header::PageHeader;
pub use resource_list_panel::ResourceListPanel;
