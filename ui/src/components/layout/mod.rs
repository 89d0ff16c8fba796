mod admin_layout;
mod sidebar;

pub use admin_layout::AdminLayout;
pub use sidebar::Sidebar;
