mod use_logout;
mod use_moderation_list;
mod use_system_theme;
mod use_title;

pub use use_logout::use_logout;
pub use use_moderation_list::{
    FetchReport, ScreenList, spawn_refresh, use_moderation_list,
};
pub use use_system_theme::use_system_theme;
pub use use_title::use_title;
