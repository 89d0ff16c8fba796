mod dashboard;
mod login;
mod moderation_screen;
mod not_found;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use moderation_screen::ModerationScreen;
pub use not_found::NotFoundPage;
