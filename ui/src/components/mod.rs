pub mod action_buttons;
pub mod detail_modal;
pub mod filter_bar;
pub mod layout;
pub mod modal;
pub mod moderation_table;
pub mod require_auth;
pub mod status_badge;
pub mod toast;

pub use action_buttons::ActionButtons;
pub use detail_modal::DetailModal;
pub use filter_bar::{FacetView, FilterBar};
pub use modal::{ConfirmationModal, Modal};
pub use moderation_table::{ModerationTable, RowView};
pub use require_auth::RequireAuth;
pub use status_badge::StatusBadge;
pub use toast::ToastContainer;
