//! The moderation list controller behind every admin screen of the alumni
//! portal: fetch a collection, narrow it client-side, act on one entity at a
//! time, and show a single entity in detail.
//!
//! Each screen is the same controller parameterized by an
//! [`EndpointConfig`] and an entity type implementing [`Moderated`] and
//! [`Presentable`].

pub mod auth;
pub mod controller;
pub mod detail;
pub mod driver;
pub mod endpoint;
pub mod entity;
pub mod error;
pub mod filter;

pub use auth::{AuthAccessor, AuthError, AuthSession, SessionReader};
pub use controller::{
    ActionOutcome, ActionRefused, Confirmation, Effect, FetchOutcome,
    ListController,
};
pub use detail::{DetailField, DetailSection, PLACEHOLDER, Presentable};
pub use driver::{ModerationList, fetch_collection, send_action};
pub use endpoint::{EndpointConfig, ModerationAction};
pub use entity::{Facet, FacetMatch, Moderated};
pub use error::ControllerError;
pub use filter::{FilterState, StatusTab};
