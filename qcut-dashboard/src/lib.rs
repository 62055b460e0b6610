//! QCut Dashboard - venue operator dashboard core
//!
//! Client-side state for the venue dashboard: the authentication
//! session, the pure filter/sort model shared by the History and Menu
//! views, the per-view remote record stores, and the drink size
//! editor. Rendering, routing and HTTP transport live outside this
//! crate; the toast notifier and token storage are seams.

pub mod editor;
pub mod filter;
pub mod logging;
pub mod notify;
pub mod session;
pub mod token_store;
pub mod views;

pub use editor::{DrinkEditor, SizeEditor, SizeRow};
pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use session::{reduce, Action, AppState, RouteRole, Session, SessionPhase, VenueBinding};
pub use token_store::TokenStore;
pub use views::{HistoryView, MenuView};

// Re-export the client and shared types for embedders
pub use qcut_client;
pub use shared;
