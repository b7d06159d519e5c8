//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or host events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing web requests or hiding the plugin pane.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The plugin shim (`main.rs`)
//! executes these actions in sequence.
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::Action;
//! use rolodex::client::ProfileClient;
//!
//! let client = ProfileClient::new("https://randomuser.me/api/", "us")?;
//! let actions = vec![Action::FetchProfiles(client.fetch_request(12))];
//! # Ok::<(), rolodex::DirectoryError>(())
//! ```

use crate::client::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,

    /// Asks the host to perform the profile batch GET.
    ///
    /// The result comes back as a `WebRequestResult` event carrying the
    /// request's context.
    FetchProfiles(FetchRequest),
}
