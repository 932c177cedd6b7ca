// src/constants.rs
//
// Application-wide constants: REST paths and the fixed user-facing messages.
// Each constant is documented with its purpose and usage context.

/// Collection path of the notes resource.
///
/// Create posts to this path, list gets it, update/destroy append `/<id>`.
///
/// Used in: `application/notes.rs`, `infrastructure/config.rs`
pub const NOTES_PATH: &str = "/note";

/// Path of the account sub-resource (password change, account removal).
///
/// Used in: `application/account.rs`, `infrastructure/config.rs`
pub const ACCOUNT_PATH: &str = "/account";

/// Query parameter carrying the server-side search term on list requests.
///
/// Used in: `application/notes.rs`
pub const SEARCH_PARAM: &str = "search";

/// Confirmation shown when an operation resolves.
///
/// Used in: `ports/report.rs`
pub const MSG_SUCCESS: &str = "Successfully completed.";

/// Shown for any failure that is not a connectivity problem. The raw error
/// or server body is never displayed.
///
/// Used in: `ports/report.rs`
pub const MSG_FAILURE: &str = "Something unexpected happened. Please try again later.";

/// Shown when the request never reached the server.
///
/// Used in: `ports/report.rs`
pub const MSG_NETWORK_ERROR: &str = "Network error. Please check your connection.";

/// Request timeout applied when the configuration does not override it.
///
/// Used in: `infrastructure/http.rs`, `infrastructure/config.rs`
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
