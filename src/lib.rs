//! Dropbox desktop client library
//!
//! - `auth`: OAuth2 authorization-code flow (no redirect), exchanging the code for an access token
//! - `info`: current account profile retrieval
//! - `list`: recursive folder listing with cursor pagination and human-readable formatting
//!
//! All remote calls go through the Dropbox HTTP API v2 and are issued one at
//! a time; a failed call aborts the current operation only and is reported by
//! the caller.
//!
//! # Quick Start
//! ```no_run
//! use dbx_client::{
//!     files::{print_tree, FilesClient},
//!     Client, RequestConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> dbx_client::ApiResult<()> {
//!     let config = RequestConfig::new("desktop-client");
//!     let client = Client::new(&config)?;
//!
//!     let files = FilesClient::new(client, "access-token");
//!     let mut out = std::io::stdout();
//!     print_tree(&files, "/Documents", &mut out).await?;
//!
//!     Ok(())
//! }
//! ```
mod dbx;

pub use dbx::files;
pub use dbx::oauth2;
pub use dbx::users;
pub use dbx::{ApiResult, Client, Error, RequestConfig};
