//! Storyblok Management API client.
//!
//! Fetches the component groups and component definitions of a space, paging
//! through the listing endpoints until exhausted. Retrieval is read-only and
//! performed once per generation run.
//!
//! # Example
//!
//! ```no_run
//! use storytypes_client::Client;
//!
//! let client = Client::new("oauth-token")?;
//! let groups = client.component_groups("12345")?;
//! let components = client.components("12345")?;
//! println!("{} components in {} groups", components.len(), groups.len());
//! # Ok::<(), storytypes_client::ClientError>(())
//! ```

mod client;

pub use client::{Client, ClientError, DEFAULT_BASE_URL};
