//! Object storage client for the pictor generation relay.
//!
//! Uploads generated artifacts to a GCS bucket over the JSON upload API and
//! returns the public object URL. Object paths are generated fresh per
//! upload, so uploads are idempotent per path in practice.

mod gcs;
mod path;

pub use gcs::{GcsClient, public_url};
pub use path::{extension_for, object_path};
