//! Catalog request submission
//!
//! Submitting an item or record producer runs in three steps:
//! 1. Execution - call `order_now` / `submit_producer`
//! 2. Classification - decide whether a parent request or a final record
//!    came back ([`classify`])
//! 3. Resolution - for a parent request, look up its first requested item
//!    and settle on one record ([`resolve`])
//!
//! Classification and resolution are pure; all I/O and progress reporting
//! lives in [`submit_catalog_request`].

mod classify;
mod execute;
mod progress;
mod request;
mod resolve;

pub use classify::{classify, RemoteRecordShape, REQUEST_TABLE};
pub use execute::submit_catalog_request;
pub use progress::{NoopProgress, Phase, ProgressCallback, TracingProgress};
pub use request::SubmitParams;
pub use resolve::{child_lookup_target, resolve, RequestedItem};
