//! Auth feature module covering validation, the submission state machine,
//! form feedback, token persistence, and API client wrappers. It keeps the
//! credential flows out of the UI. Field values pass through here on every
//! submit, so nothing in this module may log them.
//!
//! Flow Overview: a page reads its inputs, asks the flow to begin, renders
//! any validation feedback, and sends the payload when allowed. Once the
//! request settles the flow decides the banner, whether a token is stored,
//! and where (and when) the browser navigates next.

pub mod client;
pub mod feedback;
pub mod flow;
pub mod storage;
pub mod types;
pub mod validate;
