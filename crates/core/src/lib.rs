//! Domain logic for the guestbook service.
//!
//! Pure types and functions only -- no I/O, no driver types. The HTTP and
//! datastore layers live in `guestbook-api` and `guestbook-db`.

pub mod error;
pub mod submission;
