//! contactbox_core - functional core shared by the contactbox server and client.
//!
//! Pure data types, validation and key derivation live here. Nothing in this
//! crate performs I/O; collaborators are described by the traits in [`storage`].

pub mod api;
pub mod contact;
pub mod storage;
