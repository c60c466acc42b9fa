//! Upload signing backend implementations.
//!
//! Concrete implementations of [`UploadSigner`], selected at compile time.
//!
//! # Feature Flags
//!
//! - `local` (default): unsigned URLs against a local endpoint, for development and tests
//! - `s3`: presigned `PutObject` requests using `aws-sdk-s3`
//!
//! These features are mutually exclusive.
//!
//! [`UploadSigner`]: contactbox_core::storage::UploadSigner

#[cfg(all(feature = "local", feature = "s3"))]
compile_error!(
    "Features 'local' and 's3' are mutually exclusive. \
    Enable only one signing backend at a time."
);

#[cfg(not(any(feature = "local", feature = "s3")))]
compile_error!(
    "No signing backend selected. Enable 'local' or 's3' feature. \
    Example: cargo build -p contactbox --features local"
);

#[cfg(feature = "local")]
mod local;

#[cfg(feature = "s3")]
mod s3;

#[cfg(feature = "local")]
pub use local::LocalSigner;

#[cfg(feature = "s3")]
pub use s3::S3Signer;
