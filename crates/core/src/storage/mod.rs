mod error;
mod traits;

pub use error::{RepositoryError, Result, StorageError, StorageResult};
pub use traits::{ContactRepository, UploadSigner};
