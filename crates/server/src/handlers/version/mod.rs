mod get_version;

pub use get_version::{VersionResponse, get_version};
