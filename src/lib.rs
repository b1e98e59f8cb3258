//! `fs-tables` extracts fixed-schema rows from semi-structured files that live
//! on the local system: application bundle metadata (`Info.plist` files inside
//! `.app` bundles) and Tomcat user credential configuration.
//!
//! The crate has two layers. [`fs`] offers fallible filesystem primitives
//! (existence, permission probes, directory listing, whole-file read/write)
//! that report every failure as a typed [`Error`] kind instead of panicking or
//! leaking raw OS errors. [`tables`] projects already-parsed markup trees into
//! closed-schema records ([`AppMetadataRow`], [`CredentialPair`]) suitable for
//! registration as rows in an external tabular query layer.

mod error;
pub mod fs;
pub mod tables;

pub use error::{Error, Result};

pub use fs::{
    is_directory, is_readable, is_writable, list_directory, parent_directory, path_exists,
    read_file, write_text_file,
};
pub use tables::apps::{
    app_metadata, bundle_name_from_plist_path, bundle_path_from_plist_path, AppMetadataRow,
    PlistTree,
};
pub use tables::tomcat_users::{credentials, credentials_from_path, CredentialPair};
