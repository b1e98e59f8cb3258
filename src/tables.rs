//! Fixed-schema row extractors, one module per table they feed.

pub mod apps;
pub mod tomcat_users;
