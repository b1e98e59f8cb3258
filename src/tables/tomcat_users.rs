//! Tomcat user credential rows.
//!
//! `tomcat-users.xml` carries a `<tomcat-users>` root whose `<user>` children
//! each name a `username` and `password` attribute. Extraction is strictly
//! all-or-nothing: a malformed document or a `user` missing a required
//! attribute fails the whole call, and no partial list ever reaches the
//! caller.

use std::path::Path;

use roxmltree::Document;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::fs::read_file;

/// One username/password pair, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialPair {
    pub username: String,
    pub password: String,
}

/// Parses Tomcat user configuration from raw XML text.
///
/// Elements other than `user` under the root are ignored, matching the
/// source format's tolerance for `role` declarations and comments.
pub fn credentials(xml: &str) -> Result<Vec<CredentialPair>> {
    let doc = Document::parse(xml).map_err(|err| Error::Parse(err.to_string()))?;
    let root = doc.root_element();
    if !root.has_tag_name("tomcat-users") {
        return Err(Error::Parse(format!(
            "expected root element <tomcat-users>, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut pairs = Vec::new();
    for user in root.children().filter(|node| node.has_tag_name("user")) {
        let username = required_attribute(&user, "username")?;
        let password = required_attribute(&user, "password")?;
        pairs.push(CredentialPair { username, password });
    }
    Ok(pairs)
}

/// Reads `path` and parses it as Tomcat user configuration, propagating the
/// first failure unchanged.
pub fn credentials_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CredentialPair>> {
    let bytes = read_file(path)?;
    let xml = String::from_utf8(bytes).map_err(|err| Error::Parse(err.to_string()))?;
    credentials(&xml)
}

fn required_attribute(node: &roxmltree::Node<'_, '_>, name: &str) -> Result<String> {
    node.attribute(name)
        .map(str::to_string)
        .ok_or_else(|| {
            Error::Parse(format!(
                "user element is missing the required '{name}' attribute"
            ))
        })
}
