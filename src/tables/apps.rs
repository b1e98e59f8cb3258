//! Application bundle metadata rows.
//!
//! macOS application bundles are directories named `<Name>.app` holding a
//! `Contents/Info.plist` metadata file. This module projects an
//! already-parsed property-list tree plus the plist's path into a closed
//! 16-field [`AppMetadataRow`]. The `name` and `path` columns come purely
//! from path segmentation; everything else comes from the tree under a fixed
//! key mapping, degrading to the empty string when a key is absent.

use serde::Serialize;

use crate::error::{Error, Result};

const INFO_PLIST_SUFFIX: &str = "/Contents/Info.plist";

/// Read-only view over a parsed property-list tree.
///
/// Keys are dotted paths; intermediate segments traverse dictionaries and
/// the final segment is rendered to a string if it names a scalar. Keeping
/// this a trait leaves the extractor agnostic to which markup parser
/// produced the tree.
pub trait PlistTree {
    fn get(&self, key_path: &str) -> Option<String>;
}

impl PlistTree for plist::Value {
    fn get(&self, key_path: &str) -> Option<String> {
        let mut segments = key_path.split('.');
        let mut node = self;
        let last = segments.next_back()?;
        for segment in segments {
            node = node.as_dictionary()?.get(segment)?;
        }
        scalar_to_string(node.as_dictionary()?.get(last)?)
    }
}

fn scalar_to_string(value: &plist::Value) -> Option<String> {
    match value {
        plist::Value::String(text) => Some(text.clone()),
        plist::Value::Boolean(flag) => Some(if *flag { "1" } else { "0" }.to_string()),
        plist::Value::Integer(number) => number
            .as_signed()
            .map(|signed| signed.to_string())
            .or_else(|| number.as_unsigned().map(|unsigned| unsigned.to_string())),
        plist::Value::Real(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Extracts `<BundleName>.app` from a path shaped
/// `.../<BundleName>.app/Contents/Info.plist`.
///
/// Segmentation uses `/` as the only boundary, so bundle names with embedded
/// spaces survive, and any ancestor depth works. Fails with
/// `InvalidArgument` when the suffix is missing.
pub fn bundle_name_from_plist_path(plist_path: &str) -> Result<String> {
    let bundle_path = strip_info_plist_suffix(plist_path)?;
    let name = match bundle_path.rsplit_once('/') {
        Some((_, last)) => last,
        None => bundle_path,
    };
    Ok(name.to_string())
}

/// Extracts the bundle root (`.../<BundleName>.app`) from an `Info.plist`
/// path of the same fixed shape.
pub fn bundle_path_from_plist_path(plist_path: &str) -> Result<String> {
    strip_info_plist_suffix(plist_path).map(str::to_string)
}

fn strip_info_plist_suffix(plist_path: &str) -> Result<&str> {
    plist_path.strip_suffix(INFO_PLIST_SUFFIX).ok_or_else(|| {
        Error::InvalidArgument(format!(
            "not a bundle Info.plist path: {plist_path}"
        ))
    })
}

/// One row of the apps table: a closed schema of 16 string columns.
///
/// Every column is always present; source data that lacks a key yields an
/// empty string, never an error and never a missing field. Serializes in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppMetadataRow {
    pub name: String,
    pub path: String,
    pub bundle_executable: String,
    pub bundle_identifier: String,
    pub bundle_name: String,
    pub bundle_short_version: String,
    pub bundle_version: String,
    pub bundle_package_type: String,
    pub compiler: String,
    pub development_region: String,
    pub display_name: String,
    pub info_string: String,
    pub minimum_system_version: String,
    pub category: String,
    pub applescript_enabled: String,
    pub copyright: String,
}

impl AppMetadataRow {
    pub const COLUMNS: [&'static str; 16] = [
        "name",
        "path",
        "bundle_executable",
        "bundle_identifier",
        "bundle_name",
        "bundle_short_version",
        "bundle_version",
        "bundle_package_type",
        "compiler",
        "development_region",
        "display_name",
        "info_string",
        "minimum_system_version",
        "category",
        "applescript_enabled",
        "copyright",
    ];

    /// Column/value pairs in schema order, for the tabular query layer.
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name),
            ("path", self.path),
            ("bundle_executable", self.bundle_executable),
            ("bundle_identifier", self.bundle_identifier),
            ("bundle_name", self.bundle_name),
            ("bundle_short_version", self.bundle_short_version),
            ("bundle_version", self.bundle_version),
            ("bundle_package_type", self.bundle_package_type),
            ("compiler", self.compiler),
            ("development_region", self.development_region),
            ("display_name", self.display_name),
            ("info_string", self.info_string),
            ("minimum_system_version", self.minimum_system_version),
            ("category", self.category),
            ("applescript_enabled", self.applescript_enabled),
            ("copyright", self.copyright),
        ]
    }
}

/// Projects an `Info.plist` tree into an [`AppMetadataRow`].
///
/// Never fails: `name` and `path` derive exclusively from `plist_path`
/// (empty when the path shape is wrong, which keeps the no-fail contract),
/// and the remaining 14 columns come from a fixed, exhaustive key mapping
/// where an absent key means an empty string.
pub fn app_metadata(plist_path: &str, tree: &impl PlistTree) -> AppMetadataRow {
    let field = |key: &str| tree.get(key).unwrap_or_default();
    AppMetadataRow {
        name: bundle_name_from_plist_path(plist_path).unwrap_or_default(),
        path: bundle_path_from_plist_path(plist_path).unwrap_or_default(),
        bundle_executable: field("CFBundleExecutable"),
        bundle_identifier: field("CFBundleIdentifier"),
        bundle_name: field("CFBundleName"),
        bundle_short_version: field("CFBundleShortVersionString"),
        bundle_version: field("CFBundleVersion"),
        bundle_package_type: field("CFBundlePackageType"),
        compiler: field("DTCompiler"),
        development_region: field("CFBundleDevelopmentRegion"),
        display_name: field("CFBundleDisplayName"),
        info_string: field("CFBundleGetInfoString"),
        minimum_system_version: field("LSMinimumSystemVersion"),
        category: field("LSApplicationCategoryType"),
        applescript_enabled: field("NSAppleScriptEnabled"),
        copyright: field("NSHumanReadableCopyright"),
    }
}
