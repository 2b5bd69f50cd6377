//! Comment header written above the wrapper.

use crate::js::comment_out;

/// Render the banner: a `<name> version <version>` line when a version is
/// given, then the license text as line comments, separated by a bare `//`
/// line when both are present.
///
/// An empty version counts as absent. A license is always written once
/// given, so an empty license file still yields a bare `// ` line.
pub fn banner(package_name: &str, version: Option<&str>, license: Option<&str>) -> String {
    let version = version.filter(|v| !v.is_empty());

    let mut out = String::new();
    if let Some(version) = version {
        out.push_str(&comment_out(&format!("{package_name} version {version}")));
        out.push('\n');
    }
    if version.is_some() && license.is_some() {
        out.push_str("//\n");
    }
    if let Some(license) = license {
        out.push_str(&comment_out(license));
        out.push('\n');
    }
    out
}
