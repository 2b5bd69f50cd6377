//! Assembly of the final bundle text.

use crate::banner::banner;
use crate::js::{clean_empty_lines, indent_code};
use crate::shim::{exports_code, include_api_code};

/// Settings that shape the text around the concatenated scripts.
#[derive(Debug, Clone, Copy)]
pub struct WrapperOptions<'a> {
    pub package_name: &'a str,
    pub version: Option<&'a str>,
    /// License file contents, not its path.
    pub license: Option<&'a str>,
    pub include_api: bool,
}

/// Concatenate script sources, each followed by a blank line.
pub fn join_sources<S: AsRef<str>>(sources: &[S]) -> String {
    sources.iter().fold(String::new(), |mut out, source| {
        out.push_str(source.as_ref());
        out.push_str("\n\n");
        out
    })
}

/// Wrap already joined sources in an IIFE together with the banner, the
/// export shim and optionally the `includeAPI` helper.
pub fn render(options: &WrapperOptions<'_>, sources: &str) -> String {
    let mut out = banner(options.package_name, options.version, options.license);

    out.push_str("(function() {\n\n");
    out.push_str(&indent_code("  ", &exports_code(options.package_name)));
    out.push_str("\n\n");

    if options.include_api {
        out.push_str(&indent_code("  ", &include_api_code(options.package_name)));
        out.push_str("\n\n");
    }

    out.push_str(&indent_code("  ", sources));
    out.push_str("\n})();\n");

    clean_empty_lines(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(name: &str) -> WrapperOptions<'_> {
        WrapperOptions {
            package_name: name,
            version: None,
            license: None,
            include_api: false,
        }
    }

    #[test]
    fn join_sources_appends_blank_line_after_each() {
        assert_eq!(join_sources(&["a();", "b();"]), "a();\n\nb();\n\n");
        assert_eq!(join_sources::<&str>(&[]), "");
    }

    #[test]
    fn render_single_script() {
        let expected = "\
(function() {

  var exports;
  if ('undefined' !== typeof self) {
    if (!self.app) {
      self.app = {};
    }
    exports = self.app;
  } else if ('undefined' !== typeof window) {
    if (!window.app) {
      window.app = {};
    }
    exports = window.app;
  } else if ('undefined' !== typeof module) {
    exports = module.exports;
  }

  var a = 1;


})();
";
        let out = render(&options("app"), &join_sources(&["var a = 1;"]));
        assert_eq!(out, expected);
    }

    #[test]
    fn render_with_banner_and_include_api() {
        let opts = WrapperOptions {
            version: Some("1.0"),
            license: Some("MIT"),
            include_api: true,
            ..options("app")
        };
        let out = render(&opts, &join_sources(&["x();"]));
        assert!(out.starts_with("// app version 1.0\n//\n// MIT\n(function() {\n\n  var exports;\n"));
        assert!(out.contains("  }\n\n  function includeAPI(name) {\n"));
        assert!(out.contains("    throw new Error('cannot include packages');\n  }\n\n  x();\n"));
        assert!(out.ends_with("\n})();\n"));
    }

    #[test]
    fn render_keeps_comment_line_for_empty_license() {
        let opts = WrapperOptions {
            license: Some(""),
            ..options("app")
        };
        assert!(render(&opts, "").starts_with("// \n(function() {\n"));
    }

    #[test]
    fn render_leaves_no_whitespace_only_lines() {
        let out = render(&options("acme.ui"), &join_sources(&["a();\n\n\nb();"]));
        assert!(out.lines().all(|l| l.is_empty() || !l.trim().is_empty()));
    }
}
