//! The export shim and the optional `includeAPI` helper placed at the top of
//! every bundle.

use crate::js::{indent_code, IfStatement, PackageName};

/// Global objects probed, in order, before falling back to CommonJS.
pub const HOST_GLOBALS: [&str; 2] = ["self", "window"];

/// Declare `exports` and bind it to the package namespace on the first host
/// global that exists, or to `module.exports` under CommonJS.
///
/// Missing objects along the namespace are created on the host global.
pub fn exports_code(package_name: &str) -> String {
    let mut chain = IfStatement::new();
    for object in HOST_GLOBALS {
        let qualified = PackageName::new(format!("{object}.{package_name}"));
        chain = chain.branch(
            format!("'undefined' !== typeof {object}"),
            format!("{}\nexports = {qualified};", qualified.creation_code()),
        );
    }
    chain = chain.branch("'undefined' !== typeof module", "exports = module.exports;");
    format!("var exports;\n{chain}")
}

/// A function `includeAPI(name)` that looks up a sibling package living in
/// the same parent namespace as `package_name`.
pub fn include_api_code(package_name: &str) -> String {
    let mut parent: Vec<&str> = package_name.split('.').collect();
    parent.pop();

    let mut chain = IfStatement::new();
    for object in HOST_GLOBALS {
        let scope = std::iter::once(object)
            .chain(parent.iter().copied())
            .collect::<Vec<_>>()
            .join(".");
        chain = chain.branch(
            format!("'undefined' !== typeof {object}"),
            format!("return {scope}[name];"),
        );
    }
    chain = chain.branch(
        "'function' === typeof require",
        "return require('./' + name + '.js');",
    );

    format!(
        "function includeAPI(name) {{\n{}\n  throw new Error('cannot include packages');\n}}",
        indent_code("  ", &chain.to_string())
    )
}
