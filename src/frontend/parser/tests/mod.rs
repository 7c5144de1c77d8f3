//! Parser tests module

mod ambiguity;

/// Notice and header shared by the test sources
pub(super) const PREAMBLE: &str = "/*\nNotice.\n*/\n\n/*\nPackage widgets.\n*/\npackage widgets\n";

/// Source made of the preamble followed by `body`
pub(super) fn source(body: &str) -> String {
    format!("{}{}", PREAMBLE, body)
}

/// Source with a single instance whose interface body is `body`
pub(super) fn instance_source(body: &str) -> String {
    source(&format!(
        "\n// INTERFACES\n\n// Instances\n\n/*\nW.\n*/\ntype WidgetLike interface {{{}\n}}\n",
        body
    ))
}
