//! Icon name resolution from export syntax.

use std::sync::LazyLock;

use regex::Regex;

static EXPORT_BINDING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s*\{\s*(\w+)").unwrap());
static EXPORT_FUNCTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+(?:default\s+)?function\s+(\w+)").unwrap());
static EXPORT_CONST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+const\s+(\w+)").unwrap());

/// Name bound by the first `export { Name ... }` clause of a compiled module.
pub fn compiled_export_name(content: &str) -> Option<&str> {
    first_capture(&EXPORT_BINDING_REGEX, content)
}

/// Name of a source component: exported function first, then exported const.
pub fn source_export_name(content: &str) -> Option<&str> {
    first_capture(&EXPORT_FUNCTION_REGEX, content)
        .or_else(|| first_capture(&EXPORT_CONST_REGEX, content))
}

fn first_capture<'a>(regex: &Regex, content: &'a str) -> Option<&'a str> {
    regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_export_name() {
        assert_eq!(
            compiled_export_name("var a=1;\nexport {\n  IconArrow as default\n};"),
            Some("IconArrow")
        );
        assert_eq!(compiled_export_name("export{IconX}"), Some("IconX"));
        assert_eq!(compiled_export_name("exports.IconX = IconX;"), None);
    }

    #[test]
    fn test_source_export_name_prefers_function() {
        let content = "export const helper = 1;\nexport function Star() { return null; }";
        assert_eq!(source_export_name(content), Some("Star"));
    }

    #[test]
    fn test_source_export_name_default_function() {
        assert_eq!(
            source_export_name("export default function Bell(props) {}"),
            Some("Bell")
        );
    }

    #[test]
    fn test_source_export_name_const() {
        assert_eq!(
            source_export_name("export const Bell = (props: Props) => <svg />;"),
            Some("Bell")
        );
        assert_eq!(source_export_name("export default Bell;"), None);
    }
}
