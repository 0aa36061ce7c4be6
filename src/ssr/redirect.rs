/// Post-login destination.
///
/// `redirect_to` comes from a cookie, so only local absolute paths are
/// trusted. Anything else sends the user to the application root.
pub fn resolve_redirect(redirect_to: Option<&str>, app_sub_url: &str) -> String {
    match redirect_to.filter(|path| is_local_path(path)) {
        Some(path) if app_sub_url.is_empty() || path.starts_with(app_sub_url) => path.to_string(),
        Some(path) => format!("{app_sub_url}{path}"),
        None => format!("{app_sub_url}/"),
    }
}

/// Browsers drop tabs and newlines before parsing, so `/\t/host` would
/// become `//host`. Control characters are refused outright.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(|c| c.is_ascii_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_root() {
        assert_eq!(resolve_redirect(None, ""), "/");
        assert_eq!(resolve_redirect(None, "/portal"), "/portal/");
    }

    #[test]
    fn keeps_local_path() {
        assert_eq!(resolve_redirect(Some("/d/abc?orgId=1"), ""), "/d/abc?orgId=1");
    }

    #[test]
    fn prefixes_sub_url_once() {
        assert_eq!(resolve_redirect(Some("/d/abc"), "/portal"), "/portal/d/abc");
        assert_eq!(
            resolve_redirect(Some("/portal/d/abc"), "/portal"),
            "/portal/d/abc"
        );
    }

    #[test]
    fn ignores_foreign_targets() {
        for target in [
            "https://evil.example",
            "//evil.example/x",
            "/\\evil.example",
            "/\t/evil.example",
            "/\n/evil.example",
            "/\r\n/evil.example",
            "relative/path",
        ] {
            assert_eq!(resolve_redirect(Some(target), ""), "/", "{target:?}");
        }
    }

    #[test]
    fn control_characters_never_reach_the_location() {
        let target = resolve_redirect(Some("/\t/evil.example"), "");
        let as_browser_parses: String = target
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();
        assert!(!as_browser_parses.starts_with("//"), "{as_browser_parses}");
        assert_eq!(
            resolve_redirect(Some("/d/a\u{7f}b"), "/portal"),
            "/portal/"
        );
    }
}
