use crate::config::LogConfig;

/// Convert an absolute source path to `host/relative-path` form.
///
/// Separators are normalized to `/`, the document-root prefix is stripped,
/// and the host name is prepended with exactly one joining slash. A path that
/// already carries the host prefix passes through unchanged, so applying the
/// conversion twice gives the same result as applying it once.
pub(crate) fn abs_to_rel_path(path: &str, host: &str, document_root: &str) -> String {
    let normalized = path.replace('\\', "/");
    if !host.is_empty()
        && (normalized == host || normalized.starts_with(&format!("{host}/")))
    {
        return normalized;
    }
    let stripped = if document_root.is_empty() {
        normalized.as_str()
    } else {
        normalized
            .strip_prefix(document_root)
            .unwrap_or(normalized.as_str())
    };
    if host.is_empty() {
        return stripped.to_string();
    }
    format!("{host}/{}", stripped.trim_start_matches('/'))
}

/// Host name for relativized paths: config value, then `SERVER_NAME`, then
/// the OS host name, then "".
pub(crate) fn resolve_host(config: &LogConfig) -> String {
    if let Some(host) = &config.host {
        return host.clone();
    }
    if let Ok(host) = std::env::var("SERVER_NAME") {
        return host;
    }
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_default()
}

/// Document root stripped from source paths: config value, then
/// `DOCUMENT_ROOT`, then "". Separators are normalized to `/`.
pub(crate) fn resolve_document_root(config: &LogConfig) -> String {
    let raw = match &config.document_root {
        Some(root) => root.to_string_lossy().into_owned(),
        None => std::env::var("DOCUMENT_ROOT").unwrap_or_default(),
    };
    raw.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_to_rel_path_strips_docroot_and_prepends_host() {
        assert_eq!(
            abs_to_rel_path("/var/www/html/app/index.php", "localhost", "/var/www/html"),
            "localhost/app/index.php"
        );
    }

    #[test]
    fn test_abs_to_rel_path_is_idempotent() {
        let once = abs_to_rel_path("/var/www/html/app/index.php", "localhost", "/var/www/html");
        let twice = abs_to_rel_path(&once, "localhost", "/var/www/html");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_abs_to_rel_path_normalizes_backslashes() {
        assert_eq!(
            abs_to_rel_path("C:\\www\\app\\index.php", "localhost", "C:/www"),
            "localhost/app/index.php"
        );
    }

    #[test]
    fn test_abs_to_rel_path_docroot_with_trailing_slash() {
        assert_eq!(
            abs_to_rel_path("/var/www/html/app/index.php", "localhost", "/var/www/html/"),
            "localhost/app/index.php"
        );
    }

    #[test]
    fn test_abs_to_rel_path_empty_host_keeps_remainder() {
        assert_eq!(
            abs_to_rel_path("/var/www/html/app/index.php", "", "/var/www/html"),
            "/app/index.php"
        );
    }

    #[test]
    fn test_abs_to_rel_path_unmatched_docroot() {
        assert_eq!(
            abs_to_rel_path("/opt/app/main.rs", "web1", "/var/www"),
            "web1/opt/app/main.rs"
        );
    }

    #[test]
    fn test_abs_to_rel_path_relative_source_path() {
        assert_eq!(
            abs_to_rel_path("src/main.rs", "web1", ""),
            "web1/src/main.rs"
        );
    }

    #[test]
    fn test_abs_to_rel_path_path_equal_to_host() {
        assert_eq!(abs_to_rel_path("localhost", "localhost", "/var"), "localhost");
    }

    #[test]
    fn test_resolve_host_prefers_config() {
        let config = LogConfig::new().with_host("web1");
        assert_eq!(resolve_host(&config), "web1");
    }

    #[test]
    fn test_resolve_host_environment_fallbacks() {
        let saved = std::env::var("SERVER_NAME").ok();

        unsafe { std::env::set_var("SERVER_NAME", "env-host") };
        assert_eq!(resolve_host(&LogConfig::new()), "env-host");

        unsafe { std::env::remove_var("SERVER_NAME") };
        let os_host = hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .unwrap_or_default();
        assert_eq!(resolve_host(&LogConfig::new()), os_host);

        if let Some(value) = saved {
            unsafe { std::env::set_var("SERVER_NAME", value) };
        }
    }

    #[test]
    fn test_resolve_document_root_prefers_config_and_normalizes() {
        let config = LogConfig::new().with_document_root("C:\\www\\html");
        assert_eq!(resolve_document_root(&config), "C:/www/html");
    }

    #[test]
    fn test_resolve_document_root_environment_fallback() {
        let saved = std::env::var("DOCUMENT_ROOT").ok();

        unsafe { std::env::set_var("DOCUMENT_ROOT", "/srv/site") };
        assert_eq!(resolve_document_root(&LogConfig::new()), "/srv/site");

        unsafe { std::env::remove_var("DOCUMENT_ROOT") };
        assert_eq!(resolve_document_root(&LogConfig::new()), "");

        if let Some(value) = saved {
            unsafe { std::env::set_var("DOCUMENT_ROOT", value) };
        }
    }
}
