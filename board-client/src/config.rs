use std::env;

pub const DEFAULT_SERVER_HOSTNAME: &str = "http://localhost:7002";
const SERVER_HOSTNAME_VAR: &str = "SERVER_HOSTNAME";

/// API base URL: the `--server` flag, then `SERVER_HOSTNAME`, then the default
pub fn server_hostname(flag: Option<String>) -> String {
    resolve_server_hostname(flag, env::var(SERVER_HOSTNAME_VAR).ok())
}

fn resolve_server_hostname(flag: Option<String>, from_env: Option<String>) -> String {
    let chosen = flag
        .into_iter()
        .chain(from_env)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty());

    match chosen {
        Some(value) => value.trim_end_matches('/').to_string(),
        None => {
            log::info!("{SERVER_HOSTNAME_VAR} not set; using {DEFAULT_SERVER_HOSTNAME}");
            DEFAULT_SERVER_HOSTNAME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(
            resolve_server_hostname(
                Some("http://flag:1".to_string()),
                Some("http://env:2".to_string())
            ),
            "http://flag:1"
        );
    }

    #[test]
    fn falls_back_to_environment_then_default() {
        assert_eq!(
            resolve_server_hostname(None, Some("http://env:2/".to_string())),
            "http://env:2"
        );
        assert_eq!(
            resolve_server_hostname(Some("  ".to_string()), None),
            DEFAULT_SERVER_HOSTNAME
        );
    }
}
