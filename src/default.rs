use crate::config::Config;

/// `<app_name>/<app_version>`, followed by one space and the config's
/// trimmed append value taken verbatim, if there is one.
///
/// Unlike [`UserAgent::from_config`](crate::UserAgent::from_config) the
/// suffix is not parsed, so it is kept exactly as given.
pub fn build_default(app_name: &str, app_version: &str, config: &Config) -> String {
    let mut ua = format!("{app_name}/{app_version}");
    if let Some(extra) = config.append_value() {
        ua.push(' ');
        ua.push_str(extra);
        tracing::debug!(user_agent = %ua, "using modified User-Agent");
    }
    ua
}
