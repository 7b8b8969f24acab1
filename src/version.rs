//! Version information with embedded git metadata.

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit SHA at build time, or "unknown" if unavailable.
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// Whether the working tree was dirty at build time.
pub fn git_dirty() -> bool {
    option_env!("VERGEN_GIT_DIRTY") == Some("true")
}

/// Long version string for the CLI: `{version} ({sha})`, with a `-dirty`
/// suffix on the sha for dirty builds.
pub fn version_string() -> String {
    let dirty_suffix = if git_dirty() { "-dirty" } else { "" };
    format!(
        "{PKG_VERSION} ({}{dirty_suffix})",
        &GIT_SHA[..7.min(GIT_SHA.len())]
    )
}

/// `user-agent` sent on the gateway channel.
pub fn user_agent() -> String {
    format!("functionsdk-rust/{PKG_VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_pkg_version() {
        assert!(version_string().starts_with(PKG_VERSION));
    }

    #[test]
    fn user_agent_names_sdk_and_version() {
        let agent = user_agent();
        assert!(agent.starts_with("functionsdk-rust/"));
        assert!(agent.ends_with(PKG_VERSION));
    }
}
