use git_version::git_version;

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

/// One-line build description served by the health endpoint.
pub fn version_string() -> String {
    let profile = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    let latest = option_env!("LATEST_TAG").unwrap_or("");
    let ahead = option_env!("COMMITS_AHEAD").unwrap_or("");
    let channel = match option_env!("RELEASE_VERSION") {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ if !latest.is_empty() && !ahead.is_empty() => format!("{latest}+{ahead}"),
        _ if !latest.is_empty() => format!("{latest}+"),
        _ => "development".to_string(),
    };

    format!(
        "{} {} ({}, {} build)",
        env!("CARGO_PKG_NAME"),
        channel,
        COMMIT,
        profile
    )
}
