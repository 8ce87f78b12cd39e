use std::fmt;

/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub build_date: &'static str,
    pub profile: &'static str,
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("BUDGET_TRACKER_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("BUDGET_TRACKER_BUILD_STATUS").unwrap_or("unknown"),
        build_date: option_env!("BUDGET_TRACKER_BUILD_DATE").unwrap_or("unknown"),
        profile: option_env!("BUDGET_TRACKER_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "budget_tracker {} ({} {}, built {} [{}])",
            self.version, self.git_hash, self.git_status, self.build_date, self.profile
        )
    }
}
