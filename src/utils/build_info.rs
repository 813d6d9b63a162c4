/// Build details captured by `build.rs` at compile time.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    /// Label/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("Commit", format!("{} ({})", self.git_hash, self.git_status)),
            ("Built", self.timestamp.to_string()),
            ("Target", self.target.to_string()),
            ("Profile", self.profile.to_string()),
            ("Compiler", self.rustc.to_string()),
        ]
    }
}

macro_rules! build_env {
    ($name:literal) => {
        match option_env!($name) {
            Some(value) => value,
            None => "unknown",
        }
    };
}

pub const CURRENT: BuildMetadata = BuildMetadata {
    version: env!("CARGO_PKG_VERSION"),
    git_hash: build_env!("HOUSE_LEDGER_BUILD_HASH"),
    git_status: build_env!("HOUSE_LEDGER_BUILD_STATUS"),
    timestamp: build_env!("HOUSE_LEDGER_BUILD_TIMESTAMP"),
    target: build_env!("HOUSE_LEDGER_BUILD_TARGET"),
    profile: build_env!("HOUSE_LEDGER_BUILD_PROFILE"),
    rustc: build_env!("HOUSE_LEDGER_BUILD_RUSTC"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_comes_from_the_manifest() {
        assert_eq!(CURRENT.version, env!("CARGO_PKG_VERSION"));
        assert!(CURRENT.fields()[0].1.contains('('));
    }
}
