//! Compile-time build information.
//!
//! Shown by the `version` subcommand and written next to every saved report,
//! so a JSON file can be traced back to the engine that produced it.

use serde::Serialize;

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Build stamp attached to saved reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
    pub profile: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: PKG_VERSION,
            commit: BUILD_COMMIT,
            date: BUILD_DATE,
            profile: BUILD_PROFILE,
        }
    }

    pub fn is_release(&self) -> bool {
        self.profile == "release"
    }
}

/// `pityplan 0.1.0 (2026-10-16 abc1234)`, plus ` [debug]` outside release builds.
pub fn version_line() -> String {
    let info = BuildInfo::current();
    let mut line = format!("pityplan {} ({} {})", info.version, info.date, info.commit);
    if !info.is_release() {
        line.push_str(&format!(" [{}]", info.profile));
    }
    line
}
