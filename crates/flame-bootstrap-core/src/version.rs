//! Flame version extraction from install paths.
//!
//! Flame installs live in directories named after the product and release,
//! for example:
//!
//! ```text
//! /usr/discreet/flameassist_2015.2/bin/startApplication        --> (2015, 2, "2015.2")
//! /usr/discreet/flameassist_2016.0.0.322/bin/startApplication  --> (2016, 0, "2016.0.0.322")
//! /usr/discreet/flameassist_2015.2.pr99/bin/startApplication   --> (2015, 2, "2015.2.pr99")
//! /usr/discreet/flare_2016.pr50/bin/startApplication           --> (2016, 0, "2016.pr50")
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, BootstrapResult};

/// Oldest release the integration runs on: 2015 extension 2.
pub const MINIMUM_SUPPORTED: (u64, u64) = (2015, 2);

/// First release that ships its own wiretap API and per-version Python.
const SELF_CONTAINED_MAJOR: u64 = 2016;

static INSTALL_DIR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/fla[mr]e[^_]*_([^/]+)/").expect("install dir pattern is a valid regex")
});

/// A Flame release as encoded in its install directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlameVersion {
    /// Leading numeric segment, 0 when not numeric.
    pub major: u64,
    /// Second numeric segment, 0 when missing or not numeric.
    pub minor: u64,
    /// The version text exactly as it appears in the path.
    pub raw: String,
}

impl FlameVersion {
    /// Extract the version from an application path.
    pub fn from_app_path(app_path: &str) -> BootstrapResult<Self> {
        let raw = INSTALL_DIR_PATTERN
            .captures(app_path)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| BootstrapError::VersionParse {
                path: app_path.to_string(),
            })?
            .as_str();

        Ok(Self::parse(raw))
    }

    /// Split a bare version string into its numeric components.
    ///
    /// Segments past the second are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut chunks = raw.split('.');
        let major = chunks.next().map_or(0, numeric_segment);
        let minor = chunks.next().map_or(0, numeric_segment);

        Self {
            major,
            minor,
            raw: raw.to_string(),
        }
    }

    /// Whether this release meets [`MINIMUM_SUPPORTED`].
    pub fn is_supported(&self) -> bool {
        (self.major, self.minor) >= MINIMUM_SUPPORTED
    }

    /// 2015-era releases need the wiretap API and Python 2.6.9 layout that
    /// predate per-version installs.
    pub const fn is_legacy(&self) -> bool {
        self.major < SELF_CONTAINED_MAJOR
    }
}

impl fmt::Display for FlameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// All-digit segments too large for `u64` saturate rather than reading as 0.
fn numeric_segment(segment: &str) -> u64 {
    if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
        segment.parse().unwrap_or(u64::MAX)
    } else {
        0
    }
}
