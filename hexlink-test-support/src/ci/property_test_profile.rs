//! Property-test run profile read from the environment.
//!
//! Lets CI raise case counts (or fork every case) for the property suites
//! without touching the suites themselves.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "HEXLINK_PBT_CASES";
/// Environment variable enabling forked proptest execution.
pub const FORK_ENV_KEY: &str = "HEXLINK_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads the profile, falling back to the supplied defaults when a
    /// variable is unset or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexlink_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(128, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: env_override(CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: env_override(FORK_ENV_KEY, parse_switch).unwrap_or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn env_override<T>(key: &'static str, parse: fn(&str) -> Result<T, String>) -> Option<T> {
    let raw = env::var(key).ok()?;
    match parse(&raw) {
        Ok(value) => Some(value),
        Err(reason) => {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason = %reason,
                "ignoring malformed property-test override",
            );
            None
        }
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("case count must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("not a case count: {error}")),
    }
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("`{other}` is not a boolean switch")),
    }
}
