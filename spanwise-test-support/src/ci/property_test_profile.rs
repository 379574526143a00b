//! Proptest tuning read from the environment.
//!
//! `PROGTEST_CASES` overrides the number of cases per property and
//! `SPANWISE_PBT_FORK` runs each case in a forked child.
//! `SPANWISE_MST_PBT_REPETITIONS` sets how many times repeatability suites
//! re-run a computation per case. Malformed values are logged and ignored so
//! a typo never silently disables a suite.

use std::env;

use proptest::test_runner::Config;
use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const SPANWISE_PBT_FORK_ENV_KEY: &str = "SPANWISE_PBT_FORK";
/// Environment variable controlling repeatability re-runs per case.
pub const SPANWISE_MST_PBT_REPETITIONS_ENV_KEY: &str = "SPANWISE_MST_PBT_REPETITIONS";

/// Why an override was ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count was not a positive integer.
    #[error("`{raw}` is not a positive case count")]
    Cases {
        /// Value as read from the environment.
        raw: String,
    },
    /// The repetition count was below two.
    #[error("`{raw}` is not a repetition count of at least 2")]
    Repetitions {
        /// Value as read from the environment.
        raw: String,
    },
    /// The flag was not a recognised boolean spelling.
    #[error("`{raw}` is not one of true/false/1/0/yes/no/on/off")]
    Flag {
        /// Value as read from the environment.
        raw: String,
    },
}

/// Resolved settings for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the process environment.
    ///
    /// # Examples
    /// ```
    /// use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// assert_eq!(profile.config().cases, profile.cases());
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Reads overrides through `lookup` instead of the process environment.
    #[must_use]
    pub fn from_lookup<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cases = resolve(PROGTEST_CASES_ENV_KEY, default_cases, &lookup, parse_cases);
        let fork = resolve(SPANWISE_PBT_FORK_ENV_KEY, default_fork, &lookup, parse_flag);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked child process.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }

    /// Builds a proptest configuration carrying this profile.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            cases: self.cases,
            fork: self.fork,
            ..Config::default()
        }
    }
}

/// Reads the repeatability re-run count from the process environment.
///
/// # Examples
/// ```
/// use spanwise_test_support::ci::property_test_profile::load_repetitions;
///
/// assert!(load_repetitions(5) >= 2);
/// ```
#[must_use]
pub fn load_repetitions(default: usize) -> usize {
    repetitions_from_lookup(default, |key| env::var(key).ok())
}

/// Reads the repeatability re-run count through `lookup`.
#[must_use]
pub fn repetitions_from_lookup<F>(default: usize, lookup: F) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    resolve(
        SPANWISE_MST_PBT_REPETITIONS_ENV_KEY,
        default,
        &lookup,
        parse_repetitions,
    )
}

fn resolve<T, L, P>(key: &'static str, default: T, lookup: &L, parse: P) -> T
where
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, OverrideError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %error, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(cases) if cases > 0 => Ok(cases),
        _ => Err(OverrideError::Cases {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_repetitions(raw: &str) -> Result<usize, OverrideError> {
    match raw.trim().parse::<usize>() {
        Ok(repetitions) if repetitions >= 2 => Ok(repetitions),
        _ => Err(OverrideError::Repetitions {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::Flag {
            raw: raw.to_owned(),
        }),
    }
}
