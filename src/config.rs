//! Numeric configuration shared by all containers.
//!
//! The configuration is thread-local. Every thread starts out with
//! [`Config::DEFAULT`] and only observes changes made on that thread through
//! [`configure`], [`replace`], [`reset`] or the scoped overrides
//! [`with_config`] and [`with_epsilon`]. Equality, formatting and validation
//! read the configuration at call time, so changing it affects containers
//! that already exist.

use crate::error::{MathError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{cell::Cell, collections::BTreeMap, fs, path::Path};

/// Configuration parameters for numeric containers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tolerance used for approximate equality and for rounding values
    /// before they are displayed.
    pub epsilon: f64,
    /// Whether every mutation validates that the container holds only
    /// finite values.
    pub debug_checks: bool,
    /// Number of significant digits used when displaying values.
    pub precision: usize,
    /// Whether displayed containers are prefixed with their type name.
    pub print_types: bool,
    /// Whether displayed angles are converted to degrees.
    pub print_degrees: bool,
    /// Whether matrices are displayed row by row rather than in storage
    /// order.
    pub print_row_major: bool,
}

/// A value for one of the recognized configuration options.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
}

/// The keys accepted by [`configure`].
pub const OPTION_KEYS: [&str; 6] = [
    "epsilon",
    "debug_checks",
    "precision",
    "print_types",
    "print_degrees",
    "print_row_major",
];

thread_local! {
    static CONFIG: Cell<Config> = const { Cell::new(Config::DEFAULT) };
}

impl Config {
    pub const DEFAULT: Self = Self {
        epsilon: 1e-12,
        debug_checks: false,
        precision: 4,
        print_types: false,
        print_degrees: false,
        print_row_major: true,
    };

    /// Returns a copy of this configuration with the given option set to the
    /// given value.
    ///
    /// # Errors
    /// Returns [`MathError::UnknownOption`] if `key` is not one of
    /// [`OPTION_KEYS`], and [`MathError::InvalidOptionValue`] if the value
    /// has the wrong kind or is out of range.
    pub fn with_option(mut self, key: &str, value: OptionValue) -> Result<Self> {
        match key {
            "epsilon" => {
                let epsilon = number_option(key, value)?;
                if !(epsilon.is_finite() && epsilon >= 0.0) {
                    return Err(invalid_value(key, "must be finite and non-negative"));
                }
                self.epsilon = epsilon;
            }
            "precision" => {
                let precision = number_option(key, value)?;
                if precision.fract() != 0.0 || !(1.0..=100.0).contains(&precision) {
                    return Err(invalid_value(key, "must be an integer between 1 and 100"));
                }
                self.precision = precision as usize;
            }
            "debug_checks" => self.debug_checks = bool_option(key, value)?,
            "print_types" => self.print_types = bool_option(key, value)?,
            "print_degrees" => self.print_degrees = bool_option(key, value)?,
            "print_row_major" => self.print_row_major = bool_option(key, value)?,
            _ => {
                return Err(MathError::UnknownOption {
                    key: key.to_owned(),
                });
            }
        }
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Returns a snapshot of the current configuration.
pub fn current() -> Config {
    CONFIG.with(Cell::get)
}

/// The current equality tolerance.
pub fn epsilon() -> f64 {
    current().epsilon
}

/// Whether mutations are currently validated.
pub fn debug_checks_enabled() -> bool {
    current().debug_checks
}

/// Updates the given options of the current configuration and returns the
/// updated configuration.
///
/// The update is all-or-nothing: if any key is unknown or any value is
/// invalid, the configuration is left untouched.
///
/// # Errors
/// See [`Config::with_option`].
pub fn configure<K, I>(options: I) -> Result<Config>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, OptionValue)>,
{
    let mut config = current();
    for (key, value) in options {
        config = config.with_option(key.as_ref(), value)?;
    }
    CONFIG.with(|cell| cell.set(config));
    log::debug!("Updated numeric configuration: {config:?}");
    Ok(config)
}

/// Parses a RON map of options, like `{"epsilon": 1e-6, "debug_checks":
/// true}`, and applies it with [`configure`].
///
/// # Errors
/// Returns an error if the text is not a valid RON map of option values, or
/// if [`configure`] rejects the options.
pub fn configure_from_ron_str(text: &str) -> anyhow::Result<Config> {
    let options: BTreeMap<String, OptionValue> =
        ron::from_str(text).context("Invalid syntax in numeric configuration")?;
    Ok(configure(options)?)
}

/// Reads the RON file at the given path and applies its options with
/// [`configure`].
///
/// # Errors
/// Returns an error if the file can not be read or parsed, or if
/// [`configure`] rejects the options.
pub fn configure_from_ron_file(file_path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let file_path = file_path.as_ref();
    let text = fs::read_to_string(file_path)
        .with_context(|| format!("Could not open {}", file_path.display()))?;
    let options: BTreeMap<String, OptionValue> = ron::from_str(&text)
        .with_context(|| format!("Invalid syntax in {}", file_path.display()))?;
    configure(options)
        .with_context(|| format!("Invalid numeric configuration in {}", file_path.display()))
}

/// Replaces the whole configuration and returns the previous one.
pub fn replace(config: Config) -> Config {
    let previous = CONFIG.with(|cell| cell.replace(config));
    log::debug!("Replaced numeric configuration: {config:?}");
    previous
}

/// Restores [`Config::DEFAULT`].
pub fn reset() {
    replace(Config::DEFAULT);
}

/// Calls the given closure with `config` as the current configuration, and
/// restores the previous configuration afterwards, also if the closure
/// panics.
pub fn with_config<R>(config: Config, f: impl FnOnce() -> R) -> R {
    let _restore = RestoreOnDrop(CONFIG.with(|cell| cell.replace(config)));
    f()
}

/// Calls the given closure with `epsilon` as the current tolerance.
pub fn with_epsilon<R>(epsilon: f64, f: impl FnOnce() -> R) -> R {
    with_config(
        Config {
            epsilon,
            ..current()
        },
        f,
    )
}

struct RestoreOnDrop(Config);

impl Drop for RestoreOnDrop {
    fn drop(&mut self) {
        CONFIG.with(|cell| cell.set(self.0));
    }
}

fn number_option(key: &str, value: OptionValue) -> Result<f64> {
    match value {
        OptionValue::Number(number) => Ok(number),
        OptionValue::Bool(_) => Err(invalid_value(key, "expected a number")),
    }
}

fn bool_option(key: &str, value: OptionValue) -> Result<bool> {
    match value {
        OptionValue::Bool(flag) => Ok(flag),
        OptionValue::Number(_) => Err(invalid_value(key, "expected a boolean")),
    }
}

fn invalid_value(key: &str, reason: &str) -> MathError {
    MathError::InvalidOptionValue {
        key: key.to_owned(),
        reason: reason.to_owned(),
    }
}
