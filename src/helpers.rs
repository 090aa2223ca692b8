//! Display helpers for result templates.
//!
//! Result templates call small named functions to format values. Rather than
//! registering them on a shared global namespace, a [`HelperRegistry`] is
//! built explicitly and handed to the template renderer. Helpers are pure:
//! the clock is passed in through [`HelperContext`].

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde_json::Value;
use tracing::debug;

use crate::error::{RefinerError, Result};

/// Name under which [`is_new_project`] is registered.
pub const IS_NEW_PROJECT: &str = "isNewProject";

/// Age below which a project counts as new.
pub const NEW_PROJECT_WINDOW_DAYS: i64 = 30;

/// Signature of a display helper: positional string arguments in, JSON out.
pub type HelperFn = fn(&[&str], &HelperContext) -> Value;

/// Inputs a helper may depend on besides its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HelperContext {
    /// Reference instant for relative date helpers.
    pub now: DateTime<Utc>,
}

impl HelperContext {
    /// Creates a context pinned to `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Creates a context pinned to the current system time.
    pub fn current() -> Self {
        Self::at(Utc::now())
    }
}

/// Named, pure display helpers passed explicitly to a template renderer.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use refiners::{HelperContext, HelperRegistry};
///
/// let registry = HelperRegistry::with_builtins();
/// let ctx = HelperContext::at(Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
/// let value = registry.call("isNewProject", &["2024-03-01"], &ctx).unwrap();
/// assert_eq!(value, serde_json::json!(true));
/// ```
#[derive(Clone, Default)]
pub struct HelperRegistry {
    helpers: BTreeMap<String, HelperFn>,
}

impl HelperRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in helpers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(IS_NEW_PROJECT, is_new_project_helper);
        registry
    }

    /// Registers `helper` under `name`, returning the helper it replaced.
    pub fn register(&mut self, name: impl Into<String>, helper: HelperFn) -> Option<HelperFn> {
        let name = name.into();
        debug!(helper = %name, "Registering display helper");
        self.helpers.insert(name, helper)
    }

    /// Returns the helper registered under `name`.
    pub fn get(&self, name: &str) -> Option<HelperFn> {
        self.helpers.get(name).copied()
    }

    /// Iterates registered helper names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }

    /// Invokes the helper registered under `name`.
    ///
    /// # Errors
    /// Returns `RefinerError::UnknownHelper` if nothing is registered
    /// under `name`.
    pub fn call(&self, name: &str, args: &[&str], ctx: &HelperContext) -> Result<Value> {
        let helper = self
            .get(name)
            .ok_or_else(|| RefinerError::unknown_helper(name))?;
        Ok(helper(args, ctx))
    }
}

impl fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperRegistry")
            .field("helpers", &self.helpers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Returns true if `created` is less than [`NEW_PROJECT_WINDOW_DAYS`] before `now`.
///
/// `created` may be an RFC 3339 timestamp or a calendar date (taken as UTC
/// midnight). Missing or unparseable input is never new.
pub fn is_new_project(created: &str, now: DateTime<Utc>) -> bool {
    match parse_created(created) {
        Some(created) => now.signed_duration_since(created) < Duration::days(NEW_PROJECT_WINDOW_DAYS),
        None => false,
    }
}

fn is_new_project_helper(args: &[&str], ctx: &HelperContext) -> Value {
    let created = args.first().copied().unwrap_or_default();
    Value::Bool(is_new_project(created, ctx.now))
}

fn parse_created(created: &str) -> Option<DateTime<Utc>> {
    let created = created.trim();
    if created.is_empty() {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(created) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(created, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}
