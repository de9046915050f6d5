//! Environment variable management for testing
//!
//! Tests that read configuration from the process environment use
//! [`EnvVarGuard`] so the original value is restored when the test ends.

use std::env;

/// RAII guard for a single environment variable
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Capture the current value of `name` so it can be restored on drop
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the variable for the remainder of the test
  pub fn set(&self, value: &str) {
    // SAFETY: only tests call this, and no test reads the environment from
    // another thread while a guard is live.
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the variable for the remainder of the test
  pub fn remove(&self) {
    // SAFETY: see `set`.
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      // SAFETY: restores the value captured in `new`; see `set`.
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      // SAFETY: see `set`.
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
