//! Render configuration.

use crate::error::{ButtonError, PropTypeError};

/// How prop-type findings are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Skip the checker entirely.
    Off,

    /// Log each finding at `warn` level and keep going.
    Warn,

    /// Reject input at the boundary on the first finding.
    Strict,
}

impl Default for ValidationMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Warn
        } else {
            Self::Off
        }
    }
}

/// Per-component configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Display name used in log messages.
    pub name: &'static str,

    /// Prop-type checking behavior.
    /// Defaults to `Warn` in debug builds and `Off` in release builds.
    pub validation: ValidationMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            name: "Button",
            validation: ValidationMode::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new config with the given display name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Set the validation mode.
    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Reject invalid props instead of warning.
    pub fn strict(self) -> Self {
        self.validation(ValidationMode::Strict)
    }

    /// Skip prop-type checking.
    pub fn unchecked(self) -> Self {
        self.validation(ValidationMode::Off)
    }

    pub fn is_checked(&self) -> bool {
        self.validation != ValidationMode::Off
    }

    /// Apply the validation mode to a set of findings.
    pub fn report(&self, findings: Vec<PropTypeError>) -> Result<(), ButtonError> {
        match self.validation {
            ValidationMode::Off => Ok(()),
            ValidationMode::Warn => {
                for finding in findings {
                    log::warn!("{}: {finding}", self.name);
                }
                Ok(())
            }
            ValidationMode::Strict => match findings.into_iter().next() {
                Some(first) => Err(first.into()),
                None => Ok(()),
            },
        }
    }
}
