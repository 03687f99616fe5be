//! Mutable form state backing the ruler generator page.
//!
//! The page shell owns exactly one `RulerForm`; every widget change goes
//! through one of the setters below, which apply the same constraints the
//! input widgets enforce, and the renderers only ever see the immutable
//! [`RulerConfig`] snapshot returned by [`RulerForm::config`].

use log::debug;

use super::config::{clamp_length, truncate_name, RulerConfig, RulerWidth, Unit};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulerForm {
    config: RulerConfig,
}

impl RulerForm {
    pub fn new() -> Self {
        Default::default()
    }

    /// Current snapshot of the form.
    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    /// Free-text name field; input beyond 30 characters is dropped.
    pub fn set_name(&mut self, name: &str) -> &RulerConfig {
        self.config.name = truncate_name(name);
        debug!("[RulerForm] name set to {:?}", self.config.name);
        &self.config
    }

    /// Unit selector; unknown tokens select centimeters.
    pub fn set_unit(&mut self, token: &str) -> &RulerConfig {
        self.config.unit = Unit::from_token(token);
        debug!("[RulerForm] unit set to {}", self.config.unit);
        &self.config
    }

    /// Numeric length input. Anything that does not parse as a number counts
    /// as 0 and therefore clamps to 1.
    pub fn set_length(&mut self, raw: &str) -> &RulerConfig {
        let value = raw.trim().parse::<f64>().unwrap_or(0.0);
        self.set_length_value(value);
        debug!("[RulerForm] length {:?} -> {}", raw, self.config.length);
        &self.config
    }

    /// Sets the length from a numeric widget value, clamped into `1..=100`.
    /// Fractions are truncated; NaN clamps to 1.
    pub fn set_length_value(&mut self, value: f64) -> &RulerConfig {
        let length = if value.is_nan() || value <= 0.0 {
            0
        } else {
            value.trunc().min(u32::MAX as f64) as u32
        };
        self.config.length = clamp_length(length);
        &self.config
    }

    /// Width selector. Values other than 2, 3 or 4 leave the width unchanged.
    pub fn set_width(&mut self, raw: &str) -> &RulerConfig {
        match raw
            .trim()
            .parse::<u8>()
            .map_err(|e| e.to_string())
            .and_then(RulerWidth::try_from)
        {
            Ok(width) => self.config.width_cm = width,
            Err(e) => log::warn!("[RulerForm] ignoring width {:?}: {}", raw, e),
        }
        &self.config
    }
}

impl From<RulerConfig> for RulerForm {
    fn from(config: RulerConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }
}
