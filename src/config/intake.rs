//! Intake conversation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::intake::{GenerationSettings, SessionRetention};

/// Intake conversation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Upper bound on each question-generation call, in seconds
    #[serde(default = "default_generation_timeout")]
    pub generation_timeout_secs: u64,

    /// Generate questions for all technologies at once rather than in turn
    #[serde(default = "default_concurrent_generation")]
    pub concurrent_generation: bool,

    /// Seconds an in-progress session may sit untouched before eviction
    #[serde(default = "default_session_idle_ttl")]
    pub session_idle_ttl_secs: u64,

    /// Seconds a completed or terminated session is kept
    #[serde(default = "default_ended_session_ttl")]
    pub ended_session_ttl_secs: u64,

    /// Seconds between eviction sweeps
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl IntakeConfig {
    /// Engine settings derived from this configuration
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            timeout: Duration::from_secs(self.generation_timeout_secs),
            concurrent: self.concurrent_generation,
        }
    }

    /// Retention windows for stored sessions
    pub fn retention(&self) -> SessionRetention {
        SessionRetention {
            idle: Duration::from_secs(self.session_idle_ttl_secs),
            ended: Duration::from_secs(self.ended_session_ttl_secs),
        }
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate intake configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.generation_timeout_secs == 0 {
            return Err(ValidationError::InvalidGenerationTimeout);
        }
        if self.session_idle_ttl_secs == 0 || self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSessionRetention);
        }
        Ok(())
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            generation_timeout_secs: default_generation_timeout(),
            concurrent_generation: default_concurrent_generation(),
            session_idle_ttl_secs: default_session_idle_ttl(),
            ended_session_ttl_secs: default_ended_session_ttl(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_generation_timeout() -> u64 {
    45
}

fn default_concurrent_generation() -> bool {
    true
}

fn default_session_idle_ttl() -> u64 {
    30 * 60
}

fn default_ended_session_ttl() -> u64 {
    5 * 60
}

fn default_sweep_interval() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_defaults() {
        let settings = IntakeConfig::default().generation_settings();
        assert_eq!(settings, GenerationSettings::default());
    }

    #[test]
    fn sequential_generation_carries_through() {
        let config = IntakeConfig {
            generation_timeout_secs: 5,
            concurrent_generation: false,
            ..Default::default()
        };
        let settings = config.generation_settings();
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert!(!settings.concurrent);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = IntakeConfig {
            generation_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidGenerationTimeout)
        );
    }

    #[test]
    fn default_retention_matches_domain_default() {
        let config = IntakeConfig::default();
        assert_eq!(config.retention(), SessionRetention::default());
        assert_eq!(config.sweep_interval(), Duration::from_secs(60));
    }

    #[test]
    fn zero_idle_ttl_or_sweep_interval_is_rejected() {
        for config in [
            IntakeConfig {
                session_idle_ttl_secs: 0,
                ..Default::default()
            },
            IntakeConfig {
                sweep_interval_secs: 0,
                ..Default::default()
            },
        ] {
            assert_eq!(config.validate(), Err(ValidationError::InvalidSessionRetention));
        }
    }

    #[test]
    fn ended_sessions_may_be_dropped_immediately() {
        let config = IntakeConfig {
            ended_session_ttl_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.retention().ended, Duration::ZERO);
    }
}
