use crate::error::FlipgreetError;

/// Runtime configuration parameters for the selector.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed input text handed to whichever formatter wins the draw.
    pub input: String,
    /// Draws strictly above this value select the first formatter.
    pub threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: "hi".to_string(),
            threshold: 0.5,
        }
    }
}

impl Config {
    /// Reject thresholds a uniform draw in [0, 1) could never straddle.
    pub fn validate(&self) -> Result<(), FlipgreetError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(FlipgreetError::Config(format!(
                "threshold {} outside [0.0, 1.0]",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut config = Config::default();
        config.threshold = 1.5;
        assert!(config.validate().is_err());
        config.threshold = -0.1;
        assert!(config.validate().is_err());
    }
}
