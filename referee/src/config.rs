/// Settings for a referee task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefereeConfig {
    /// Requests that can queue before submitters wait
    pub channel_capacity: usize,

    /// Roster size for `!battle` commands that leave it out
    pub default_size: usize,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            default_size: 5,
        }
    }
}

impl RefereeConfig {
    pub fn with_channel_capacity(mut self, channel_capacity: usize) -> Self {
        self.channel_capacity = channel_capacity.max(1);
        self
    }

    pub fn with_default_size(mut self, default_size: usize) -> Self {
        self.default_size = default_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RefereeConfig::default();
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.default_size, 5);
    }

    #[test]
    fn test_builder() {
        let config = RefereeConfig::default()
            .with_channel_capacity(0)
            .with_default_size(3);
        assert_eq!(config.channel_capacity, 1);
        assert_eq!(config.default_size, 3);
    }
}
