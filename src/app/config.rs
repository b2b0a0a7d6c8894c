use std::time::Duration;

pub struct AppConfig {
    pub message_timeout: Duration,
    /// Inclusive bounds for the randomized modal offset, in cells.
    pub modal_offset_min: u16,
    pub modal_offset_max: u16,
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            message_timeout: Duration::from_secs(5),
            modal_offset_min: 10,
            modal_offset_max: 30,
            tick_rate: Duration::from_millis(100),
        }
    }
}
