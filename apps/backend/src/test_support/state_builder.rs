use std::time::Duration;

use crate::services::room_flow::RoomSettings;
use crate::state::app_state::AppState;

/// Builder for an [`AppState`] with test-friendly timers and a fixed seed.
pub struct TestStateBuilder {
    settings: RoomSettings,
    deal_seed: Option<u64>,
}

impl TestStateBuilder {
    /// Millisecond timers and seed 7.
    pub fn new() -> Self {
        Self {
            settings: RoomSettings {
                trick_clear_delay: Duration::from_millis(20),
                deal_end_delay: Duration::from_millis(20),
                auction_reset_delay: Duration::from_millis(20),
                restart_notify_all: true,
            },
            deal_seed: Some(7),
        }
    }

    pub fn with_settings(mut self, settings: RoomSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.deal_seed = seed;
        self
    }

    /// Start the lobby. Must run inside an actix system (`#[actix_web::test]`).
    pub fn build(self) -> AppState {
        AppState::launch(self.settings, self.deal_seed)
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
