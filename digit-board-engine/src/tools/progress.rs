use bevy::prelude::*;

use crate::engine::digits::{DIGIT_COUNT, DigitRegistry};
use crate::tools::digit_control::state::{GameCompleted, ProgressChanged};

/// Completion progress, recomputed from the registry after every change
/// rather than incremented. The latch keeps the completion signal to one
/// firing per fill; a reset re-arms it.
#[derive(Resource)]
pub struct GameProgress {
    pub placed: usize,
    pub total: usize,
    completion_announced: bool,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            placed: 0,
            total: DIGIT_COUNT,
            completion_announced: false,
        }
    }
}

impl GameProgress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.placed as f32 / self.total as f32
        }
    }

    /// Records a recomputed count. Returns true only on the update that
    /// crosses into completion.
    pub fn record(&mut self, placed: usize, complete: bool) -> bool {
        self.placed = placed;
        if !complete {
            self.completion_announced = false;
            return false;
        }
        if self.completion_announced {
            return false;
        }
        self.completion_announced = true;
        true
    }
}

/// Recomputes progress whenever a `ProgressChanged` lands, and fires
/// `GameCompleted` exactly once when the last digit seats.
pub fn track_progress(
    mut changes: EventReader<ProgressChanged>,
    registry: Res<DigitRegistry>,
    mut progress: ResMut<GameProgress>,
    mut completed: EventWriter<GameCompleted>,
) {
    if changes.is_empty() {
        return;
    }
    changes.clear();

    let placed = registry.placed_count();
    if progress.record(placed, registry.is_complete()) {
        info!("all {} digits placed", placed);
        completed.write(GameCompleted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_fires_exactly_once() {
        let mut progress = GameProgress::default();
        for placed in 1..DIGIT_COUNT {
            assert!(!progress.record(placed, false));
        }
        assert!(progress.record(DIGIT_COUNT, true));
        assert!(!progress.record(DIGIT_COUNT, true));
        assert_eq!(progress.placed, DIGIT_COUNT);
    }

    #[test]
    fn reset_rearms_the_completion_latch() {
        let mut progress = GameProgress::default();
        assert!(progress.record(DIGIT_COUNT, true));
        assert!(!progress.record(0, false));
        assert!(progress.record(DIGIT_COUNT, true));
    }

    #[test]
    fn fraction_tracks_placed_over_total() {
        let mut progress = GameProgress::default();
        progress.record(5, false);
        assert!((progress.fraction() - 0.5).abs() < 1e-6);
    }
}
