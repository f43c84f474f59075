//! Staged progress animation
//!
//! A fixed-timestep state machine: the caller supplies ticks (or elapsed
//! wall-clock time, which is converted into whole ticks), the animator owns no
//! timers of its own. Progress runs 0 -> 100 over the configured duration
//! while the status message steps through `LOADING_MESSAGES`.

use crate::consts::{ANIMATION_DURATION_MS, ANIMATION_TICK_MS, MAX_CATCHUP_TICKS};

pub const LOADING_MESSAGES: [&str; 5] = [
    "Scanning your aura...",
    "Decoding your energy...",
    "Consulting the celestial alignment...",
    "Unlocking the secret code...",
    "Materializing the truth...",
];

/// Timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorConfig {
    /// Total run time (ms)
    pub duration_ms: u32,
    /// Tick period (ms)
    pub tick_ms: u32,
    /// Maximum ticks consumed by a single `advance` call
    pub max_catchup_ticks: u32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            duration_ms: ANIMATION_DURATION_MS,
            tick_ms: ANIMATION_TICK_MS,
            max_catchup_ticks: MAX_CATCHUP_TICKS,
        }
    }
}

impl AnimatorConfig {
    /// Number of ticks until completion
    pub fn total_ticks(&self) -> u32 {
        let tick = self.tick_ms.max(1);
        self.duration_ms.max(1).div_ceil(tick)
    }
}

/// Snapshot handed to the renderer after each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFrame {
    /// 0.0 ..= 100.0
    pub progress: f32,
    pub message_index: usize,
    pub message: &'static str,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    config: AnimatorConfig,
    elapsed_ms: u32,
    accumulator_ms: f64,
    message_index: usize,
    ticks: u32,
    finished: bool,
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}

impl ProgressAnimator {
    pub fn new(config: AnimatorConfig) -> Self {
        let config = AnimatorConfig {
            duration_ms: config.duration_ms.max(1),
            tick_ms: config.tick_ms.max(1),
            max_catchup_ticks: config.max_catchup_ticks.max(1),
        };
        Self {
            config,
            elapsed_ms: 0,
            accumulator_ms: 0.0,
            message_index: 0,
            ticks: 0,
            finished: false,
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Current progress, clamped to 100
    pub fn progress(&self) -> f32 {
        if self.elapsed_ms >= self.config.duration_ms {
            return 100.0;
        }
        self.elapsed_ms as f32 / self.config.duration_ms as f32 * 100.0
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    pub fn message(&self) -> &'static str {
        LOADING_MESSAGES[self.message_index]
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Ticks processed so far
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn frame(&self) -> ProgressFrame {
        ProgressFrame {
            progress: self.progress(),
            message_index: self.message_index,
            message: self.message(),
            finished: self.finished,
        }
    }

    /// Advance by exactly one tick period. No-op once finished.
    pub fn tick(&mut self) -> ProgressFrame {
        if self.finished {
            return self.frame();
        }

        self.ticks += 1;
        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(self.config.tick_ms)
            .min(self.config.duration_ms);

        // floor(progress / 100 * count), computed on integers so the final
        // tick lands on `count` exactly and is then ignored
        let count = LOADING_MESSAGES.len() as u64;
        let idx = (u64::from(self.elapsed_ms) * count / u64::from(self.config.duration_ms)) as usize;
        if idx < LOADING_MESSAGES.len() && idx > self.message_index {
            self.message_index = idx;
        }

        if self.elapsed_ms >= self.config.duration_ms {
            self.finished = true;
            log::debug!("Progress animation finished after {} ticks", self.ticks);
        }

        self.frame()
    }

    /// Feed elapsed wall-clock time; runs as many whole ticks as fit,
    /// bounded by `max_catchup_ticks`.
    pub fn advance(&mut self, elapsed_ms: f64) -> ProgressFrame {
        if self.finished {
            return self.frame();
        }

        let tick_ms = f64::from(self.config.tick_ms);
        self.accumulator_ms += elapsed_ms.max(0.0);

        let mut substeps = 0;
        while self.accumulator_ms >= tick_ms && substeps < self.config.max_catchup_ticks {
            self.tick();
            self.accumulator_ms -= tick_ms;
            substeps += 1;
            if self.finished {
                self.accumulator_ms = 0.0;
                break;
            }
        }

        // Drop backlog we refused to catch up on
        if substeps == self.config.max_catchup_ticks {
            self.accumulator_ms = self.accumulator_ms.min(tick_ms);
        }

        self.frame()
    }
}
