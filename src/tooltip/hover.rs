use super::config::TipConfig;
use super::easing::css_timing_function;
use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipPhase {
    Hidden,
    Shown,
}

/// Style values a transition animates towards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub top: i32,
}

/// One fade-and-slide step for the host to run.
///
/// Opacity and `top` animate together over the same duration and curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub phase: TipPhase,
    pub to: Frame,
    pub duration_ms: u32,
    pub easing: String,
    /// Pass back to `HoverMachine::settle` when the step completes
    pub generation: u32,
}

/// Show/hide state of one tooltip around its fixed baseline
#[derive(Debug, Clone)]
pub struct HoverMachine {
    baseline: Position,
    distance: i32,
    duration_ms: u32,
    easing: String,
    phase: TipPhase,
    in_flight: bool,
    generation: u32,
}

impl HoverMachine {
    #[must_use]
    pub fn new(baseline: Position, config: &TipConfig) -> Self {
        Self {
            baseline,
            distance: config.distance,
            duration_ms: config.duration,
            easing: css_timing_function(&config.easing).to_string(),
            phase: TipPhase::Hidden,
            in_flight: false,
            generation: 0,
        }
    }

    #[must_use]
    pub fn baseline(&self) -> Position {
        self.baseline
    }

    #[must_use]
    pub fn phase(&self) -> TipPhase {
        self.phase
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Pointer entered the target.
    ///
    /// The phase alone is the debounce: once a show has started the tip is
    /// `Shown`, so re-entry returns `None` whether that show is still in
    /// flight or has settled. `in_flight` only tells the host which of the
    /// two it was and lets `settle` drop stale completions. Entering while a
    /// hide is in flight turns it back around.
    pub fn enter(&mut self) -> Option<Transition> {
        if self.phase == TipPhase::Shown {
            return None;
        }
        Some(self.start(TipPhase::Shown))
    }

    /// Pointer left the target; slide back to the baseline and fade out
    pub fn leave(&mut self) -> Option<Transition> {
        if self.phase == TipPhase::Hidden {
            return None;
        }
        Some(self.start(TipPhase::Hidden))
    }

    /// Mark the transition `generation` as finished.
    ///
    /// Completions of superseded transitions are ignored. Returns the phase
    /// the tip came to rest in, if this completion was the current one.
    pub fn settle(&mut self, generation: u32) -> Option<TipPhase> {
        if generation != self.generation || !self.in_flight {
            return None;
        }
        self.in_flight = false;
        Some(self.phase)
    }

    fn start(&mut self, phase: TipPhase) -> Transition {
        self.phase = phase;
        self.in_flight = true;
        self.generation = self.generation.wrapping_add(1);

        let to = match phase {
            TipPhase::Shown => Frame {
                opacity: 1.0,
                top: self.baseline.raised(self.distance).top,
            },
            TipPhase::Hidden => Frame {
                opacity: 0.0,
                top: self.baseline.top,
            },
        };

        Transition {
            phase,
            to,
            duration_ms: self.duration_ms,
            easing: self.easing.clone(),
            generation: self.generation,
        }
    }
}
