use log::LevelFilter;
use thiserror::Error;

// Sample counts are rounded down, but a quotient like 2489.9999999999995 still
// means the stop value itself is a sample.
const SNAP: f64 = 1e-9;

#[derive(Error, Debug, PartialEq)]
pub enum RangeError {
    #[error("range bounds must be finite, got {start}..={stop}")]
    NotFinite { start: f64, stop: f64 },
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("range end {stop} is below its start {start}")]
    Reversed { start: f64, stop: f64 },
    #[error("range {start}..={stop} by {step} has too many samples")]
    TooManySamples { start: f64, stop: f64, step: f64 },
}

// Samples are `start + i * step`, never accumulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRange {
    start: f64,
    step: f64,
    len: usize,
}

impl StepRange {
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, RangeError> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(RangeError::NotFinite { start, stop });
        }
        if !(step > 0.0) || !step.is_finite() {
            return Err(RangeError::NonPositiveStep(step));
        }
        if stop < start {
            return Err(RangeError::Reversed { start, stop });
        }

        let too_many = || RangeError::TooManySamples { start, stop, step };

        let steps = ((stop - start) / step + SNAP).floor();
        if !steps.is_finite() || steps >= usize::MAX as f64 {
            return Err(too_many());
        }
        let len = (steps as usize).checked_add(1).ok_or_else(too_many)?;

        Ok(StepRange { start, step, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn iter(self) -> impl Iterator<Item = f64> {
        (0..self.len).map(move |i| self.start + i as f64 * self.step)
    }
}

pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .try_init()
        .ok();
}
