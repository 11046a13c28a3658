pub mod constants;
pub mod model;
pub mod report;

use log::debug;
use num::range_step_inclusive;
use util::{RangeError, StepRange};

use crate::constants::*;
use crate::model::{
    check_delay_ratio, dwell_time, flight_time, is_uniquely_uniform, launch_speed, ModelError,
};

pub use crate::report::write_report;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throw {
    pub balls: u32,
    pub height: f64,
    pub dwell: f64,
    pub flight: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DwellReport {
    pub max_dwell: f64,
    pub throws: Vec<Throw>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SweepError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub fn dwell_limits() -> Result<StepRange, RangeError> {
    StepRange::new(MIN_DWELL, MAX_DWELL, DWELL_STEP)
}

pub fn throw_heights() -> Result<StepRange, RangeError> {
    StepRange::new(MIN_HEIGHT, MAX_HEIGHT, HEIGHT_STEP)
}

pub fn ball_counts() -> impl Iterator<Item = u32> {
    range_step_inclusive(MIN_BALLS, MAX_BALLS, 2)
}

/// First sampled height whose hold time lands in `[max_dwell, max_dwell + EPS]`.
pub fn find_min_height(balls: u32, max_dwell: f64, heights: StepRange) -> Option<Throw> {
    heights.iter().find_map(|height| {
        let dwell = dwell_time(balls, height);
        (0.0..=EPS).contains(&(dwell - max_dwell)).then(|| Throw {
            balls,
            height,
            dwell,
            flight: flight_time(height),
            speed: launch_speed(height),
        })
    })
}

pub fn sweep() -> Result<Vec<DwellReport>, SweepError> {
    let heights = throw_heights()?;

    let balls = ball_counts()
        .map(|b| -> Result<u32, ModelError> {
            let rmin = check_delay_ratio(b)?;
            debug!(
                "{b} balls: rmin = {rmin}, unique uniform juggle: {}",
                is_uniquely_uniform(b, HANDS)
            );
            Ok(b)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let reports = dwell_limits()?
        .iter()
        .map(|max_dwell| {
            let throws = balls
                .iter()
                .filter_map(|&b| {
                    let throw = find_min_height(b, max_dwell, heights);
                    if throw.is_none() {
                        debug!("{b} balls never reach a {max_dwell:.3} s hold below {MAX_HEIGHT} m");
                    }
                    throw
                })
                .collect();
            DwellReport { max_dwell, throws }
        })
        .collect();

    Ok(reports)
}
