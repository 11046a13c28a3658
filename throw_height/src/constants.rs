// m/s²
pub const GRAVITY: f64 = 9.81;

pub const HANDS: u32 = 2;

pub const NUMBER_OF_HANDS: f64 = HANDS as f64;

pub const NUMBER_OF_ARCHES: f64 = 2.0;

// Allowed overshoot of the hold time, in seconds.
pub const EPS: f64 = 0.01;

pub const MIN_DWELL: f64 = 0.150;
pub const MAX_DWELL: f64 = 0.300;
pub const DWELL_STEP: f64 = 0.05;

pub const MIN_BALLS: u32 = 3;
pub const MAX_BALLS: u32 = 15;

pub const MIN_HEIGHT: f64 = 0.1;
pub const MAX_HEIGHT: f64 = 25.0;
pub const HEIGHT_STEP: f64 = 0.01;
