use crate::error::WorkoutError;
use crate::types::summary::Summary;
use crate::types::workout::{Running, SportsWalking, Swimming, Workout};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Per-variant metric calculator.
///
/// Distance and mean speed have generic forms; every variant has to supply
/// its own calorie formula.
pub trait Training {
    const NAME: &'static str;
    /// Distance covered per step or stroke, in metres.
    const LEN_STEP: f64 = 0.65;

    fn action(&self) -> u64;
    fn duration(&self) -> f64;
    fn weight(&self) -> f64;

    /// Distance in km.
    fn distance(&self) -> f64 {
        self.action() as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> Result<f64, WorkoutError> {
        per_hour(self.distance(), self.duration())
    }

    /// Calories burned in kcal.
    fn spent_calories(&self) -> Result<f64, WorkoutError>;

    fn show_training_info(&self) -> Result<Summary, WorkoutError> {
        Ok(Summary {
            training_type: Self::NAME.to_string(),
            duration_h: self.duration(),
            distance_km: self.distance(),
            speed_kmh: self.mean_speed()?,
            calories_kcal: self.spent_calories()?,
        })
    }
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;
}

impl Training for Running {
    const NAME: &'static str = "Running";

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        Ok((Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()?
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * (self.duration * MIN_IN_H))
    }
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

impl Training for SportsWalking {
    const NAME: &'static str = "SportsWalking";

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let speed = self.mean_speed()?;
        // The squared speed is floor-divided by height, which zeroes the
        // second term for any realistic walking pace.
        let speed_height = floor_divide(speed.powi(2), self.height, "height")?;
        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * (self.duration * MIN_IN_H))
    }
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}

impl Training for Swimming {
    const NAME: &'static str = "Swimming";
    const LEN_STEP: f64 = 1.38;

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    /// Pool-based speed; strokes only feed the distance.
    fn mean_speed(&self) -> Result<f64, WorkoutError> {
        per_hour(self.pool_length * self.pool_count / M_IN_KM, self.duration)
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        Ok((self.mean_speed()? + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight)
    }
}

impl Workout {
    pub fn mean_speed(&self) -> Result<f64, WorkoutError> {
        match self {
            Workout::Running(w) => w.mean_speed(),
            Workout::SportsWalking(w) => w.mean_speed(),
            Workout::Swimming(w) => w.mean_speed(),
        }
    }

    pub fn spent_calories(&self) -> Result<f64, WorkoutError> {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> Result<Summary, WorkoutError> {
        match self {
            Workout::Running(w) => w.show_training_info(),
            Workout::SportsWalking(w) => w.show_training_info(),
            Workout::Swimming(w) => w.show_training_info(),
        }
    }
}

/// Rate per hour of workout; the duration must be strictly positive.
fn per_hour(km: f64, duration: f64) -> Result<f64, WorkoutError> {
    if duration == 0.0 {
        return Err(WorkoutError::DivisionByZero("duration"));
    }
    if duration < 0.0 {
        return Err(WorkoutError::NegativeDuration(duration));
    }
    Ok(km / duration)
}

/// Floor division rounding toward negative infinity, computed from the
/// remainder so that exact multiples do not drift below an integer.
fn floor_divide(
    numerator: f64,
    denominator: f64,
    operand: &'static str,
) -> Result<f64, WorkoutError> {
    if denominator == 0.0 {
        return Err(WorkoutError::DivisionByZero(operand));
    }

    let remainder = numerator % denominator;
    let mut quotient = (numerator - remainder) / denominator;
    if remainder != 0.0 && (denominator < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        Ok(floored + 1.0)
    } else {
        Ok(floored)
    }
}
