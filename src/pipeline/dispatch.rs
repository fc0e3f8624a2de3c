use crate::error::WorkoutError;
use crate::types::workout::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// Builds a workout from a sensor package: a workout code plus its
/// positional values.
///
/// Positional order per code:
/// - `SWM`: action, duration, weight, pool length, pool count
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = WorkoutKind::from_code(workout_type)
        .ok_or_else(|| WorkoutError::UnknownWorkoutType(workout_type.to_string()))?;

    if data.len() != kind.arity() {
        return Err(WorkoutError::ArgumentCount {
            code: kind.code(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let action = parse_action(data[0])?;
    let duration = data[1];
    let weight = data[2];

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running {
            action,
            duration,
            weight,
        }),
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking {
            action,
            duration,
            weight,
            height: data[3],
        }),
        WorkoutKind::Swimming => Workout::Swimming(Swimming {
            action,
            duration,
            weight,
            pool_length: data[3],
            pool_count: data[4],
        }),
    };

    tracing::debug!("Read {} package: {:?}", kind.code(), workout);

    Ok(workout)
}

fn parse_action(value: f64) -> Result<u64, WorkoutError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(WorkoutError::InvalidAction(value));
    }
    Ok(value as u64)
}
