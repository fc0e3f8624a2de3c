#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// Codes are matched exactly; `run` is not `RUN`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::SportsWalking),
            "SWM" => Some(WorkoutKind::Swimming),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Number of positional values a sensor package carries for this kind.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
    pub pool_length: f64,
    pub pool_count: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}
