use fittrack_rs::error::WorkoutError;
use fittrack_rs::pipeline::dispatch::read_package;
use fittrack_rs::samples::SAMPLE_PACKAGES;
use fittrack_rs::types::workout::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

#[test]
fn builds_each_variant_positionally() {
    assert_eq!(
        read_package("RUN", &[15000.0, 1.0, 75.0]).expect("running"),
        Workout::Running(Running {
            action: 15000,
            duration: 1.0,
            weight: 75.0,
        })
    );
    assert_eq!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walking"),
        Workout::SportsWalking(SportsWalking {
            action: 9000,
            duration: 1.0,
            weight: 75.0,
            height: 180.0,
        })
    );
    assert_eq!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming"),
        Workout::Swimming(Swimming {
            action: 720,
            duration: 1.0,
            weight: 80.0,
            pool_length: 25.0,
            pool_count: 40.0,
        })
    );
}

#[test]
fn unknown_code_is_a_lookup_error() {
    assert_eq!(
        read_package("XYZ", &[1.0, 1.0, 1.0]),
        Err(WorkoutError::UnknownWorkoutType("XYZ".to_string()))
    );
    assert!(matches!(
        read_package("run", &[1.0, 1.0, 1.0]),
        Err(WorkoutError::UnknownWorkoutType(_))
    ));
}

#[test]
fn wrong_argument_count_is_rejected() {
    assert_eq!(
        read_package("SWM", &[720.0, 1.0, 80.0]),
        Err(WorkoutError::ArgumentCount {
            code: "SWM",
            expected: 5,
            got: 3,
        })
    );
    assert!(read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).is_err());
    assert_eq!(
        read_package("WLK", &[9000.0, 1.0, 75.0]),
        Err(WorkoutError::ArgumentCount {
            code: "WLK",
            expected: 4,
            got: 3,
        })
    );
}

#[test]
fn action_must_be_a_whole_count() {
    assert_eq!(
        read_package("RUN", &[1.5, 1.0, 75.0]),
        Err(WorkoutError::InvalidAction(1.5))
    );
    assert!(read_package("RUN", &[-1.0, 1.0, 75.0]).is_err());
    assert!(read_package("RUN", &[f64::NAN, 1.0, 75.0]).is_err());
    assert_eq!(
        read_package("RUN", &[18_446_744_073_709_551_616.0, 1.0, 75.0]),
        Err(WorkoutError::InvalidAction(18_446_744_073_709_551_616.0))
    );
}

#[test]
fn negative_duration_fails_after_dispatch() {
    for (workout_type, data) in [
        ("RUN", vec![15000.0, -1.0, 75.0]),
        ("WLK", vec![9000.0, -1.0, 75.0, 180.0]),
        ("SWM", vec![720.0, -1.0, 80.0, 25.0, 40.0]),
    ] {
        let result =
            read_package(workout_type, &data).and_then(|workout| workout.show_training_info());
        assert_eq!(result, Err(WorkoutError::NegativeDuration(-1.0)));
    }
}

#[test]
fn codes_round_trip_through_kind() {
    for kind in WorkoutKind::ALL {
        assert_eq!(WorkoutKind::from_code(kind.code()), Some(kind));
    }
}

#[test]
fn sample_packages_render_expected_messages() {
    let messages: Vec<String> = SAMPLE_PACKAGES
        .iter()
        .map(|(workout_type, data)| {
            read_package(workout_type, data)
                .and_then(|workout| workout.show_training_info())
                .expect("sample summary")
                .message()
        })
        .collect();

    assert_eq!(
        messages,
        vec![
            "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg. speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg. speed: 9.750 km/h; Calories burned: 699.750.",
            "Workout type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg. speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}
