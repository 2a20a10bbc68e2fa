//! Property-based tests for timer state guards and duration arithmetic

use proptest::prelude::*;
use span_timer::{ManualClock, Timer, TimerError, TimerState};

prop_compose! {
    fn start_time()(seconds in 0.0f64..2_000_000_000.0) -> f64 {
        seconds
    }
}

prop_compose! {
    fn offset()(seconds in 0.0f64..86_400.0) -> f64 {
        seconds
    }
}

proptest! {
    #[test]
    fn prop_second_start_always_rejected(start in start_time(), explicit in any::<bool>()) {
        let mut timer = Timer::new();
        if explicit {
            timer.started_at(start).unwrap();
        } else {
            timer.start().unwrap();
        }

        prop_assert_eq!(timer.start(), Err(TimerError::AlreadyRunning));
        prop_assert_eq!(timer.started_at(start), Err(TimerError::AlreadyRunning));
    }

    #[test]
    fn prop_constructed_start_rejects_start(start in start_time()) {
        let mut timer = Timer::with_start_time(start);
        prop_assert_eq!(timer.start(), Err(TimerError::AlreadyRunning));
        prop_assert_eq!(timer.started_on(), Some(start));
    }

    #[test]
    fn prop_unstarted_rejects_stop_and_elapsed(offset in offset()) {
        let mut timer = Timer::new();
        prop_assert_eq!(timer.stopped_at(offset), Err(TimerError::NotStarted));
        prop_assert_eq!(timer.stop(), Err(TimerError::NotStarted));
        prop_assert_eq!(timer.elapsed(), Err(TimerError::NotStarted));
        prop_assert_eq!(timer.elapsed_in_milliseconds(), Err(TimerError::NotStarted));
        prop_assert_eq!(timer.state(), TimerState::Unstarted);
    }

    #[test]
    fn prop_running_rejects_duration(start in start_time()) {
        let timer = Timer::with_start_time(start);
        prop_assert_eq!(timer.duration(), Err(TimerError::NotStopped));
        prop_assert_eq!(timer.duration_in_milliseconds(), Err(TimerError::NotStopped));
        prop_assert_eq!(timer.duration_from_micro_in_milliseconds(), Err(TimerError::NotStopped));
    }

    #[test]
    fn prop_durations_follow_interval(start in start_time(), offset in offset()) {
        let mut timer = Timer::new();
        timer.started_at(start).unwrap();
        timer.stopped_at(offset).unwrap();

        let interval = (start + offset) - start;
        prop_assert_eq!(timer.duration().unwrap(), interval * 1_000_000.0);
        prop_assert_eq!(timer.duration_in_milliseconds().unwrap(), interval * 1_000.0);
        prop_assert_eq!(timer.duration_from_micro_in_milliseconds().unwrap(), interval / 10_000.0);
        prop_assert!(timer.duration().unwrap() >= 0.0);
    }

    #[test]
    fn prop_elapsed_frozen_once_stopped(start in 0.0f64..1_000_000.0, run in 0.0f64..1_000.0, later in 0.0f64..1_000.0) {
        let clock = ManualClock::new(start);
        let mut timer = Timer::with_clock(clock.clone(), None);
        timer.start().unwrap();
        clock.advance(run);
        timer.stop().unwrap();

        let frozen = timer.elapsed().unwrap();
        prop_assert_eq!(frozen, timer.duration().unwrap());

        clock.advance(later);
        prop_assert_eq!(timer.elapsed().unwrap(), frozen);
        prop_assert_eq!(timer.elapsed_in_milliseconds().unwrap(), timer.duration_in_milliseconds().unwrap());
    }

    #[test]
    fn prop_elapsed_monotonic_while_running(start in 0.0f64..1_000_000.0, steps in prop::collection::vec(0.001f64..10.0, 1..20)) {
        let clock = ManualClock::new(start);
        let mut timer = Timer::with_clock(clock.clone(), None);
        timer.start().unwrap();

        let mut previous = timer.elapsed().unwrap();
        for step in steps {
            clock.advance(step);
            let current = timer.elapsed().unwrap();
            prop_assert!(current > previous);
            previous = current;
        }
    }
}
