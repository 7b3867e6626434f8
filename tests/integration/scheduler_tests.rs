//! Scheduler iteration: fixed ordering and the watchdog gate.

use lightbouncer::app::state::PatternMode;
use lightbouncer::config::BoardConfig;
use lightbouncer::error::{Error, GpioError};
use lightbouncer::events::{PendingByte, TimerFlag};
use lightbouncer::pins;
use lightbouncer::scheduler::Scheduler;

use crate::mock_hw::{Call, DEBOUNCE, LEFT, MockBoard, UP, scheduler};

#[test]
fn quiet_iteration_only_debounces() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let mut s = scheduler(&rx, &tick);
    let mut hw = MockBoard::new();

    s.run_iteration(&mut hw);

    assert_eq!(hw.calls, vec![Call::Wait(DEBOUNCE)]);
    assert_eq!(s.iterations(), 1);
}

#[test]
fn tick_feeds_watchdog_once_and_clears() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let mut s = scheduler(&rx, &tick);
    let mut hw = MockBoard::new();

    tick.set();
    s.run_iteration(&mut hw);
    s.run_iteration(&mut hw);

    assert_eq!(
        hw.calls,
        vec![Call::Wait(DEBOUNCE), Call::Hit, Call::Wait(DEBOUNCE)]
    );
    assert!(!tick.is_set());
    assert_eq!(s.watchdog_feeds(), 1);
}

#[test]
fn x_stops_feeding_for_good() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let mut s = scheduler(&rx, &tick);
    let mut hw = MockBoard::new();

    rx.post(b'x');
    tick.set();
    s.run_iteration(&mut hw);

    for _ in 0..5 {
        tick.set();
        s.run_iteration(&mut hw);
    }

    assert_eq!(hw.hits(), 0);
    assert_eq!(s.watchdog_feeds(), 0);
    assert!(s.state().watchdog_gate().is_closed());
}

#[test]
fn gate_stays_closed_after_other_commands() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let mut s = scheduler(&rx, &tick);
    let mut hw = MockBoard::new();

    for byte in [b'x', b'?', b'5', b'!'] {
        rx.post(byte);
        s.run_iteration(&mut hw);
    }
    hw.clear();
    tick.set();
    s.run_iteration(&mut hw);

    assert_eq!(hw.calls, vec![Call::Wait(DEBOUNCE)]);
}

#[test]
fn commands_then_inputs_then_watchdog() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let mut s = scheduler(&rx, &tick);
    let mut hw = MockBoard::new();

    rx.post(b'b');
    hw.press(LEFT);
    tick.set();
    s.run_iteration(&mut hw);

    // Serial bar (25 calls incl. print), Left bar (25), debounce, timer hit.
    assert_eq!(hw.calls[0], Call::Print("Changing to bar mode.".into()));
    assert_eq!(hw.calls.len(), 26 + 25 + 2);
    let n = hw.calls.len();
    assert_eq!(&hw.calls[n - 2..], &[Call::Wait(DEBOUNCE), Call::Hit]);
    assert_eq!(s.state().mode(), PatternMode::Bar);
}

#[test]
fn serial_speed_applies_before_button_step() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let mut s = scheduler(&rx, &tick);
    let mut hw = MockBoard::new();

    rx.post(b'9');
    hw.press(UP);
    s.run_iteration(&mut hw);

    assert_eq!(s.state().speed().get(), 9);
}

#[test]
fn last_byte_wins() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let mut s = scheduler(&rx, &tick);
    let mut hw = MockBoard::new();

    rx.post(b'1');
    rx.post(b'7');
    s.run_iteration(&mut hw);

    assert_eq!(s.state().speed().get(), 7);
    assert_eq!(hw.printed(), vec!["Setting LED speed to 7..."]);
}

#[test]
fn held_left_replays_and_alternates() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let mut s = scheduler(&rx, &tick);
    let mut hw = MockBoard::new();
    hw.press(LEFT);

    let mut modes = Vec::new();
    for _ in 0..3 {
        s.run_iteration(&mut hw);
        modes.push(s.state().mode());
    }

    assert_eq!(
        modes,
        vec![PatternMode::Bar, PatternMode::Bounce, PatternMode::Bar]
    );
    assert_eq!(hw.hits(), 27);
    assert_eq!(hw.waits().iter().filter(|&&w| w == DEBOUNCE).count(), 3);
}

#[test]
fn configure_sets_up_every_pin() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let s = scheduler(&rx, &tick);
    let mut hw = MockBoard::new();

    s.configure(&mut hw).unwrap();

    assert_eq!(hw.outputs, pins::LED_GPIOS.to_vec());
    assert_eq!(hw.inputs, pins::BUTTON_GPIOS.to_vec());
}

#[test]
fn configure_failure_propagates() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let s = Scheduler::from_config(&BoardConfig::default(), &rx, &tick);
    let mut hw = MockBoard::rejecting(pins::BUTTON_DOWN_GPIO);

    assert_eq!(
        s.configure(&mut hw),
        Err(Error::Gpio(GpioError::ConfigFailed {
            pin: pins::BUTTON_DOWN_GPIO,
            rc: -1
        }))
    );
}

#[test]
fn starts_at_configured_speed() {
    let (rx, tick) = (PendingByte::new(), TimerFlag::new());
    let config = BoardConfig {
        default_speed: 2,
        ..BoardConfig::default()
    };
    let s = Scheduler::from_config(&config, &rx, &tick);

    assert_eq!(s.state().speed().get(), 2);
    assert_eq!(s.engine().delay_units(s.state().speed()), 1_280_000);
}
