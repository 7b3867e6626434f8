//! Serial command interpreter: acknowledgements and state effects.

use lightbouncer::app::commands::{Command, HELP_TEXT};
use lightbouncer::app::interpreter::CommandInterpreter;
use lightbouncer::app::state::{FlashSpeed, LoopState, PatternMode};
use lightbouncer::drivers::led_patterns::PatternEngine;
use lightbouncer::events::PendingByte;
use lightbouncer::pins;

use crate::mock_hw::{Call, MockBoard};

struct Console {
    rx: PendingByte,
    state: LoopState,
    engine: PatternEngine,
    interpreter: CommandInterpreter,
    hw: MockBoard,
}

impl Console {
    fn new() -> Self {
        Self {
            rx: PendingByte::new(),
            state: LoopState::new(FlashSpeed::new(FlashSpeed::DEFAULT)),
            engine: PatternEngine::new(pins::LED_GPIOS, 10_000),
            interpreter: CommandInterpreter::new(),
            hw: MockBoard::new(),
        }
    }

    fn send(&mut self, byte: u8) -> Option<Command> {
        self.rx.post(byte);
        self.poll()
    }

    fn poll(&mut self) -> Option<Command> {
        self.interpreter
            .process_pending_command(&self.rx, &mut self.state, &self.engine, &mut self.hw)
    }
}

#[test]
fn empty_slot_does_nothing() {
    let mut c = Console::new();
    assert_eq!(c.poll(), None);
    assert!(c.hw.calls.is_empty());
}

#[test]
fn byte_is_consumed_once() {
    let mut c = Console::new();
    c.send(b'3');
    assert!(!c.rx.is_pending());
    assert_eq!(c.poll(), None);
}

#[test]
fn digits_set_speed_with_acknowledgement() {
    for d in b'0'..=b'9' {
        let mut c = Console::new();
        c.send(d);
        assert_eq!(c.state.speed().get(), d - b'0');
        assert_eq!(
            c.hw.printed(),
            vec![format!("Setting LED speed to {}...", d - b'0')]
        );
    }
}

#[test]
fn help_prints_header_then_text() {
    let mut c = Console::new();
    assert_eq!(c.send(b'?'), Some(Command::Help));

    let printed = c.hw.printed();
    assert_eq!(printed[0], "Now displaying help message..");
    assert_eq!(&printed[1..], HELP_TEXT);
}

#[test]
fn unknown_byte_reports_error_and_changes_nothing() {
    let mut c = Console::new();
    let before = c.state;

    assert_eq!(c.send(b'!'), Some(Command::Unknown(b'!')));

    assert_eq!(c.state, before);
    let printed = c.hw.printed();
    assert_eq!(
        printed[0],
        "Error: unknown command. Please enter one of the following commands:"
    );
    assert_eq!(&printed[1..], HELP_TEXT);
    assert_eq!(c.hw.hits(), 0);
}

#[test]
fn pattern_commands_run_without_changing_mode() {
    let mut c = Console::new();

    c.send(b'b');
    assert_eq!(c.hw.calls[0], Call::Print("Changing to bar mode.".into()));
    assert_eq!(c.state.mode(), PatternMode::Bounce);
    assert_eq!(c.hw.hits(), 9);

    c.hw.clear();
    c.send(b'a');
    assert_eq!(c.hw.calls[0], Call::Print("Changing to bounce mode.".into()));
    assert_eq!(c.hw.writes().len(), 16);
}

#[test]
fn default_speed_bounce_waits_320000() {
    let mut c = Console::new();
    c.send(b'a');
    assert_eq!(c.hw.waits(), vec![320_000; 8]);
}

#[test]
fn fastest_bar_waits_base_delay() {
    let mut c = Console::new();
    c.send(b'9');
    c.hw.clear();
    c.send(b'b');
    assert_eq!(c.hw.waits(), vec![10_000; 8]);
}

#[test]
fn x_closes_the_gate() {
    let mut c = Console::new();
    c.send(b'x');
    assert!(c.state.watchdog_gate().is_closed());
    assert_eq!(c.hw.printed(), vec!["No longer hitting the watchdog.."]);
    assert_eq!(c.hw.hits(), 0);
}

#[test]
fn uppercase_commands_are_unknown() {
    let mut c = Console::new();
    assert_eq!(c.send(b'A'), Some(Command::Unknown(b'A')));
    assert_eq!(c.hw.writes().len(), 0);
}
