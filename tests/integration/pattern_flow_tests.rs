//! End-to-end pattern scenarios: switches and buttons in, latched port
//! outputs out, through `ControlService::step` on a simulated board.

use crate::mock_hw::{RecordingSink, ScriptedDelay, SimBoard};

use gpio_patterns::app::service::ControlService;
use gpio_patterns::config::BoardConfig;
use gpio_patterns::drivers::bar_leds;
use gpio_patterns::drivers::button::ButtonStatus;
use gpio_patterns::drivers::led_patterns::{Pattern, PatternOutcome};
use gpio_patterns::drivers::rgb_led::RgbColour;
use gpio_patterns::pins;

fn service() -> (ControlService, RecordingSink) {
    let mut service = ControlService::new(BoardConfig::default());
    let mut sink = RecordingSink::new();
    service.start(&mut sink);
    (service, sink)
}

// ── Pattern 1: button mirror ─────────────────────────────────

#[test]
fn both_buttons_flash_status_and_blue_with_bar_dark() {
    let (mut hw, board) = SimBoard::new(0b0000);
    board.p1.press(pins::BUTTONS_MASK);
    let mut delay = ScriptedDelay::new(&board);
    let (mut svc, mut sink) = service();

    let report = svc.step(&mut hw, &mut delay, &mut sink);

    assert_eq!(report.buttons, ButtonStatus::BOTH_PRESSED);
    assert_eq!(report.pattern, Pattern::ButtonMirror);
    assert_eq!(delay.waits, vec![500, 500]);
    assert_eq!(board.bar_history(), vec![bar_leds::ALL_OFF]);
    assert_eq!(board.status_history(), vec![true, false]);
    assert_eq!(
        board.rgb_history(),
        vec![RgbColour::Blue.bits(), RgbColour::Off.bits()]
    );
}

#[test]
fn single_button_states_follow_presses_between_iterations() {
    let (mut hw, board) = SimBoard::new(0b0000);
    let mut delay = ScriptedDelay::new(&board);
    let (mut svc, mut sink) = service();

    board.p1.press(pins::BUTTON1_MASK);
    let report = svc.step(&mut hw, &mut delay, &mut sink);
    assert_eq!(report.buttons, ButtonStatus::BUTTON1_PRESSED);

    board.p1.release(pins::BUTTON1_MASK);
    board.p1.press(pins::BUTTON2_MASK);
    let report = svc.step(&mut hw, &mut delay, &mut sink);
    assert_eq!(report.buttons, ButtonStatus::BUTTON2_PRESSED);

    board.p1.release(pins::BUTTON2_MASK);
    let report = svc.step(&mut hw, &mut delay, &mut sink);
    assert_eq!(report.buttons, ButtonStatus::NONE_PRESSED);

    assert_eq!(
        board.bar_history(),
        vec![bar_leds::EVEN, bar_leds::ODD, bar_leds::ALL_ON]
    );
    assert_eq!(board.status_history(), vec![true, false, false]);
    assert_eq!(
        board.rgb_history(),
        vec![
            RgbColour::Off.bits(),
            RgbColour::Pink.bits(),
            RgbColour::Green.bits()
        ]
    );
    assert!(delay.waits.is_empty(), "static sub-states never wait");
}

#[test]
fn unmapped_switch_codes_run_button_mirror() {
    for code in [0b0011, 0b0111, 0b1111] {
        let (mut hw, board) = SimBoard::new(code);
        let mut delay = ScriptedDelay::new(&board);
        let (mut svc, mut sink) = service();

        let report = svc.step(&mut hw, &mut delay, &mut sink);

        assert_eq!(report.pattern, Pattern::ButtonMirror, "code {:04b}", code);
        assert_eq!(board.bar_history(), vec![bar_leds::ALL_ON]);
        assert_eq!(board.rgb_history(), vec![RgbColour::Green.bits()]);
    }
}

// ── Pattern 2: count up ──────────────────────────────────────

#[test]
fn count_up_aborted_at_37_hands_over_to_count_down_from_255() {
    let (mut hw, board) = SimBoard::new(0b0001);
    // 38 steps of 100 ms have elapsed once 37 has been shown.
    let mut delay = ScriptedDelay::new(&board)
        .at(3_800, 0b0010)
        .at(4_100, 0b0000);
    let (mut svc, mut sink) = service();

    let first = svc.step(&mut hw, &mut delay, &mut sink);
    assert_eq!(first.pattern, Pattern::CountUp);
    assert_eq!(first.outcome, PatternOutcome::Aborted { bar: 37 });
    let expected: Vec<u8> = (0..=37).collect();
    assert_eq!(board.bar_history(), expected);
    assert_eq!(board.status_history(), vec![true]);
    assert_eq!(board.rgb_history(), vec![RgbColour::Red.bits()]);

    board.clear_history();
    let second = svc.step(&mut hw, &mut delay, &mut sink);
    assert_eq!(second.pattern, Pattern::CountDown);
    assert_eq!(second.outcome, PatternOutcome::Aborted { bar: 253 });
    assert_eq!(board.bar_history(), vec![255, 254, 253]);
    assert_eq!(board.status_history(), vec![false]);
    assert_eq!(board.rgb_history(), vec![RgbColour::Blue.bits()]);
}

#[test]
fn count_up_restarts_from_zero_after_completing() {
    let (mut hw, board) = SimBoard::new(0b0001);
    let mut delay = ScriptedDelay::new(&board).at(25_900, 0b0000);
    let (mut svc, mut sink) = service();

    let first = svc.step(&mut hw, &mut delay, &mut sink);
    assert_eq!(first.outcome, PatternOutcome::Completed);
    assert_eq!(delay.elapsed_ms, 25_600);

    board.clear_history();
    let second = svc.step(&mut hw, &mut delay, &mut sink);
    assert_eq!(second.outcome, PatternOutcome::Aborted { bar: 2 });
    assert_eq!(board.bar_history(), vec![0, 1, 2]);
}

// ── Pattern 3: count down ────────────────────────────────────

#[test]
fn count_down_wraps_from_zero_to_255_until_switch_changes() {
    let (mut hw, board) = SimBoard::new(0b0010);
    let mut delay = ScriptedDelay::new(&board).at(25_800, 0b0000);
    let (mut svc, mut sink) = service();

    let report = svc.step(&mut hw, &mut delay, &mut sink);

    assert_eq!(report.outcome, PatternOutcome::Aborted { bar: 254 });
    let mut expected: Vec<u8> = (0..=255).rev().collect();
    expected.extend([255, 254]);
    assert_eq!(board.bar_history(), expected);
    assert!(delay.waits.iter().all(|&ms| ms == 100));
}

// ── Pattern 4: blink all ─────────────────────────────────────

#[test]
fn blink_all_repeats_each_iteration_while_selected() {
    let (mut hw, board) = SimBoard::new(0b0100);
    let mut delay = ScriptedDelay::new(&board);
    let (mut svc, mut sink) = service();

    for _ in 0..3 {
        let report = svc.step(&mut hw, &mut delay, &mut sink);
        assert_eq!(report.outcome, PatternOutcome::Completed);
    }

    assert_eq!(svc.iterations(), 3);
    assert_eq!(delay.waits, vec![500; 6]);
    assert_eq!(
        board.bar_history(),
        [bar_leds::ALL_ON, bar_leds::ALL_OFF].repeat(3)
    );
    assert_eq!(board.status_history(), [true, false].repeat(3));
    assert_eq!(
        board.rgb_history(),
        [RgbColour::Green.bits(), RgbColour::Off.bits()].repeat(3)
    );
}

#[test]
fn blink_all_finishes_its_cycle_even_if_switch_changes() {
    let (mut hw, board) = SimBoard::new(0b0100);
    let mut delay = ScriptedDelay::new(&board).at(500, 0b1000);
    let (mut svc, mut sink) = service();

    let first = svc.step(&mut hw, &mut delay, &mut sink);
    assert_eq!(first.outcome, PatternOutcome::Completed);
    assert_eq!(delay.waits, vec![500, 500]);

    let second = svc.step(&mut hw, &mut delay, &mut sink);
    assert_eq!(second.pattern, Pattern::Ring);
}

// ── Pattern 5: ring ──────────────────────────────────────────

#[test]
fn ring_stops_on_switch_change_mid_rotation() {
    let (mut hw, board) = SimBoard::new(0b1000);
    let mut delay = ScriptedDelay::new(&board).at(1_500, 0b0001);
    let (mut svc, mut sink) = service();

    let report = svc.step(&mut hw, &mut delay, &mut sink);

    assert_eq!(report.outcome, PatternOutcome::Aborted { bar: 0x04 });
    assert_eq!(board.bar_history(), vec![0x01, 0x02, 0x04]);
    assert_eq!(board.status_history(), vec![false]);
    assert_eq!(board.rgb_history(), vec![RgbColour::Off.bits()]);
}

#[test]
fn ring_restarts_at_bit_zero_each_iteration() {
    let (mut hw, board) = SimBoard::new(0b1000);
    let mut delay = ScriptedDelay::new(&board);
    let (mut svc, mut sink) = service();

    svc.step(&mut hw, &mut delay, &mut sink);
    svc.step(&mut hw, &mut delay, &mut sink);

    let one_turn: Vec<u8> = (0..8).map(|bit| 1u8 << bit).collect();
    assert_eq!(board.bar_history(), one_turn.repeat(2));
}

#[test]
fn faster_config_shortens_every_step() {
    let (mut hw, board) = SimBoard::new(0b1000);
    let mut delay = ScriptedDelay::new(&board);
    let config = BoardConfig {
        ring_step_ms: 20,
        ..BoardConfig::default()
    };
    let mut svc = ControlService::new(config);
    let mut sink = RecordingSink::new();

    svc.step(&mut hw, &mut delay, &mut sink);

    assert_eq!(delay.waits, vec![20; 8]);
    assert_eq!(delay.elapsed_ms, 160);
}
