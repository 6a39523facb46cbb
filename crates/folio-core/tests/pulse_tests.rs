// Host-side tests for the pulse envelope and cooldown state machine.

use folio_core::config::PulseTiming;
use folio_core::pulse::{envelope, PulseState};
use folio_core::{Mode, Neighbours};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn always() -> PulseTiming {
    PulseTiming {
        trigger_probability: 1.0,
        ..PulseTiming::default()
    }
}

fn no_neighbours(_: usize) -> Neighbours {
    Neighbours::new()
}

#[test]
fn envelope_ramps_then_decays() {
    let (ramp, decay) = (0.2, 4.5);
    assert_eq!(envelope(0.0, ramp, decay), 0.0);
    assert!((envelope(0.1, ramp, decay) - 0.5).abs() < 1e-6);
    assert!((envelope(0.2, ramp, decay) - 1.0).abs() < 1e-6);
    let mut prev = envelope(0.2, ramp, decay);
    for i in 1..80 {
        let p = 0.2 + i as f32 * 0.01;
        let v = envelope(p, ramp, decay);
        assert!(v < prev, "not decaying at {p}");
        assert!(v > 0.0);
        prev = v;
    }
    assert_eq!(envelope(1.0, ramp, decay), 0.0);
    assert_eq!(envelope(-0.1, ramp, decay), 0.0);
}

#[test]
fn pulse_expires_exactly_after_its_duration() {
    let timing = always();
    let duration = timing.duration;
    let mut pulse = PulseState::new(timing);
    let mut rng = StdRng::seed_from_u64(1);
    assert!(pulse.maybe_trigger(0.0, Mode::Ambient, 10, &mut rng, no_neighbours));

    pulse.update(duration - 1e-3);
    assert!(pulse.is_active());
    pulse.update(duration);
    assert!(!pulse.is_active());
    assert_eq!(pulse.last_end(), Some(duration));
}

#[test]
fn skipped_frames_do_not_stretch_the_pulse() {
    let timing = always();
    let duration = timing.duration;
    let mut pulse = PulseState::new(timing);
    let mut rng = StdRng::seed_from_u64(2);
    assert!(pulse.maybe_trigger(10.0, Mode::Ambient, 10, &mut rng, no_neighbours));
    pulse.update(10.5);
    assert!(pulse.is_active());
    // Next frame arrives long after the window closed.
    pulse.update(60.0);
    assert!(!pulse.is_active());
    assert_eq!(pulse.last_end(), Some(10.0 + duration));
}

#[test]
fn only_one_pulse_at_a_time() {
    let mut pulse = PulseState::new(always());
    let mut rng = StdRng::seed_from_u64(3);
    assert!(pulse.maybe_trigger(0.0, Mode::Focused, 10, &mut rng, no_neighbours));
    let first = pulse.active().cloned();
    assert!(!pulse.maybe_trigger(0.1, Mode::Focused, 10, &mut rng, no_neighbours));
    assert_eq!(pulse.active().cloned(), first);
}

#[test]
fn cooldown_depends_on_mode() {
    let timing = always();
    let end = timing.duration;
    let mut rng = StdRng::seed_from_u64(4);

    let mut ambient = PulseState::new(timing.clone());
    assert!(ambient.maybe_trigger(0.0, Mode::Ambient, 10, &mut rng, no_neighbours));
    ambient.update(end);
    assert!(!ambient.maybe_trigger(end + 2.0, Mode::Ambient, 10, &mut rng, no_neighbours));
    assert!(ambient.maybe_trigger(end + 3.1, Mode::Ambient, 10, &mut rng, no_neighbours));

    let mut focused = PulseState::new(timing);
    assert!(focused.maybe_trigger(0.0, Mode::Focused, 10, &mut rng, no_neighbours));
    focused.update(end);
    assert!(!focused.maybe_trigger(end + 1.0, Mode::Focused, 10, &mut rng, no_neighbours));
    assert!(focused.maybe_trigger(end + 1.6, Mode::Focused, 10, &mut rng, no_neighbours));
}

#[test]
fn zero_probability_never_triggers() {
    let timing = PulseTiming {
        trigger_probability: 0.0,
        ..PulseTiming::default()
    };
    let mut pulse = PulseState::new(timing);
    let mut rng = StdRng::seed_from_u64(5);
    for i in 0..1000 {
        assert!(!pulse.maybe_trigger(i as f64, Mode::Focused, 10, &mut rng, no_neighbours));
    }
}

#[test]
fn empty_field_never_triggers() {
    let mut pulse = PulseState::new(always());
    let mut rng = StdRng::seed_from_u64(6);
    assert!(!pulse.maybe_trigger(0.0, Mode::Ambient, 0, &mut rng, no_neighbours));
}

#[test]
fn neighbours_echo_later_and_weaker() {
    let timing = always();
    let duration = timing.duration;
    let strength = timing.echo_strength;
    let mut pulse = PulseState::new(timing);
    let mut rng = StdRng::seed_from_u64(7);
    let mut source = None;
    assert!(pulse.maybe_trigger(0.0, Mode::Ambient, 10, &mut rng, |s| {
        source = Some(s);
        Neighbours::from_slice(&[(s + 1) % 10, (s + 2) % 10])
    }));
    let s = source.unwrap();
    let n = (s + 1) % 10;
    let other = (s + 5) % 10;

    // Before the echo delay the neighbour is still dark.
    let early = 0.1 * duration;
    assert!(pulse.intensity(s, early) > 0.0);
    assert_eq!(pulse.intensity(n, early), 0.0);

    // At delay + ramp the echo peaks at its strength.
    let peak = 0.35 * duration;
    assert!((pulse.intensity(n, peak) - strength).abs() < 1e-3);
    assert!(pulse.intensity(n, peak) < 1.0);
    assert_eq!(pulse.intensity(other, peak), 0.0);
}

#[test]
fn reset_keeps_the_cooldown_clock() {
    let timing = always();
    let end = timing.duration;
    let mut pulse = PulseState::new(timing);
    let mut rng = StdRng::seed_from_u64(8);
    assert!(pulse.maybe_trigger(0.0, Mode::Ambient, 10, &mut rng, no_neighbours));
    pulse.update(end);
    pulse.reset(end + 0.5);
    assert_eq!(pulse.last_end(), Some(end));
    assert!(!pulse.cooldown_elapsed(end + 1.0, Mode::Ambient));
}

#[test]
fn reset_mid_pulse_starts_the_cooldown() {
    let mut pulse = PulseState::new(always());
    let mut rng = StdRng::seed_from_u64(8);
    assert!(pulse.maybe_trigger(1.0, Mode::Ambient, 10, &mut rng, no_neighbours));
    pulse.reset(1.25);
    assert!(!pulse.is_active());
    assert_eq!(pulse.last_end(), Some(1.25));
    assert!(!pulse.maybe_trigger(1.5, Mode::Ambient, 10, &mut rng, no_neighbours));
    assert!(!pulse.maybe_trigger(4.0, Mode::Ambient, 10, &mut rng, no_neighbours));
    assert!(pulse.maybe_trigger(4.25, Mode::Ambient, 10, &mut rng, no_neighbours));
}
