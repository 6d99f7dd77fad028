// Host-side tests for the pure letter-animation model, included directly
// because the crate only targets wasm.

#![allow(dead_code)]
mod motion {
    include!("../src/components/motion.rs");
}

use motion::*;

fn hovering_at(x: f64, y: f64) -> PointerState {
    PointerState {
        x,
        y,
        hovering: true,
    }
}

#[test]
fn letter_sequence_matches_char_count() {
    let seq = letters("abc");
    assert_eq!(seq, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    assert_eq!(seq.len(), "abc".chars().count());

    // Multi-byte glyphs count as one letter each.
    let seq = letters("hëj då");
    assert_eq!(seq.len(), 6);
    assert_eq!(seq[1], (1, 'ë'));
}

#[test]
fn shorter_text_yields_a_fresh_shorter_sequence() {
    let before = letters("abc");
    let after = letters("ab");
    assert_eq!(after, vec![(0, 'a'), (1, 'b')]);
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|&(i, _)| i < after.len()));
}

#[test]
fn empty_text_yields_no_letters() {
    assert!(letters("").is_empty());
}

#[test]
fn float_offset_is_bounded() {
    for tick in [0u64, 1, 17, 500, 99_999] {
        for index in [0usize, 1, 7, 42, 300] {
            let (x, y) = float_offset(tick, index);
            assert!(x.abs() <= FLOAT_AMPLITUDE, "x={x} out of bounds");
            assert!(y.abs() <= FLOAT_AMPLITUDE, "y={y} out of bounds");
        }
    }
}

#[test]
fn hover_offset_zero_when_not_hovering() {
    let pointer = PointerState {
        x: 0.9,
        y: 0.1,
        hovering: false,
    };
    for index in 0..10 {
        assert_eq!(hover_offset(index, 10, pointer, 5.0), (0.0, 0.0));
    }
}

#[test]
fn hover_offset_is_finite_at_zero_distance() {
    // Pointer exactly on letter 5's derived position: distance is zero, the
    // denominator clamps to MIN_POINTER_DISTANCE.
    let pointer = hovering_at(0.5, 0.5);
    let (x, y) = hover_offset(5, 10, pointer, DEFAULT_INTENSITY);
    assert!(x.is_finite() && y.is_finite());
    assert_eq!((x, y), (0.0, 0.0));

    // Slightly off-center: still clamped, bounded by intensity / 0.1.
    let pointer = hovering_at(0.5 - 1e-6, 0.5);
    let (x, _) = hover_offset(5, 10, pointer, DEFAULT_INTENSITY);
    assert!(x.is_finite());
    assert!(x.abs() <= DEFAULT_INTENSITY / MIN_POINTER_DISTANCE);
    // distX/max(d, 0.1) with distance -> 0 behaves as distX * 10.
    assert!((x - 1e-6 * DEFAULT_INTENSITY / MIN_POINTER_DISTANCE).abs() < 1e-12);
}

#[test]
fn letter_position_guards_empty_text() {
    assert_eq!(letter_position(0, 0), 0.0);
    let (h1, h2) = letter_hues(0, 0);
    assert!(h1.is_finite() && h2.is_finite());
}

#[test]
fn scatter_matches_cosine_curve() {
    assert!((scatter_offset(0) - 30.0).abs() < 1e-9);
    assert!((scatter_offset(1) - 30.0 * (0.3f64).cos()).abs() < 1e-9);
    assert!(scatter_offset(1) > 28.6 && scatter_offset(1) < 28.7);
}

#[test]
fn hues_sweep_across_the_word() {
    let (near0, far0) = letter_hues(0, 10);
    assert_eq!((near0, far0), (280.0, 180.0));
    let (near9, far9) = letter_hues(9, 10);
    assert!((near9 - 298.0).abs() < 1e-9);
    assert!((far9 - 198.0).abs() < 1e-9);
}

#[test]
fn glow_clamped_to_unit_range() {
    // Far corner: Euclidean distance can exceed 1, alpha must clamp at 0.
    let pointer = hovering_at(1.0, 1.0);
    let glow = glow_alpha(0, 100, pointer);
    assert!((0.0..=1.0).contains(&glow));

    let pointer = hovering_at(0.0, 0.5);
    let glow = glow_alpha(0, 100, pointer);
    assert!(glow > 0.99);
}

#[test]
fn settle_staggers_by_index() {
    assert!((settle_secs(0) - 0.5).abs() < 1e-9);
    assert!((settle_secs(10) - 0.8).abs() < 1e-9);
}

#[test]
fn scatter_in_scenario_for_two_letters() {
    // "Hi" before and after the first reveal.
    let motion = TextMotion::new(false);
    let opts = MotionOptions::default();

    let first = motion.frame('H', 0, 2, &opts);
    let second = motion.frame('i', 1, 2, &opts);
    assert_eq!(first.opacity, 0.0);
    assert_eq!(second.opacity, 0.0);
    assert!((first.scatter_y - 30.0).abs() < 1e-9);
    assert!((second.scatter_y - 30.0 * (0.3f64).cos()).abs() < 1e-9);

    let mut motion = motion;
    motion.reveal();
    let first = motion.frame('H', 0, 2, &opts);
    let second = motion.frame('i', 1, 2, &opts);
    assert_eq!(first.opacity, 1.0);
    assert_eq!(second.opacity, 1.0);
    assert_eq!(first.scatter_y, 0.0);
    assert_eq!(second.scatter_y, 0.0);
}

#[test]
fn whitespace_never_glows() {
    let mut motion = TextMotion::new(true);
    motion.pointer_entered();
    motion.pointer_moved(0.0, 0.5);
    let opts = MotionOptions::default();

    let space = motion.frame(' ', 0, 10, &opts);
    let letter = motion.frame('a', 0, 10, &opts);
    assert_eq!(space.glow, 0.0);
    assert!(letter.glow > 0.0);
    // Index math still runs for the space: same hues as the letter slot.
    assert_eq!(space.hue_near, letter.hue_near);
}

#[test]
fn hover_disabled_by_options() {
    let mut motion = TextMotion::new(true);
    motion.pointer_entered();
    motion.pointer_moved(0.9, 0.2);
    let opts = MotionOptions {
        animate_on_hover: false,
        ..MotionOptions::default()
    };
    let frame = motion.frame('a', 0, 4, &opts);
    // Only the ambient float remains.
    assert!(frame.offset_x.abs() <= FLOAT_AMPLITUDE);
    assert!(frame.offset_y.abs() <= FLOAT_AMPLITUDE);
}

#[test]
fn stop_is_idempotent_and_freezes_the_clock() {
    let mut motion = TextMotion::new(true);
    motion.advance();
    motion.advance();
    assert_eq!(motion.tick(), 2);

    assert!(motion.stop(), "first stop must report the teardown");
    assert!(!motion.stop(), "second stop must be a no-op");
    assert!(motion.stopped());

    motion.advance();
    assert_eq!(motion.tick(), 2, "ticks after stop must be ignored");
}

#[test]
fn immediate_settle_skips_scatter() {
    let motion = TextMotion::new(true);
    let frame = motion.frame('a', 0, 1, &MotionOptions::default());
    assert_eq!(frame.opacity, 1.0);
    assert_eq!(frame.scatter_y, 0.0);
}
