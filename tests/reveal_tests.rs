// Host-side tests for the pure reveal model. The crate itself only runs on
// wasm, so the module is included directly rather than linked.

#![allow(dead_code)]
mod reveal {
    include!("../src/components/reveal.rs");
}

use reveal::*;

#[test]
fn latch_stays_revealed_after_first_intersection() {
    let mut latch = ViewLatch::new(true);
    assert!(!latch.visible());

    assert!(latch.update(true));
    assert!(latch.visible());

    // Scrolling back out must not un-reveal a fire-once latch.
    assert!(!latch.update(false));
    assert!(latch.visible());
    assert!(!latch.update(true));
    assert!(latch.visible());
    assert!(!latch.update(false));
    assert!(latch.visible());
}

#[test]
fn latch_without_fire_once_mirrors_intersection() {
    let mut latch = ViewLatch::new(false);

    assert!(latch.update(true));
    assert!(latch.visible());

    assert!(latch.update(false));
    assert!(!latch.visible());

    assert!(latch.update(true));
    assert!(latch.visible());
}

#[test]
fn latch_reports_changes_only() {
    let mut latch = ViewLatch::new(false);
    assert!(!latch.update(false));
    assert!(latch.update(true));
    assert!(!latch.update(true));
    assert!(latch.update(false));
}

#[test]
fn hidden_transforms_match_presets() {
    let cases = [
        (RevealAnimation::FadeUp, "translateY(10vh)"),
        (RevealAnimation::FadeDown, "translateY(-10vh)"),
        (RevealAnimation::FadeLeft, "translateX(10vw)"),
        (RevealAnimation::FadeRight, "translateX(-10vw)"),
        (RevealAnimation::ZoomIn, "scale(0.95)"),
        (RevealAnimation::ZoomOut, "scale(1.05)"),
        (RevealAnimation::Flip, "rotateY(90deg)"),
        (RevealAnimation::Rotate, "rotate(180deg)"),
    ];
    for (animation, expected) in cases {
        assert_eq!(animation.hidden_transform(), expected);
    }
}

#[test]
fn hidden_style_applies_preset_and_zero_opacity() {
    let style = reveal_style(RevealAnimation::FadeUp, false, 0, 600);
    assert!(style.contains("opacity: 0"));
    assert!(style.contains("transform: translateY(10vh)"));
    assert!(style.contains("transition: transform 600ms ease-out 0ms"));
}

#[test]
fn revealed_style_is_neutral() {
    let style = reveal_style(RevealAnimation::Rotate, true, 250, 800);
    assert!(style.contains("opacity: 1"));
    assert!(style.contains(&format!("transform: {REVEALED_TRANSFORM}")));
    assert!(style.contains("800ms ease-out 250ms"));
}

#[test]
fn re_hide_restores_hidden_preset() {
    // once=false round trip: revealed style then hidden style again.
    let shown = reveal_style(RevealAnimation::ZoomIn, true, 0, 500);
    let hidden = reveal_style(RevealAnimation::ZoomIn, false, 0, 500);
    assert!(shown.contains("opacity: 1"));
    assert!(hidden.contains("opacity: 0"));
    assert!(hidden.contains("scale(0.95)"));
}
