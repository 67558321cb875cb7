// SPDX-License-Identifier: MPL-2.0
use iced_carousel::carousel::{
    Carousel, Effect, Message, Motion, Page, RecordingSurface, SlideList, WheelDirection,
};
use iced_carousel::config::CarouselSettings;
use iced_carousel::media::ImageSource;
use std::time::{Duration, Instant};

const TARGET: &str = "startups-carousel";
const W: f32 = 304.0;

fn sources(count: usize) -> Vec<ImageSource> {
    (0..count)
        .map(|i| ImageSource::parse(&format!("https://cdn.example.com/startup-{i}.png")))
        .collect()
}

fn settings() -> CarouselSettings {
    CarouselSettings::default()
}

fn mount(count: usize, now: Instant) -> Carousel<RecordingSurface> {
    Carousel::mount(
        SlideList::tripled(sources(count)),
        RecordingSurface::new(W),
        settings(),
        now,
    )
    .expect("mount succeeds")
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn five_images_render_fifteen_slides_and_advance_by_one() {
    let t0 = Instant::now();
    let mut carousel = mount(5, t0);

    assert_eq!(carousel.slides().len(), 15);
    assert_eq!(carousel.current_translate(), -5.0 * W);
    assert_eq!(carousel.visible_base_index(), 0);

    let effect = carousel.handle(Message::Tick, t0 + settings().auto_play_interval);

    assert_eq!(effect, Effect::Advanced { base_index: 1 });
    assert_eq!(carousel.current_translate(), -6.0 * W);
    assert!(carousel.surface().last_motion().is_some_and(|m| m.is_animated()));
}

#[test]
fn mounting_twice_on_same_target_keeps_one_track() {
    let t0 = Instant::now();
    let mut page: Page<RecordingSurface> = Page::new().with_slot(TARGET);

    page.mount(TARGET, sources(5), RecordingSurface::new(W), settings(), t0)
        .expect("first mount");
    let second = page
        .mount(TARGET, sources(5), RecordingSurface::new(W), settings(), t0)
        .expect("second mount");

    assert_eq!(second.slides().len(), 15);
    assert_eq!(second.surface().calls.len(), 1);
    assert!(second.is_auto_playing());
}

#[test]
fn missing_target_does_not_render() {
    let mut page: Page<RecordingSurface> = Page::new().with_slot(TARGET);
    let result = page.mount(
        "elsewhere",
        sources(5),
        RecordingSurface::new(W),
        settings(),
        Instant::now(),
    );

    assert!(result.is_err());
    assert!(page.carousel(TARGET).is_none());
}

#[test]
fn recentering_never_changes_the_visible_image() {
    let base_len = 5;
    let mut now = Instant::now();
    let mut carousel = mount(base_len, now);
    carousel.stop_auto_play();
    let loop_width = base_len as f32 * W;

    // Well past two full loops forward, then back again.
    for step in 1..=(3 * base_len + 1) {
        carousel.auto_advance(now);
        now += settings().transition_duration;
        let effect = carousel.handle(Message::Tick, now);

        let Effect::Settled {
            base_index,
            recentered_by,
        } = effect
        else {
            panic!("expected a settle, got {effect:?}");
        };
        assert_eq!(base_index, step % base_len);
        if let Some(shift) = recentered_by {
            assert!((shift.abs() - loop_width).abs() < 1e-3);
        }
        assert!(carousel.geometry().is_within_buffer(carousel.current_translate()));
    }

    let logical = 3 * base_len + 1;
    for back in 1..=(3 * base_len) {
        let effect = carousel.handle(Message::Wheel(WheelDirection::Backward), now);
        assert!(matches!(effect, Effect::Advanced { .. }));
        now += settings().transition_duration;
        carousel.handle(Message::Tick, now);

        let expected = (logical - back) % base_len;
        assert_eq!(carousel.visible_base_index(), expected);
        assert!(carousel.geometry().is_within_buffer(carousel.current_translate()));
    }
}

#[test]
fn release_snaps_to_nearest_whole_slide_for_every_drag_distance() {
    let t0 = Instant::now();
    let home = -5.0 * W;
    let span = (2.0 * W) as i32;

    for delta in -span..=span {
        let mut carousel = mount(5, t0);
        let delta = delta as f32;

        carousel.handle(Message::PointerPressed { x: 400.0 }, t0);
        carousel.handle(Message::PointerMoved { x: 400.0 + delta }, t0);
        let effect = carousel.handle(Message::PointerReleased, t0);

        let Effect::Released { moved_by, target } = effect else {
            panic!("expected a release, got {effect:?}");
        };
        assert_eq!(moved_by, delta);
        assert_eq!(target % W, 0.0, "delta {delta} settled off-grid at {target}");
        assert!(
            (target - (home + delta)).abs() <= W / 2.0,
            "delta {delta} snapped to {target}, not the nearest slide"
        );
        assert!(matches!(
            carousel.surface().last_motion(),
            Some(Motion::Animated { .. })
        ));
    }
}

#[test]
fn auto_play_never_advances_while_dragging() {
    let t0 = Instant::now();
    let mut carousel = mount(5, t0);
    carousel.handle(Message::PointerPressed { x: 100.0 }, t0);

    let mut now = t0;
    for _ in 0..200 {
        now += ms(50);
        let effect = carousel.handle(Message::Tick, now);
        assert!(!matches!(effect, Effect::Advanced { .. }));
    }
    assert!(carousel.is_dragging());
    assert!(!carousel.is_auto_playing());

    carousel.handle(Message::PointerReleased, now);
    let settled_at = now + settings().transition_duration;
    assert!(matches!(
        carousel.handle(Message::Tick, settled_at),
        Effect::Settled { .. }
    ));

    carousel.handle(Message::Tick, settled_at + settings().resume_delay);
    assert!(carousel.is_auto_playing());
    let fired_at = settled_at + settings().resume_delay + settings().auto_play_interval;
    assert!(matches!(
        carousel.handle(Message::Tick, fired_at),
        Effect::Advanced { .. }
    ));
}

#[test]
fn repeated_reset_leaves_a_single_auto_play_timer() {
    let t0 = Instant::now();
    let mut carousel = mount(5, t0);

    let mut now = t0;
    for _ in 0..10 {
        now += ms(10);
        carousel.reset_auto_play(now);
    }
    let last_reset = now;

    // Resume delay, then three full intervals.
    let interval = settings().auto_play_interval;
    let window = settings().resume_delay + interval * 3 + ms(100);
    let mut advances = 0;
    let mut elapsed = Duration::ZERO;
    while elapsed <= window {
        if let Effect::Advanced { .. } = carousel.handle(Message::Tick, last_reset + elapsed) {
            advances += 1;
        }
        elapsed += ms(10);
    }

    assert_eq!(advances, 3);
    assert!(carousel.is_auto_playing());
}

#[test]
fn destroyed_carousel_ignores_input_and_timers() {
    let t0 = Instant::now();
    let mut carousel = mount(5, t0);
    carousel.destroy();

    assert_eq!(
        carousel.handle(Message::PointerPressed { x: 10.0 }, t0),
        Effect::None
    );
    assert_eq!(carousel.handle(Message::Tick, t0 + ms(60_000)), Effect::None);
    assert!(carousel.next_deadline().is_none());
}
