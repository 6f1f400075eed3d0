//! Debounced slider commits

use std::time::Duration;

use bindery_forms::prelude::*;

#[derive(Default)]
struct Player {
    volume: f64,
}

fn render_slider(host: &Host<Player>, options: SliderOptions) -> (HeadlessRenderer, WidgetId) {
    let mut renderer = HeadlessRenderer::new();
    renderer.render(slider(
        "Volume",
        host,
        &lens!(Player, volume),
        options.range(0.0, 10.0),
    ));
    let id = renderer.find_one(WidgetKind::Slider).unwrap();
    (renderer, id)
}

#[test]
fn burst_commits_only_final_value_after_quiet_window() {
    let clock = ManualScheduler::new();
    let host = Host::new(Player::default());
    let (mut renderer, id) = render_slider(
        &host,
        SliderOptions::default().timeout_ms(50).scheduler(clock.shared()),
    );

    for value in 1..=5 {
        renderer.slide(id, value as f64).unwrap();
        clock.advance(Duration::from_millis(5));
    }
    assert_eq!(host.revision(), 0);

    clock.advance(Duration::from_millis(49));
    assert_eq!(host.read(|p| p.volume), 5.0);
    assert_eq!(host.revision(), 1);

    clock.advance(Duration::from_millis(500));
    assert_eq!(host.revision(), 1);
}

#[test]
fn change_commits_synchronously_over_pending_input() {
    let clock = ManualScheduler::new();
    let host = Host::new(Player::default());
    let (mut renderer, id) = render_slider(
        &host,
        SliderOptions::default().timeout_ms(50).scheduler(clock.shared()),
    );

    renderer.slide(id, 3.0).unwrap();
    renderer.slide(id, 9.0).unwrap();
    renderer.release(id).unwrap();
    assert_eq!(host.read(|p| p.volume), 9.0);

    clock.advance(Duration::from_millis(100));
    assert_eq!(host.revision(), 1);
}

#[test]
fn zero_window_commits_every_step() {
    let host = Host::new(Player::default());
    let (mut renderer, id) = render_slider(&host, SliderOptions::default());

    renderer.slide(id, 2.0).unwrap();
    renderer.slide(id, 4.0).unwrap();
    assert_eq!(host.revision(), 2);
    assert_eq!(host.read(|p| p.volume), 4.0);
}

#[test]
fn window_without_any_scheduler_commits_immediately() {
    let host = Host::new(Player::default());
    let (mut renderer, id) = render_slider(&host, SliderOptions::default().timeout_ms(50));

    renderer.slide(id, 6.0).unwrap();
    assert_eq!(host.read(|p| p.volume), 6.0);
}

#[tokio::test(start_paused = true)]
async fn tokio_runtime_is_used_when_no_scheduler_is_given() {
    let host = Host::new(Player::default());
    let (mut renderer, id) = render_slider(&host, SliderOptions::default().timeout_ms(50));

    for value in 1..=5 {
        renderer.slide(id, value as f64).unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(host.revision(), 0);

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(host.read(|p| p.volume), 5.0);
    assert_eq!(host.revision(), 1);
}
