//! Integration tests for the command → store/navigation → event pipeline.

use super::mock_ports::{MockSnapshots, RecordingSink, cat_a, dog_b};

use adoptme::Error;
use adoptme::app::commands::{AppCommand, CommandOutcome};
use adoptme::app::events::AppEvent;
use adoptme::app::service::AppService;
use adoptme::config::AppConfig;
use adoptme::nav::{Screen, ScreenName};
use adoptme::store::SpeciesFilter;

fn make_app() -> (AppService, RecordingSink) {
    let mut app = AppService::new(vec![cat_a(), dog_b()], AppConfig::default());
    let mut sink = RecordingSink::new();
    app.start(&MockSnapshots::new(), &mut sink).unwrap();
    (app, sink)
}

#[test]
fn navigate_emits_screen_changed() {
    let (mut app, mut sink) = make_app();
    let outcome = app
        .handle_command(AppCommand::NavigateTo(Screen::Account), &mut sink)
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Navigated);
    assert_eq!(app.current_screen(), &Screen::Account);
    assert_eq!(
        sink.last(),
        Some(&AppEvent::ScreenChanged {
            from: ScreenName::Home,
            to: ScreenName::Account,
        })
    );
}

#[test]
fn back_reports_handled_once() {
    let (mut app, mut sink) = make_app();
    app.handle_command(AppCommand::NavigateTo(Screen::detail(cat_a())), &mut sink)
        .unwrap();

    assert_eq!(
        app.handle_command(AppCommand::Back, &mut sink).unwrap(),
        CommandOutcome::Back { handled: true }
    );
    assert_eq!(
        app.handle_command(AppCommand::Back, &mut sink).unwrap(),
        CommandOutcome::Back { handled: false }
    );
    let back_events = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::ScreenChanged { to: ScreenName::Home, .. }))
        .count();
    assert_eq!(back_events, 1);
}

#[test]
fn observers_see_post_toggle_state() {
    // Re-render hook: the sink reads the service state when notified, so
    // record the list the UI would draw at that moment.
    let (mut app, mut sink) = make_app();
    let pet = app.pets(SpeciesFilter::all())[0].clone();
    app.handle_command(AppCommand::ToggleLiked(pet), &mut sink)
        .unwrap();

    assert_eq!(
        sink.last(),
        Some(&AppEvent::LikeToggled {
            name: "Luna".into(),
            liked: true,
        })
    );
    assert!(app.pets(SpeciesFilter::all())[0].is_liked());
    assert_eq!(app.store().liked(), vec![cat_a().with_liked(true)]);
}

#[test]
fn toggle_from_list_leaves_other_screens_alone() {
    let (mut app, mut sink) = make_app();
    app.handle_command(AppCommand::NavigateTo(Screen::detail(dog_b())), &mut sink)
        .unwrap();
    sink.clear();
    app.handle_command(AppCommand::ToggleLiked(cat_a()), &mut sink)
        .unwrap();
    assert_eq!(app.current_screen(), &Screen::detail(dog_b()));
    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, AppEvent::ScreenChanged { .. })),
        "list toggle must not swap the detail payload"
    );
}

#[test]
fn stale_pet_is_not_found_and_emits_nothing() {
    let (mut app, mut sink) = make_app();
    app.handle_command(AppCommand::ToggleLiked(cat_a()), &mut sink)
        .unwrap();
    sink.clear();

    let err = app
        .handle_command(AppCommand::ToggleLiked(cat_a()), &mut sink)
        .unwrap_err();
    assert_eq!(err, Error::NotFound("Luna".into()));
    assert!(sink.events.is_empty());
    assert_eq!(app.store().len(), 2);
}

#[test]
fn suspend_counts_saves() {
    let (app, mut sink) = make_app();
    let mut snapshots = MockSnapshots::new();
    app.suspend(&mut snapshots, &mut sink).unwrap();
    app.suspend(&mut snapshots, &mut sink).unwrap();
    assert_eq!(snapshots.saves, 2);
    assert!(snapshots.bytes.is_some());
}
