//! End-to-end scenarios: filtering, liking, back navigation and resuming
//! after process recreation, driven through the public API only.

use super::mock_ports::{MockSnapshots, RecordingSink, cat_a, dog_b};

use adoptme::app::commands::{AppCommand, CommandOutcome};
use adoptme::app::service::AppService;
use adoptme::config::AppConfig;
use adoptme::nav::{NavigationController, Screen};
use adoptme::pet::Species;
use adoptme::store::{PetStore, SpeciesFilter};

fn filter(species: &[Species]) -> SpeciesFilter {
    species.iter().copied().collect()
}

// ── Scenario A: species filtering ─────────────────────────────

#[test]
fn scenario_a_filtering() {
    let store = PetStore::new(vec![cat_a(), dog_b()]);

    assert_eq!(store.list(filter(&[Species::Cat])), vec![cat_a()]);
    assert_eq!(
        store.list(filter(&[Species::Cat, Species::Dog])),
        vec![cat_a(), dog_b()]
    );
    assert!(
        store.list(filter(&[])).is_empty(),
        "empty filter is not an error"
    );
}

// ── Scenario B: toggling liked ────────────────────────────────

#[test]
fn scenario_b_toggle_liked() {
    let mut store = PetStore::new(vec![cat_a(), dog_b()]);
    store.toggle_liked(&cat_a()).unwrap();

    let listed = store.list(filter(&[Species::Cat, Species::Dog]));
    assert_eq!(listed, vec![cat_a().with_liked(true), dog_b()]);
}

// ── Scenario C: single-level back ─────────────────────────────

#[test]
fn scenario_c_back_navigation() {
    let mut nav = NavigationController::new();
    assert_eq!(nav.current(), &Screen::Home);

    nav.navigate_to(Screen::detail(dog_b()));
    assert_eq!(nav.current(), &Screen::detail(dog_b()));

    assert!(nav.go_back());
    assert_eq!(nav.current(), &Screen::Home);

    assert!(!nav.go_back());
    assert_eq!(nav.current(), &Screen::Home);
}

// ── Scenario D: resume on Detail after recreation ─────────────

#[test]
fn scenario_d_restore_detail() {
    let mut sink = RecordingSink::new();
    let mut snapshots = MockSnapshots::new();

    let mut app = AppService::new(vec![cat_a(), dog_b()], AppConfig::default());
    app.start(&snapshots, &mut sink).unwrap();
    app.handle_command(AppCommand::NavigateTo(Screen::detail(dog_b())), &mut sink)
        .unwrap();
    app.suspend(&mut snapshots, &mut sink).unwrap();
    drop(app);

    let mut app = AppService::new(vec![cat_a(), dog_b()], AppConfig::default());
    app.start(&snapshots, &mut sink).unwrap();

    let pet = app.current_screen().pet().expect("restored on Detail");
    assert_eq!(pet, &dog_b());
    assert_eq!(pet.name(), "Milo");
    assert_eq!(pet.species(), Species::Dog);
    assert_eq!(pet.location(), "Porto, PT");
    assert_eq!(pet.description(), "Loves long walks.");
    assert_eq!(pet.image_ref(), "milo");
    assert_eq!(pet.icon_ref(), "ic_dog");
    assert!(!pet.is_liked());

    assert_eq!(
        app.handle_command(AppCommand::Back, &mut sink).unwrap(),
        CommandOutcome::Back { handled: true }
    );
}
