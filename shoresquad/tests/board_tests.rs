//! Interaction tests for the board controller.
//!
//! Each test drives the controller the way the page would and checks both the
//! state and what was redrawn.

mod common;

use common::{board, Rendered};
use shoresquad::{
    app::ShoreSquad,
    config::Config,
    filter::DateFilter,
    models::{CleanupBuilder, CleanupId, GeoCoordinate, GeolocationError, UserProfile},
    state::AppState,
    weather::WeatherReading,
    Error,
};

#[test]
fn test_init_renders_markers_dashboard_and_full_list() {
    let mut board = board();
    board.init();

    let calls = board.view_mut().take();
    let ids = vec![CleanupId(1), CleanupId(2), CleanupId(3)];
    assert_eq!(calls[0], Rendered::Markers(ids.clone()));
    assert_eq!(
        calls[1],
        Rendered::Dashboard {
            joined: 3,
            impact_kg: 125,
            crew: 8
        }
    );
    assert_eq!(calls.last(), Some(&Rendered::Cleanups(ids)));
}

#[test]
fn test_selecting_malibu_shows_its_weather_and_highlights_card() {
    let mut board = board();
    board.init();
    board.view_mut().take();

    board
        .select_marker(CleanupId(2))
        .expect("Malibu should be selectable");

    assert_eq!(board.state().selected().map(|c| c.id), Some(CleanupId(2)));
    assert_eq!(
        board.view_mut().take(),
        vec![
            Rendered::Weather(
                CleanupId(2),
                Some(WeatherReading::new(20, "🌤️ Partly Cloudy", 70, 12))
            ),
            Rendered::Highlight(CleanupId(2)),
        ]
    );
}

#[test]
fn test_selecting_unknown_marker_fails_without_redraw() {
    let mut board = board();
    let err = board.select_marker(CleanupId(9)).unwrap_err();
    assert!(matches!(err, Error::UnknownCleanup(CleanupId(9))));
    assert!(board.view_mut().take().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_join_updates_counts_and_redraws() {
    let mut board = board();
    for c in board.state().cleanups().to_vec() {
        let user_before = board.state().user().clone();
        let receipt = board.join(c.id).expect("join should succeed");

        assert_eq!(receipt.members, c.members + 1);
        let user = board.state().user();
        assert_eq!(user.total_impact_kg, user_before.total_impact_kg + c.impact_kg);
        assert_eq!(user.cleanups_joined, user_before.cleanups_joined + 1);
    }

    let calls = board.view_mut().take();
    assert!(calls.contains(&Rendered::Dashboard {
        joined: 6,
        impact_kg: 125 + 45 + 32 + 78,
        crew: 8
    }));
    assert_eq!(
        calls.last(),
        Some(&Rendered::Notifications(vec![
            "✓ You joined \"Venice Beach Spring Cleanup\"!".to_string(),
            "✓ You joined \"Malibu Coast Conservation\"!".to_string(),
            "✓ You joined \"Santa Monica Pier Cleanup\"!".to_string(),
        ]))
    );
    assert_eq!(board.notifications().active().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_join_notifications_dismiss_after_three_seconds() {
    let mut board = board();
    board.join(CleanupId(1)).unwrap();
    assert_eq!(board.notifications().active().len(), 1);

    tokio::time::sleep(std::time::Duration::from_millis(3_001)).await;
    assert!(board.notifications().active().is_empty());

    board.view_mut().take();
    board.sync_notifications();
    assert_eq!(board.view_mut().take(), vec![Rendered::Notifications(vec![])]);
}

#[tokio::test(start_paused = true)]
async fn test_dismissal_is_announced_for_redraw() {
    let mut board = board();
    let mut dismissed = board.notifications().subscribe();
    board.join(CleanupId(1)).unwrap();
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
    board.join(CleanupId(2)).unwrap();

    let first = dismissed.recv().await.expect("first banner should expire");
    board.sync_notifications();
    assert_eq!(
        board.view().calls.last(),
        Some(&Rendered::Notifications(vec![
            "✓ You joined \"Malibu Coast Conservation\"!".to_string()
        ]))
    );
    assert_eq!(first, 1);
}

#[test]
fn test_today_defaults_to_the_local_date() {
    let today = chrono::Local::now().date_naive();
    let state = AppState::new(
        UserProfile::default(),
        vec![CleanupBuilder::new(CleanupId(10), "Dawn Patrol", "Venice Beach, CA", today).build()],
    );
    let mut board = ShoreSquad::with_mocks(state, common::RecordingView::default(), Config::default());
    assert_eq!(board.today(), today);

    board.set_date_filter(DateFilter::Today);
    assert_eq!(board.view().last_list(), Some(vec![CleanupId(10)]));
}

#[tokio::test(start_paused = true)]
async fn test_join_keeps_active_filter() {
    let mut board = board();
    board.search("malibu");
    board.join(CleanupId(2)).unwrap();
    assert_eq!(board.view().last_list(), Some(vec![CleanupId(2)]));
}

#[test]
fn test_empty_filter_returns_full_list_in_order() {
    let mut board = board();
    board.search("");
    board.set_date_filter(DateFilter::All);
    assert_eq!(
        board.view().last_list(),
        Some(vec![CleanupId(1), CleanupId(2), CleanupId(3)])
    );
}

#[test]
fn test_unmatched_search_renders_empty_list() {
    let mut board = board();
    board.search("Lake Tahoe");
    assert_eq!(board.view().last_list(), Some(vec![]));
    assert!(board.visible_cleanups().is_empty());
}

#[test]
fn test_date_filter_is_relative_to_today() {
    // today is 2025-03-20
    let mut board = board();
    board.set_date_filter(DateFilter::Week);
    assert_eq!(board.view().last_list(), Some(vec![CleanupId(2)]));

    board.set_date_filter(DateFilter::Month);
    assert_eq!(
        board.view().last_list(),
        Some(vec![CleanupId(1), CleanupId(2), CleanupId(3)])
    );

    board.set_date_filter(DateFilter::Today);
    assert_eq!(board.view().last_list(), Some(vec![]));

    board.search("ocean");
    board.set_date_filter(DateFilter::All);
    assert_eq!(board.view().last_list(), Some(vec![CleanupId(3)]));
}

#[test]
fn test_geolocation_success_moves_user() {
    let mut board = board();
    let santa_monica = GeoCoordinate::new(34.0136, -118.4944);
    board.update_location(Ok(santa_monica));
    assert_eq!(board.state().location(), santa_monica);

    let nearest = board.nearest();
    assert_eq!(nearest[0].0.id, CleanupId(3));
    assert!(nearest[0].1 < 1e-9);
    assert_eq!(nearest[2].0.id, CleanupId(2));
}

#[test]
fn test_geolocation_failure_is_ignored() {
    let mut board = board();
    let before = board.state().location();
    board.update_location(Err(GeolocationError::PermissionDenied));
    assert_eq!(board.state().location(), before);
}

#[test]
fn test_nav_toggle_reports_expanded_state() {
    let mut board = board();
    assert!(board.toggle_nav());
    board.close_nav();
    assert!(!board.state().nav_open());
    assert_eq!(
        board.view_mut().take(),
        vec![Rendered::Nav(true), Rendered::Nav(false)]
    );
}
