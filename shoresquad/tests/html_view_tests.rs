//! End-to-end checks of the HTML view driven by the controller.

mod common;

use common::{day, seeded_state};
use shoresquad::{
    app::ShoreSquad,
    config::Config,
    models::CleanupId,
    render::{HtmlView, CLEANUPS_LIST, CLEANUP_COUNT, IMPACT_KG, MAP, NOTIFICATIONS, WEATHER},
};

fn html_board() -> ShoreSquad<HtmlView> {
    let mut board = ShoreSquad::with_mocks(seeded_state(), HtmlView::new(), Config::default())
        .with_today(day(2025, 3, 20));
    board.init();
    board
}

#[test]
fn test_malibu_marker_updates_weather_and_card_border() {
    let mut board = html_board();
    board.select_marker(CleanupId(2)).unwrap();

    let weather = board.view().region(WEATHER).unwrap();
    assert!(weather.contains("<h3>Malibu, CA</h3>"));
    assert!(weather.contains("20°C"));
    assert!(weather.contains("🌤️ Partly Cloudy"));
    assert!(weather.contains("💧 70% | 🌬️ 12 km/h"));

    assert_eq!(board.view().highlighted(), Some(CleanupId(2)));
    let list = board.view().region(CLEANUPS_LIST).unwrap();
    let malibu_card = &list[list.find(r#"id="cleanup-2""#).unwrap()..];
    let malibu_card = &malibu_card[..malibu_card.find("</li>").unwrap()];
    assert!(malibu_card.contains("#FF6B6B"));
}

#[test]
fn test_map_region_places_three_markers() {
    let board = html_board();
    let map = board.view().region(MAP).unwrap();
    assert_eq!(map.matches(r#"class="circle-marker""#).count(), 3);
    assert!(map.contains(r#"data-lat="34.028""#));
    assert!(map.contains("OpenStreetMap contributors"));
}

#[test]
fn test_search_without_match_shows_placeholder() {
    let mut board = html_board();
    board.search("no such beach");
    assert_eq!(
        board.view().region(CLEANUPS_LIST),
        Some(r#"<p class="placeholder">No cleanups found.</p>"#)
    );
}

#[tokio::test(start_paused = true)]
async fn test_join_refreshes_dashboard_and_badge() {
    let mut board = html_board();
    board.join(CleanupId(1)).unwrap();

    assert_eq!(board.view().region(CLEANUP_COUNT), Some("4"));
    assert_eq!(board.view().region(IMPACT_KG), Some("170"));
    assert!(board
        .view()
        .region(CLEANUPS_LIST)
        .unwrap()
        .contains("13 joining"));

    let banner = board.view().region(NOTIFICATIONS).unwrap();
    assert!(banner.contains("success notification"));
    assert!(banner.contains("#2ECC71"));
    assert!(banner.contains("You joined &quot;Venice Beach Spring Cleanup&quot;!"));
}

#[test]
fn test_document_keeps_element_ids() {
    let board = html_board();
    let page = board.view().document().into_string();
    for id in [
        "map",
        "cleanupsList",
        "weatherContainer",
        "cleanupCount",
        "impactKg",
        "crewCount",
        "searchInput",
        "dateFilter",
        "menuToggle",
        "navMenu",
    ] {
        assert!(page.contains(&format!(r#"id="{id}""#)), "missing #{id}");
    }
    assert!(page.starts_with("<!DOCTYPE html>"));
}

#[tokio::test(start_paused = true)]
async fn test_banners_leave_the_page_after_their_lifetime() {
    let mut board = html_board();
    board.join(CleanupId(1)).unwrap();
    board.join(CleanupId(2)).unwrap();
    assert_eq!(
        board.view().region(NOTIFICATIONS).unwrap().matches("success notification").count(),
        2
    );

    tokio::time::sleep(std::time::Duration::from_secs(10)).await;
    board.sync_notifications();
    assert_eq!(board.view().region(NOTIFICATIONS), Some(""));

    board.join(CleanupId(3)).unwrap();
    let banners = board.view().region(NOTIFICATIONS).unwrap();
    assert_eq!(banners.matches("success notification").count(), 1);
    assert!(banners.contains("Santa Monica Pier Cleanup"));
}
