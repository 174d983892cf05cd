use std::time::Duration;

use shoresquad::{
    app::ShoreSquad,
    config::Config,
    debounce::Debouncer,
    filter::DateFilter,
    models::{seed_cleanups, CleanupId, UserProfile},
    render::{HtmlView, CLEANUPS_LIST, IMPACT_KG, WEATHER},
    state::AppState,
};
use tokio::sync::mpsc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> shoresquad::Result<()> {
    // The board starts from the bundled cleanups and the demo user.
    let state = AppState::new(UserProfile::default(), seed_cleanups()?);
    let mut board = ShoreSquad::with_mocks(state, HtmlView::new(), Config::default());
    board.init();

    // Clicking a marker selects the cleanup and fills the weather panel
    board.select_marker(CleanupId(2))?;
    println!("{}", board.view().region(WEATHER).unwrap_or_default());

    // Joining adds the cleanup's impact to the dashboard
    let receipt = board.join(CleanupId(2))?;
    println!(
        "{} now has {} members, impact is {} kg",
        receipt.title,
        receipt.members,
        board.view().region(IMPACT_KG).unwrap_or_default()
    );

    // Keystrokes go through a debouncer, only the last one reaches the board.
    let (tx, mut searches) = mpsc::channel(4);
    let mut debouncer = Debouncer::new(tx, Duration::from_millis(300));
    for text in ["s", "sa", "santa"] {
        debouncer.call(text.to_string());
    }
    if let Some(text) = searches.recv().await {
        board.search(&text);
    }
    board.set_date_filter(DateFilter::All);
    println!("{}", board.view().region(CLEANUPS_LIST).unwrap_or_default());

    Ok(())
}
