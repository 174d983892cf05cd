use shoresquad::{
    app::ShoreSquad,
    config::Config,
    debounce::Debouncer,
    filter::DateFilter,
    map::{MapConfig, Marker},
    models::{seed_cleanups, CleanupEvent, CleanupId, GeoCoordinate, UserProfile},
    notification::Notification,
    render::{format_date, ViewRenderer},
    share::{Clipboard, ShareCapabilities, ShareError},
    state::AppState,
    weather::WeatherReading,
};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  list                       show the cleanups passing the filter
  search <text>              filter by title, location or crew
  date <all|today|week|month>
  select <id>                click the map marker of a cleanup
  join <id> | share <id> | fav <id>
  near                       cleanups by distance from you
  locate <lat> <lng>         report your position
  nav                        toggle the menu
  help | quit";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shoresquad=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(2);
        }
    };
    let cleanups = match seed_cleanups() {
        Ok(cleanups) => cleanups,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load cleanups");
            std::process::exit(1);
        }
    };

    let state = AppState::new(UserProfile::default(), cleanups).with_location(config.map.center);
    let (search_tx, mut searches) = mpsc::channel::<String>(16);
    let mut debouncer = Debouncer::new(search_tx, config.search_debounce);
    let mut board = ShoreSquad::with_mocks(state, TerminalView::default(), config)
        .with_share(ShareCapabilities::default().with_clipboard(StdoutClipboard));
    board.init();
    let mut dismissed = board.notifications().subscribe();
    println!("{HELP}");

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read input");
                        break;
                    }
                };
                if !handle_command(&mut board, &mut debouncer, line.trim()) {
                    break;
                }
            }
            Some(text) = searches.recv() => board.search(&text),
            Some(_) = dismissed.recv() => board.sync_notifications(),
        }
    }
}

/// Returns `false` once the user asked to quit.
fn handle_command(
    board: &mut ShoreSquad<TerminalView>,
    debouncer: &mut Debouncer<String>,
    line: &str,
) -> bool {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    let result = match command {
        "" => Ok(()),
        "quit" | "exit" => return false,
        "help" => {
            println!("{HELP}");
            Ok(())
        }
        "list" => {
            for c in board.visible_cleanups() {
                println!("  [{}] {} {}, {}", c.id, c.icon, c.title, format_date(c.date));
            }
            Ok(())
        }
        "search" => {
            debouncer.call(rest.to_string());
            Ok(())
        }
        "date" => rest.parse::<DateFilter>().map(|f| board.set_date_filter(f)),
        "select" => parse_id(rest).and_then(|id| board.select_marker(id)),
        "join" => parse_id(rest).and_then(|id| board.join(id)).map(|_| ()),
        "share" => parse_id(rest).and_then(|id| board.share(id)).map(|_| ()),
        "fav" => parse_id(rest).and_then(|id| board.toggle_favorite(id)).map(|fav| {
            println!("  {}", if fav { "★ favorite" } else { "☆ removed" });
        }),
        "near" => {
            for (c, km) in board.nearest() {
                println!("  {:>6.1} km  {}", km, c.title);
            }
            Ok(())
        }
        "locate" => {
            let coords: Vec<f64> = rest.split_whitespace().filter_map(|v| v.parse().ok()).collect();
            match coords.as_slice() {
                [lat, lng] => board.update_location(Ok(GeoCoordinate::new(*lat, *lng))),
                _ => println!("  usage: locate <lat> <lng>"),
            }
            Ok(())
        }
        "nav" => {
            board.toggle_nav();
            Ok(())
        }
        other => {
            println!("  unknown command {other:?}, try help");
            Ok(())
        }
    };
    if let Err(e) = result {
        println!("  ! {e}");
    }
    true
}

fn parse_id(arg: &str) -> shoresquad::Result<CleanupId> {
    arg.parse()
}

/// Prints each redraw as plain text. Banners are printed once, when shown.
#[derive(Default)]
struct TerminalView {
    last_banner: u64,
}

impl ViewRenderer for TerminalView {
    fn render_markers(&mut self, config: &MapConfig, markers: &[Marker]) {
        println!(
            "map centered on {:.4}, {:.4} (zoom {}) with {} markers",
            config.center.lat,
            config.center.lng,
            config.zoom,
            markers.len()
        );
    }
    fn render_cleanups(&mut self, cleanups: &[&CleanupEvent]) {
        if cleanups.is_empty() {
            println!("  No cleanups found.");
        }
        for c in cleanups {
            println!(
                "  [{}] {} {} | {} {} | {} | {} joining",
                c.id,
                c.icon,
                c.title,
                format_date(c.date),
                c.time,
                c.location,
                c.members
            );
        }
    }
    fn render_weather(&mut self, cleanup: &CleanupEvent, weather: Option<&WeatherReading>) {
        match weather {
            Some(w) => println!(
                "  weather at {}: {}°C {} | 💧 {}% | 🌬️ {} km/h",
                cleanup.location, w.temperature_c, w.condition, w.humidity_pct, w.wind_kmh
            ),
            None => println!("  weather at {}: unavailable", cleanup.location),
        }
    }
    fn render_dashboard(&mut self, user: &UserProfile) {
        println!(
            "  {}: {} cleanups | {} kg | crew of {}",
            user.name, user.cleanups_joined, user.total_impact_kg, user.crew_members
        );
    }
    fn highlight_cleanup(&mut self, id: CleanupId) {
        println!("  > cleanup {id} selected");
    }
    fn render_notifications(&mut self, active: &[Notification]) {
        for n in active.iter().filter(|n| n.id > self.last_banner) {
            println!("  ({}) {}", n.kind.class(), n.message);
        }
        if let Some(newest) = active.last() {
            self.last_banner = self.last_banner.max(newest.id);
        }
    }
    fn render_nav(&mut self, open: bool) {
        println!("  menu {}", if open { "open" } else { "closed" });
    }
}

/// Stands in for the system clipboard.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        println!("  clipboard: {text}");
        Ok(())
    }
}
