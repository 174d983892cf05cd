//! The board controller: every user interaction enters here, changes
//! [`AppState`] and redraws the affected views.

use chrono::{Local, NaiveDate};

use crate::{
    config::Config,
    filter::{CleanupFilter, DateFilter},
    map::{build_markers, DemoGeocoder, Geocoder},
    models::{CleanupEvent, CleanupId, GeoCoordinate, GeolocationError},
    notification::{NotificationCenter, NotificationKind},
    render::ViewRenderer,
    share::{ShareCapabilities, ShareOutcome, SharePayload},
    state::{AppState, JoinReceipt},
    weather::{MockWeather, WeatherProvider},
    Result,
};

pub struct ShoreSquad<R, W = MockWeather, G = DemoGeocoder> {
    state: AppState,
    view: R,
    weather: W,
    geocoder: G,
    share: ShareCapabilities,
    notifications: NotificationCenter,
    filter: CleanupFilter,
    /// Fixed "today" for date filters; the local date when unset
    today: Option<NaiveDate>,
    config: Config,
}

impl<R: ViewRenderer> ShoreSquad<R> {
    /// A board backed by the canned weather and the demo geocoder.
    pub fn with_mocks(state: AppState, view: R, config: Config) -> Self {
        Self::new(
            state,
            view,
            MockWeather::default(),
            DemoGeocoder::southern_california(),
            config,
        )
    }
}

impl<R, W, G> ShoreSquad<R, W, G>
where
    R: ViewRenderer,
    W: WeatherProvider,
    G: Geocoder,
{
    pub fn new(state: AppState, view: R, weather: W, geocoder: G, config: Config) -> Self {
        Self {
            state,
            view,
            weather,
            geocoder,
            share: ShareCapabilities::default(),
            notifications: NotificationCenter::new(config.notification_lifetime),
            filter: CleanupFilter::default(),
            today: None,
            config,
        }
    }
    pub fn with_share(mut self, share: ShareCapabilities) -> Self {
        self.share = share;
        self
    }
    /// Fixes the date that relative date filters are measured from.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The date relative filters are measured from, read fresh on every
    /// call unless fixed with [`with_today`](ShoreSquad::with_today).
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
    pub fn view(&self) -> &R {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut R {
        &mut self.view
    }
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }
    pub fn filter(&self) -> &CleanupFilter {
        &self.filter
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Draws the map markers, the dashboard and the full list.
    pub fn init(&mut self) {
        let markers = build_markers(self.state.cleanups(), &self.geocoder);
        tracing::info!(
            markers = markers.len(),
            cleanups = self.state.cleanups().len(),
            "Map initialized"
        );
        self.view.render_markers(&self.config.map, &markers);
        self.view.render_dashboard(self.state.user());
        self.view.render_nav(self.state.nav_open());
        self.refresh_list();
    }

    /// A marker was clicked: select its cleanup, show its weather and
    /// highlight its card.
    pub fn select_marker(&mut self, id: CleanupId) -> Result<()> {
        let cleanup = self.state.select(id)?;
        match self.weather.fetch_weather(cleanup) {
            Ok(reading) => self.view.render_weather(cleanup, Some(&reading)),
            Err(e) => {
                tracing::warn!(cleanup = %id, error = %e, "Weather lookup failed");
                self.view.render_weather(cleanup, None);
            }
        }
        self.view.highlight_cleanup(id);
        Ok(())
    }

    /// Applies a search term right away. Callers debounce keystrokes.
    pub fn search(&mut self, text: &str) {
        self.filter.search = String::from(text);
        self.refresh_list();
    }

    pub fn set_date_filter(&mut self, date: DateFilter) {
        self.filter.date = date;
        self.refresh_list();
    }

    /// Cleanups passing the current filter, in list order.
    pub fn visible_cleanups(&self) -> Vec<&CleanupEvent> {
        self.filter.apply(self.state.cleanups(), self.today())
    }

    pub fn join(&mut self, id: CleanupId) -> Result<JoinReceipt> {
        let receipt = self.state.join(id)?;
        tracing::info!(
            cleanup = %id,
            members = receipt.members,
            impact_kg = self.state.user().total_impact_kg,
            "Joined cleanup"
        );
        self.view.render_dashboard(self.state.user());
        self.refresh_list();
        self.notify(
            &format!("✓ You joined \"{}\"!", receipt.title),
            NotificationKind::Success,
        );
        Ok(receipt)
    }

    /// Shares a cleanup and reports the result, success or failure, with a
    /// notification.
    pub fn share(&mut self, id: CleanupId) -> Result<ShareOutcome> {
        let payload = SharePayload::for_cleanup(self.state.cleanup(id)?, &self.config.page_url);
        match self.share.share(&payload) {
            Ok(outcome) => {
                tracing::info!(cleanup = %id, ?outcome, "Shared cleanup");
                if outcome == ShareOutcome::Copied {
                    self.notify("✓ Copied to clipboard!", NotificationKind::Success);
                }
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(cleanup = %id, error = %e, "Share failed");
                self.notify("Could not share this cleanup.", NotificationKind::Info);
                Err(e.into())
            }
        }
    }

    pub fn toggle_favorite(&mut self, id: CleanupId) -> Result<bool> {
        self.state.toggle_favorite(id)
    }

    /// Returns the new `aria-expanded` value.
    pub fn toggle_nav(&mut self) -> bool {
        let open = self.state.toggle_nav();
        self.view.render_nav(open);
        open
    }
    pub fn close_nav(&mut self) {
        self.state.close_nav();
        self.view.render_nav(false);
    }

    /// Takes a position report from the host. Failures leave the default
    /// location in place.
    pub fn update_location(&mut self, position: std::result::Result<GeoCoordinate, GeolocationError>) {
        match position {
            Ok(at) => {
                tracing::info!(lat = at.lat, lng = at.lng, "User location");
                self.state.set_location(at);
            }
            Err(e) => tracing::info!(error = %e, "Geolocation unavailable"),
        }
    }

    /// Cleanups the geocoder can place, nearest to the user first, with
    /// their distance in kilometres.
    pub fn nearest(&self) -> Vec<(&CleanupEvent, f64)> {
        self.state.nearest(|c| self.geocoder.locate(&c.location))
    }

    fn refresh_list(&mut self) {
        let today = self.today();
        let visible = self.filter.apply(self.state.cleanups(), today);
        tracing::debug!(
            visible = visible.len(),
            search = %self.filter.search,
            date = self.filter.date.as_str(),
            "Rendering cleanups"
        );
        self.view.render_cleanups(&visible);
    }

    /// Redraws the banners still on screen. Call after a dismissal, see
    /// [`NotificationCenter::subscribe`].
    pub fn sync_notifications(&mut self) {
        self.view.render_notifications(&self.notifications.active());
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notifications.show(message, kind);
        self.sync_notifications();
    }
}
