//! Search orchestration: state machine, settlement and chart ownership
//!
//! One orchestrator owns the whole pipeline. A search runs the two network
//! calls strictly in sequence, transforms the series and renders it; the
//! visible state is one of Idle, Loading, Success or Error and each new
//! search overwrites whatever came before. In-flight requests are never
//! cancelled - settlement of a superseded search is discarded instead, so
//! the last issued search is the one the user sees (last-writer-wins).

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::chart::{ChartRenderer, ChartSlot, ChartStyle};
use crate::config::ClimaplotConfig;
use crate::forecast::ForecastClient;
use crate::geocoding::GeocodingClient;
use crate::models::ChartSeries;
use crate::transform::to_chart_series;

/// Visible state of the widget.
///
/// The surface's three mutually exclusive regions (loading indicator,
/// error panel, chart panel) map onto the non-idle variants.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Success(ChartSeries),
    Error(String),
}

struct Shared {
    state: SearchState,
    slot: ChartSlot,
    /// Ticket of the most recently issued search; settlements carrying an
    /// older ticket may not touch the state
    latest_ticket: u64,
    next_ticket: u64,
}

/// Sequences geocoding, forecast and transformation, and owns the
/// rendering side effects
pub struct SearchOrchestrator {
    geocoding: GeocodingClient,
    forecast: ForecastClient,
    renderer: Box<dyn ChartRenderer>,
    style: ChartStyle,
    shared: Mutex<Shared>,
}

impl SearchOrchestrator {
    /// Create an orchestrator with the default chart style
    pub fn new(
        config: &ClimaplotConfig,
        renderer: Box<dyn ChartRenderer>,
    ) -> crate::Result<Self> {
        let client = config.build_client()?;
        Ok(Self {
            geocoding: GeocodingClient::new(client.clone(), config),
            forecast: ForecastClient::new(client, config),
            renderer,
            style: ChartStyle::default(),
            shared: Mutex::new(Shared {
                state: SearchState::Idle,
                slot: ChartSlot::default(),
                latest_ticket: 0,
                next_ticket: 1,
            }),
        })
    }

    /// Override the chart style
    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Current widget state
    pub fn state(&self) -> SearchState {
        self.shared().state.clone()
    }

    /// Run one search to settlement and return the state as applied.
    ///
    /// Both trigger sources of the surface (button and Enter key) route
    /// here. Empty or whitespace-only input is ignored without a state
    /// transition and without any network call.
    pub async fn search(&self, query: &str) -> SearchState {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring empty search input");
            return self.state();
        }

        let ticket = {
            let mut shared = self.shared();
            let ticket = shared.next_ticket;
            shared.next_ticket += 1;
            shared.latest_ticket = ticket;
            shared.state = SearchState::Loading;
            ticket
        };

        let outcome = self.run_pipeline(query).await;
        self.settle(ticket, outcome)
    }

    /// Geocode, fetch and transform, strictly in sequence
    async fn run_pipeline(&self, query: &str) -> crate::Result<ChartSeries> {
        let location = self.geocoding.resolve(query).await?;
        let hourly = self
            .forecast
            .fetch_hourly(location.latitude, location.longitude)
            .await?;
        to_chart_series(&hourly, &location)
    }

    /// Apply a settlement under the last-writer-wins rule.
    ///
    /// On success the previously rendered chart is released before the new
    /// one attaches; if rendering itself fails the slot stays empty and
    /// the widget lands in the Error state like any other failure.
    fn settle(&self, ticket: u64, outcome: crate::Result<ChartSeries>) -> SearchState {
        let mut shared = self.shared();
        if ticket != shared.latest_ticket {
            debug!("Discarding settlement of superseded search (ticket {ticket})");
            return shared.state.clone();
        }

        shared.state = match outcome {
            Ok(series) => {
                shared.slot.release();
                match self.renderer.render(&series, &self.style) {
                    Ok(handle) => {
                        shared.slot.replace(handle);
                        SearchState::Success(series)
                    }
                    Err(err) => {
                        warn!("Chart renderer failed: {err}");
                        SearchState::Error(err.user_message())
                    }
                }
            }
            Err(err) => {
                warn!("Search failed: {err}");
                SearchState::Error(err.user_message())
            }
        };
        shared.state.clone()
    }

    fn shared(&self) -> MutexGuard<'_, Shared> {
        // A poisoned lock only means a panic elsewhere; the state itself
        // stays usable
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartHandle;

    struct NoopRenderer;

    impl ChartRenderer for NoopRenderer {
        fn render(
            &self,
            _series: &ChartSeries,
            _style: &ChartStyle,
        ) -> crate::Result<Box<dyn ChartHandle>> {
            struct Noop;
            impl ChartHandle for Noop {
                fn destroy(&mut self) {}
            }
            Ok(Box::new(Noop))
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let orchestrator =
            SearchOrchestrator::new(&ClimaplotConfig::default(), Box::new(NoopRenderer)).unwrap();
        assert_eq!(orchestrator.state(), SearchState::Idle);
    }

    #[tokio::test]
    async fn test_empty_input_causes_no_transition() {
        let orchestrator =
            SearchOrchestrator::new(&ClimaplotConfig::default(), Box::new(NoopRenderer)).unwrap();

        assert_eq!(orchestrator.search("").await, SearchState::Idle);
        assert_eq!(orchestrator.search("   \t ").await, SearchState::Idle);
        assert_eq!(orchestrator.state(), SearchState::Idle);
    }
}
