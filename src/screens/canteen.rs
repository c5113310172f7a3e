use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{Canteen, Marker, Stall};
use crate::screens::{
    LoadOutcome, NavigationEvent, Navigator, Notification, Notifier, RequestGeneration,
};
use crate::services::{CanteenService, StallService};

const CANTEEN_FETCH_FAILED: &str = "Unable to fetch canteens.";
const STALL_FETCH_FAILED: &str = "Unable to fetch stalls.";

#[derive(Debug, Clone, PartialEq)]
pub struct CanteenRoute {
    pub marker: Marker,
    pub is_queuing: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanteenView {
    pub route: Option<CanteenRoute>,
    pub canteen: Option<Canteen>,
    pub stalls: Vec<Stall>,
}

impl CanteenView {
    pub fn is_empty(&self) -> bool {
        self.stalls.is_empty()
    }
}

/// Canteen browser: resolves the canteen behind a marker and the stalls it hosts.
pub struct CanteenScreen {
    canteens: Arc<dyn CanteenService>,
    stalls: Arc<dyn StallService>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    generation: RequestGeneration,
    view: Mutex<CanteenView>,
}

impl CanteenScreen {
    pub fn new(
        canteens: Arc<dyn CanteenService>,
        stalls: Arc<dyn StallService>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            canteens,
            stalls,
            notifier,
            navigator,
            generation: RequestGeneration::new(),
            view: Mutex::new(CanteenView::default()),
        }
    }

    fn lock_view(&self) -> MutexGuard<'_, CanteenView> {
        // Writers replace the view whole, so a poisoned lock still holds a coherent value.
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn view(&self) -> CanteenView {
        self.lock_view().clone()
    }

    /// Resolves `route.marker` into a canteen and its stalls.
    ///
    /// Failures never escape: the stall list is left empty and a notification goes out.
    pub async fn load(&self, route: CanteenRoute) -> LoadOutcome {
        let generation = self.generation.begin();
        let marker_id = route.marker.marker_id;
        let mut notification = None;

        let canteen = match self.canteens.get_canteen_by_id(marker_id).await {
            Ok(canteen) => Some(canteen),
            Err(e) => {
                error!(
                    "load_canteen: unable to fetch canteen for marker {}: {}",
                    marker_id, e
                );
                notification = Some(Notification::error(CANTEEN_FETCH_FAILED));
                None
            }
        };

        if !self.generation.is_current(generation) {
            debug!(
                "load_canteen: dropping canteen response for marker {} (generation {})",
                marker_id, generation
            );
            return LoadOutcome::Superseded;
        }

        let stalls = match canteen.as_ref().and_then(Canteen::stall_ids) {
            Some(ids) => match self.stalls.get_stalls_by_id(ids).await {
                Ok(stalls) => stalls,
                Err(e) => {
                    error!("load_canteen: unable to fetch stalls {:?}: {}", ids, e);
                    notification = Some(Notification::error(STALL_FETCH_FAILED));
                    Vec::new()
                }
            },
            None => {
                debug!(
                    "load_canteen: marker {} lists no stalls, skipping stall fetch",
                    marker_id
                );
                Vec::new()
            }
        };

        {
            let mut view = self.lock_view();
            if !self.generation.is_current(generation) {
                debug!(
                    "load_canteen: dropping stall response for marker {} (generation {})",
                    marker_id, generation
                );
                return LoadOutcome::Superseded;
            }
            *view = CanteenView {
                route: Some(route),
                canteen,
                stalls,
            };
            debug!(
                "load_canteen: marker {} shows {} stalls",
                marker_id,
                view.stalls.len()
            );
        }

        if let Some(notification) = notification {
            self.notifier.notify(notification);
        }
        LoadOutcome::Applied
    }

    /// Emits the stall navigation event. Returns false if the stall is not on screen.
    pub fn select_stall(&self, stall_id: i32) -> bool {
        let event = {
            let view = self.lock_view();
            let route = match &view.route {
                Some(route) => route,
                None => return false,
            };
            if !view.stalls.iter().any(|s| s.stall_id == stall_id) {
                warn!("select_stall: stall {} is not listed", stall_id);
                return false;
            }
            NavigationEvent::Stall {
                stall_id,
                coordinate: route.marker.coordinate,
                is_queuing: route.is_queuing,
            }
        };
        self.navigator.navigate(event);
        true
    }
}
