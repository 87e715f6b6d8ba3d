use api_types::category::CategoryDto;
use tokio::sync::mpsc::UnboundedSender;

use super::banner::BannerKind;
use crate::client::ClientError;

/// Results and timers delivered to the event loop from background tasks.
#[derive(Debug)]
pub enum AppEvent {
    CategoryLoaded {
        ticket: u64,
        result: Result<CategoryDto, ClientError>,
    },
    CategorySaved {
        ticket: u64,
        result: Result<(), ClientError>,
    },
    /// Post-save redirect delay elapsed.
    RedirectDue { ticket: u64 },
    ClearBanner { kind: BannerKind, seq: u64 },
}

pub type EventSender = UnboundedSender<AppEvent>;

/// Sends `event` to the loop; a closed loop means the app is shutting down.
pub fn deliver(events: &EventSender, event: AppEvent) {
    if events.send(event).is_err() {
        tracing::debug!("event loop closed, dropping event");
    }
}
