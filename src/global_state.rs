use futures::future::AbortHandle;
use leptos::*;
use once_cell::sync::OnceCell;

use crate::application::ChartSession;
use crate::infrastructure::config::app_config;

pub struct Globals {
    pub session: RwSignal<ChartSession>,
    /// Abort handle of the fetch currently running, if any
    pub in_flight: RwSignal<Option<AbortHandle>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        session: create_rw_signal(ChartSession::new(app_config().default_symbol.clone())),
        in_flight: create_rw_signal(None),
    })
}
