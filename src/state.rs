use crate::session::{Session, TimerKind};
use crate::timer::{RestTick, Ticker};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, session: Session) -> Self {
        Self {
            data_path,
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Spawns the once-per-second driver for `kind`. The ticker ends itself
    /// as soon as the timer is no longer running.
    pub fn spawn_ticker(&self, kind: TimerKind) -> Ticker {
        let session = Arc::clone(&self.session);
        Ticker::spawn(move || {
            let session = Arc::clone(&session);
            async move {
                let mut session = session.lock().await;
                match kind {
                    TimerKind::Stopwatch => session.tick_stopwatch(),
                    TimerKind::Rest => session.tick_rest() == RestTick::Running,
                }
            }
        })
    }
}
