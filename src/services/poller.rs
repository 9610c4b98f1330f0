// src/services/poller.rs

use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use crate::services::dashboard_service::{DashboardService, DashboardSnapshot};

/// Background refresh of the admin dashboard.
///
/// Every tick fetches a full [`DashboardSnapshot`] and sends it down the
/// channel; the first tick fires immediately. A slow tick delays the next one
/// instead of piling up. Dropping the handle stops the task.
pub struct Poller {
    task: JoinHandle<()>,
}

impl Poller {
    pub fn spawn(
        service: DashboardService,
        interval: Duration,
    ) -> (Self, mpsc::Receiver<DashboardSnapshot>) {
        let (tx, rx) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let snapshot = service.fetch_snapshot().await;
                if tx.send(snapshot).await.is_err() {
                    tracing::debug!("Dashboard receiver dropped, stopping refresh");
                    break;
                }
            }
        });

        (Self { task }, rx)
    }

    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.task.abort();
    }
}
