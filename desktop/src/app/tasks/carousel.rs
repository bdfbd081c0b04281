//! # Carousel Timer
//!
//! Repeating timer that emits [`AppEvent::CarouselTick`] while the landing
//! view is mounted. Dropping the [`CarouselTimer`] cancels it.

use crate::app::events::AppEvent;
use crate::debug::spawn_tracked;
use async_channel::Sender;
use lib_core::model::MountId;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Handle of the running timer for one mount.
#[derive(Debug)]
pub struct CarouselTimer {
    mount: MountId,
    handle: JoinHandle<()>,
}

impl CarouselTimer {
    pub fn mount(&self) -> MountId {
        self.mount
    }
}

impl Drop for CarouselTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(mount = self.mount.value(), "Carousel timer cancelled");
    }
}

/// Start ticking every `period` for `mount`. The first tick comes one full
/// period after the start.
pub(crate) fn start(mount: MountId, period: Duration, event_tx: Sender<AppEvent>) -> CarouselTimer {
    tracing::debug!(mount = mount.value(), period_ms = period.as_millis(), "Carousel timer started");

    let handle = spawn_tracked("carousel_timer", async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if event_tx.send(AppEvent::CarouselTick(mount)).await.is_err() {
                tracing::debug!(mount = mount.value(), "Event channel closed, stopping carousel timer");
                break;
            }
        }
    });

    CarouselTimer { mount, handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::CarouselState;

    const PERIOD: Duration = Duration::from_millis(5000);

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period_for_its_mount() {
        let (tx, rx) = async_channel::unbounded();
        let mut carousel = CarouselState::for_catalog();
        let mount = carousel.mount();
        let _timer = start(mount, PERIOD, tx);

        tokio::time::sleep(PERIOD - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err(), "no tick before the first period");

        for k in 1..=4 {
            let event = rx.recv().await.unwrap();
            assert_eq!(event, AppEvent::CarouselTick(mount));
            if let AppEvent::CarouselTick(id) = event {
                assert!(carousel.tick(id));
            }
            assert_eq!(carousel.active(), k % 3);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_timer_stops_ticks() {
        let (tx, rx) = async_channel::unbounded();
        let mut carousel = CarouselState::for_catalog();
        let timer = start(carousel.mount(), PERIOD, tx);

        rx.recv().await.unwrap();
        drop(timer);
        carousel.unmount();

        tokio::time::sleep(PERIOD * 5).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_stops_when_channel_closes() {
        let (tx, rx) = async_channel::unbounded();
        let mut carousel = CarouselState::for_catalog();
        let timer = start(carousel.mount(), PERIOD, tx);
        drop(rx);

        tokio::time::sleep(PERIOD * 2).await;
        tokio::task::yield_now().await;
        assert!(timer.handle.is_finished());
    }
}
