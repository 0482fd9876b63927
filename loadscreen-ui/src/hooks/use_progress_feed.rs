use crate::config::DEFAULT_FEED_STEP;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use loadscreen_core::{ProgressVisualStateController, SimulatedFeed};
use std::time::Duration;

/// Push simulated progress into `controller` on a timer.
///
/// The interval clears itself once the feed has produced 1.0, and on
/// cleanup of the owning component.
pub fn use_progress_feed(
    controller: RwSignal<ProgressVisualStateController>,
    step: f64,
    interval: Duration,
) {
    let feed = match SimulatedFeed::new(step).or_else(|e| {
        log::warn!("{e}; falling back to step {DEFAULT_FEED_STEP}");
        SimulatedFeed::new(DEFAULT_FEED_STEP)
    }) {
        Ok(feed) => feed,
        Err(e) => {
            log::error!("Progress feed not started: {e}");
            return;
        }
    };

    let feed = store_value(feed);
    let handle = store_value(None::<IntervalHandle>);

    let tick = move || {
        let mut next = None;
        let mut finished = false;
        feed.update_value(|f| {
            next = f.next();
            finished = f.is_finished();
        });

        if let Some(progress) = next {
            controller.update(|c| c.set_progress(progress));
        }
        if finished {
            if let Some(h) = handle.get_value() {
                h.clear();
                handle.set_value(None);
                log::info!("Progress feed finished");
            }
        }
    };

    match set_interval_with_handle(tick, interval) {
        Ok(h) => {
            log::debug!("Progress feed started: step={step}, interval={interval:?}");
            handle.set_value(Some(h));
        }
        Err(e) => log::error!("Failed to start progress feed: {e:?}"),
    }

    on_cleanup(move || {
        if let Some(Some(h)) = handle.try_get_value() {
            h.clear();
        }
    });
}
