//! Runtime settings for the loading screen.
//!
//! Priority on load: URL query > localStorage > defaults. Values set from
//! the query string are persisted, so they stick for later visits. Native
//! builds have no storage and see the defaults unless a value was set in
//! this session.

use std::cell::Cell;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
const USE_GPU_STORAGE_KEY: &str = "loadscreen_use_gpu";
#[cfg(target_arch = "wasm32")]
const FEED_INTERVAL_STORAGE_KEY: &str = "loadscreen_feed_interval_ms";
#[cfg(target_arch = "wasm32")]
const FEED_STEP_STORAGE_KEY: &str = "loadscreen_feed_step";

/// Defaults used when nothing is stored.
pub const DEFAULT_USE_GPU: bool = true;
pub const DEFAULT_FEED_INTERVAL_MS: u32 = 50;
pub const DEFAULT_FEED_STEP: f64 = 0.01;

thread_local! {
    /// Cached GPU setting. None = not yet loaded from localStorage.
    static USE_GPU_CACHE: Cell<Option<bool>> = const { Cell::new(None) };
    static FEED_INTERVAL_CACHE: Cell<Option<u32>> = const { Cell::new(None) };
    static FEED_STEP_CACHE: Cell<Option<f64>> = const { Cell::new(None) };
}

/// Read and parse a value from localStorage.
#[cfg(target_arch = "wasm32")]
fn load_from_storage<T: std::str::FromStr>(key: &str) -> Option<T> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let value = storage.get_item(key).ok()??;
    value.parse().ok()
}

#[cfg(target_arch = "wasm32")]
fn save_to_storage(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to persist setting {key}");
            }
        }
    }
}

/// Cached read with lazy load from storage on first access.
fn cached<T: Copy>(
    cache: &'static std::thread::LocalKey<Cell<Option<T>>>,
    load: impl FnOnce() -> Option<T>,
    default: T,
) -> T {
    cache.with(|cell| {
        if cell.get().is_none() {
            if let Some(stored) = load() {
                cell.set(Some(stored));
            }
        }
        cell.get().unwrap_or(default)
    })
}

pub fn get_use_gpu() -> bool {
    cached(
        &USE_GPU_CACHE,
        || {
            #[cfg(target_arch = "wasm32")]
            {
                load_from_storage(USE_GPU_STORAGE_KEY)
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                None
            }
        },
        DEFAULT_USE_GPU,
    )
}

pub fn set_use_gpu(value: bool) {
    USE_GPU_CACHE.with(|cell| cell.set(Some(value)));
    #[cfg(target_arch = "wasm32")]
    save_to_storage(USE_GPU_STORAGE_KEY, &value.to_string());
}

/// Interval between simulated progress ticks.
pub fn get_feed_interval() -> Duration {
    let ms = cached(
        &FEED_INTERVAL_CACHE,
        || {
            #[cfg(target_arch = "wasm32")]
            {
                load_from_storage::<u32>(FEED_INTERVAL_STORAGE_KEY).filter(|&ms| ms > 0)
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                None
            }
        },
        DEFAULT_FEED_INTERVAL_MS,
    );
    Duration::from_millis(ms as u64)
}

pub fn set_feed_interval_ms(value: u32) {
    FEED_INTERVAL_CACHE.with(|cell| cell.set(Some(value.max(1))));
    #[cfg(target_arch = "wasm32")]
    save_to_storage(FEED_INTERVAL_STORAGE_KEY, &value.max(1).to_string());
}

/// Progress added per simulated tick.
pub fn get_feed_step() -> f64 {
    cached(
        &FEED_STEP_CACHE,
        || {
            #[cfg(target_arch = "wasm32")]
            {
                load_from_storage::<f64>(FEED_STEP_STORAGE_KEY)
                    .filter(|s| s.is_finite() && *s > 0.0)
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                None
            }
        },
        DEFAULT_FEED_STEP,
    )
}

pub fn set_feed_step(value: f64) {
    FEED_STEP_CACHE.with(|cell| cell.set(Some(value)));
    #[cfg(target_arch = "wasm32")]
    save_to_storage(FEED_STEP_STORAGE_KEY, &value.to_string());
}

/// Apply `?gpu=0&interval=16&step=0.02` style overrides from a URL query.
///
/// Values are percent-decoded. Unknown keys are ignored; malformed values
/// are logged and skipped.
pub fn apply_query_overrides(query: &str) {
    for pair in query.trim_start_matches('?').split('&') {
        let Some((key, raw)) = pair.split_once('=') else {
            continue;
        };
        let value = match urlencoding::decode(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring {key}={raw}: {e}");
                continue;
            }
        };
        let value = value.as_ref();
        match key {
            "gpu" => match value {
                "1" | "true" => set_use_gpu(true),
                "0" | "false" => set_use_gpu(false),
                _ => log::warn!("Ignoring gpu={value}"),
            },
            "interval" => match value.parse::<u32>() {
                Ok(ms) => set_feed_interval_ms(ms),
                Err(e) => log::warn!("Ignoring interval={value}: {e}"),
            },
            "step" => match value.parse::<f64>() {
                Ok(step) if step.is_finite() && step > 0.0 => set_feed_step(step),
                _ => log::warn!("Ignoring step={value}"),
            },
            _ => {}
        }
    }
}
