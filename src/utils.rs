use rand::Rng;
use rand::prelude::IndexedRandom;
use std::time::Duration;

/// Sleeps for one of `delays_ms`, picked at random. No-op on an empty slice.
pub fn random_delay(delays_ms: &[u64]) {
    if let Some(delay) = delays_ms.choose(&mut rand::rng()) {
        std::thread::sleep(Duration::from_millis(*delay));
    }
}

/// Sleeps for a uniformly random duration in `[min, max]` milliseconds.
pub fn jitter_delay((min, max): (u64, u64)) {
    let delay = if min < max {
        rand::rng().random_range(min..=max)
    } else {
        min
    };
    std::thread::sleep(Duration::from_millis(delay));
}

/// Joins the words of a search term with a source-specific separator,
/// e.g. `"data analyst"` becomes `"data+analyst"`.
pub fn join_terms(term: &str, separator: char) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// Trims text and collapses inner whitespace runs to a single space.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
