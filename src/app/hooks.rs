use leptos::{html::Div, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{RevealLatch, RevealOptions};

/// Watches `target` and flips the returned signal to true the first time it
/// comes into view. The observer disconnects after that, so leaving and
/// re-entering the viewport never replays anything.
pub fn use_reveal_once(target: NodeRef<Div>, options: RevealOptions) -> Signal<bool> {
    let latch = StoredValue::new(RevealLatch::new());
    let (revealed, set_revealed) = signal(false);

    let observer_options = UseIntersectionObserverOptions::default()
        .root_margin(options.root_margin)
        .thresholds(vec![options.threshold]);

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let fired = latch
                .try_update_value(|latch| {
                    latch.observe_entries(entries.iter().map(|entry| entry.is_intersecting()))
                })
                .unwrap_or(false);
            if fired {
                set_revealed.set(true);
                observer.disconnect();
            }
        },
        observer_options,
    );

    revealed.into()
}
