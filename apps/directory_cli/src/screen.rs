use std::{io, time::Duration};

use directory_core::{ListController, LoadState};
use tokio::time::MissedTickBehavior;
use tokio_stream::StreamExt;

/// Ticks `on_tick` while the load is pending and returns the settled state,
/// or `None` if the status cell closes first.
pub async fn wait_until_settled(
    controller: &ListController,
    tick: Duration,
    mut on_tick: impl FnMut(usize) -> io::Result<()>,
) -> io::Result<Option<LoadState>> {
    let mut updates = controller.subscribe_status().into_stream();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frame = 0usize;

    loop {
        tokio::select! {
            biased;
            update = updates.next() => match update {
                Some(published) if published.value.is_terminal() => {
                    return Ok(Some(published.value))
                }
                Some(_) => {}
                None => return Ok(None),
            },
            _ = ticker.tick() => {
                on_tick(frame)?;
                frame = frame.wrapping_add(1);
            }
        }
    }
}
