// Countdown tick loop

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use tokio::time::MissedTickBehavior;

use super::service::CountdownService;
use crate::ui::CountdownRenderer;

/// Drive the countdown: evaluate and render once per `period` until
/// `shutdown` resolves.
///
/// The loop owns the timer, so once this function returns no further tick can
/// fire. The first tick fires immediately, making the countdown visible
/// before the first full period elapses. Ticks the runtime could not deliver
/// on time are skipped rather than delivered in a burst. Once the target has
/// been reached, frames identical to the previous one are no longer rendered,
/// so a finished countdown stops rewriting the same zeros.
///
/// `now_fn` supplies the current instant; the binary passes [`Local::now`]
/// while tests substitute synthetic clocks.
pub async fn run<R, F, S>(
    service: &mut CountdownService,
    renderer: &mut R,
    period: Duration,
    mut now_fn: F,
    shutdown: S,
) -> Result<()>
where
    R: CountdownRenderer,
    F: FnMut() -> DateTime<Local>,
    S: Future<Output = ()>,
{
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let tick = service.tick(now_fn());
                if tick.changed || !tick.reached {
                    renderer.render(&tick.parts, tick.reached)?;
                }
            }
            _ = &mut shutdown => {
                log::info!("Countdown ticker stopped");
                break;
            }
        }
    }

    Ok(())
}

/// Run against the system clock until Ctrl-C.
pub async fn run_until_ctrl_c<R: CountdownRenderer>(
    service: &mut CountdownService,
    renderer: &mut R,
    period: Duration,
) -> Result<()> {
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            // No signal handler means no clean shutdown path; keep counting
            // until the process is killed externally.
            log::error!("Failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    };

    run(service, renderer, period, Local::now, shutdown).await
}
