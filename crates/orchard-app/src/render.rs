//! Render collaborator. The runner hands the finished snapshot to a
//! sink once per tick and never looks at the result; presentation
//! failures must not stall the simulation.

use orchard_core::state::WorldSnapshot;

/// Receives one snapshot per tick, after the tick has been simulated.
pub trait RenderSink {
    fn present(&mut self, snapshot: &WorldSnapshot);
}

/// Discards every snapshot.
pub struct NullRender;

impl RenderSink for NullRender {
    fn present(&mut self, _snapshot: &WorldSnapshot) {}
}

/// Logs events as they happen plus a periodic one-line digest, so a
/// headless round can be followed from the log.
pub struct LogRender {
    every: u64,
}

impl LogRender {
    /// `every` is the digest interval in ticks; an interval of zero is
    /// treated as one.
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl RenderSink for LogRender {
    fn present(&mut self, snapshot: &WorldSnapshot) {
        for event in &snapshot.events {
            log::debug!("tick {}: {:?}", snapshot.tick, event);
        }

        if snapshot.tick % self.every != 0 {
            return;
        }
        if let Some(&lead) = snapshot.draw_order.first() {
            let fruit = &snapshot.fruits[lead];
            log::debug!(
                "tick {}: fruit {} leads at {:.0}x{:.0}, {} shots in flight",
                snapshot.tick,
                fruit.index,
                fruit.rect.w,
                fruit.rect.h,
                snapshot.projectiles.len()
            );
        }
    }
}
