//! Round driver. Runs the arena engine at 60Hz against the input,
//! render, and console collaborators, then settles the wager book.
//!
//! The loop is single-threaded; the only blocking I/O is the wagering
//! prompt sequence, which happens before the first tick.

use std::time::{Duration, Instant};

use orchard_core::constants::TICK_RATE;
use orchard_core::enums::{ControlKind, RoundPhase};
use orchard_sim::engine::ArenaEngine;
use orchard_wager::{Settlement, WagerBook};

use crate::console::{self, Console};
use crate::input::{self, InputSource};
use crate::options::LaunchOptions;
use crate::render::RenderSink;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How a driven round ended.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// Winning fruit index, or `None` when the round was quit.
    pub winner: Option<usize>,
    /// Ticks simulated before the round ended.
    pub ticks: u64,
    /// Payout report, when a wager book was open and the round was won.
    pub settlement: Option<Settlement>,
}

/// Run one full round: optional wagering prompts, the tick loop, and
/// the end-of-round report.
///
/// Quitting mid-round abandons the round; an open book is left
/// unsettled and every stake is void.
pub fn run_round<I, R, C>(
    options: &LaunchOptions,
    input: &mut I,
    render: &mut R,
    console: &mut C,
) -> RoundOutcome
where
    I: InputSource + ?Sized,
    R: RenderSink + ?Sized,
    C: Console + ?Sized,
{
    let config = options.sim_config();
    let controls: Vec<ControlKind> = (0..config.mode.fruit_count())
        .map(|fruit| config.mode.control_kind(fruit))
        .collect();
    let mut engine = ArenaEngine::new(config);

    let mut book = if options.wagering {
        let mut book = WagerBook::new(engine.fruit_count(), engine.config().tax_rate);
        console::collect_bets(console, &mut book);
        Some(book)
    } else {
        None
    };

    let (winner, ticks) = drive(&mut engine, input, render, &controls);

    let settlement = match (book.as_mut(), winner) {
        (Some(book), Some(fruit)) => book.settle(fruit).ok(),
        _ => None,
    };

    console::report_winner(console, winner);
    if book.is_some() {
        console::report_settlement(console, settlement.as_ref());
    }

    RoundOutcome {
        winner,
        ticks,
        settlement,
    }
}

/// The tick loop. Runs until the round completes or a quit is requested.
fn drive<I, R>(
    engine: &mut ArenaEngine,
    input: &mut I,
    render: &mut R,
    controls: &[ControlKind],
) -> (Option<usize>, u64)
where
    I: InputSource + ?Sized,
    R: RenderSink + ?Sized,
{
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Honor a quit before simulating this tick
        if input.quit_requested() {
            return (engine.winner(), engine.current_tick());
        }

        // 2. Sample input and advance one tick
        engine.queue_commands(input::collect_commands(input, controls));
        let snapshot = engine.tick();

        // 3. Hand the finished snapshot to the render sink
        render.present(&snapshot);

        // 4. Stop once the round is decided
        if snapshot.phase == RoundPhase::Complete {
            return (snapshot.winner, snapshot.tick);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset the deadline instead of spiraling
            next_tick_time = now;
        }
    }
}
