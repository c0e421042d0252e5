use clap::Parser;

use orchard_app::console::StdConsole;
use orchard_app::input::NullInput;
use orchard_app::options::LaunchOptions;
use orchard_app::render::LogRender;
use orchard_app::runner;
use orchard_core::config::GameMode;
use orchard_core::constants::TICK_RATE;
use orchard_core::enums::ControlKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "ORCHARD arena rounds with console wagering", long_about = None)]
struct Args {
    /// Game mode: pvp, pvai, or aivsai
    #[arg(long, default_value = "aivsai")]
    mode: String,

    /// AI opponents in pvai mode (clamped to 1-4)
    #[arg(long, default_value_t = 1)]
    ai_count: u32,

    /// Participants in aivsai mode (clamped to 2-5)
    #[arg(long, default_value_t = 3)]
    fruit_count: u32,

    /// Collect bets before the round and pay out after it
    #[arg(long)]
    wager: bool,

    /// Run an exhibition with AI shooting locked off
    #[arg(long)]
    screensaver: bool,

    /// Simulation seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn resolve_mode(args: &Args) -> GameMode {
    match args.mode.to_lowercase().as_str() {
        "pvp" => GameMode::PvP,
        "pvai" => GameMode::PvAi {
            ai_count: args.ai_count,
        },
        "aivsai" => GameMode::AiVsAi {
            fruit_count: args.fruit_count,
        },
        other => {
            log::warn!("Unknown mode '{other}', running an AI exhibition instead");
            GameMode::AiVsAi {
                fruit_count: args.fruit_count,
            }
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = LaunchOptions {
        mode: resolve_mode(&args),
        wagering: args.wager,
        screensaver: args.screensaver,
        seed: args.seed,
    };

    // This binary ships without a device backend; human fruits can only
    // sit idle.
    let effective = options.sim_config().mode;
    let humans = (0..effective.fruit_count())
        .filter(|&fruit| effective.control_kind(fruit) == ControlKind::Human)
        .count();
    if humans > 0 {
        log::warn!("{humans} human fruit(s) and no input device attached");
    }

    log::info!(
        "Starting round: mode {:?}, seed {}, wagering {}",
        options.mode,
        options.seed,
        options.wagering
    );

    let mut input = NullInput;
    let mut render = LogRender::new(TICK_RATE as u64);
    let mut console = StdConsole;
    let outcome = runner::run_round(&options, &mut input, &mut render, &mut console);

    log::info!(
        "Round over after {} ticks, winner {:?}",
        outcome.ticks,
        outcome.winner
    );
}
