//! Poker Monster - command line front end
//!
//! Play against a random computer opponent over stdin, or run batches of
//! random self-play games.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use poker_monster::{
    play_game, Agent, Engine, EngineConfig, FirstLegalAgent, Legality, PlayerKind, RandomAgent,
    SelfPlayConfig, Side, SideMap, Tally,
};
use tracing_subscriber::EnvFilter;

/// Which side the human plays
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    Hero,
    Monster,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Hero => Side::Hero,
            SideArg::Monster => Side::Monster,
        }
    }
}

/// How self-play agents choose among legal actions
#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentArg {
    /// Uniformly at random
    Random,
    /// Always the lowest legal id
    First,
}

impl AgentArg {
    fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentArg::Random => Box::new(RandomAgent::new(seed)),
            AgentArg::First => Box::new(FirstLegalAgent),
        }
    }
}

#[derive(Parser)]
#[command(name = "poker-monster")]
#[command(about = "Poker Monster - two-player card game engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against a random computer opponent
    Play {
        /// Side to play
        #[arg(long, value_enum, default_value = "hero")]
        side: SideArg,

        /// Seed for the deal and the computer's choices
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Run random self-play games and print the tally
    Simulate {
        /// Number of games
        #[arg(long, default_value_t = 100)]
        games: u32,

        /// Base seed; game i uses seed + i
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Abandon a game after this many actions
        #[arg(long, default_value_t = 2_000)]
        max_steps: usize,

        /// Print each game record as a JSON line
        #[arg(long)]
        json: bool,

        /// Agent used by both sides
        #[arg(long, value_enum, default_value = "random")]
        agent: AgentArg,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Play { side, seed } => play(side.into(), seed),
        Commands::Simulate { games, seed, max_steps, json, agent } => simulate(games, seed, max_steps, json, agent),
    }
}

fn play(human: Side, seed: u64) -> anyhow::Result<()> {
    let mut engine = Engine::new(EngineConfig::default().with_seed(seed))?;
    let kinds = SideMap::new(|side| if side == human { PlayerKind::Human } else { PlayerKind::Computer });
    engine.reset(kinds.hero, kinds.monster);

    let mut computer = RandomAgent::new(seed.wrapping_add(1));
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    while engine.results().is_none() {
        let (summary, menu) = engine.display_text();

        if engine.current_player() != human {
            let legal = engine.legal_actions(&menu);
            let Some(id) = computer.choose(engine.state(), &menu, &legal) else {
                bail!("computer has no legal action:\n{summary}\n{menu}");
            };
            if let Some(line) = engine.action_text(&menu, id) {
                println!("Computer: {line}");
            }
            engine.iterate(id)?;
            continue;
        }

        println!("\n{summary}\n\n{menu}");
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            println!("\nInput closed, leaving the game.");
            return Ok(());
        };
        let line = line.context("failed to read stdin")?;
        let Ok(id) = line.trim().parse::<u16>() else {
            println!("Enter an action number.");
            continue;
        };
        if let Legality::Illegal(reason) = engine.iterate(id.into())? {
            println!("Not allowed: {reason}");
        }
    }

    let (summary, _) = engine.display_text();
    println!("\n{summary}");
    match engine.state().winner {
        Some(winner) => println!("Winner: {winner}"),
        None => println!("No winner"),
    }
    Ok(())
}

fn simulate(games: u32, seed: u64, max_steps: usize, json: bool, agent: AgentArg) -> anyhow::Result<()> {
    let config = SelfPlayConfig::new().with_max_steps(max_steps).with_record_text(json);
    let mut tally = Tally::default();

    for game in 0..games {
        let game_seed = seed.wrapping_add(u64::from(game));
        let mut engine = Engine::new(EngineConfig::default().with_seed(game_seed))?;
        let mut agents = SideMap::new(|side| agent.build(game_seed.wrapping_mul(2).wrapping_add(side as u64)));

        let record = play_game(&mut engine, &mut agents, &config)
            .with_context(|| format!("game {game} (seed {game_seed}) failed"))?;
        if json {
            println!("{}", record.to_json()?);
        }
        tally.record(&record);
    }

    println!("{tally}");
    Ok(())
}
