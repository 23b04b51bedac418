use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dialoguer::Select;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use coup_engine::{Event, Game, Interaction, PlayerId};

#[derive(Parser)]
#[command(name = "coup", about = "Play coup at the console")]
struct Args {
    /// Number of seats at the table.
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=6))]
    players: u8,

    /// Seed for a reproducible deal.
    #[arg(long)]
    seed: Option<u64>,

    /// Append every announced event to this file as JSON lines.
    #[arg(long)]
    transcript: Option<PathBuf>,
}

struct Console {
    transcript: Option<File>,
}

impl Interaction for Console {
    fn choose_one(&mut self, player: PlayerId, prompt: &str, options: &[String]) -> usize {
        Select::new()
            .with_prompt(format!("Player {player}: {prompt}"))
            .items(options)
            .default(0)
            .interact()
            .unwrap()
    }

    fn announce(&mut self, event: &Event) {
        println!("{event}");

        if let Some(file) = &mut self.transcript {
            let line = serde_json::to_string(event).expect("events serialize");
            let _ = writeln!(file, "{line}");
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    let transcript = args.transcript.map(|path| match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot open transcript {}: {err}", path.display());
            process::exit(1);
        }
    });

    let mut io = Console { transcript };
    let mut game = Game::new(args.players as usize, &mut rng);

    if let Err(err) = game.play(&mut io, &mut rng) {
        eprintln!("game aborted: {err}");
        process::exit(1);
    }
}
