use std::{fs, io, path::PathBuf, sync::Arc};

use anyhow::{bail, Context};
use clap::Parser;

use engine::prelude::*;
use sight::RegionMap;

mod logging;
mod run;

use run::Runner;

#[derive(Parser, Debug)]
#[command(version, about = "Run fast travel scripts against game data")]
struct Args {
    /// Game data file or directory.
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Continue from a saved session.
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the session here when the script is done.
    #[arg(long)]
    save: Option<PathBuf>,

    /// Set party gold.
    #[arg(long)]
    gold: Option<i32>,

    /// Give the party items, `ID:AMOUNT`.
    #[arg(long, value_parser = parse_item)]
    item: Vec<(ItemId, i32)>,

    /// Region tag grid for sight checks.
    #[arg(long)]
    map: Option<PathBuf>,

    /// Width of menu windows in characters.
    #[arg(long, default_value_t = 32)]
    width: usize,

    #[arg(short, long)]
    verbose: bool,

    /// Command script, read from stdin if not given.
    script: Option<PathBuf>,
}

fn parse_item(s: &str) -> anyhow::Result<(ItemId, i32)> {
    let Some((id, amount)) = s.split_once(':') else {
        bail!("expected ID:AMOUNT, got {s:?}");
    };
    Ok((id.trim().parse()?, amount.trim().parse()?))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let data = Arc::new(Data::load(&args.data)?);

    let mut session = if let Some(path) = &args.load {
        let save = fs::read(path)
            .with_context(|| format!("reading save {}", path.display()))?;
        Session::load(data, &save)?
    } else {
        Session::new(data)
    };

    if let Some(gold) = args.gold {
        session.party.gold = gold;
    }
    for &(item, amount) in &args.item {
        session.party.gain_item(item, amount);
    }

    let regions = match &args.map {
        Some(path) => RegionMap::from_text(
            &fs::read_to_string(path)
                .with_context(|| format!("reading map {}", path.display()))?,
        ),
        None => Default::default(),
    };

    let script = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => io::read_to_string(io::stdin())?,
    };

    let mut runner = Runner::new(session, regions, args.width);
    let mut failed = 0;
    for (n, line) in script.lines().enumerate() {
        let mut out = String::new();
        if let Err(e) = runner.line(line, &mut out) {
            log::error!("line {}: {e:#}", n + 1);
            failed += 1;
        }
        print!("{out}");
    }

    if let Some(path) = &args.save {
        fs::write(path, runner.session().save()?)
            .with_context(|| format!("writing save {}", path.display()))?;
        log::info!("Saved session to {}", path.display());
    }

    if failed > 0 {
        bail!("{failed} script lines failed");
    }
    Ok(())
}
