mod reference_file;
mod report;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use log::debug;
use pagesim::{
    config::{parse_frame_count, parse_policies, SimConfig},
    reference::{RandomGenerator, DEFAULT_LENGTH, DEFAULT_RANGE},
    simulate, ReferenceGenerator, ReferenceString, Result,
};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Simula FIFO, LRU e Optimal sobre uma reference string")]
#[command(version)]
struct Cli {
    /// Número de frames (se omitido, é perguntado no terminal)
    #[arg(short, long)]
    frames: Option<String>,

    /// Reference string explícita, ex.: "1,2,3,4,1,2"
    #[arg(short, long, conflicts_with = "reference_file")]
    reference: Option<String>,

    /// Arquivo com a reference string
    #[arg(long)]
    reference_file: Option<PathBuf>,

    /// Tamanho da reference string gerada
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Páginas geradas ficam em [0, range)
    #[arg(long, default_value_t = DEFAULT_RANGE)]
    range: usize,

    /// Semente para gerar sempre a mesma reference string
    #[arg(long)]
    seed: Option<u64>,

    /// Políticas separadas por vírgula (fifo, lru, optimal) ou "all"
    #[arg(short, long, default_value = "all")]
    policy: String,

    /// Imprime uma comparação entre as políticas no final
    #[arg(long)]
    summary: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Erro: {e}");
        std::process::exit(1);
    }
}

fn read_frame_count(frames: Option<String>) -> Result<usize> {
    let text = match frames {
        Some(text) => text,
        None => {
            print!("Número de frames: ");
            io::stdout().flush()?;

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    parse_frame_count(&text)
}

fn build_config(cli: &Cli, frame_count: usize) -> Result<SimConfig> {
    let config = SimConfig {
        frame_count,
        length: cli.length,
        range: cli.range,
        seed: cli.seed,
        policies: parse_policies(&cli.policy)?,
    };

    config.validate()?;

    Ok(config)
}

fn load_reference(cli: &Cli, config: &SimConfig) -> Result<ReferenceString> {
    if let Some(text) = &cli.reference {
        return text.parse();
    }

    if let Some(path) = &cli.reference_file {
        return reference_file::load_reference(path);
    }

    RandomGenerator::from_seed_option(config.seed).generate(config.length, config.range)
}

fn run(cli: Cli) -> Result<()> {
    // tudo é validado antes de qualquer simulação: ou sai tudo, ou nada
    let frame_count = read_frame_count(cli.frames.clone())?;
    let config = build_config(&cli, frame_count)?;
    let reference = load_reference(&cli, &config)?;

    debug!("main: {:?}", config);

    let results = config
        .policies
        .iter()
        .map(|kind| simulate(*kind, &reference, config.frame_count))
        .collect::<Result<Vec<_>>>()?;

    println!("Page Reference String:\n{}\n", reference);

    for result in &results {
        println!("{}", report::render_result(&reference, result));
    }

    if cli.summary {
        print!("{}", report::render_summary(&results));
    }

    Ok(())
}
