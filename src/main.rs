use mazecarve::{MazeConfig, MazeGenerator};
use tracing::Level;

const LOG_FILE: &str = "mazecarve.log";

fn print_usage() {
    eprintln!(
        "Usage: mazecarve [--rows N] [--columns N] [--algorithm NAME] [--seed N | --random] [--verbose]"
    );
    eprintln!("Algorithms:");
    for algorithm in mazecarve::Algorithm::ALL {
        eprintln!("  {:<22} {}", algorithm.name(), algorithm);
    }
}

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let config = match MazeConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            std::process::exit(2);
        }
    };

    // Logs go to a file so stdout only carries the maze
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(if config.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    tracing::info!("Starting with {:?}", config);

    let mut generator = match MazeGenerator::from_config(&config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    if let Err(e) = generator.generate() {
        tracing::error!("Generation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut stdout = std::io::stdout();
    println!(
        "{} ({}x{}, seed {})",
        config.algorithm,
        config.rows,
        config.columns,
        config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );
    generator.grid().render(&mut stdout)?;

    let goals = generator.goals();
    println!("{} goals:", goals.len());
    for goal in goals {
        println!(
            "  ({}, {}) open {} yaw {}",
            goal.row,
            goal.column,
            goal.open_direction,
            goal.open_direction.yaw_degrees()
        );
    }
    Ok(())
}
