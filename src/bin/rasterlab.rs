//! rasterlab: draw lines and circles on a cell grid from the command line.
//!
//! Each SHAPE is `x0,y0,x1,y1` in grid coordinates. For the circle
//! algorithm the first pair is the center and the second lies on the
//! circumference.
//!
//! Run: `rasterlab --algorithm bresenham 0,0,12,5 --png out.png`

use anyhow::{bail, Context, Result};
use clap::Parser;
use rasterlab::config::Config;
use rasterlab::output::{PngEncoder, TerminalEncoder, TerminalMode};
use rasterlab::raster::Algorithm;
use rasterlab::render::GridPainter;
use rasterlab::session::Session;
use std::fmt::Write as FmtWrite;
use std::path::PathBuf;

/// rasterlab: compare discrete line and circle algorithms
#[derive(Parser, Debug)]
#[command(name = "rasterlab")]
#[command(version)]
#[command(about = "Rasterize lines and circles on a cell grid and time each algorithm")]
#[command(long_about = None)]
struct Cli {
    /// Shapes to draw, each as x0,y0,x1,y1
    #[arg(value_name = "SHAPE", value_parser = parse_shape)]
    shapes: Vec<[i32; 4]>,

    /// Algorithm: step, dda, bresenham or circle
    #[arg(short, long, value_parser = parse_algorithm)]
    algorithm: Option<Algorithm>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid extent in canvas units
    #[arg(long)]
    extent: Option<u32>,

    /// Cell size in canvas units
    #[arg(long)]
    cell_size: Option<u32>,

    /// Write the rendered grid to a PNG file
    #[arg(long, value_name = "PATH")]
    png: Option<PathBuf>,

    /// Do not print the grid to the terminal
    #[arg(long)]
    no_terminal: bool,

    /// Use ANSI colors in the terminal view
    #[arg(long)]
    color: bool,

    /// Maximum number of columns in the terminal view
    #[arg(long, default_value = "80")]
    width: u32,

    /// Run every shape through all four algorithms, one column each
    #[arg(long)]
    compare: bool,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e: rasterlab::Error| e.to_string())
}

fn parse_shape(s: &str) -> Result<[i32; 4], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!("expected x0,y0,x1,y1, got '{s}'"));
    }
    let mut coords = [0; 4];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))?;
    }
    Ok(coords)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default_path()
            .filter(|p| p.exists())
            .map(Config::load_or_default)
            .unwrap_or_default(),
    };

    if let Some(extent) = cli.extent {
        config.grid.extent = extent;
    }
    if let Some(cell_size) = cli.cell_size {
        config.grid.cell_size = cell_size;
    }
    if let Some(algorithm) = cli.algorithm {
        config.algorithm = algorithm;
    }

    config.validate()?;
    Ok(config)
}

fn draw_all(session: &mut Session, shapes: &[[i32; 4]]) {
    for &[x0, y0, x1, y1] in shapes {
        let report = session.draw(x0, y0, x1, y1);
        println!(
            "{:<20} {} -> {}  {:>6} cells  {}",
            report.algorithm.label(),
            report.start,
            report.end,
            report.cells_emitted,
            report
        );
    }
}

/// One row per shape, one `cells / us` column per algorithm. Each cell of
/// the table comes from a fresh session.
fn comparison_table(config: &Config, shapes: &[[i32; 4]]) -> Result<String> {
    const SHAPE_WIDTH: usize = 22;
    const COLUMN_WIDTH: usize = 22;

    let mut table = format!("{:<SHAPE_WIDTH$}", "shape");
    for algorithm in Algorithm::ALL {
        write!(table, " {:>COLUMN_WIDTH$}", algorithm.label())?;
    }
    table.push('\n');

    for &[x0, y0, x1, y1] in shapes {
        let mut shape = String::new();
        for algorithm in Algorithm::ALL {
            let mut session = Session::from_config(config)?;
            session.set_algorithm(algorithm);
            let report = session.draw(x0, y0, x1, y1);
            if shape.is_empty() {
                shape = format!("{} -> {}", report.start, report.end);
                write!(table, "{shape:<SHAPE_WIDTH$}")?;
            }
            let column = format!(
                "{} / {:.2}us",
                report.cells_emitted,
                report.elapsed_micros()
            );
            write!(table, " {column:>COLUMN_WIDTH$}")?;
        }
        table.push('\n');
    }

    Ok(table)
}

fn output(session: &Session, config: &Config, cli: &Cli) -> Result<()> {
    if !cli.no_terminal {
        let mode = if cli.color {
            TerminalMode::AnsiTrueColor
        } else {
            TerminalMode::Ascii
        };
        TerminalEncoder::new()
            .mode(mode)
            .max_width(cli.width)
            .theme(config.render)
            .print(session);
    }

    if let Some(path) = &cli.png {
        let canvas = GridPainter::new(config.render).render_session(session)?;
        PngEncoder::write_to_file(&canvas, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.shapes.is_empty() {
        bail!("nothing to draw; pass at least one SHAPE as x0,y0,x1,y1");
    }

    if cli.compare {
        print!("{}", comparison_table(&config, &cli.shapes)?);
        return Ok(());
    }

    let mut session = Session::from_config(&config)?;
    draw_all(&mut session, &cli.shapes);
    output(&session, &config, &cli)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_shape() {
        assert_eq!(parse_shape("0, 0,12,-5").unwrap(), [0, 0, 12, -5]);
        assert!(parse_shape("1,2,3").is_err());
        assert!(parse_shape("1,2,3,x").is_err());
    }

    #[test]
    fn test_comparison_table_side_by_side() {
        let table = comparison_table(&Config::default(), &[[0, 0, 6, 2], [5, 5, 5, 5]]).unwrap();
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows.len(), 3);

        for algorithm in Algorithm::ALL {
            assert!(rows[0].contains(algorithm.label()));
        }
        assert!(rows[1].starts_with("(0, 0) -> (6, 2)"));
        assert_eq!(rows[1].matches("7 / ").count(), 3);
        assert_eq!(rows[1].matches("us").count(), 4);
        assert!(rows[2].starts_with("(5, 5) -> (5, 5)"));
    }
}
