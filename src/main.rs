use docopt::Docopt;
use serde_derive::Deserialize;
use noise_mazes::{
    config::MazeConfig,
    exits::ExitPlacement,
    generators::MazeGenerator,
    grid::MazeGrid,
    pathing,
};
use std::{
    fs::File,
    io::prelude::*,
    io::BufWriter,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Noise mazes

Usage:
    maze_driver -h | --help
    maze_driver [--size=<n>] [--seed=<s>] [--exit-seed=<e>] [--corner-exit] [--show-path] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --size=<n>             The maze is n * n cells [default: 20].
    --seed=<s>             Seed for the passage carving noise [default: 0].
    --exit-seed=<e>        Seed for exit placement, derived from --seed when not given.
    --corner-exit          Only the far corner is an exit instead of noise chosen exits.
    --show-path            Mark the shortest walk from the entrance to the nearest reachable exit.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: usize,
    flag_seed: u32,
    flag_exit_seed: Option<u32>,
    flag_corner_exit: bool,
    flag_show_path: bool,
    flag_save_edges: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::noise_mazes::errors::Error, ::noise_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut config = MazeConfig::new(args.flag_size, args.flag_seed);
    if let Some(exit_seed) = args.flag_exit_seed {
        config = config.with_exit_seed(exit_seed);
    }
    if args.flag_corner_exit {
        config = config.with_exit_placement(ExitPlacement::FarCorner);
    }

    let (maze, report) = MazeGenerator::new(config).generate_with_report()?;
    tracing::info!(repair = ?report.repair, exits = report.exits.len(), "maze ready");

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)
            .chain_err(|| format!("Failed to write maze edges to {}", args.flag_save_edges))?;
    }

    let mut text = format!("{}", maze);
    if args.flag_show_path {
        match pathing::nearest_exit(&maze)? {
            Some(path) => {
                text = mark_path(&maze, &text, &path);
                tracing::info!(steps = path.len() - 1, "shortest walk to an exit");
            }
            None => tracing::warn!("no exit is reachable from the entrance"),
        }
    }
    print!("{}", text);

    Ok(())
}

/// Overwrite the body of every cell on `path` in the text dump with a dot. Exit cells keep
/// their marker.
fn mark_path(maze: &MazeGrid,
             text: &str,
             path: &[noise_mazes::cells::Cartesian2DCoordinate])
             -> String {
    let size = maze.size().0;
    let mut lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
    for coord in path {
        // Two text lines per row, north row first, then the bottom boundary.
        let line = 2 * (size - 1 - coord.y as usize) + 1;
        let column = 4 * coord.x as usize + 2;
        if let Some(body) = lines.get_mut(line).and_then(|l| l.get_mut(column)) {
            if *body == ' ' {
                *body = '.';
            }
        }
    }
    lines.into_iter()
        .map(|line| line.into_iter().collect::<String>() + "\n")
        .collect()
}

fn save_maze_graph(maze: &MazeGrid, file_path: &str) -> Result<()> {
    let graph = maze.to_graph();
    let mut writer = BufWriter::new(File::create(file_path)?);

    writeln!(writer, "{} {}", graph.node_count(), graph.edge_count())?;
    for edge in graph.raw_edges() {
        writeln!(writer, "{} {}", edge.source().index() + 1, edge.target().index() + 1)?;
    }
    writer.flush()?;

    Ok(())
}
