use docopt::Docopt;
use log::info;
use maze_walls::{
    cells::{CoordinateSmallVec, GridCoordinate},
    grid::Grid,
    grid_displays::{GridDisplay, PathDisplay, StartEndPointsDisplay},
    pathing,
    units::{Height, Width},
    Maze,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Maze Walls

Usage:
    maze_walls_driver -h | --help
    maze_walls_driver [--width=<w>] [--height=<h>] [--seed=<s>] [--show-path | --show-distances] [--mark-start-end] [--text-out=<path>] [--save-passages=<path>]

Options:
    -h --help               Show this screen.
    --width=<w>             The number of cells along x [default: 10].
    --height=<h>            The number of cells along z [default: 10].
    --seed=<s>              Seed for the random carve. A random seed is chosen if not specified.
    --show-path             Show the longest path through the maze.
    --show-distances        Show the distance from the start of the longest path to all other
                            cells, in hexadecimal.
    --mark-start-end        Draw an 'S' (start) and 'E' (end) at the ends of the longest path.
    --text-out=<path>       Output file path for the textual rendering of the maze instead of
                            standard output.
    --save-passages=<path>  Serialize the maze to a text file: each line is a pair of numbers.
                            Line 1: n(#cells) m(#passages). Line 2+ passage between cells.
                            Uses 1-based row major cell indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: usize,
    flag_height: usize,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_mark_start_end: bool,
    flag_text_out: String,
    flag_save_passages: String,
}

/// The settings a maze is generated with, once defaults are filled in.
#[derive(Debug)]
struct MazeConfig {
    width: usize,
    height: usize,
    seed: u64,
}

impl MazeConfig {
    fn from_args(args: &MazeArgs) -> MazeConfig {
        MazeConfig {
            width: args.flag_width,
            height: args.flag_height,
            seed: args.flag_seed.unwrap_or_else(rand::random),
        }
    }
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::maze_walls::errors::Error, ::maze_walls::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: MazeArgs = match Docopt::new(USAGE).and_then(|d| d.deserialize()) {
        Ok(args) => args,
        Err(e) if e.fatal() => return Err(e.into()),
        Err(e) => e.exit(),
    };

    let config = MazeConfig::from_args(&args);
    info!("generating maze with {:?}", config);

    let mut rng = XorShiftRng::seed_from_u64(config.seed);
    let maze = Maze::generate(Width(config.width), Height(config.height), &mut rng)?;

    if !args.flag_save_passages.is_empty() {

        save_maze_passages(maze.grid(), &args.flag_save_passages)?;
    }

    let longest_path = pathing::longest_path(maze.grid()).unwrap_or_else(Vec::new);
    let rendered = render_maze(maze.grid(), &args, &longest_path)?;

    if args.flag_text_out.is_empty() {
        println!("{}", rendered);
    } else {
        write_text_to_file(&rendered, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        info!("maze written to {}", args.flag_text_out);
    }

    Ok(())
}

/// Render the maze as text with at most one overlay, in order of preference:
/// - distances from the longest path start to every cell
/// - the longest path
/// - start and end markers of the longest path
fn render_maze(grid: &Grid,
               maze_args: &MazeArgs,
               longest_path: &[GridCoordinate])
               -> Result<String> {

    let (start, end) = match (longest_path.first(), longest_path.last()) {
        (Some(&start), Some(&end)) => (start, end),
        _ => return Ok(grid.render(None)),
    };

    let overlay: Option<Box<dyn GridDisplay>> = if maze_args.flag_show_distances {

        let distances = pathing::Distances::new(grid, start)
            .ok_or("Longest path start is not on the grid.")?;
        Some(Box::new(distances) as Box<dyn GridDisplay>)

    } else if maze_args.flag_show_path {

        Some(Box::new(PathDisplay::new(longest_path)) as Box<dyn GridDisplay>)

    } else if maze_args.flag_mark_start_end {

        let markers = StartEndPointsDisplay::new(as_coordinate_smallvec(start),
                                                 as_coordinate_smallvec(end));
        Some(Box::new(markers) as Box<dyn GridDisplay>)
    } else {
        None
    };

    Ok(grid.render(overlay.as_deref()))
}

fn as_coordinate_smallvec(coord: GridCoordinate) -> CoordinateSmallVec {
    let mut coords = CoordinateSmallVec::new();
    coords.push(coord);
    coords
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_passages(maze_grid: &Grid, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", maze_grid.size(), maze_grid.passages_count()));

    for (src, dst) in maze_grid.iter_passages() {
        let index_a = maze_grid
            .coordinate_to_index(src)
            .ok_or("Passage iterator gave a coordinate off the grid.")?;
        let index_b = maze_grid
            .coordinate_to_index(dst)
            .ok_or("Passage iterator gave a coordinate off the grid.")?;

        graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze passages to text file {}", file_path))?;

    info!("saved {} passages to {}", maze_grid.passages_count(), file_path);
    Ok(())
}
