use docopt::Docopt;
use error_chain::bail;
use log::{debug, info};
use perfect_mazes::{
    cells::Cell,
    generators::{self, StartCell},
    grid::MazeGrid,
    grid_displays::{BlankDisplay, GridDisplay, MazeText, PathDisplay, StartEndPointsDisplay},
    layout::MazeLayout,
    pathing,
    units::{ColumnsCount, Height, RowsCount, Width},
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Perfect mazes

Usage:
    maze_driver -h | --help
    maze_driver [--rows=<r>] [--columns=<c>] [--seed=<n>] [--start-row=<y> --start-column=<x>] [--show-path | --show-longest-path | --show-distances | --mark-start-end] [--text-out=<path>] [--save-edges=<path>] [--save-layout=<path>] [--canvas-width=<w>] [--canvas-height=<h>]

Options:
    -h --help               Show this screen.
    --rows=<r>              Number of cell rows in the maze [default: 6].
    --columns=<c>           Number of cell columns in the maze [default: 7].
    --seed=<n>              Seed for the random source, for a reproducible maze. Random if not given.
    --start-row=<y>         Row of the cell the carve starts from. A random cell if no start is given.
    --start-column=<x>      Column of the cell the carve starts from.
    --show-path             Show the route from the top left start cell to the bottom right goal cell.
    --show-longest-path     Show the longest route anywhere in the maze, its two ends marked 'S' and 'E'.
    --show-distances        Show the step count from the top left cell to every other cell (hexadecimal).
    --mark-start-end        Draw an 'S' in the top left start cell and an 'E' in the bottom right goal cell.
    --text-out=<path>       Output file path for the text rendering of the maze, instead of stdout.
    --save-edges=<path>     Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based row major vertex indices.
    --save-layout=<path>    Write the static bodies for a physics layer, one per line: label centre-x centre-y width height. The last line is: ball centre-x centre-y radius.
    --canvas-width=<w>      Canvas width used by --save-layout [default: 700].
    --canvas-height=<h>     Canvas height used by --save-layout [default: 600].
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    flag_start_row: Option<usize>,
    flag_start_column: Option<usize>,
    flag_show_path: bool,
    flag_show_longest_path: bool,
    flag_show_distances: bool,
    flag_mark_start_end: bool,
    flag_text_out: String,
    flag_save_edges: String,
    flag_save_layout: String,
    flag_canvas_width: f32,
    flag_canvas_height: f32,
}

mod errors {
    // The driver's own Error, ErrorKind, ResultExt and Result, with the library's errors
    // linked in so `?` works across both.
    use error_chain::*;
    error_chain! {

        links {
            Maze(::perfect_mazes::errors::Error, ::perfect_mazes::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    debug!("{:?}", args);

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("maze seed {}", seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let start = start_cell_from_args(&args)?;
    let maze_grid = generators::generate_maze(RowsCount(args.flag_rows),
                                              ColumnsCount(args.flag_columns),
                                              start,
                                              &mut rng)?;
    info!("generated {} x {} maze with {} open walls",
          args.flag_rows,
          args.flag_columns,
          maze_grid.open_walls_count());

    let text = render_text(&maze_grid, &args)?;
    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze_grid, &args.flag_save_edges)?;
    }

    if !args.flag_save_layout.is_empty() {
        let layout = MazeLayout::new(&maze_grid,
                                     Width(args.flag_canvas_width),
                                     Height(args.flag_canvas_height));
        save_maze_layout(&layout, &args.flag_save_layout)?;
    }

    Ok(())
}

fn start_cell_from_args(maze_args: &MazeArgs) -> Result<StartCell> {
    match (maze_args.flag_start_row, maze_args.flag_start_column) {
        (Some(row), Some(column)) => Ok(StartCell::At(Cell::new(row, column))),
        (None, None) => Ok(StartCell::Random),
        _ => bail!("--start-row and --start-column must be given together"),
    }
}

/// Decide what goes inside each cell of the text rendering:
/// - the route from start to goal
/// - the longest route in the maze
/// - distances from the start cell to every cell
/// - start and goal markers
/// - nothing
fn render_text(maze_grid: &MazeGrid, maze_args: &MazeArgs) -> Result<String> {

    let display: Box<dyn GridDisplay> = if maze_args.flag_show_path {
        let path = pathing::solve(maze_grid)
            .ok_or("No route from start to goal, the maze is not perfect.")?;
        Box::new(PathDisplay::new(&path))
    } else if maze_args.flag_show_longest_path {
        let path = pathing::longest_path(maze_grid)
            .ok_or("No longest route found, the maze is not perfect.")?;
        Box::new(PathDisplay::new(&path))
    } else if maze_args.flag_show_distances {
        let distances = pathing::Distances::new(maze_grid, maze_grid.start_corner())
            .ok_or("Invalid start cell from which to show path distances.")?;
        Box::new(distances)
    } else if maze_args.flag_mark_start_end {
        Box::new(StartEndPointsDisplay::corners(maze_grid))
    } else {
        Box::new(BlankDisplay)
    };

    Ok(format!("{}", MazeText::new(maze_grid, display.as_ref())))
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &MazeGrid, file_path: &str) -> Result<()> {
    write_text_to_file(&maze_grid.edge_list(), file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    Ok(())
}

fn save_maze_layout(layout: &MazeLayout, file_path: &str) -> Result<()> {
    write_text_to_file(&layout.to_string(), file_path)
        .chain_err(|| format!("Failed to write maze layout to text file {}", file_path))?;
    Ok(())
}
