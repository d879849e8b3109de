use crossterm::{
    execute,
    style::{self, Attribute, Color, Stylize},
};

use mazegen::display::draw_maze;
use mazegen::generators::{WallPolicy, generate_maze};

/// Log to a file so the terminal stays free for the maze itself.
/// The returned guard must stay alive for the duration of the program.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazegen.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    // Usage: mazegen [N] [seed] [--mirrored]
    let mut policy = WallPolicy::Independent;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--mirrored" {
            policy = WallPolicy::Facing;
        } else {
            positional.push(arg);
        }
    }

    let n = match positional.first() {
        Some(arg) => arg.parse::<usize>().ok(),
        None => {
            println!("Enter maze dimension N:");
            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            input.trim().parse::<usize>().ok()
        }
    };
    let Some(n) = n else {
        eprintln!("Please enter a valid number for the maze dimension.");
        return Ok(());
    };
    let seed = positional.get(1).and_then(|arg| arg.parse::<u64>().ok());

    tracing::info!("[main] generating a {n}x{n} maze ({policy})");
    let grid = match generate_maze(n, policy, seed) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    let mut stdout = std::io::stdout();
    draw_maze(&grid, &mut stdout)?;
    execute!(
        stdout,
        style::PrintStyledContent(
            format!("{n}x{n} maze: {} passages\n", grid.passages())
                .with(Color::Green)
                .attribute(Attribute::Bold),
        )
    )?;
    Ok(())
}
