// algotty: terminal sorting and searching algorithm visualizer

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotty::engine::{Value, DEFAULT_PACING_MS};
use algotty::ui::App;

struct Options {
    size: usize,
    max_value: Value,
    pacing_ms: u64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            size: 20,
            max_value: 100,
            pacing_ms: DEFAULT_PACING_MS,
        }
    }
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--size N] [--max V] [--pacing MS]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size N     Number of dataset elements (default 20)");
    eprintln!("  --max V      Largest generated value (default 100)");
    eprintln!("  --pacing MS  Initial inter-step delay in ms (default 100)");
    eprintln!();
    eprintln!("Keys: ↑/↓ select, Enter run, Tab sort/search, r new data,");
    eprintln!("      t new target, +/- speed, c cancel, q quit");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--size" => {
                let value = iter.next().ok_or("--size requires a value")?;
                opts.size = value
                    .parse()
                    .map_err(|_| format!("invalid --size value '{}'", value))?;
            }
            "--max" => {
                let value = iter.next().ok_or("--max requires a value")?;
                opts.max_value = value
                    .parse()
                    .map_err(|_| format!("invalid --max value '{}'", value))?;
                if opts.max_value < 1 {
                    return Err("--max must be at least 1".to_string());
                }
            }
            "--pacing" => {
                let value = iter.next().ok_or("--pacing requires a value")?;
                opts.pacing_ms = value
                    .parse()
                    .map_err(|_| format!("invalid --pacing value '{}'", value))?;
            }
            "-h" | "--help" => return Err(String::new()),
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    if opts.size == 0 {
        return Err("--size must be at least 1".to_string());
    }
    Ok(opts)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    let opts = match parse_args(&args[1..]) {
        Ok(opts) => opts,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("Error: {}", msg);
                eprintln!();
            }
            print_usage(program_name);
            process::exit(if msg.is_empty() { 0 } else { 1 });
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(opts.size, opts.max_value, opts.pacing_ms);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
