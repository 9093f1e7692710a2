use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use telex_engine::{Config, InputMode, TelexEngine, TextBuffer};

/// Type Vietnamese with Telex on stdin
#[derive(Parser, Debug)]
#[command(name = "telex")]
#[command(version)]
#[command(
    about = "Telex input demo: reads keys from stdin and echoes the composed line",
    long_about = None
)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Start in English (pass-through) mode
    #[arg(short, long)]
    english: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// What the terminal loop does after a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Redraw,
    /// Enter: the line is finished.
    Commit,
    Quit,
}

/// One composed line plus the session typing into it.
struct Demo {
    engine: TelexEngine,
    line: TextBuffer,
    timeout: Duration,
    last_key: Option<Instant>,
}

impl Demo {
    fn new(engine: TelexEngine, timeout: Duration) -> Self {
        Self {
            engine,
            line: TextBuffer::new(),
            timeout,
            last_key: None,
        }
    }

    /// Handles one raw byte read from the terminal at `now`.
    fn key(&mut self, byte: u8, now: Instant) -> Step {
        if let Some(last) = self.last_key {
            if now.duration_since(last) > self.timeout {
                log::debug!("idle for more than {:?}, word dropped", self.timeout);
                self.engine.word_break();
            }
        }
        self.last_key = Some(now);

        match byte {
            3 | 4 => return Step::Quit,
            b'\r' | b'\n' => {
                self.engine.word_break();
                return Step::Commit;
            }
            b'\t' => {
                self.engine.toggle_mode();
            }
            0x08 | 0x7f => {
                self.line.backspace();
                self.engine.backspace();
            }
            // Pieces of multi-byte UTF-8 and other controls are not echoed.
            b if b >= 0x80 || b.is_ascii_control() => {
                self.engine.word_break();
            }
            b => {
                let c = b as char;
                self.line.type_char(c);
                let outcome = match self.engine.feed(c, &mut self.line) {
                    Ok(outcome) => outcome,
                    Err(never) => match never {},
                };
                log::trace!("{c:?} -> {outcome:?}");
            }
        }
        Step::Redraw
    }
}

fn run(demo: &mut Demo) -> io::Result<()> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut buf = [0u8; 1];

    loop {
        if stdin.read(&mut buf)? == 0 {
            break;
        }
        match demo.key(buf[0], Instant::now()) {
            Step::Quit => break,
            Step::Commit => {
                write!(stdout, "\r{}\r\n", demo.line.as_str())?;
                demo.line.clear();
            }
            // Clear to end of line so erased letters disappear.
            Step::Redraw => write!(stdout, "\r{}\x1b[K", demo.line.as_str())?,
        }
        stdout.flush()?;
    }

    if !demo.line.as_str().is_empty() {
        write!(stdout, "\r{}\r\n", demo.line.as_str())?;
    }
    stdout.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if args.english {
        config.start_mode = InputMode::English;
    }
    let mut demo = Demo::new(config.engine(), config.inactivity_timeout());

    println!("Telex demo (Tab toggles mode, Ctrl+C quits):");

    // Keys must arrive one by one for the timeout and backspace to work.
    let raw = io::stdin().is_terminal();
    if raw {
        enable_raw_mode()?;
    }
    let result = run(&mut demo);
    if raw {
        disable_raw_mode()?;
    }
    result?;
    Ok(())
}
