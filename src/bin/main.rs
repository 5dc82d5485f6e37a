use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use emulator::platform::{self, Platform, Signal};
use emulator::{rng, Chunk, Error, Framebuffer, Keypad, Vm};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(name = "chip8")]
#[command(about = "Headless CHIP-8 interpreter", long_about = None)]
struct Args {
  /// Path to a CHIP-8 program image
  rom: PathBuf,

  /// Stop after this many cycles instead of running forever
  #[arg(long)]
  cycles: Option<u64>,

  /// Cycles per second; 0 runs unthrottled
  #[arg(long, default_value_t = 1000)]
  hz: u64,

  /// Keys held down for the whole run, as hex digits (e.g. `5a`)
  #[arg(long, default_value = "")]
  keys: String,

  /// Seed the random source instead of using the clock
  #[arg(long)]
  seed: Option<u64>,

  /// Print the registers when the run ends
  #[arg(long)]
  dump: bool,

  /// Debug logging (RUST_LOG still wins when set)
  #[arg(short, long)]
  verbose: bool,
}

/// Holds a fixed set of keys, paces cycles, and keeps the latest frame
struct Headless {
  held: Keypad,
  period: Option<Duration>,
  last: Instant,
  frame: Framebuffer,
}

impl Headless {
  fn new(held: Keypad, hz: u64) -> Self {
    Self {
      held,
      period: (hz > 0).then(|| Duration::from_nanos(1_000_000_000 / hz)),
      last: Instant::now(),
      frame: Framebuffer::new(),
    }
  }
}

impl Platform for Headless {
  fn poll_input(&mut self, keypad: &mut Keypad) -> Signal {
    if let Some(period) = self.period {
      let elapsed = self.last.elapsed();
      if elapsed < period {
        thread::sleep(period - elapsed);
      }
      self.last = Instant::now();
    }
    *keypad = self.held;
    Signal::Continue
  }

  fn present(&mut self, frame: &Framebuffer) {
    self.frame.clone_from(frame);
  }
}

fn parse_keys(digits: &str) -> Result<Keypad> {
  let mut keypad = [false; 16];
  for c in digits.chars() {
    match c.to_digit(16) {
      Some(key) => keypad[key as usize] = true,
      None => bail!("`{c}` is not a CHIP-8 key"),
    }
  }
  Ok(keypad)
}

/// Where execution stopped, taken from the error rather than the opcode latch,
/// which is stale when the fetch itself failed
fn stop_context(err: &Error) -> String {
  match (err, err.pc()) {
    (Error::UnknownOpcode { word, pc }, _) => {
      format!("execution stopped on opcode {word:#06X} at {pc:#05X}")
    }
    (_, Some(pc)) => format!("execution stopped at {pc:#05X}"),
    (_, None) => "execution stopped".to_string(),
  }
}

fn main() -> Result<()> {
  let args = Args::parse();

  let level = if args.verbose { "debug" } else { "info" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

  let held = parse_keys(&args.keys)?;
  let mut vm = match args.seed {
    Some(seed) => Vm::with_rng(rng::from_seed(seed)),
    None => Vm::new(),
  };

  let rom =
    Chunk::open(&args.rom).with_context(|| format!("failed to open {}", args.rom.display()))?;
  vm.load(&rom)
    .with_context(|| format!("failed to load {}", args.rom.display()))?;
  info!("loaded {}", args.rom.display());

  let mut host = Headless::new(held, args.hz);
  let result = platform::run(&mut vm, &mut host, args.cycles);

  print!("{}", host.frame);
  match result {
    Ok(cycles) => {
      info!("stopped after {cycles} cycles");
      if args.dump {
        println!("{}", vm.dump());
      }
      Ok(())
    }
    Err(err) => {
      error!("{err}");
      eprintln!("{}", vm.dump());
      let context = stop_context(&err);
      Err(err).context(context)
    }
  }
}
