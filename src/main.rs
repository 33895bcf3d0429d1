//! Simulated pager session that prints one JSON line per drawn frame.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pager_dots::{
    Density, DotsIndicator, DrawCommand, IndicatorView, Options,
    PagerIndicator, Size,
};
use serde::Serialize;
use web_time::{Duration, Instant};

/// Drive a dots indicator through a list of page selections.
#[derive(Parser, Debug)]
#[command(name = "pager-dots", version, about)]
struct Args {
    /// TOML options file; defaults are used when omitted.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Display scale factor (1.0 = 160 dpi).
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
    /// Number of pages.
    #[arg(long, default_value_t = 5)]
    dots: usize,
    /// Page to select; repeat for a sequence. Negative clears the selection.
    #[arg(long = "select", value_name = "INDEX", allow_negative_numbers = true)]
    selections: Vec<i32>,
    /// Simulated frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Force animated transitions on.
    #[arg(long)]
    animated: bool,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    elapsed_ms: f64,
    size: [f32; 2],
    commands: &'a [DrawCommand],
}

struct Session<W: Write> {
    indicator: DotsIndicator,
    out: W,
    origin: Instant,
    frame: u64,
    size: Size,
}

impl<W: Write> Session<W> {
    fn emit(&mut self, now: Instant) -> Result<()> {
        if self.indicator.take_layout_request() {
            self.size = self.indicator.measure();
            log::info!("measured {} x {}", self.size.width, self.size.height);
        }
        let commands = self.indicator.draw();
        let record = FrameRecord {
            frame: self.frame,
            elapsed_ms: now.duration_since(self.origin).as_secs_f64() * 1000.0,
            size: [self.size.width, self.size.height],
            commands: &commands,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)?;
        self.frame += 1;
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = match &args.options {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Options::default(),
    };
    let mut indicator =
        DotsIndicator::from_options(&options, Density::from_scale(args.scale))?;
    if args.animated {
        let _ = indicator.set_dots_animated(true);
    }
    indicator.set_dot_count(args.dots);

    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
    let origin = Instant::now();
    let mut now = origin;
    let mut session = Session {
        indicator,
        out: BufWriter::new(io::stdout().lock()),
        origin,
        frame: 0,
        size: Size::default(),
    };
    session.emit(now)?;

    for &index in &args.selections {
        session.indicator.set_current_position_at(index, now);
        loop {
            let running = session.indicator.on_frame(now);
            if session.indicator.take_redraw_request() {
                session.emit(now)?;
            }
            if !running {
                break;
            }
            now += frame;
        }
        now += frame;
    }

    session.out.flush()?;
    log::info!("emitted {} frame(s)", session.frame);
    Ok(())
}
