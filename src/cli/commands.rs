//! Subcommand handlers.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use color_namer::analyzer::{Analyzer, AnalysisWorker, AnalyzerSettings, ColorReport, FrameSink, TextSink};
use color_namer::camera::{nv21_len, solid_frame, split_nv21};
use color_namer::color::{Color, Locale, NameTable};
use color_namer::config::{default_path, Config, DEFAULT_CONFIG};
use color_namer::rgb::RgbBuffer;
use color_namer::sampler::WindowSize;

use super::args::Args;
use super::error::CliError;

/// Settings shared by every subcommand: config file merged with CLI flags.
#[derive(Debug)]
pub struct Context {
    pub config_path: PathBuf,
    pub locale: Locale,
    pub settings: AnalyzerSettings,
    pub names: NameTable,
}

impl Context {
    /// Resolve settings with precedence CLI flag > config file > default.
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let config = match &args.config {
            Some(path) => Config::load_from_explicit(path)?,
            None => Config::load(None)?,
        };

        let mut settings = config.analyzer_settings()?;
        if let Some(window) = args.window {
            settings.window = WindowSize::new(window).ok_or_else(|| {
                CliError::Usage(format!("--window must be an odd number >= 1, got {}", window))
            })?;
        }
        if let Some(square) = args.square {
            settings.square_size = (square > 0).then_some(square);
        }

        let locale = args.locale.map(Locale::from).unwrap_or(config.locale.language);
        let names = config.name_table(locale)?;

        Ok(Self {
            config_path: args.config.clone().unwrap_or_else(default_path),
            locale,
            settings,
            names,
        })
    }
}

/// Analyze one image or raw NV21 file and print the report.
pub fn analyze(
    ctx: &Context,
    input: &Path,
    width: Option<u32>,
    height: Option<u32>,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let mut analyzer = Analyzer::new(ctx.settings);

    let report = if is_raw_nv21(input) {
        let (width, height) = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            _ => {
                return Err(CliError::Usage(
                    "--width and --height are required for raw NV21 input".to_string(),
                ))
            }
        };
        let bytes = std::fs::read(input)?;
        let frame = split_nv21(width, height, &bytes)?;
        analyzer.analyze(&frame)?
    } else {
        let image = image::open(input)
            .map_err(|e| CliError::ImageRead {
                path: input.to_path_buf(),
                source: e,
            })?
            .to_rgb8();
        analyzer.analyze_rgb(&RgbBuffer::from_image(&image))?
    };

    let mut sink = TextSink::new(io::stdout(), ctx.names.clone());
    sink.display_report(&report);

    if let Some(path) = output {
        save_frame(analyzer.frame(), path)?;
        log::info!("Wrote annotated frame to {}", path.display());
    }
    Ok(())
}

fn is_raw_nv21(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("nv21") || e.eq_ignore_ascii_case("yuv"))
}

fn save_frame(frame: &RgbBuffer, path: &Path) -> Result<(), CliError> {
    let image = frame
        .to_image()
        .ok_or_else(|| CliError::Usage("No frame to write".to_string()))?;
    image.save(path).map_err(|e| CliError::ImageWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Name a color given directly as RGB.
pub fn classify(ctx: &Context, r: u8, g: u8, b: u8) {
    let report = ColorReport::new(Color::new(r, g, b));
    println!("{}", report.describe(&ctx.names));
}

/// Analyze back-to-back NV21 frames from stdin until EOF or Ctrl+C.
///
/// Frames that arrive while one is being analyzed replace each other, so
/// only the newest is analyzed once the worker frees up.
pub fn stream(ctx: &Context, width: u32, height: u32) -> Result<(), CliError> {
    let frame_len = nv21_len(width, height);
    if frame_len == 0 {
        return Err(CliError::Usage("Frame width and height must be greater than 0".to_string()));
    }

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    ctrlc::set_handler(move || {
        handler_flag.store(false, Ordering::SeqCst);
        eprintln!("\nReceived Ctrl+C, shutting down...");
    })?;

    let sink = TextSink::new(io::stdout(), ctx.names.clone());
    let mut worker = AnalysisWorker::spawn(Analyzer::new(ctx.settings), sink);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut buf = vec![0u8; frame_len];
    let mut read = 0u64;

    while running.load(Ordering::SeqCst) {
        match reader.read_exact(&mut buf) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                log::debug!("End of input after {} frame(s)", read);
                break;
            }
            Err(e) => return Err(e.into()),
        }
        read += 1;
        let frame = split_nv21(width, height, &buf)?;
        worker.submit(frame);
    }

    if running.load(Ordering::SeqCst) {
        worker.wait_idle();
    }
    let stats = worker.stop();
    eprintln!(
        "Read {} frame(s): analyzed {}, rejected {}, dropped {}",
        read, stats.analyzed, stats.rejected, stats.dropped
    );
    Ok(())
}

/// Run solid frames around the hue circle, then black, gray and white,
/// through the full camera path.
pub fn sweep(ctx: &Context, steps: u16, frame_size: u32) -> Result<(), CliError> {
    if steps == 0 {
        return Err(CliError::Usage("--steps must be at least 1".to_string()));
    }

    let hues = (0..steps).map(|i| hue_to_rgb((u32::from(i) * 360 / u32::from(steps)) as u16));
    let achromatic = [[0, 0, 0], [128, 128, 128], [255, 255, 255]];

    let sink = TextSink::new(io::stdout(), ctx.names.clone());
    let mut worker = AnalysisWorker::spawn(Analyzer::new(ctx.settings), sink);

    for rgb in hues.chain(achromatic) {
        let frame = solid_frame(frame_size, frame_size, rgb)?;
        print!("{}  ", Color::from(rgb));
        io::stdout().flush()?;
        worker.submit(frame);
        worker.wait_idle();
    }

    let stats = worker.stop();
    log::info!("Sweep done: {} analyzed, {} rejected", stats.analyzed, stats.rejected);
    Ok(())
}

/// Fully saturated, full value color for a hue in degrees.
fn hue_to_rgb(hue: u16) -> [u8; 3] {
    let hue = hue % 360;
    let rising = (u32::from(hue % 60) * 255 / 60) as u8;
    let falling = 255 - rising;
    match hue / 60 {
        0 => [255, rising, 0],
        1 => [falling, 255, 0],
        2 => [0, 255, rising],
        3 => [0, falling, 255],
        4 => [rising, 0, 255],
        _ => [255, 0, falling],
    }
}

/// Print every color category with its name in the selected language.
pub fn list_names(ctx: &Context) {
    println!("Color names ({}):", ctx.locale);
    for (name, label) in ctx.names.entries() {
        println!("  {:<8} {}", name.key(), label);
    }
}

/// Print the effective configuration.
pub fn show_config(ctx: &Context) {
    println!("Current configuration:");
    println!("  Window: {}px", ctx.settings.window);
    match ctx.settings.square_size {
        Some(side) => println!("  Resize: {}x{}", side, side),
        None => println!("  Resize: off"),
    }
    println!("  Language: {}", ctx.locale.code());
    println!();

    if ctx.config_path.exists() {
        println!("Config file: {} (exists)", ctx.config_path.display());
    } else {
        println!("Config file: {} (not found)", ctx.config_path.display());
    }
}

/// Write the default config file. Refuses to overwrite an existing one.
pub fn init_config(path: Option<&Path>) -> Result<(), CliError> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_path);

    if config_path.exists() {
        return Err(CliError::Usage(format!(
            "Config file already exists: {}\nUse 'color-namer config show' to view current settings.",
            config_path.display()
        )));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&config_path, DEFAULT_CONFIG)?;

    println!("Created config file: {}", config_path.display());
    Ok(())
}
