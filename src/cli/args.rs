//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::LocaleArg;

/// Names the color at the center of camera frames
#[derive(Parser, Debug)]
#[command(name = "color-namer")]
#[command(version, about = "Name the color at the center of a camera frame", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Language for color names (overrides the config file)
    #[arg(long, short, global = true)]
    pub locale: Option<LocaleArg>,

    /// Side of the sampled center window, odd (overrides the config file)
    #[arg(long, short, global = true)]
    pub window: Option<usize>,

    /// Resize frames to a square of this side before sampling, 0 keeps the
    /// frame size (overrides the config file)
    #[arg(long, global = true)]
    pub square: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze an image file (PNG/JPEG) or a raw NV21 frame (.nv21/.yuv)
    Analyze {
        /// Input file
        input: PathBuf,

        /// Frame width, required for raw NV21 input
        #[arg(long)]
        width: Option<u32>,

        /// Frame height, required for raw NV21 input
        #[arg(long)]
        height: Option<u32>,

        /// Write the annotated frame to this PNG file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Name an RGB color without going through a frame
    Classify {
        /// Red channel
        r: u8,
        /// Green channel
        g: u8,
        /// Blue channel
        b: u8,
    },
    /// Analyze raw NV21 frames read back to back from stdin
    Stream {
        /// Frame width
        #[arg(long)]
        width: u32,

        /// Frame height
        #[arg(long)]
        height: u32,
    },
    /// Feed synthetic solid-color frames around the hue circle through the
    /// camera path
    Sweep {
        /// Number of hues to visit
        #[arg(long, default_value = "12")]
        steps: u16,

        /// Side of the synthetic frames (even)
        #[arg(long, default_value = "64")]
        frame_size: u32,
    },
    /// List the color names for the selected language
    Names,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_classify_subcommand() {
        let args = Args::parse_from(["color-namer", "classify", "0", "255", "0"]);
        match args.command {
            Command::Classify { r, g, b } => assert_eq!((r, g, b), (0, 255, 0)),
            other => panic!("Expected Classify subcommand, got {:?}", other),
        }
        assert!(args.config.is_none());
        assert!(args.locale.is_none());
        assert!(args.window.is_none());
        assert!(args.square.is_none());
    }

    #[test]
    fn test_args_classify_rejects_out_of_range_channel() {
        let result = Args::try_parse_from(["color-namer", "classify", "256", "0", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_analyze_subcommand() {
        let args = Args::parse_from([
            "color-namer",
            "analyze",
            "frame.nv21",
            "--width",
            "640",
            "--height",
            "480",
            "-o",
            "out.png",
        ]);
        match args.command {
            Command::Analyze {
                input,
                width,
                height,
                output,
            } => {
                assert_eq!(input, PathBuf::from("frame.nv21"));
                assert_eq!(width, Some(640));
                assert_eq!(height, Some(480));
                assert_eq!(output, Some(PathBuf::from("out.png")));
            }
            other => panic!("Expected Analyze subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_args_global_options_after_subcommand() {
        let args = Args::parse_from([
            "color-namer",
            "names",
            "--locale",
            "fr",
            "--window",
            "9",
            "--square",
            "0",
            "-c",
            "/tmp/test.toml",
        ]);
        assert!(matches!(args.command, Command::Names));
        assert_eq!(args.locale, Some(LocaleArg::Fr));
        assert_eq!(args.window, Some(9));
        assert_eq!(args.square, Some(0));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_stream_requires_dimensions() {
        assert!(Args::try_parse_from(["color-namer", "stream"]).is_err());
        let args = Args::parse_from(["color-namer", "stream", "--width", "4", "--height", "2"]);
        assert!(matches!(
            args.command,
            Command::Stream {
                width: 4,
                height: 2
            }
        ));
    }

    #[test]
    fn test_args_sweep_defaults() {
        let args = Args::parse_from(["color-namer", "sweep"]);
        match args.command {
            Command::Sweep { steps, frame_size } => {
                assert_eq!(steps, 12);
                assert_eq!(frame_size, 64);
            }
            other => panic!("Expected Sweep subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_args_config_show_subcommand() {
        let args = Args::parse_from(["color-namer", "config", "show"]);
        match args.command {
            Command::Config {
                action: ConfigAction::Show,
            } => (),
            _ => panic!("Expected Config Show subcommand"),
        }
    }

    #[test]
    fn test_args_config_init_subcommand() {
        let args = Args::parse_from(["color-namer", "config", "init"]);
        match args.command {
            Command::Config {
                action: ConfigAction::Init,
            } => (),
            _ => panic!("Expected Config Init subcommand"),
        }
    }

    #[test]
    fn test_args_subcommand_is_required() {
        assert!(Args::try_parse_from(["color-namer"]).is_err());
    }
}
