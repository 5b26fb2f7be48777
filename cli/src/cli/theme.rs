use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Seed colors given on the command line; missing ones come from the profile or config.
#[derive(Debug, Args)]
pub struct ColorPair {
    /// Primary seed color (#rrggbb)
    pub primary: Option<String>,

    /// Secondary seed color (#rrggbb)
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
    Css,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SuggestFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// Derive the full token set from two seed colors
    #[command(alias = "d")]
    Derive {
        #[command(flatten)]
        colors: ColorPair,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print the :root block of CSS custom properties
    Css {
        #[command(flatten)]
        colors: ColorPair,
    },

    /// Suggest harmonious colors from a seed color
    #[command(alias = "s")]
    Suggest {
        /// Seed color (defaults to the primary color)
        seed: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = SuggestFormat::Text)]
        format: SuggestFormat,
    },

    /// Compute the WCAG contrast ratio of two colors
    #[command(alias = "c")]
    Contrast {
        /// First color (#rrggbb)
        first: String,

        /// Second color (#rrggbb)
        second: String,

        /// Minimum ratio to pass (defaults to the configured threshold)
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Show the palette preview grouped into swatches
    #[command(alias = "p")]
    Palette {
        #[command(flatten)]
        colors: ColorPair,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a TOML or JSON profile and audit its derived contrast
    Check {
        /// Profile file to check (defaults to --profile)
        file: Option<PathBuf>,

        /// Show passing checks too
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a TOML profile holding the seed colors
    #[command(alias = "new")]
    Init {
        /// Where to write the profile
        #[arg(default_value = "folio.toml")]
        file: PathBuf,

        /// Primary seed color (#rrggbb)
        #[arg(long)]
        primary: Option<String>,

        /// Secondary seed color (#rrggbb)
        #[arg(long)]
        secondary: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
