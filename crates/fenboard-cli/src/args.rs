//! Command-line argument definitions for the fenboard CLI.

use clap::Parser;

/// Render a chess diagram block (FEN with annotations, or PGN) to SVG
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input block file
    #[arg(help = "Path to the input file (.fen block or .pgn game)")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Treat the input as a PGN block (implied by a `.pgn` extension)
    #[arg(long)]
    pub pgn: bool,

    /// Ply to display, overriding the block's `ply:` line
    #[arg(long)]
    pub ply: Option<usize>,

    /// Write one SVG per ply as `<stem>-<ply>.svg` next to the output path
    #[arg(long, conflicts_with = "ply")]
    pub all_plies: bool,
}

impl Args {
    /// Whether the input is a PGN block, by flag or by file extension.
    pub fn is_pgn(&self) -> bool {
        self.pgn
            || self.all_plies
            || std::path::Path::new(&self.input)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pgn"))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_pgn_detection() {
        let args = Args::parse_from(["fenboard", "game.PGN"]);
        assert!(args.is_pgn());
        assert_eq!(args.output, "out.svg");

        let args = Args::parse_from(["fenboard", "board.fen"]);
        assert!(!args.is_pgn());

        let args = Args::parse_from(["fenboard", "board.txt", "--pgn", "--ply", "4"]);
        assert!(args.is_pgn());
        assert_eq!(args.ply, Some(4));
    }

    #[test]
    fn test_all_plies_conflicts_with_ply() {
        assert!(Args::try_parse_from(["fenboard", "g.pgn", "--all-plies", "--ply", "2"]).is_err());
    }
}
