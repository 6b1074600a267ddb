//! CLI logic for the fenboard diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use fenboard::{DiagramBuilder, FenboardError, export};

/// Run the fenboard CLI application
///
/// Reads the input block, renders it with the loaded configuration and
/// writes the SVG output. With `--all-plies` one file per ply is written
/// instead.
///
/// # Errors
///
/// Returns `FenboardError` for I/O, configuration, parse, position and
/// export errors.
pub fn run(args: &Args) -> Result<(), FenboardError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        pgn = args.is_pgn();
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.input)?;
    let builder = DiagramBuilder::new(app_config);
    let output = Path::new(&args.output);

    if args.all_plies {
        let documents = builder.render_pgn_plies(&source)?;
        for (ply, svg) in documents.iter().enumerate() {
            export::write_svg(&export::ply_output_path(output, ply)?, svg)?;
        }
        info!(files = documents.len(); "SVG files exported successfully");
        return Ok(());
    }

    let svg = if args.is_pgn() {
        builder.render_pgn_block(&source, args.ply)?
    } else {
        builder.render_block(&source)?
    };
    export::write_svg(output, &svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
