// xcompressor
// Copyright (c) 2026 The xcompressor Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

//! Thin command-line front-end over `xcompressor-core`: reads a file or stdin, runs the
//! multi-layer codec, and writes the result to a file or stdout.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info};

use xcompressor_core::{multi_compress, multi_decompress, Error, LayerOptions, Result};

/// Lossless byte-stream compressor: order-1 context-adaptive MTF ranking over an adaptive
/// Golomb-Rice entropy coder.
///
/// Invoked as `x`, the default mode is compress. Invoked as `unx`, the default mode is
/// decompress. `-z`/`-d` override the default for either invocation name.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Force compress mode, regardless of invocation name.
    #[arg(short = 'z', conflicts_with = "decompress")]
    compress: bool,

    /// Force decompress mode, regardless of invocation name.
    #[arg(short = 'd')]
    decompress: bool,

    /// Allow overwriting an existing output file.
    #[arg(short = 'f')]
    force: bool,

    /// Store-only: no codec layers are applied (layers = 0).
    #[arg(short = '0', conflicts_with_all = ["single_layer", "max_layers"])]
    store_only: bool,

    /// Single-layer (default): apply the codec exactly once.
    #[arg(short = '1', conflicts_with = "max_layers")]
    single_layer: bool,

    /// Up to 255 layers: keep re-encoding while it keeps paying off.
    #[arg(short = '9')]
    max_layers: bool,

    /// Retain the input file. Nominal: the core never deletes its input regardless of this flag.
    #[arg(short = 'k')]
    keep: bool,

    /// Increase log verbosity. Repeatable.
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Input path, output path, both, or neither (stdin/stdout).
    #[arg(value_name = "PATH", num_args = 0..=2)]
    paths: Vec<PathBuf>,
}

enum Mode {
    Compress,
    Decompress,
}

fn mode_from_invocation_name() -> Mode {
    let argv0 = std::env::args().next().unwrap_or_default();
    let stem = Path::new(&argv0).file_stem().and_then(|s| s.to_str()).unwrap_or("x");
    if stem.contains("unx") {
        Mode::Decompress
    }
    else {
        Mode::Compress
    }
}

fn resolve_mode(cli: &Cli) -> Mode {
    if cli.decompress {
        Mode::Decompress
    }
    else if cli.compress {
        Mode::Compress
    }
    else {
        mode_from_invocation_name()
    }
}

fn resolve_layer_options(cli: &Cli) -> LayerOptions {
    if cli.store_only {
        LayerOptions::store_only()
    }
    else if cli.max_layers {
        LayerOptions::max()
    }
    else {
        // `-1`, or no layer flag at all: single-layer is the CLI's own default.
        LayerOptions::default()
    }
}

/// Derives the default output path for a one-positional-argument invocation.
fn derive_output_path(input: &Path, mode: &Mode) -> PathBuf {
    match mode {
        Mode::Compress => {
            let mut out = input.as_os_str().to_owned();
            out.push(".x");
            PathBuf::from(out)
        }
        Mode::Decompress => match input.extension() {
            Some(ext) if ext == "x" => input.with_extension(""),
            _ => {
                let mut out = input.as_os_str().to_owned();
                out.push(".out");
                PathBuf::from(out)
            }
        },
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    }
    else {
        Ok(std::fs::read(path)?)
    }
}

/// Writes `data` to `path`, or to stdout if `path` is `-`.
///
/// For a real file, the bytes land in a sibling temporary file first and are only renamed into
/// place once fully written, so a failure partway through never leaves a partial file at `path`
/// that a decoder would later accept.
fn write_output(path: &Path, data: &[u8], force: bool) -> Result<()> {
    if path == Path::new("-") {
        io::stdout().write_all(data)?;
        return Ok(());
    }

    if !force && path.exists() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists (use -f to overwrite)", path.display()),
        )));
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".xtmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, data)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let mode = resolve_mode(cli);
    let opts = resolve_layer_options(cli);

    let (input_path, output_path) = match cli.paths.as_slice() {
        [] => (PathBuf::from("-"), PathBuf::from("-")),
        [input] => {
            let output = derive_output_path(input, &mode);
            (input.clone(), output)
        }
        [input, output] => (input.clone(), output.clone()),
        _ => unreachable!("clap enforces num_args = 0..=2"),
    };

    let input = read_input(&input_path)?;
    info!("read {} byte(s) from {}", input.len(), input_path.display());
    if !cli.keep {
        // Nominal: the core never removes its input file regardless of this flag.
        log::trace!("-k not given; no effect, the input file is never deleted");
    }

    let output = match mode {
        Mode::Compress => multi_compress(&input, &opts),
        Mode::Decompress => multi_decompress(&input)?,
    };

    write_output(&output_path, &output, cli.force)?;
    info!("wrote {} byte(s) to {}", output.len(), output_path.display());

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if std::env::var_os("RUST_LOG").is_none() {
        let default_level = match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        std::env::set_var("RUST_LOG", default_level);
    }
    pretty_env_logger::init();

    if let Err(err) = run(&cli) {
        error!("{}", err);
        std::process::exit(1);
    }
}
