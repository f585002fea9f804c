//! imbox demo - run all five plot variants over synthetic data
//!
//! Records the draw commands each variant emits and prints a JSON
//! summary per variant. With `--dump` the full command stream is
//! printed instead; `--seed N` changes the generated data.

use std::env;
use std::process::ExitCode;

use serde::Serialize;

use imbox_core::canvas::RecordingCanvas;
use imbox_core::style::{BoxColors, CompositeOptions};
use imbox_core::synthetic::demo_datasets;
use imbox_core::{banded_box, composite_box, hist_box, simple_box, styled_box};

#[derive(Serialize)]
struct VariantSummary {
    variant: &'static str,
    commands: usize,
    markers: usize,
    segments: usize,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let dump = args.iter().any(|a| a == "--dump");
    let seed = match parse_seed(&args) {
        Ok(seed) => seed,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(seed, dump) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("imbox-demo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_seed(args: &[String]) -> Result<u64, String> {
    match args.iter().position(|a| a == "--seed") {
        None => Ok(42),
        Some(i) => match args.get(i + 1) {
            None => Err("--seed requires a value".to_string()),
            Some(value) => value
                .parse()
                .map_err(|_| format!("invalid seed: {value}")),
        },
    }
}

fn run(seed: u64, dump: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = demo_datasets(seed);

    let variants: Vec<(&'static str, RecordingCanvas)> = vec![
        ("simple_box", {
            let mut canvas = RecordingCanvas::new();
            simple_box(&mut canvas, &data)?;
            canvas
        }),
        ("styled_box", {
            let mut canvas = RecordingCanvas::new();
            styled_box(&mut canvas, &data, &BoxColors::default())?;
            canvas
        }),
        ("banded_box", {
            let mut canvas = RecordingCanvas::new();
            banded_box(&mut canvas, &data, &BoxColors::default(), true)?;
            canvas
        }),
        ("hist_box", {
            let mut canvas = RecordingCanvas::new();
            hist_box(&mut canvas, &data, 10)?;
            canvas
        }),
        ("composite_box", {
            let mut canvas = RecordingCanvas::new();
            let opts = CompositeOptions::default()
                .with_labels(vec!["wide".into(), "shifted".into(), "sparse".into()])
                .with_rotation(30.0);
            composite_box(&mut canvas, &data, &opts)?;
            canvas
        }),
    ];

    for (variant, canvas) in &variants {
        if dump {
            let stream = serde_json::json!({
                "variant": variant,
                "commands": canvas.commands(),
            });
            println!("{}", serde_json::to_string_pretty(&stream)?);
        } else {
            let summary = VariantSummary {
                variant,
                commands: canvas.len(),
                markers: canvas.marker_count(),
                segments: canvas.segment_count(),
            };
            println!("{}", serde_json::to_string(&summary)?);
        }
    }

    Ok(())
}
