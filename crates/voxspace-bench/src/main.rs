use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use voxspace_bench::report;
use voxspace_bench::runner::BenchmarkRunner;
use voxspace_bench::scenes;
use voxspace_core::config::RenderConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut snapshot_dir: Option<PathBuf> = None;
    let mut regression_threshold = 10.0f64;
    let mut frame_count = 120u32;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i).cloned().unwrap_or_else(|| {
                eprintln!("Missing value for {}", flag);
                process::exit(1);
            })
        };
        match flag {
            "--baseline" => baseline_path = Some(PathBuf::from(value())),
            "--output" => output_path = Some(PathBuf::from(value())),
            "--config" => config_path = Some(PathBuf::from(value())),
            "--snapshot-dir" => snapshot_dir = Some(PathBuf::from(value())),
            "--regression-threshold" => {
                regression_threshold = value()
                    .parse()
                    .expect("invalid --regression-threshold value");
            }
            "--frames" => {
                frame_count = value().parse().expect("invalid --frames value");
            }
            "--help" | "-h" => {
                eprintln!("Usage: bench-runner [OPTIONS]");
                eprintln!("  --baseline <path>              Load baseline JSON for comparison");
                eprintln!("  --output <path>                Save current results as JSON baseline");
                eprintln!("  --config <path>                Render config RON (default: built-in)");
                eprintln!("  --snapshot-dir <dir>           Write each scene's last frame as PPM");
                eprintln!(
                    "  --regression-threshold <pct>   Regression threshold percentage (default: 10)"
                );
                eprintln!("  --frames <n>                   Frames per scene (default: 120)");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let base_config = match config_path {
        Some(ref path) => {
            let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {e}", path.display());
                process::exit(1);
            });
            RenderConfig::from_ron(&contents).unwrap_or_else(|e| {
                eprintln!("Invalid render config {}: {e}", path.display());
                process::exit(1);
            })
        }
        None => RenderConfig::from_ron(include_str!("../../../data/render.ron"))
            .expect("built-in render config is valid"),
    };

    let runner = BenchmarkRunner::new(frame_count, base_config);

    let mut results = Vec::new();
    for scene in &scenes::standard_scenes() {
        let run = runner.run_scene(scene).unwrap_or_else(|e| {
            log::error!("Scene '{}' failed: {e}", scene.name);
            process::exit(1);
        });

        if let Some(ref dir) = snapshot_dir {
            let path = dir.join(format!("{}.ppm", scene.name));
            let written = std::fs::create_dir_all(dir)
                .and_then(|_| File::create(&path))
                .and_then(|file| run.last_frame.write_ppm(BufWriter::new(file)));
            match written {
                Ok(()) => log::info!("Wrote snapshot {}", path.display()),
                Err(e) => log::warn!("Failed to write snapshot {}: {e}", path.display()),
            }
        }

        results.push(run.result);
    }

    // Print markdown summary
    println!("\n## Benchmark Results\n");
    println!("{}", report::format_markdown(&results));

    // Save output baseline
    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            timestamp: timestamp(),
            results: results.clone(),
        };
        report::save_baseline(path, &baseline).expect("failed to save baseline");
        log::info!("Saved baseline to {}", path.display());
    }

    // Compare against baseline
    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let regressions = report::compare(&results, &baseline, regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Benchmark complete.");
}

/// Seconds since the Unix epoch, tagged for baseline files.
fn timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("bench-{secs}")
}
