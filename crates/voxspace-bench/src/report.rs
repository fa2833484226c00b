use std::path::Path;

use crate::runner::BenchmarkResult;

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub timestamp: String,
    pub results: Vec<BenchmarkResult>,
}

/// Load a baseline from a JSON file. Returns None if the file doesn't exist
/// or can't be parsed.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(baseline) => Some(baseline),
        Err(e) => {
            log::warn!("Ignoring unreadable baseline {}: {e}", path.display());
            None
        }
    }
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Compare current results against a baseline. Returns a list of regressions
/// (scene name, percent change) where the mean frame time grew past the threshold.
pub fn compare(
    current: &[BenchmarkResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<(String, f64)> {
    let mut regressions = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name)
        else {
            continue;
        };
        if base.timings.mean_ms <= 0.0 {
            continue;
        }
        let pct_change =
            (result.timings.mean_ms - base.timings.mean_ms) / base.timings.mean_ms * 100.0;
        if pct_change > threshold_pct {
            regressions.push((result.scene_name.clone(), pct_change));
        }
    }

    regressions
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Resolution | Frames | Pixels/frame | Clamps | Mean (ms) | Median (ms) | P95 (ms) | P99 (ms) | Min (ms) | Max (ms) |\n");
    out.push_str("|-------|------------|--------|--------------|--------|-----------|-------------|----------|----------|----------|----------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {}x{} | {} | {:.0} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |\n",
            r.scene_name,
            r.resolution.0,
            r.resolution.1,
            r.frame_count,
            r.mean_pixels,
            r.ground_clamps,
            r.timings.mean_ms,
            r.timings.median_ms,
            r.timings.p95_ms,
            r.timings.p99_ms,
            r.timings.min_ms,
            r.timings.max_ms,
        ));
    }

    out
}

/// Format a comparison report showing regressions.
pub fn format_comparison(regressions: &[(String, f64)], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "All scenes within {:.0}% threshold. No regressions detected.\n",
            threshold_pct
        );
    }

    let mut out = String::new();
    out.push_str(&format!(
        "REGRESSIONS DETECTED (>{:.0}% threshold):\n",
        threshold_pct
    ));
    for (scene, pct) in regressions {
        out.push_str(&format!("  - {}: +{:.1}%\n", scene, pct));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::compute_timings;

    fn result(name: &str, frame_ms: f64) -> BenchmarkResult {
        BenchmarkResult {
            scene_name: name.to_string(),
            resolution: (320, 240),
            frame_count: 2,
            mean_pixels: 1000.0,
            ground_clamps: 0,
            timings: compute_timings(&[frame_ms, frame_ms]),
        }
    }

    #[test]
    fn test_compare_flags_regressions_only() {
        let baseline = Baseline {
            timestamp: "t0".into(),
            results: vec![result("a", 10.0), result("b", 10.0)],
        };
        let current = vec![result("a", 10.5), result("b", 12.0), result("new", 50.0)];
        let regressions = compare(&current, &baseline, 10.0);
        assert_eq!(regressions.len(), 1);
        assert_eq!(regressions[0].0, "b");
        assert!((regressions[0].1 - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_json_roundtrip_on_disk() {
        let dir = std::env::temp_dir().join(format!("voxspace-bench-{}", std::process::id()));
        let path = dir.join("baseline.json");
        let baseline = Baseline {
            timestamp: "t1".into(),
            results: vec![result("a", 4.0)],
        };
        save_baseline(&path, &baseline).unwrap();
        let loaded = load_baseline(&path).unwrap();
        assert_eq!(loaded.results.len(), 1);
        assert_eq!(loaded.results[0].scene_name, "a");
        assert_eq!(loaded.results[0].resolution, (320, 240));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_baseline() {
        assert!(load_baseline(Path::new("/nonexistent/voxspace/baseline.json")).is_none());
    }

    #[test]
    fn test_format_markdown_rows() {
        let table = format_markdown(&[result("a", 4.0), result("b", 5.0)]);
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("| a | 320x240 | 2 | 1000 | 0 | 4.00 |"));
    }

    #[test]
    fn test_format_comparison() {
        assert!(format_comparison(&[], 10.0).starts_with("All scenes within 10%"));
        let text = format_comparison(&[("b".to_string(), 20.0)], 10.0);
        assert!(text.contains("  - b: +20.0%"));
    }
}
