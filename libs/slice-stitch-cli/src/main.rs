//! Slice stitching driver.
//!
//! Loads a slice file, stitches the whole stack (or one adjacent pair) and
//! prints counts and areas.
//!
//! # Usage
//!
//! - `slice-stitch slices.txt` - Stitch every adjacent pair
//! - `slice-stitch slices.txt --pair 3` - Stitch only slices 3 and 4
//! - `slice-stitch slices.txt --parallel --json` - Parallel run, JSON summary
//!
//! Set `RUST_LOG=debug` for per-pair anchors.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use slice_loader::{load_slices_from_path, LoadOptions};
use slice_stitch::{
    Mesh, ProgressObserver, SelectionPolicy, Slice, StackStitch, StackSummary, StitchOptions,
    Stitcher, Triangle,
};

/// Minimum-area surface reconstruction from stacked contours
#[derive(Parser, Debug)]
#[command(name = "slice-stitch")]
#[command(about = "Stitch stacked contour slices into a triangle mesh", long_about = None)]
#[command(version)]
struct Cli {
    /// Slice file to load
    #[arg(name = "FILE")]
    file: PathBuf,

    /// Stitch only the pair (I, I+1), counted from the top slice
    #[arg(long, value_name = "I")]
    pair: Option<usize>,

    /// Stitch adjacent pairs in parallel
    #[arg(long)]
    parallel: bool,

    /// Recurrence tie-break: predecessor or candidate
    #[arg(long, default_value_t = SelectionPolicy::PredecessorCost)]
    policy: SelectionPolicy,

    /// Keep slices in file order instead of top first
    #[arg(long)]
    keep_file_order: bool,

    /// Print per-pair areas and the mesh bounds
    #[arg(short, long)]
    verbose: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

/// Logs how many pairs are left, once per finished pair.
struct LogProgress;

impl ProgressObserver for LogProgress {
    fn pair_stitched(&self, completed: usize, total: usize) {
        log::info!("{} left", total - completed);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let load_options = if cli.keep_file_order {
        LoadOptions::file_order()
    } else {
        LoadOptions::default()
    };
    let slices = load_slices_from_path(&cli.file, load_options)
        .with_context(|| format!("failed to load slices from {}", cli.file.display()))?;
    log::info!("read {} slices from {}", slices.len(), cli.file.display());

    let options = StitchOptions::default()
        .with_policy(cli.policy)
        .with_parallel(cli.parallel);
    let stitch = stitch(&Stitcher::new(options), &slices, cli.pair)?;

    report(cli, &stitch)
}

fn stitch(stitcher: &Stitcher, slices: &[Slice], pair: Option<usize>) -> Result<StackStitch> {
    match pair {
        Some(index) => {
            let tube = stitcher
                .stitch_pair_at(slices, index)
                .with_context(|| format!("failed to stitch pair {index}"))?;
            let summary = StackSummary {
                slices: 2,
                pairs: 1,
                triangles: tube.triangles.len(),
                total_area: tube.min_area,
                pair_areas: vec![tube.min_area],
            };
            Ok(StackStitch {
                triangles: tube.triangles,
                summary,
            })
        }
        None => stitcher
            .stitch_stack_observed(slices, &LogProgress, None)
            .context("failed to stitch slice stack"),
    }
}

fn report(cli: &Cli, stitch: &StackStitch) -> Result<()> {
    let summary = &stitch.summary;
    if cli.json {
        let json = serde_json::to_string_pretty(summary).context("failed to encode summary")?;
        println!("{json}");
        return Ok(());
    }

    println!("slices:     {}", summary.slices);
    println!("triangles:  {}", summary.triangles);
    println!("total area: {:.6}", summary.total_area);

    if cli.verbose {
        for (i, area) in summary.pair_areas.iter().enumerate() {
            let index = cli.pair.unwrap_or(i);
            println!("  pair {index:>5}: {area:.6}");
        }
        print_bounds(&stitch.triangles);
    }
    Ok(())
}

fn print_bounds(triangles: &[Triangle]) {
    let mesh = Mesh::from_triangles(triangles);
    if mesh.is_empty() {
        return;
    }
    let (min, max) = mesh.bounding_box();
    println!(
        "bounds:     ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
        min.x, min.y, min.z, max.x, max.y, max.z
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use slice_stitch::{StitchError, Vec3};

    fn square_stack(count: usize) -> Vec<Slice> {
        let square = [Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Y, Vec3::Y];
        (0..count)
            .map(|i| {
                let offset = Vec3::new(0.0, 0.0, -(i as f64));
                Slice::with_id(i, square.iter().map(|p| *p + offset)).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["slice-stitch", "slices.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("slices.txt"));
        assert_eq!(cli.pair, None);
        assert_eq!(cli.policy, SelectionPolicy::PredecessorCost);
        assert!(!cli.parallel && !cli.keep_file_order && !cli.json);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "slice-stitch",
            "slices.txt",
            "--pair",
            "2",
            "--policy",
            "candidate",
            "--parallel",
            "--keep-file-order",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.pair, Some(2));
        assert_eq!(cli.policy, SelectionPolicy::CandidateTotal);
        assert!(cli.parallel && cli.keep_file_order && cli.verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["slice-stitch", "f", "--policy", "greedy"]).is_err());
    }

    #[test]
    fn test_stitch_whole_stack() {
        let stitched = stitch(&Stitcher::default(), &square_stack(3), None).unwrap();
        assert_eq!(stitched.summary.pairs, 2);
        assert_eq!(stitched.triangles.len(), 16);
    }

    #[test]
    fn test_stitch_single_pair() {
        let stitched = stitch(&Stitcher::default(), &square_stack(4), Some(1)).unwrap();
        assert_eq!(stitched.summary.pairs, 1);
        assert_eq!(stitched.triangles.len(), 8);
        assert!(stitched
            .triangles
            .iter()
            .flat_map(|t| t.corners())
            .all(|c| c.slice == 1 || c.slice == 2));
    }

    #[test]
    fn test_stitch_pair_out_of_range_has_context() {
        let err = stitch(&Stitcher::default(), &square_stack(2), Some(1)).unwrap_err();
        assert!(err.to_string().contains("pair 1"));
        assert!(matches!(
            err.downcast_ref::<StitchError>(),
            Some(StitchError::PairOutOfRange { index: 1, pairs: 1 })
        ));
    }
}
