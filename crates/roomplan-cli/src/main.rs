//! roomplan-cli - Headless Scene Runner
//!
//! Loads a scene description (footprint regions, rooms, adjacencies) from a
//! JSON file, runs the placement search, and prints the resulting layout and
//! statistics. No networking, no rendering.
//!
//! Usage:
//!   cargo run -p roomplan-cli -- data/duplex.json
//!   cargo run -p roomplan-cli -- data/duplex.json --seed 42 --json

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use roomplan_core::prelude::*;

/// An exhausted search; retrying with more attempts may still succeed.
const EXIT_PLACEMENT_FAILED: i32 = 1;
/// A malformed scene file or room definition.
const EXIT_CONFIG: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "roomplan-cli", version, about = "Lay out rooms inside a floor footprint")]
struct Cli {
    /// Scene description file (JSON).
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Override the scene's attempt budget.
    #[arg(long, value_name = "N")]
    attempts: Option<u32>,

    /// Seed for the random source; omit for a fresh entropy seed.
    #[arg(long, value_name = "S")]
    seed: Option<u64>,

    /// Skip the post-placement expansion pass.
    #[arg(long)]
    no_expansion: bool,

    /// Emit the layout, statistics, and report as one JSON document.
    #[arg(long)]
    json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    verbose: bool,
}

// ── Scene file ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Scene {
    regions: Vec<Region>,
    #[serde(default)]
    rooms: Vec<SceneRoom>,
    #[serde(default)]
    adjacencies: Vec<(String, String)>,
    max_attempts: Option<u32>,
    enable_expansion: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct SceneRoom {
    name: String,
    width: i32,
    height: i32,
    #[serde(default = "default_max_expansion")]
    max_expansion: i32,
}

fn default_max_expansion() -> i32 {
    Room::DEFAULT_MAX_EXPANSION
}

// The crate prelude glob pulls in roomplan-core's one-parameter `Result`
// alias, so the std form is spelled out here.
fn load_scene(path: &Path) -> std::result::Result<Scene, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("cannot parse {}: {}", path.display(), e))
}

/// Build the plan from the scene. Unknown adjacency endpoints are logged at
/// warn level and skipped; bad regions or rooms are hard errors.
fn build_plan(scene: &Scene) -> roomplan_core::Result<FloorPlan> {
    let mut plan = FloorPlan::new(scene.regions.clone())?;
    for room in &scene.rooms {
        plan.add_room(&room.name, room.width, room.height, room.max_expansion)?;
    }
    for (a, b) in &scene.adjacencies {
        if !plan.add_adjacency(a, b) {
            warn!("adjacency {} - {} skipped (unknown room or duplicate pair)", a, b);
        }
    }
    Ok(plan)
}

// ── Entry point ─────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Logging goes to stderr unless --json; --verbose enables debug;
    // RUST_LOG overrides.
    if !cli.json {
        let level = if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("roomplan_cli", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    let scene = match load_scene(&cli.scene) {
        Ok(scene) => scene,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(EXIT_CONFIG);
        }
    };
    let mut plan = match build_plan(&scene) {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("invalid scene: {}", err);
            process::exit(EXIT_CONFIG);
        }
    };

    // CLI flags win over scene values.
    let options = PlaceOptions {
        max_attempts: cli
            .attempts
            .or(scene.max_attempts)
            .unwrap_or(PlaceOptions::default().max_attempts),
        enable_expansion: !cli.no_expansion && scene.enable_expansion.unwrap_or(true),
        ..Default::default()
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match place_rooms(&mut plan, &options, &mut rng) {
        Ok(report) => {
            if cli.json {
                print_json(&plan, &report);
            } else {
                print_human(&plan, &report);
            }
        }
        Err(err @ Error::PlacementFailed { .. }) => {
            eprintln!("{}", err);
            process::exit(EXIT_PLACEMENT_FAILED);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(EXIT_CONFIG);
        }
    }
}

// ── Output ──────────────────────────────────────────────────────────────

fn print_human(plan: &FloorPlan, report: &PlacementReport) {
    println!("=== Layout ===");
    for room in plan.rooms() {
        if let Some((x, y)) = room.position() {
            println!(
                "  {:<12} {}x{} at ({}, {}){}",
                room.name(),
                room.width(),
                room.height(),
                x,
                y,
                if room.rotated() { "  [rotated]" } else { "" }
            );
        }
    }

    println!("\n=== Adjacencies ({}/{}) ===", report.score, report.total_edges);
    for (a, b) in &report.satisfied {
        println!("  {} - {}", a, b);
    }

    let stats = statistics(plan);
    println!("\n=== Statistics ===");
    println!("  attempts used: {}", report.attempts_used);
    println!(
        "  floor area:    {} ({} used, {}% utilization)",
        stats.total_area, stats.used_area, stats.utilization_pct
    );
    for room in &stats.rooms {
        println!(
            "  {:<12} {} -> {}  expansion {} (+{}% area)",
            room.name, room.original_size, room.current_size, room.expansion_summary,
            room.expansion_pct
        );
    }
}

fn print_json(plan: &FloorPlan, report: &PlacementReport) {
    let doc = serde_json::json!({
        "report": report,
        "snapshot": plan.snapshot(),
        "statistics": statistics(plan),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&doc).expect("serialize result document")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_scenes_parse_and_build() {
        for text in [
            include_str!("../data/duplex.json"),
            include_str!("../data/studio.json"),
        ] {
            let scene: Scene = serde_json::from_str(text).unwrap();
            let plan = build_plan(&scene).unwrap();
            assert!(!plan.rooms().is_empty());
        }
    }

    #[test]
    fn test_load_scene_reads_files_and_reports_errors() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/duplex.json");
        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.regions.len(), 2);
        assert_eq!(scene.rooms.len(), 3);

        let err = load_scene(Path::new("no/such/scene.json")).unwrap_err();
        assert!(err.contains("cannot read"), "got: {}", err);
    }

    #[test]
    fn test_missing_budget_falls_back_to_default() {
        let scene: Scene = serde_json::from_str(
            r#"{
                "regions": [{ "x": 0, "y": 0, "width": 6, "height": 6 }],
                "rooms": [{ "name": "den", "width": 2, "height": 2 }]
            }"#,
        )
        .unwrap();
        assert_eq!(scene.rooms[0].max_expansion, Room::DEFAULT_MAX_EXPANSION);
        let plan = build_plan(&scene).unwrap();
        assert_eq!(plan.room("den").unwrap().max_expansion(), 20);
    }

    #[test]
    fn test_unknown_adjacency_is_skipped_not_fatal() {
        let scene: Scene = serde_json::from_str(
            r#"{
                "regions": [{ "x": 0, "y": 0, "width": 6, "height": 6 }],
                "rooms": [{ "name": "den", "width": 2, "height": 2 }],
                "adjacencies": [["den", "garage"]]
            }"#,
        )
        .unwrap();
        let plan = build_plan(&scene).unwrap();
        assert_eq!(plan.adjacency().edge_count(), 0);
    }
}
