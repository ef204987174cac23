use raidplan::{ExportOptions, MechanicData, TimelineIndex, export_frames};
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

fn load_mechanic(path: &PathBuf) -> MechanicData {
    let json = std::fs::read_to_string(path).expect("read mechanic json");
    MechanicData::from_json_str(&json).expect("parse mechanic json")
}

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut positional = Vec::<String>::new();
    let mut range: Option<(u32, u32)> = None;
    let mut workers: Option<usize> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--range" => {
                let start = args.get(i + 1).and_then(|s| s.parse().ok());
                let end = args.get(i + 2).and_then(|s| s.parse().ok());
                range = start.zip(end);
                i += 3;
            }
            "--workers" => {
                workers = args.get(i + 1).and_then(|s| s.parse().ok());
                i += 2;
            }
            other => {
                positional.push(other.to_string());
                i += 1;
            }
        }
    }

    let Some(path) = positional.first().map(PathBuf::from) else {
        eprintln!("usage: frame_dump <mechanic.json> [frame] [--range START END] [--workers N]");
        std::process::exit(2);
    };
    let mechanic = load_mechanic(&path);

    if let Some((start, end)) = range {
        let mut options = ExportOptions::new(start, end);
        if let Some(workers) = workers {
            options = options.with_workers(workers);
        }
        let snapshots =
            export_frames(&mechanic, options, &AtomicBool::new(false)).expect("export frames");
        let frames: Vec<_> = snapshots
            .iter()
            .map(|s| s.to_json_value().expect("snapshot json"))
            .collect();
        let out = json!({
            "mechanic": mechanic.name,
            "fps": mechanic.fps,
            "frames": frames,
        });
        println!("{}", serde_json::to_string_pretty(&out).expect("json"));
        return;
    }

    let frame: u32 = positional
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let index = TimelineIndex::new(&mechanic);
    let snapshot = index.resolve(frame);
    let out = json!({
        "mechanic": mechanic.name,
        "fps": mechanic.fps,
        "snapshot": snapshot.to_json_value().expect("snapshot json"),
    });
    println!("{}", serde_json::to_string_pretty(&out).expect("json"));
}
