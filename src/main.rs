use std::{env, error::Error, fs};

use bounce_track::{Detection, EuclideanTracker, ScoreDetector, TrackerConfig};
use log::info;

/// Frames of `[x, y, w, h]` boxes: a ball shrinking towards the wall, then
/// growing again after the bounce, next to a second ball moving sideways.
fn demo_frames() -> Vec<Vec<[f64; 4]>> {
    vec![
        vec![[300.0, 200.0, 40.0, 40.0], [40.0, 60.0, 30.0, 30.0]],
        vec![[305.0, 190.0, 30.0, 30.0], [80.0, 60.0, 30.0, 30.0]],
        vec![[310.0, 185.0, 25.0, 25.0], [120.0, 60.0, 30.0, 30.0]],
        vec![[312.0, 188.0, 32.0, 32.0], [160.0, 60.0, 30.0, 30.0]],
        vec![[315.0, 195.0, 45.0, 45.0]],
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let frames: Vec<Vec<[f64; 4]>> = match args.next() {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => demo_frames(),
    };
    let config: TrackerConfig = match args.next() {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => TrackerConfig::default(),
    };

    let mut tracker = EuclideanTracker::with_config(config)?;
    let mut score_detector = ScoreDetector::new();

    for (index, frame) in frames.into_iter().enumerate() {
        let detections: Vec<Detection> = frame.into_iter().map(Detection::from).collect();
        let tracked = tracker.update(&detections);
        let records = score_detector.observe(&tracked);
        println!(
            "frame {index}: tracked {}, scored {}",
            serde_json::to_string(&tracked)?,
            serde_json::to_string(records)?
        );
    }
    info!("final score {}", score_detector.score());
    println!("score {}", score_detector.score());

    Ok(())
}
