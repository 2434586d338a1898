//! Demonstrates a complete fill run: JSON event store -> pipeline -> histogram

use evflow_pipeline::{fill, FillConfig};
use evflow_source::EventStore;

fn main() {
    let store = EventStore::from_str(
        r#"{
            "Events": {
                "e":  [[150.0, 50.0], [200.0], [110.0, 140.0, 90.0], []],
                "px": [[3.0, 1.0],    [0.0],   [0.9, 1.8, 4.0],      []],
                "py": [[4.0, 1.0],    [0.0],   [1.2, 0.6, 4.0],      []]
            }
        }"#,
    )
    .unwrap();

    let mut source = store.table("Events").unwrap();
    let (pipeline, mut histogram) = FillConfig::default().build().unwrap();

    let summary = fill(&mut source, &pipeline, &mut histogram).unwrap();

    println!(
        "{} events, {}/{} candidates selected",
        summary.events, summary.selected, summary.candidates
    );
    println!("{}", summary.snapshot);
    for bin in summary.snapshot.bins().iter().filter(|b| b.count > 0) {
        println!("  {bin}");
    }
    if summary.snapshot.overflow() > 0 {
        println!("  overflow: {}", summary.snapshot.overflow());
    }
    if summary.snapshot.underflow() > 0 {
        println!("  underflow: {}", summary.snapshot.underflow());
    }
}
