use serde_json::to_string_pretty;

use cutaway_switcher::{generate, CutEntry, CutList, Pose, ScheduleConfig, Switcher};
use cutaway_test_fixtures::MockScene;

fn main() -> anyhow::Result<()> {
    let mut scene = MockScene::new()
        .with_camera("Wide", Pose::at(0.0, -12.0, 4.0))
        .with_camera("CloseUp", Pose::new([2.0, -1.5, 1.8], [1.2, 0.0, 0.3]))
        .with_camera("Overhead", Pose::new([0.0, 0.0, 10.0], [0.0, 0.0, 1.57]));

    // Build the cut list the way a host UI would: select, then append.
    scene.select("Wide");
    scene.select("CloseUp");
    let mut switcher = Switcher::new(ScheduleConfig::new(12));
    let report = switcher.append_selected(&scene);
    println!("{}", report.message);

    // Late cut added by hand at a specific frame.
    switcher.cuts.push(CutEntry::new("Overhead", 120));

    // Stagger the appended cuts so the sequence actually switches.
    let staggered: CutList = switcher
        .cuts
        .iter()
        .enumerate()
        .map(|(i, entry)| CutEntry::new(entry.camera.clone(), entry.start_frame + i as i32 * 48))
        .collect();
    switcher.cuts = staggered;

    let batch = generate(&switcher.cuts, &switcher.config, &mut scene)?;
    println!("Key batch:\n{}", to_string_pretty(&batch)?);

    let report = switcher.generate_animation(&mut scene);
    println!("{} (frames {:?})", report.message, scene.keyed_frames());
    Ok(())
}
