use cutaway_switcher::{
    generate, generate_into, transition_start, Channel, CutEntry, CutList, KeyOp, KeyframeSink,
    Pose, ScheduleConfig, SwitchError, TAIL_HOLD_FRAMES,
};
use cutaway_test_fixtures::MockScene;

fn pose_a() -> Pose {
    Pose::new([0.0, 0.0, 0.0], [0.0, 0.0, 0.0])
}

fn pose_b() -> Pose {
    Pose::new([5.0, 0.0, 2.0], [0.0, 1.2, 0.0])
}

fn pose_c() -> Pose {
    Pose::new([-3.0, 4.0, 1.0], [0.4, 0.0, 0.9])
}

fn three_cut_scene() -> (MockScene, CutList) {
    let scene = MockScene::new()
        .with_camera("CamA", pose_a())
        .with_camera("CamB", pose_b())
        .with_camera("CamC", pose_c());
    let list: CutList = [
        CutEntry::new("CamA", 1),
        CutEntry::new("CamB", 30),
        CutEntry::new("CamC", 100),
    ]
    .into_iter()
    .collect();
    (scene, list)
}

/// it should key {1, 20, 30, 90, 100, 150} for the worked three-cut example
#[test]
fn worked_example_frames() {
    let (mut scene, list) = three_cut_scene();
    let cfg = ScheduleConfig::new(10);

    let applied = generate_into(&list, &cfg, &mut scene).unwrap();
    assert!(applied > 0);
    assert_eq!(scene.keyed_frames(), vec![1, 20, 30, 90, 100, 150]);

    // Hold pattern: A's pose holds through its window, B takes over at 30.
    assert_eq!(scene.pose_at(1), Some(pose_a()));
    assert_eq!(scene.pose_at(20), Some(pose_a()));
    assert_eq!(scene.pose_at(30), Some(pose_b()));
    assert_eq!(scene.pose_at(90), Some(pose_b()));
    assert_eq!(scene.pose_at(100), Some(pose_c()));
    assert_eq!(scene.pose_at(150), Some(pose_c()));
}

/// it should clamp the transition start to the entry's own start frame
#[test]
fn transition_clamps_to_own_start() {
    let a = CutEntry::new("CamA", 1);
    let b = CutEntry::new("CamB", 5);
    // 5 - 10 would be negative; clamp wins, zero-length transition at frame 1.
    assert_eq!(transition_start(&a, Some(&b), 10), 1);

    let mut scene = MockScene::new()
        .with_camera("CamA", pose_a())
        .with_camera("CamB", pose_b());
    let list: CutList = [a, b].into_iter().collect();
    generate_into(&list, &ScheduleConfig::new(10), &mut scene).unwrap();
    assert_eq!(scene.keyed_frames(), vec![1, 5, 5 + TAIL_HOLD_FRAMES]);
    assert_eq!(scene.pose_at(1), Some(pose_a()));
    assert_eq!(scene.pose_at(5), Some(pose_b()));
}

/// it should never schedule a transition before the entry's start frame
#[test]
fn transition_start_invariant() {
    for own_start in [1, 10, 60, 200] {
        let entry = CutEntry::new("Cam", own_start);
        for next_start in [1, 5, 60, 61, 500] {
            let next = CutEntry::new("Next", next_start);
            for window in [1, 10, 100] {
                let ts = transition_start(&entry, Some(&next), window);
                assert!(ts >= own_start, "ts={ts} own_start={own_start}");
            }
        }
        assert_eq!(
            transition_start(&entry, None, 10),
            own_start + TAIL_HOLD_FRAMES
        );
    }
}

/// it should fail with NoCamerasConfigured and write nothing for an empty list
#[test]
fn empty_list_fails_without_writes() {
    let mut scene = MockScene::new().with_camera("CamA", pose_a());
    // Pre-existing key that a failed run must not clear.
    scene.insert_key(KeyOp::new(7, Channel::Location, [9.0, 9.0, 9.0]));

    let err = generate_into(&CutList::new(), &ScheduleConfig::default(), &mut scene).unwrap_err();
    assert_eq!(err, SwitchError::NoCamerasConfigured);
    assert_eq!(scene.key_count(), 1);
    assert_eq!(scene.key(7, Channel::Location), Some([9.0, 9.0, 9.0]));
}

/// it should reject a non-positive transition window before any writes
#[test]
fn invalid_config_fails_without_writes() {
    let (mut scene, list) = three_cut_scene();
    let err = generate_into(&list, &ScheduleConfig::new(0), &mut scene).unwrap_err();
    assert!(matches!(err, SwitchError::InvalidConfig { .. }));
    assert_eq!(scene.key_count(), 0);
}

/// it should skip unresolvable cameras and still schedule the rest
#[test]
fn unresolvable_camera_is_skipped() {
    let mut scene = MockScene::new()
        .with_camera("CamA", pose_a())
        .with_camera("CamC", pose_c());
    let list: CutList = [
        CutEntry::new("CamA", 1),
        CutEntry::new("Ghost", 30),
        CutEntry::new("CamC", 100),
    ]
    .into_iter()
    .collect();

    generate_into(&list, &ScheduleConfig::new(10), &mut scene).unwrap();
    // A still holds until frame 20 (Ghost's start frame drives the window),
    // Ghost itself contributes no keys, C schedules normally.
    assert_eq!(scene.keyed_frames(), vec![1, 20, 100, 150]);
    assert_eq!(scene.pose_at(20), Some(pose_a()));
    assert_eq!(scene.pose_at(100), Some(pose_c()));
}

/// it should emit one hold + one transition per entry plus one successor key per pair
#[test]
fn batch_shape_matches_entry_count() {
    let (mut scene, list) = three_cut_scene();
    let batch = generate(&list, &ScheduleConfig::new(10), &mut scene).unwrap();

    // Per entry: hold + transition poses, 2 channels each. Per adjacent pair:
    // one successor pose, 2 channels.
    let entries = list.len();
    let pairs = entries - 1;
    assert_eq!(batch.len(), entries * 4 + pairs * 2);
    assert_eq!(batch.frames(), vec![1, 20, 30, 90, 100, 150]);
}

/// it should fully overwrite the previous run, leaving no stale frames
#[test]
fn regenerate_clears_stale_keys() {
    let (mut scene, list) = three_cut_scene();
    let cfg = ScheduleConfig::new(10);
    generate_into(&list, &cfg, &mut scene).unwrap();
    assert_eq!(scene.keyed_frames(), vec![1, 20, 30, 90, 100, 150]);

    let shorter: CutList = [CutEntry::new("CamB", 10)].into_iter().collect();
    generate_into(&shorter, &cfg, &mut scene).unwrap();
    assert_eq!(scene.keyed_frames(), vec![10, 10 + TAIL_HOLD_FRAMES]);
    assert_eq!(scene.pose_at(10), Some(pose_b()));
}

/// it should produce a plain hold when two cuts share a start frame
#[test]
fn duplicate_start_frames_degrade_gracefully() {
    let mut scene = MockScene::new()
        .with_camera("CamA", pose_a())
        .with_camera("CamB", pose_b());
    let list: CutList = [CutEntry::new("CamA", 25), CutEntry::new("CamB", 25)]
        .into_iter()
        .collect();

    generate_into(&list, &ScheduleConfig::new(10), &mut scene).unwrap();
    // Both entries collapse onto frame 25; the later entry wins the frame.
    assert_eq!(scene.keyed_frames(), vec![25, 25 + TAIL_HOLD_FRAMES]);
    assert_eq!(scene.pose_at(25), Some(pose_b()));
}
