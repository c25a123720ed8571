// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the overlay library

use pose_overlay::{
    CONNECTIONS, DEFAULT_MIN_SCORE, Keypoint, KeypointName, OverlayConfig, Pose, Primitive,
    render,
};

fn kp(name: KeypointName, x: f32, y: f32, score: f32) -> Keypoint {
    Keypoint::new(name, x, y, score)
}

#[test]
fn test_overlay_config_defaults() {
    let config = OverlayConfig::default();
    assert_eq!(config.min_score, DEFAULT_MIN_SCORE);
    assert_eq!(config.canvas, (400, 600));
    assert_eq!(config.point_radius, 4);
    assert_eq!(config.segment_width, 3);
}

#[test]
fn test_render_no_detection_yields_empty_sequence() {
    assert_eq!(render(None, &CONNECTIONS, DEFAULT_MIN_SCORE).count(), 0);

    let empty = Pose::default();
    assert_eq!(render(Some(&empty), &CONNECTIONS, DEFAULT_MIN_SCORE).count(), 0);
}

#[test]
fn test_render_partial_arm() {
    // Confident shoulder and elbow, weak wrist: two points, one segment,
    // nothing reaching the wrist.
    let pose = Pose::new(vec![
        kp(KeypointName::LeftShoulder, 100.0, 150.0, 0.9),
        kp(KeypointName::LeftElbow, 120.0, 220.0, 0.9),
        kp(KeypointName::LeftWrist, 140.0, 290.0, 0.3),
    ]);

    let out: Vec<Primitive> = render(Some(&pose), &CONNECTIONS, 0.5).collect();
    assert_eq!(out.iter().filter(|p| p.is_point()).count(), 2);
    assert_eq!(out.iter().filter(|p| p.is_segment()).count(), 1);
    assert_eq!(
        out.last().copied().unwrap(),
        Primitive::Segment {
            x1: 100.0,
            y1: 150.0,
            x2: 120.0,
            y2: 220.0
        }
    );
}

#[test]
fn test_render_full_pose_edge_budget() {
    // All 17 keypoints confident: 17 points plus every directed edge in the
    // table (12 of them).
    let keypoints: Vec<Keypoint> = (0..KeypointName::COUNT)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let coord = i as f32 * 10.0;
            kp(KeypointName::from_index(i).unwrap(), coord, coord, 0.99)
        })
        .collect();
    let pose = Pose::new(keypoints);

    let out: Vec<Primitive> = render(Some(&pose), &CONNECTIONS, DEFAULT_MIN_SCORE).collect();
    assert_eq!(out.iter().filter(|p| p.is_point()).count(), 17);
    assert_eq!(
        out.iter().filter(|p| p.is_segment()).count(),
        CONNECTIONS.edge_count()
    );
}

#[test]
fn test_render_is_deterministic() {
    let pose = Pose::new(vec![
        kp(KeypointName::LeftHip, 80.0, 300.0, 0.8),
        kp(KeypointName::RightHip, 160.0, 300.0, 0.8),
        kp(KeypointName::LeftKnee, 85.0, 400.0, 0.8),
    ]);

    let a: Vec<Primitive> = render(Some(&pose), &CONNECTIONS, 0.5).collect();
    let b: Vec<Primitive> = render(Some(&pose), &CONNECTIONS, 0.5).collect();
    assert_eq!(a, b);
    assert!(!a.is_empty());
}
