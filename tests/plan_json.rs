use std::path::PathBuf;

use inkwalk::{Canvas, Segment, SketchPlan};

fn plan_with_segment(seg: Segment) -> SketchPlan {
    SketchPlan {
        canvas: Canvas {
            width: 32,
            height: 24,
        },
        seed: 77,
        segments: vec![seg],
    }
}

fn seg(x1: f64, y1: f64, x2: f64, y2: f64, lw: f64) -> Segment {
    Segment {
        x1,
        y1,
        x2,
        y2,
        line_width: lw,
    }
}

#[test]
fn file_roundtrip_preserves_plan() {
    let dir = PathBuf::from("target").join("plan_json");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("plan.json");

    let plan = plan_with_segment(seg(1.0, 2.0, 1.5, 2.5, 6.25));
    plan.write_to_path(&path).unwrap();

    let loaded = SketchPlan::from_path(&path).unwrap();
    assert_eq!(loaded.canvas, plan.canvas);
    assert_eq!(loaded.seed, 77);
    assert_eq!(loaded.segments, plan.segments);
}

#[test]
fn from_path_rejects_invalid_plan() {
    let dir = PathBuf::from("target").join("plan_json");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad_plan.json");

    // Out-of-bounds endpoint: serializes fine, fails validation on load.
    let plan = plan_with_segment(seg(1.0, 2.0, 40.0, 2.5, 6.25));
    plan.write_to_path(&path).unwrap();

    let err = SketchPlan::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("outside"));
}

#[test]
fn from_path_reports_parse_errors() {
    let dir = PathBuf::from("target").join("plan_json");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("garbage.json");
    std::fs::write(&path, b"{not json").unwrap();

    let err = SketchPlan::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("serialization error"));
}

#[test]
fn segment_json_uses_flat_record_shape() {
    let s = serde_json::to_value(seg(1.0, 2.0, 3.0, 4.0, 5.5)).unwrap();
    assert_eq!(s["x1"], 1.0);
    assert_eq!(s["y2"], 4.0);
    assert_eq!(s["line_width"], 5.5);
}
