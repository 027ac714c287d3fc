use dxf::entities::{Arc, Entity, EntityType, Line, LwPolyline};
use dxf::{Drawing, LwPolylineVertex, Point};
use sectionscan_batch::{analyze_file, run_batch, BatchConfig, FileError, DEFAULT_OUTPUT_NAME};
use sectionscan_core::analysis::{AnalysisConfig, SectionAnalyzer};
use sectionscan_core::report::{FileRecord, FileStatus};
use std::path::{Path, PathBuf};

fn new_drawing() -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = dxf::enums::AcadVersion::R2013;
    drawing
}

fn closed_lwpolyline(points: &[(f64, f64)]) -> Entity {
    let mut poly = LwPolyline::default();
    poly.vertices = points
        .iter()
        .map(|&(x, y)| LwPolylineVertex {
            x,
            y,
            id: 0,
            starting_width: 0.0,
            ending_width: 0.0,
            bulge: 0.0,
        })
        .collect();
    poly.flags = 1; // closed
    Entity::new(EntityType::LwPolyline(poly))
}

fn save_to(dir: &Path, name: &str, drawing: &mut Drawing) -> PathBuf {
    let path = dir.join(name);
    drawing
        .save_file(path.to_str().expect("utf-8 temp path"))
        .expect("save fixture drawing");
    path
}

fn rectangle_drawing() -> Drawing {
    let mut drawing = new_drawing();
    drawing.add_entity(closed_lwpolyline(&[
        (0.0, 0.0),
        (100.0, 0.0),
        (100.0, 50.0),
        (0.0, 50.0),
    ]));
    drawing
}

fn square_with_hole_drawing() -> Drawing {
    let mut drawing = new_drawing();
    drawing.add_entity(closed_lwpolyline(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
    ]));
    drawing.add_entity(closed_lwpolyline(&[
        (3.0, 3.0),
        (7.0, 3.0),
        (7.0, 7.0),
        (3.0, 7.0),
    ]));
    drawing
}

fn row<'a>(rows: &'a [FileRecord], name: &str) -> &'a FileRecord {
    rows.iter()
        .find(|r| r.file_name == name)
        .unwrap_or_else(|| panic!("no row for {name}"))
}

#[test]
fn mixed_folder_keeps_going_past_failures() {
    let dir = tempfile::tempdir().expect("temp dir");
    save_to(dir.path(), "rect.dxf", &mut rectangle_drawing());
    save_to(dir.path(), "hollow.dxf", &mut square_with_hole_drawing());
    std::fs::write(dir.path().join("broken.dxf"), "not a drawing\n").expect("write fixture");
    // Non-dxf entries are ignored entirely.
    std::fs::write(dir.path().join("notes.txt"), "irrelevant").expect("write fixture");

    let report = run_batch(&BatchConfig::new(dir.path().to_path_buf())).expect("batch runs");

    assert_eq!(3, report.rows.len());
    assert_eq!(2, report.ok_count());
    assert_eq!(1, report.error_count());

    let rect = row(&report.rows, "rect.dxf");
    assert_eq!(FileStatus::Ok, rect.status);
    assert_eq!(Some(5000.0), rect.net_area);
    assert_eq!(Some(111.803), rect.circumscribed_diameter);
    assert_eq!(Some(0), rect.chambers);

    let hollow = row(&report.rows, "hollow.dxf");
    assert_eq!(Some(84.0), hollow.net_area);
    assert_eq!(Some(1), hollow.chambers);

    let broken = row(&report.rows, "broken.dxf");
    assert_eq!(FileStatus::Error, broken.status);
    assert_eq!(None, broken.net_area);
    assert_eq!(None, broken.circumscribed_diameter);
    assert_eq!(None, broken.chambers);
    assert!(broken.error.is_some());

    assert!(dir.path().join(DEFAULT_OUTPUT_NAME).is_file());
}

#[test]
fn extension_filter_is_case_insensitive() {
    let dir = tempfile::tempdir().expect("temp dir");
    save_to(dir.path(), "UPPER.DXF", &mut rectangle_drawing());

    let report = run_batch(&BatchConfig::new(dir.path().to_path_buf())).expect("batch runs");
    assert_eq!(1, report.rows.len());
    assert_eq!(FileStatus::Ok, report.rows[0].status);
}

#[test]
fn file_without_closed_contours_is_an_error_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut drawing = new_drawing();
    // An open arc and a line: nothing bounds an area.
    let mut arc = Arc::default();
    arc.center = Point::new(0.0, 0.0, 0.0);
    arc.radius = 5.0;
    arc.start_angle = 0.0;
    arc.end_angle = 120.0;
    drawing.add_entity(Entity::new(EntityType::Arc(arc)));
    drawing.add_entity(Entity::new(EntityType::Line(Line::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
    ))));
    save_to(dir.path(), "open.dxf", &mut drawing);

    let report = run_batch(&BatchConfig::new(dir.path().to_path_buf())).expect("batch runs");
    assert_eq!(1, report.rows.len());
    let open = &report.rows[0];
    assert_eq!(FileStatus::Error, open.status);
    assert_eq!(None, open.net_area);
}

#[test]
fn explicit_output_path_is_honored() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out_dir = tempfile::tempdir().expect("temp dir");
    save_to(dir.path(), "rect.dxf", &mut rectangle_drawing());

    let out = out_dir.path().join("summary.xlsx");
    let mut cfg = BatchConfig::new(dir.path().to_path_buf());
    cfg.output_path = Some(out.clone());

    run_batch(&cfg).expect("batch runs");
    assert!(out.is_file());
    assert!(!dir.path().join(DEFAULT_OUTPUT_NAME).exists());
}

#[test]
fn missing_folder_aborts_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let gone = dir.path().join("nope");
    assert!(run_batch(&BatchConfig::new(gone)).is_err());
}

#[test]
fn per_file_error_kinds_are_assertable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let analyzer = SectionAnalyzer::new(AnalysisConfig::default());

    let broken = dir.path().join("broken.dxf");
    std::fs::write(&broken, "not a drawing\n").expect("write fixture");
    let err = analyze_file(&broken, &analyzer).unwrap_err();
    assert!(matches!(err, FileError::Decode(_)));

    let empty = save_to(dir.path(), "empty.dxf", &mut new_drawing());
    let err = analyze_file(&empty, &analyzer).unwrap_err();
    assert!(matches!(err, FileError::Analyze(_)));

    let good = save_to(dir.path(), "rect.dxf", &mut rectangle_drawing());
    let metrics = analyze_file(&good, &analyzer).expect("rectangle analyzes");
    assert_eq!(5000.0, metrics.net_area);
    assert_eq!(0, metrics.chambers);
}
