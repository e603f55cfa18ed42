use secantx::{
    load_snapshot, load_snapshot_file, save_snapshot, save_snapshot_file, wall_geometry,
    PlotOption, ProjectInfo, SnapshotError, WallParameters, DEFAULT_FILE_NAME, FORM_NAME,
};

fn harbour_wall() -> WallParameters {
    WallParameters {
        project: ProjectInfo {
            name: "Harbour basin".to_owned(),
            revision: "rev2 \"final\"".to_owned(),
        },
        wall_name: "Quay wall".to_owned(),
        diameter: 0.88,
        spacing: 0.63,
        shaft_length: 17.3,
        platform_height: 1.7,
        verticality: 0.33,
        elastic_modulus: 31.5e6,
        plot_option: PlotOption::RandomDeviations,
        pile_count: 37,
    }
}

#[test]
fn saved_snapshot_reloads_identically() {
    let parameters = harbour_wall();
    let json = save_snapshot(&parameters).expect("parameters serialise");
    let reloaded = load_snapshot(&json).expect("snapshot reloads");

    assert_eq!(reloaded, parameters);
    assert_eq!(
        wall_geometry(&reloaded.geometry_input()).expect("valid input"),
        wall_geometry(&parameters.geometry_input()).expect("valid input")
    );
}

#[test]
fn snapshot_file_round_trip() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join(DEFAULT_FILE_NAME);
    let parameters = harbour_wall();

    save_snapshot_file(&path, &parameters).expect("snapshot written");
    let reloaded = load_snapshot_file(&path).expect("snapshot read");
    assert_eq!(reloaded, parameters);
}

#[test]
fn foreign_snapshot_is_rejected() {
    let mut value: serde_json::Value =
        serde_json::from_str(&save_snapshot(&harbour_wall()).expect("parameters serialise"))
            .expect("snapshot is json");
    value["selected_form"] = serde_json::json!("Micropile buckling");

    match load_snapshot(&value.to_string()) {
        Err(SnapshotError::MismatchedForm { expected, found }) => {
            assert_eq!(expected, FORM_NAME);
            assert_eq!(found.as_deref(), Some("Micropile buckling"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let result = load_snapshot_file(dir.path().join("absent.JSON"));
    assert!(matches!(result, Err(SnapshotError::Io(_))));
}

#[test]
fn malformed_json_reports_parse_error() {
    assert!(matches!(
        load_snapshot("{ not json"),
        Err(SnapshotError::Parse(_))
    ));
}
