//! End-to-end aggregation pass over in-memory and file-backed streams.

use std::collections::BTreeMap;
use std::io::Write;

use tr_core::{AttrSelector, EntityKind, EntityVersion, Params, Weights};
use tr_io::{IoError, SourceMeta};
use tr_pipeline::{run, run_path, PipelineError};

fn version(kind: EntityKind, id: i64, user: &str, keys: &[&str]) -> EntityVersion {
    EntityVersion {
        kind,
        id,
        user: user.to_string(),
        attrs: keys
            .iter()
            .map(|k| (k.to_string(), String::from("x")))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn mem_source() -> SourceMeta {
    SourceMeta { path: String::from("mem"), modified: None }
}

fn params(selector: AttrSelector, min_score: u64) -> Params {
    Params { selector, weights: Weights::default(), min_score }
}

#[test]
fn later_qualifying_version_wins_when_first_lacks_the_key() {
    // point 1: alice's version has no attributes, bob's carries "k".
    let stream = vec![
        Ok(version(EntityKind::Point, 1, "alice", &[])),
        Ok(version(EntityKind::Point, 1, "bob", &["k"])),
    ];
    let outputs = run(
        stream,
        params(AttrSelector::Key("k".into()), 0),
        mem_source(),
    )
    .expect("run");

    assert_eq!(outputs.totals.point_versions, 2); // raw versions, pre-gate
    assert_eq!(outputs.rows.len(), 1);
    assert_eq!(outputs.rows[0].user, "bob");
    assert_eq!(outputs.rows[0].points, 1);
}

#[test]
fn attribution_follows_stream_order() {
    let first_bob = vec![
        Ok(version(EntityKind::Point, 1, "bob", &["k"])),
        Ok(version(EntityKind::Point, 1, "alice", &["k"])),
    ];
    let outputs = run(
        first_bob,
        params(AttrSelector::Key("k".into()), 0),
        mem_source(),
    )
    .expect("run");
    assert_eq!(outputs.rows[0].user, "bob");

    let first_alice = vec![
        Ok(version(EntityKind::Point, 1, "alice", &["k"])),
        Ok(version(EntityKind::Point, 1, "bob", &["k"])),
    ];
    let outputs = run(
        first_alice,
        params(AttrSelector::Key("k".into()), 0),
        mem_source(),
    )
    .expect("run");
    assert_eq!(outputs.rows[0].user, "alice");
}

#[test]
fn single_path_scores_its_weight() {
    let stream = vec![Ok(version(EntityKind::Path, 2, "alice", &["k"]))];
    let outputs = run(
        stream,
        params(AttrSelector::Key("k".into()), 0),
        mem_source(),
    )
    .expect("run");

    let row = &outputs.rows[0];
    assert_eq!((row.points, row.paths, row.relations), (0, 1, 0));
    assert_eq!(row.score, 5);
    assert_eq!(row.total, 1);
}

#[test]
fn threshold_keeps_a_gapless_prefix() {
    // Weights of 10 per point; alice and bob reach 30, carol only 10.
    let mut stream = Vec::new();
    for id in 0..3 {
        stream.push(Ok(version(EntityKind::Point, id, "alice", &["k"])));
    }
    for id in 10..13 {
        stream.push(Ok(version(EntityKind::Point, id, "bob", &["k"])));
    }
    stream.push(Ok(version(EntityKind::Point, 20, "carol", &["k"])));

    let p = Params {
        selector: AttrSelector::Key("k".into()),
        weights: Weights { point: 10, path: 5, relation: 10 },
        min_score: 20,
    };
    let outputs = run(stream, p, mem_source()).expect("run");

    assert_eq!(outputs.rows.len(), 2);
    assert_eq!((outputs.rows[0].rank, outputs.rows[0].user.as_str()), (1, "alice"));
    assert_eq!((outputs.rows[1].rank, outputs.rows[1].user.as_str()), (2, "bob"));
    assert!(outputs.rows.iter().all(|r| r.user != "carol"));
}

#[test]
fn empty_stream_is_a_normal_run() {
    let outputs = run(Vec::new(), params(AttrSelector::Any, 0), mem_source()).expect("run");
    assert_eq!(outputs.totals, tr_pipeline::RunTotals::default());
    assert!(outputs.rows.is_empty());
}

#[test]
fn totals_count_every_version_seen() {
    let stream = vec![
        Ok(version(EntityKind::Point, 1, "alice", &[])),
        Ok(version(EntityKind::Point, 1, "alice", &[])),
        Ok(version(EntityKind::Path, 1, "alice", &[])),
        Ok(version(EntityKind::Relation, 1, "alice", &[])),
        Ok(version(EntityKind::Relation, 2, "bob", &[])),
    ];
    let outputs = run(
        stream,
        params(AttrSelector::Key("missing".into()), 0),
        mem_source(),
    )
    .expect("run");

    // nothing passed the filter, but the operator totals still count
    assert_eq!(outputs.totals.point_versions, 2);
    assert_eq!(outputs.totals.path_versions, 1);
    assert_eq!(outputs.totals.relation_versions, 2);
    assert!(outputs.rows.is_empty());
}

#[test]
fn stream_errors_abort_the_run() {
    let stream = vec![
        Ok(version(EntityKind::Point, 1, "alice", &["k"])),
        Err(IoError::Decode { line: 2, msg: String::from("bad line") }),
    ];
    let err = run(stream, params(AttrSelector::Any, 0), mem_source())
        .expect_err("run must fail");
    match err {
        PipelineError::Io(msg) => assert!(msg.contains("line 2")),
    }
}

#[test]
fn run_path_reads_a_history_file() {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(f, "{}", r#"{"kind":"point","id":1,"user":"alice","attrs":{"k":"v"}}"#).expect("write");
    writeln!(f, "{}", r#"{"kind":"path","id":1,"user":"bob","attrs":{"k":"v"}}"#).expect("write");
    writeln!(f, "{}", r#"{"kind":"point","id":1,"user":"mallory","attrs":{"k":"v"}}"#).expect("write");

    let outputs = run_path(f.path(), params(AttrSelector::Key("k".into()), 0)).expect("run");
    assert_eq!(outputs.source.path, f.path().display().to_string());
    assert_eq!(outputs.totals.point_versions, 2);
    assert_eq!(outputs.rows.len(), 2);
    // alice keeps point 1; mallory's later version was dropped
    assert!(outputs.rows.iter().any(|r| r.user == "alice" && r.points == 1));
    assert!(outputs.rows.iter().all(|r| r.user != "mallory"));
}
