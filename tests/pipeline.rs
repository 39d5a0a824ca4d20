use std::io::Write;

use samplelist::export::write_csv;
use samplelist::{generate_sample_list, BuildOptions, ReplicateMap, RunOrder, SampleListError, SequenceBuilder};
use tempfile::{tempdir, NamedTempFile};

fn names_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn builder_reads_file_and_indexes_from_start() {
    let f = names_file("sample1\nsample2\nsample3\n");
    let b = SequenceBuilder::from_path(f.path(), 1).unwrap();
    assert_eq!(b.names(), ["sample1", "sample2", "sample3"]);
    assert_eq!(b.base_table().locations(), vec![1, 2, 3]);

    let b = SequenceBuilder::from_path(f.path(), 25).unwrap();
    assert_eq!(b.base_table().locations(), vec![25, 26, 27]);
}

#[test]
fn replicate_file_scenario() {
    let f = names_file("sample1\nsample2\nsample3\n");
    let reps: ReplicateMap = r#"{"sample1": 2, "sample2": 3}"#.parse().unwrap();
    let opts = BuildOptions { start: 1, order: RunOrder::AsListed };
    let list = generate_sample_list(f.path(), Some(&reps), &opts).unwrap();
    let pairs: Vec<(&str, i64)> = list.rows().iter().map(|r| (r.sample.as_str(), r.location)).collect();
    assert_eq!(
        pairs,
        vec![
            ("sample1", 1),
            ("sample1_2", 1),
            ("sample2", 2),
            ("sample2_2", 2),
            ("sample2_3", 2),
            ("sample3", 3),
        ]
    );
}

#[test]
fn randomized_file_scenario_keeps_every_row() {
    let f = names_file("sample1\nsample2\nsample3\n");
    let reps: ReplicateMap = "sample1=2,sample2=3".parse().unwrap();
    let list = generate_sample_list(f.path(), Some(&reps), &BuildOptions::default()).unwrap();
    let mut samples = list.samples();
    samples.sort();
    assert_eq!(samples, vec!["sample1", "sample1_2", "sample2", "sample2_2", "sample2_3", "sample3"]);
}

#[test]
fn nonexistent_source_is_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("sample_names.txt");
    let err = SequenceBuilder::from_path(&missing, 1).unwrap_err();
    assert!(matches!(err, SampleListError::NotFound { ref path } if *path == missing));
}

#[test]
fn export_writes_two_column_csv() {
    let f = names_file("blank\nqc\nblank\n");
    let b = SequenceBuilder::from_path(f.path(), 1).unwrap();
    let list = b.build(None, &RunOrder::AsListed);

    let dir = tempdir().unwrap();
    let out = dir.path().join("sample_list_result.csv");
    write_csv(&list, &out).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["sample,location", "blank,1", "qc,2", "blank_2,3"]);
}
