//! End-to-end pipeline tests over CSV files on disk

use std::fs;
use std::path::Path;

use socialviz_core::{
    box_plot_shapes, prepare, summarize_file, Config, GroupField, ShapeKind, SocialVizError,
};

const SOCIAL_MEDIA: &str = "\
Platform,PostType,PostTimestamp,Likes,AgeGroup,Date
Instagram,Image,2024-03-01 09:15,1,18-24,3/1/2024 (Friday)
Instagram,Image,2024-03-01 10:00,2,18-24,3/1/2024 (Friday)
Instagram,Video,2024-03-02 11:00,3,18-24,3/2/2024 (Saturday)
Facebook,Video,2024-03-02 12:00,4,18-24,3/2/2024 (Saturday)
Facebook,Link,2024-03-03 13:00,10,25-34,3/3/2024 (Sunday)
Twitter,Text,2024-03-03 14:00,20,25-34,3/3/2024 (Sunday)
Twitter,Text,2024-03-03 15:00,30,25-34,3/3/2024 (Sunday)
Twitter,Link,2024-03-04 16:00,,55+,3/4/2024 (Monday)
";

fn write_input(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("socialMedia.csv");
    fs::write(&path, SOCIAL_MEDIA).unwrap();
    path
}

#[test]
fn summarize_by_age_group() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let summaries = summarize_file(&input, &Config::default()).unwrap();

    // 55+ only has a row without likes
    assert_eq!(summaries.len(), 2);

    let young = summaries["18-24"];
    assert_eq!(young.min, 1.0);
    assert_eq!(young.q1, 1.75);
    assert_eq!(young.median, 2.5);
    assert_eq!(young.q3, 3.25);
    assert_eq!(young.max, 4.0);
    assert_eq!(young.iqr, 1.5);

    let older = summaries["25-34"];
    assert_eq!(older.median, 20.0);
    assert_eq!(older.q1, 15.0);
    assert_eq!(older.q3, 25.0);
}

#[test]
fn summarize_by_platform() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let config = Config {
        group_field: GroupField::Platform,
        ..Config::default()
    };
    let summaries = summarize_file(&input, &config).unwrap();

    let keys: Vec<&str> = summaries.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Facebook", "Instagram", "Twitter"]);
    assert_eq!(summaries["Instagram"].median, 2.0);
}

#[test]
fn shapes_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let summaries = summarize_file(&input, &Config::default()).unwrap();
    let shapes = box_plot_shapes(&summaries, &["25-34".to_string()]);

    assert_eq!(shapes.len(), 6);
    assert_eq!(shapes[0].group, "25-34");
    assert_eq!(shapes[0].kind, ShapeKind::Whisker);
    assert_eq!(shapes[4].kind, ShapeKind::Box);
    assert_eq!(shapes[4].group, "18-24");
}

#[test]
fn prepare_writes_both_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let outdir = dir.path().join("derived");

    let outputs = prepare(&input, &outdir, &Config::default()).unwrap();
    assert_eq!(outputs.averages, outdir.join("SocialMediaAvg.csv"));
    assert_eq!(outputs.average_rows, 5);
    assert_eq!(outputs.time_rows, 3);

    let averages = fs::read_to_string(&outputs.averages).unwrap();
    let lines: Vec<&str> = averages.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Platform,PostType,AvgLikes",
            "Facebook,Link,10.0",
            "Facebook,Video,4.0",
            "Instagram,Image,1.5",
            "Instagram,Video,3.0",
            "Twitter,Text,25.0",
        ]
    );

    let series = fs::read_to_string(&outputs.time_series).unwrap();
    let lines: Vec<&str> = series.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,AvgLikes",
            "3/1/2024 (Friday),1.5",
            "3/2/2024 (Saturday),3.5",
            "3/3/2024 (Sunday),20.0",
        ]
    );
}

#[test]
fn prepare_honours_output_names() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let mut config = Config::default();
    config.output.averages_file = "avg.csv".to_string();
    config.output.time_series_file = "time.csv".to_string();

    let outputs = prepare(&input, dir.path(), &config).unwrap();
    assert!(dir.path().join("avg.csv").exists());
    assert!(dir.path().join("time.csv").exists());
    assert_eq!(outputs.time_series, dir.path().join("time.csv"));
}

#[test]
fn missing_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.csv");
    fs::write(&input, "Platform,PostType,AgeGroup\nTwitter,Text,55+\n").unwrap();

    let err = summarize_file(&input, &Config::default()).unwrap_err();
    assert!(matches!(err, SocialVizError::Data(_)));
    assert!(err.to_string().contains("Likes"));
}

const NON_FINITE_LIKES: &str = "\
Platform,PostType,AgeGroup,Likes,Date
Twitter,Text,55+,3,3/1/2024 (Friday)
Twitter,Text,55+,NaN,3/1/2024 (Friday)
Twitter,Text,55+,5,3/2/2024 (Saturday)
Twitter,Link,55+,inf,3/2/2024 (Saturday)
";

#[test]
fn non_finite_likes_are_skipped_when_summarizing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nan.csv");
    fs::write(&input, NON_FINITE_LIKES).unwrap();

    let summaries = summarize_file(&input, &Config::default()).unwrap();
    let older = summaries["55+"];
    assert_eq!(older.min, 3.0);
    assert_eq!(older.median, 4.0);
    assert_eq!(older.max, 5.0);
}

#[test]
fn prepare_skips_non_finite_likes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nan.csv");
    fs::write(&input, NON_FINITE_LIKES).unwrap();

    let outputs = prepare(&input, dir.path(), &Config::default()).unwrap();
    assert_eq!(outputs.average_rows, 1);
    assert_eq!(outputs.time_rows, 2);

    let averages = fs::read_to_string(&outputs.averages).unwrap();
    assert_eq!(
        averages.lines().collect::<Vec<_>>(),
        vec!["Platform,PostType,AvgLikes", "Twitter,Text,4.0"]
    );

    let series = fs::read_to_string(&outputs.time_series).unwrap();
    assert_eq!(
        series.lines().collect::<Vec<_>>(),
        vec![
            "Date,AvgLikes",
            "3/1/2024 (Friday),3.0",
            "3/2/2024 (Saturday),5.0",
        ]
    );
}

#[test]
fn prepare_rounds_ties_to_even() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ties.csv");
    // 9 / 8 = 1.125 likes on average
    let mut csv = String::from("Platform,PostType,AgeGroup,Likes\n");
    for likes in [2, 2, 1, 1, 1, 1, 1, 0] {
        csv.push_str(&format!("Twitter,Text,55+,{likes}\n"));
    }
    fs::write(&input, csv).unwrap();

    let outputs = prepare(&input, dir.path(), &Config::default()).unwrap();
    let averages = fs::read_to_string(&outputs.averages).unwrap();
    assert_eq!(averages.lines().nth(1), Some("Twitter,Text,1.12"));
}
