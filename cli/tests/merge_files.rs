use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

const FILENAME: &str = "best_fits.tsv";

fn write_replicate(root: &Path, replicate: usize, content: &str) {
    let dir = root.join(format!("run_{replicate}"));
    fs::create_dir_all(&dir).expect("run directory should be created");
    fs::write(dir.join(FILENAME), content).expect("replicate table should be written");
}

fn run_merge(root: &Path, extra_args: &[&str]) -> (Output, PathBuf, PathBuf) {
    let merged = root.join("merged.csv");
    let sorted = root.join("merged.sorted.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_dadi-prep"))
        .arg("merge")
        .arg("--directory")
        .arg(root)
        .args(["--filename", FILENAME])
        .arg("--out_filename")
        .arg(&merged)
        .arg("--out_filename_sorted")
        .arg(&sorted)
        .args(extra_args)
        .output()
        .expect("command should run");

    (output, merged, sorted)
}

fn read_rows(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("output should be readable")
        .lines()
        .map(String::from)
        .collect()
}

fn column(rows: &[String], i: usize) -> Vec<String> {
    rows.iter()
        .skip(1)
        .map(|row| row.split(',').nth(i).expect("row should have column").to_string())
        .collect()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn merge_fifty_replicates() {
    let temp = TempDir::new().expect("tempdir should be created");
    // Interleave likelihoods so that sorting actually reorders runs.
    for i in 1..=50 {
        let ll = if i % 2 == 0 { -(i as f64) } else { -100.0 - i as f64 };
        write_replicate(temp.path(), i, &format!("run\ttheta\tLL\n{i}\t0.{i}\t{ll}\n"));
    }

    let (output, merged, sorted) = run_merge(temp.path(), &[]);
    assert_success(&output);

    let merged = read_rows(&merged);
    assert_eq!(merged[0], "run,theta,LL");
    assert_eq!(merged.len(), 51);
    assert_eq!(
        column(&merged, 0),
        (1..=50).map(|i| i.to_string()).collect::<Vec<_>>()
    );

    let sorted = read_rows(&sorted);
    assert_eq!(sorted[0], "run,theta,LL");
    assert_eq!(sorted.len(), 51);
    let ll = column(&sorted, 2)
        .iter()
        .map(|x| x.parse::<f64>().expect("LL should be numeric"))
        .collect::<Vec<_>>();
    assert!(ll.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(column(&sorted, 0)[0], "2");
    assert_eq!(column(&sorted, 0)[49], "49");
}

#[test]
fn merge_multiple_rows_per_replicate() {
    let temp = TempDir::new().expect("tempdir should be created");
    for i in 1..=50 {
        write_replicate(
            temp.path(),
            i,
            &format!("run\tLL\n{i}a\t-{i}.5\n{i}b\t-{i}.25\n"),
        );
    }

    let (output, merged, _) = run_merge(temp.path(), &[]);
    assert_success(&output);

    let merged = read_rows(&merged);
    assert_eq!(merged.len(), 101);
    assert_eq!(&merged[1..5], ["1a,-1.5", "1b,-1.25", "2a,-2.5", "2b,-2.25"]);
    assert_eq!(merged[100], "50b,-50.25");
}

#[test]
fn merge_ties_keep_replicate_order() {
    let temp = TempDir::new().expect("tempdir should be created");
    for i in 1..=50 {
        let ll = if i % 10 == 0 { "-1.0" } else { "-5.0" };
        write_replicate(temp.path(), i, &format!("run\tLL\n{i}\t{ll}\n"));
    }

    let (output, _, sorted) = run_merge(temp.path(), &[]);
    assert_success(&output);

    let runs = column(&read_rows(&sorted), 0);
    let expected = [10, 20, 30, 40, 50]
        .into_iter()
        .chain((1..=50).filter(|i| i % 10 != 0))
        .map(|i| i.to_string())
        .collect::<Vec<_>>();
    assert_eq!(runs, expected);
}

#[test]
fn merge_custom_replicate_count() {
    let temp = TempDir::new().expect("tempdir should be created");
    for i in 1..=3 {
        write_replicate(temp.path(), i, &format!("run\tLL\n{i}\t-{i}\n"));
    }

    let (output, merged, sorted) = run_merge(temp.path(), &["--replicates", "3"]);
    assert_success(&output);

    assert_eq!(read_rows(&merged), ["run,LL", "1,-1", "2,-2", "3,-3"]);
    assert_eq!(read_rows(&sorted), ["run,LL", "1,-1", "2,-2", "3,-3"]);
}

#[test]
fn merge_missing_first_replicate() {
    let temp = TempDir::new().expect("tempdir should be created");
    for i in 2..=50 {
        write_replicate(temp.path(), i, &format!("run\tLL\n{i}\t-{i}\n"));
    }

    let (output, merged, sorted) = run_merge(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("run_1"),
        "stderr should name missing replicate, found: {stderr}"
    );
    assert!(!merged.exists());
    assert!(!sorted.exists());
}

#[test]
fn merge_missing_middle_replicate() {
    let temp = TempDir::new().expect("tempdir should be created");
    for i in (1..=50).filter(|&i| i != 37) {
        write_replicate(temp.path(), i, &format!("run\tLL\n{i}\t-{i}\n"));
    }

    let (output, merged, sorted) = run_merge(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("run_37"));
    assert!(!merged.exists());
    assert!(!sorted.exists());
}

#[test]
fn merge_missing_ll_column() {
    let temp = TempDir::new().expect("tempdir should be created");
    for i in 1..=50 {
        write_replicate(temp.path(), i, &format!("run\tlikelihood\n{i}\t-{i}\n"));
    }

    let (output, merged, sorted) = run_merge(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no column named 'LL'"));
    assert!(!merged.exists());
    assert!(!sorted.exists());
}

#[test]
fn merge_short_row_padded() {
    let temp = TempDir::new().expect("tempdir should be created");
    for i in 1..=50 {
        let content = if i == 2 {
            String::from("run\ttheta\tLL\n2\t0.2\n")
        } else {
            format!("run\ttheta\tLL\n{i}\t0.{i}\t-{i}\n")
        };
        write_replicate(temp.path(), i, &content);
    }

    let (output, merged, sorted) = run_merge(temp.path(), &[]);
    assert_success(&output);

    assert_eq!(read_rows(&merged)[2], "2,0.2,");
    let sorted = read_rows(&sorted);
    assert_eq!(sorted[1], "1,0.1,-1");
    assert_eq!(sorted[50], "2,0.2,");
}
