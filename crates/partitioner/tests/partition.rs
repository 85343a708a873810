use std::fs;
use std::path::{Path, PathBuf};

use partitioner::{linear, random, round_robin, run, Mode, PartitionConfig, PartitionError};
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    input: PathBuf,
    out: PathBuf,
}

fn fixture(lines: &[&str]) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.txt");
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(&input, content).unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    Fixture { _dir: dir, input, out }
}

fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("line-{i}")).collect()
}

fn read_partition(out: &Path, index: usize) -> Vec<String> {
    let content = fs::read_to_string(out.join(format!("data.txt.{index}"))).unwrap();
    content.lines().map(str::to_string).collect()
}

fn read_all(out: &Path, partitions: usize) -> Vec<Vec<String>> {
    (0..partitions).map(|i| read_partition(out, i)).collect()
}

fn sorted(mut lines: Vec<String>) -> Vec<String> {
    lines.sort();
    lines
}

#[test]
fn test_round_robin_scenario() {
    let fx = fixture(&["a", "b", "c", "d", "e"]);
    let summary = round_robin(&fx.input, &fx.out, 2).unwrap();

    assert_eq!(read_partition(&fx.out, 0), vec!["a", "c", "e"]);
    assert_eq!(read_partition(&fx.out, 1), vec!["b", "d"]);
    assert_eq!(summary.total_lines, 5);
    assert_eq!(summary.sizes(), vec![3, 2]);
    assert_eq!(summary.seed, None);
}

#[test]
fn test_linear_scenario() {
    let fx = fixture(&["a", "b", "c", "d", "e"]);
    let summary = linear(&fx.input, &fx.out, 2).unwrap();

    assert_eq!(read_partition(&fx.out, 0), vec!["a", "b"]);
    assert_eq!(read_partition(&fx.out, 1), vec!["c", "d", "e"]);
    assert_eq!(summary.sizes(), vec![2, 3]);
}

#[test]
fn test_round_robin_placement_and_balance() {
    for total in [0, 1, 7, 20, 23] {
        let lines = numbered(total);
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        for n in [1usize, 2, 3, 5, 8] {
            let fx = fixture(&refs);
            round_robin(&fx.input, &fx.out, n as u32).unwrap();
            let parts = read_all(&fx.out, n);

            for (index, part) in parts.iter().enumerate() {
                let expected: Vec<String> = lines.iter().skip(index).step_by(n).cloned().collect();
                assert_eq!(part, &expected, "total={total} n={n} partition={index}");
            }
            let max = parts.iter().map(Vec::len).max().unwrap();
            let min = parts.iter().map(Vec::len).min().unwrap();
            assert!(max - min <= 1);
        }
    }
}

#[test]
fn test_linear_chunks_reassemble_input() {
    for (total, n) in [(10usize, 3usize), (12, 4), (7, 7), (100, 6), (9, 1)] {
        let lines = numbered(total);
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let fx = fixture(&refs);
        linear(&fx.input, &fx.out, n as u32).unwrap();
        let parts = read_all(&fx.out, n);

        let quota = total / n;
        for part in &parts[..n - 1] {
            assert_eq!(part.len(), quota, "total={total} n={n}");
        }
        assert_eq!(parts[n - 1].len(), quota + total % n);
        assert_eq!(parts.concat(), lines);
    }
}

#[test]
fn test_linear_more_partitions_than_lines() {
    // quota is zero: the cursor advances after every line and the
    // trailing partitions receive nothing.
    let fx = fixture(&["a", "b", "c"]);
    let summary = linear(&fx.input, &fx.out, 5).unwrap();

    assert_eq!(summary.sizes(), vec![1, 1, 1, 0, 0]);
    assert_eq!(read_partition(&fx.out, 0), vec!["a"]);
    assert_eq!(read_partition(&fx.out, 2), vec!["c"]);
    assert!(read_partition(&fx.out, 4).is_empty());
}

#[test]
fn test_random_keeps_every_line_once() {
    let lines = numbered(200);
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let fx = fixture(&refs);
    let summary = random(&fx.input, &fx.out, 4, Some(11)).unwrap();

    let parts = read_all(&fx.out, 4);
    assert_eq!(sorted(parts.concat()), sorted(lines.clone()));
    assert_eq!(summary.seed, Some(11));
    assert_eq!(summary.sizes().iter().sum::<u64>(), 200);
    assert_eq!(summary.partitions.len(), 4);

    // relative order is kept inside each partition
    for part in &parts {
        let positions: Vec<usize> = part
            .iter()
            .map(|l| lines.iter().position(|x| x == l).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_random_same_seed_same_output() {
    let lines = numbered(50);
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let first = fixture(&refs);
    let second = fixture(&refs);
    random(&first.input, &first.out, 3, Some(99)).unwrap();
    random(&second.input, &second.out, 3, Some(99)).unwrap();

    assert_eq!(read_all(&first.out, 3), read_all(&second.out, 3));
}

#[test]
fn test_random_without_seed_reports_one() {
    let fx = fixture(&["a", "b"]);
    let summary = random(&fx.input, &fx.out, 2, None).unwrap();
    assert!(summary.seed.is_some());
}

#[test]
fn test_empty_input_creates_empty_partitions() {
    let fx = fixture(&[]);
    for mode in [Mode::RoundRobin, Mode::Linear, Mode::Random] {
        let summary = run(&PartitionConfig::new(&fx.input, &fx.out, mode, 3)).unwrap();
        assert_eq!(summary.total_lines, 0);
        assert_eq!(summary.sizes(), vec![0, 0, 0]);
        for index in 0..3 {
            assert!(fx.out.join(format!("data.txt.{index}")).exists());
        }
    }
}

#[test]
fn test_run_dispatches_on_mode() {
    let fx = fixture(&["a", "b", "c", "d", "e"]);
    let config = PartitionConfig::new(&fx.input, &fx.out, Mode::Linear, 2).with_seed(5);
    let summary = run(&config).unwrap();

    assert_eq!(summary.mode, Mode::Linear);
    assert_eq!(summary.seed, None);
    assert_eq!(read_partition(&fx.out, 1), vec!["c", "d", "e"]);
}

#[test]
fn test_zero_partitions_rejected() {
    let fx = fixture(&["a"]);
    for mode in [Mode::RoundRobin, Mode::Linear, Mode::Random] {
        let err = run(&PartitionConfig::new(&fx.input, &fx.out, mode, 0)).unwrap_err();
        assert!(matches!(err, PartitionError::ZeroPartitions));
    }
    assert_eq!(fs::read_dir(&fx.out).unwrap().count(), 0);
}

#[test]
fn test_missing_input_creates_nothing() {
    let fx = fixture(&[]);
    let missing = fx.input.with_file_name("missing.txt");
    let err = round_robin(&missing, &fx.out, 2).unwrap_err();

    assert!(matches!(err, PartitionError::Open { .. }));
    assert_eq!(fs::read_dir(&fx.out).unwrap().count(), 0);
}

#[test]
fn test_directory_input_is_reported_without_output() {
    let fx = fixture(&[]);
    let folder = fx.input.with_file_name("folder");
    fs::create_dir(&folder).unwrap();

    for mode in [Mode::RoundRobin, Mode::Linear, Mode::Random] {
        let err = run(&PartitionConfig::new(&folder, &fx.out, mode, 2)).unwrap_err();
        assert!(matches!(err, PartitionError::Open { .. } | PartitionError::Read { .. }));
        assert!(err.to_string().contains(&folder.display().to_string()));
    }
    assert_eq!(fs::read_dir(&fx.out).unwrap().count(), 0);
}

#[test]
fn test_missing_dest_dir_is_reported() {
    let fx = fixture(&["a"]);
    let err = linear(&fx.input, &fx.out.join("nope"), 2).unwrap_err();

    assert!(matches!(err, PartitionError::Create { .. }));
    assert!(err.to_string().contains("data.txt.0"));
}
