use std::path::Path;
use std::process::Command;
use std::process::Output;

use tempfile::tempdir;

fn run_dijkstra(args: &[&str], log: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_main"))
        .arg("dijkstra")
        .args(args)
        .arg("--output")
        .arg(log)
        .output()
        .expect("the binary runs")
}

#[test]
fn logs_the_graph_and_the_distances() {
    let dir = tempdir().expect("tempdir");
    let log = dir.path().join("dijkstra.org");

    let output = run_dijkstra(&["--graph", "data/graphs/example.graph"], &log);
    assert!(output.status.success());

    let text = std::fs::read_to_string(&log).expect("read log");
    assert!(text.contains("* Runs"));
    assert!(text.contains("#+begin_quote"));
    assert!(text.contains("*** Distances from 'A'"));
    assert!(text.contains("'D': 4"));
}

#[test]
fn a_rejected_source_still_logs_the_graph_section() {
    let dir = tempdir().expect("tempdir");
    let log = dir.path().join("dijkstra.org");

    let output = run_dijkstra(
        &["--graph", "data/graphs/example.graph", "--source", "Z"],
        &log,
    );
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not in the graph"), "stderr: {stderr}");

    // The graph section goes out before the run; it must survive the exit.
    let text = std::fs::read_to_string(&log).expect("read log");
    assert!(text.contains("* Runs"));
    assert!(text.contains("#+begin_quote"));
    assert!(!text.contains("*** Distances"));
}
