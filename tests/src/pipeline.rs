#![cfg(test)]
//! End-to-end pipeline runs against mock stages: three sources fan out,
//! results are unioned, partitioned, resolved and written to a real
//! report file which is read back and checked line by line.

use std::fs;
use std::path::PathBuf;

use subsweep_core::pipeline::ReconPipeline;
use subsweep_core::probe::reachability::ReachabilityProbe;
use subsweep_core::probe::resolution::ResolutionProbe;
use subsweep_core::report::ReportWriter;

use crate::util::{orchestrator, ScriptedLiveness, ScriptedLookup, ShellSource};

fn temp_out_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("subsweep-e2e-{tag}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn full_run_produces_the_expected_report() {
    let out_dir = temp_out_dir("full");

    // Source B repeats one of A's findings; source C finds nothing.
    let orchestrator = orchestrator(vec![
        Box::new(ShellSource {
            name: "source-a",
            script: "printf 'www.example.com\\n'",
        }),
        Box::new(ShellSource {
            name: "source-b",
            script: "printf 'www.example.com\\napi.example.com\\n'",
        }),
        Box::new(ShellSource {
            name: "source-c",
            script: "true",
        }),
    ]);

    let pipeline = ReconPipeline::new(
        orchestrator,
        ReachabilityProbe::new(Box::new(ScriptedLiveness {
            alive: vec!["www.example.com", "api.example.com"],
        })),
        ResolutionProbe::new(Box::new(ScriptedLookup {
            answers: vec![("www.example.com", "93.184.216.34")],
        })),
        ReportWriter::new(&out_dir),
    );

    let outcome = pipeline.execute("example.com").await.unwrap();
    let report = &outcome.report;

    // Union deduplicated across sources; both hosts reachable.
    assert_eq!(report.reachable, vec!["api.example.com", "www.example.com"]);
    assert!(report.unreachable.is_empty());
    assert_eq!(report.addresses.len(), 2);
    assert_eq!(report.addresses["www.example.com"], "93.184.216.34");
    assert_eq!(report.addresses["api.example.com"], "lookup failed");

    let body = fs::read_to_string(&outcome.report_path).unwrap();
    assert!(body.starts_with("Reachable Subdomains:\n"));
    assert!(body.contains("www.example.com\n"));
    assert!(body.contains("api.example.com\n"));
    assert!(body.contains("\nUnreachable Subdomains:\n\n"));
    assert!(body.contains("www.example.com: 93.184.216.34\n"));
    assert!(body.contains("api.example.com: lookup failed\n"));

    let _ = fs::remove_dir_all(&out_dir);
}

#[tokio::test]
async fn all_sources_failing_still_writes_a_report() {
    let out_dir = temp_out_dir("degraded");

    let orchestrator = orchestrator(vec![
        Box::new(ShellSource {
            name: "source-a",
            script: "exit 1",
        }),
        Box::new(ShellSource {
            name: "source-b",
            script: "exit 7",
        }),
        Box::new(ShellSource {
            name: "source-c",
            script: "echo oops >&2; exit 1",
        }),
    ]);

    let pipeline = ReconPipeline::new(
        orchestrator,
        ReachabilityProbe::new(Box::new(ScriptedLiveness { alive: vec![] })),
        ResolutionProbe::new(Box::new(ScriptedLookup { answers: vec![] })),
        ReportWriter::new(&out_dir),
    );

    let outcome = pipeline.execute("example.com").await.unwrap();
    assert!(outcome.report.reachable.is_empty());
    assert!(outcome.report.unreachable.is_empty());
    assert!(outcome.report.addresses.is_empty());

    let body = fs::read_to_string(&outcome.report_path).unwrap();
    assert_eq!(
        body,
        "Reachable Subdomains:\n\nUnreachable Subdomains:\n\nSubdomain IPs:\n"
    );

    let _ = fs::remove_dir_all(&out_dir);
}

#[tokio::test]
async fn partition_splits_reachable_from_unreachable() {
    let out_dir = temp_out_dir("partition");

    let orchestrator = orchestrator(vec![Box::new(ShellSource {
        name: "source-a",
        script: "printf 'up.example.com\\ndown.example.com\\n'",
    })]);

    let pipeline = ReconPipeline::new(
        orchestrator,
        ReachabilityProbe::new(Box::new(ScriptedLiveness {
            alive: vec!["up.example.com"],
        })),
        ResolutionProbe::new(Box::new(ScriptedLookup {
            answers: vec![("up.example.com", "10.0.0.1")],
        })),
        ReportWriter::new(&out_dir),
    );

    let outcome = pipeline.execute("example.com").await.unwrap();
    let report = &outcome.report;

    assert_eq!(report.reachable, vec!["up.example.com"]);
    assert_eq!(report.unreachable, vec!["down.example.com"]);
    // Only the reachable side gets a mapping entry.
    assert_eq!(report.addresses.len(), 1);
    assert_eq!(report.addresses["up.example.com"], "10.0.0.1");

    let _ = fs::remove_dir_all(&out_dir);
}

#[tokio::test]
async fn empty_target_is_rejected_before_any_work() {
    let out_dir = temp_out_dir("empty-target");

    let pipeline = ReconPipeline::new(
        orchestrator(vec![]),
        ReachabilityProbe::new(Box::new(ScriptedLiveness { alive: vec![] })),
        ResolutionProbe::new(Box::new(ScriptedLookup { answers: vec![] })),
        ReportWriter::new(&out_dir),
    );

    assert!(pipeline.execute("  ").await.is_err());

    let _ = fs::remove_dir_all(&out_dir);
}
