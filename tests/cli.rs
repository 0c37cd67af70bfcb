use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const TARGET: &str = "203.0.113.5";

fn esdras() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_esdras"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    esdras()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_one_argument_prints_usage_and_exits_1() {
    let dir = tempdir().unwrap();
    esdras()
        .args(["demo", "--output-dir"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
    assert!(!dir.path().join("Pentest-demo").exists());
}

#[test]
fn test_three_arguments_are_rejected() {
    esdras().args(["demo", TARGET, "extra"]).assert().code(1);
}

#[test]
fn test_help_exits_0() {
    esdras()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("two-stage nmap scan"));
}

#[cfg(unix)]
mod scenarios {
    use super::*;
    use assert_cmd::assert::Assert;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Writing an executable while another thread forks can leave the file
    // busy at exec time, so script creation and runs are serialized.
    static SPAWN_LOCK: Mutex<()> = Mutex::new(());

    /// Behaviour of the stand-in scanner.
    struct FakeScan<'a> {
        /// Written to the `-oG` file on the discovery pass.
        greppable: &'a str,
        /// Exit status of the discovery pass.
        discovery_exit: i32,
        /// Extra shell run on the enrichment pass, after the argument echo.
        enrichment_extra: &'a str,
    }

    impl Default for FakeScan<'_> {
        fn default() -> Self {
            Self {
                greppable: "",
                discovery_exit: 0,
                enrichment_extra: "",
            }
        }
    }

    /// With `-oG <file>` the script writes the greppable text and exits with
    /// the configured status; otherwise it echoes its arguments to stdout and
    /// a line to stderr. Every invocation is appended to `invocations.log`.
    fn fake_scanner(dir: &Path, scan: &FakeScan) -> PathBuf {
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-oG" ]; then out="$a"; fi
  prev="$a"
done
if [ -n "$out" ]; then
  cat > "$out" <<'GREP'
{greppable}
GREP
  exit {discovery_exit}
fi
echo "ARGS: $*"
echo "25/tcp open  smtp    Postfix smtpd <mail.example>"
echo "warning from scanner" 1>&2
{enrichment_extra}
"#,
            log = dir.join("invocations.log").display(),
            greppable = scan.greppable,
            discovery_exit = scan.discovery_exit,
            enrichment_extra = scan.enrichment_extra,
        );
        let path = dir.join("fake-nmap");
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn run_scenario(scan: &FakeScan) -> (TempDir, Assert) {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempdir().unwrap();
        let scanner = fake_scanner(dir.path(), scan);
        let assert = esdras()
            .arg("--no-open")
            .arg("--scanner")
            .arg(&scanner)
            .arg("--output-dir")
            .arg(dir.path())
            .args(["demo", TARGET])
            .assert();
        (dir, assert)
    }

    fn invocations(dir: &Path) -> Vec<String> {
        std::fs::read_to_string(dir.join("invocations.log"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn scan_folder(dir: &Path) -> PathBuf {
        dir.join("Pentest-demo").join("Results").join("Scan-Folder")
    }

    #[test]
    fn test_open_ports_trigger_second_scan_and_report() {
        let (dir, assert) = run_scenario(&FakeScan {
            greppable: "Host: 203.0.113.5 ()\tPorts: 25/open/tcp//smtp///, 80/open/tcp//http///",
            ..Default::default()
        });
        assert
            .success()
            .stdout(predicate::str::contains(
                "Second Nmap scan completed successfully on ports: 25,80",
            ))
            .stdout(predicate::str::contains("Nmap scans completed successfully"));

        let calls = invocations(dir.path());
        assert_eq!(calls.len(), 2);
        assert!(calls[0].starts_with("-p- --open --min-rate=1000 -oG "));
        assert!(calls[0].ends_with("203.0.113.5 -Pn -n"));
        assert_eq!(calls[1], "-sC -sV -p25,80 203.0.113.5 -Pn");

        let scans = scan_folder(dir.path());
        assert!(scans.join("initial_scan").is_file());

        let second = std::fs::read_to_string(scans.join("nmap_second_result.txt")).unwrap();
        assert!(second.contains("ARGS: -sC -sV -p25,80"));
        assert!(second.contains("warning from scanner"));

        let html = std::fs::read_to_string(scans.join("scan_result.html")).unwrap();
        assert!(html.contains(&format!("<pre>{}</pre>", second)));
        assert!(html.contains("<mail.example>"));
        assert!(scans.join("scan_result.css").is_file());
    }

    #[test]
    fn test_no_open_ports_skips_second_scan() {
        let (dir, assert) = run_scenario(&FakeScan {
            greppable: "Host: 203.0.113.5 ()\tStatus: Up",
            ..Default::default()
        });
        assert
            .success()
            .stdout(predicate::str::contains("No open ports detected"));

        assert_eq!(invocations(dir.path()).len(), 1);

        let scans = scan_folder(dir.path());
        assert!(!scans.join("nmap_second_result.txt").exists());
        assert!(!scans.join("scan_result.html").exists());
        assert!(!scans.join("scan_result.css").exists());
    }

    #[test]
    fn test_failed_discovery_with_output_still_reports() {
        let (dir, assert) = run_scenario(&FakeScan {
            greppable: "Host: 203.0.113.5 ()\tPorts: 22/open/tcp//ssh///",
            discovery_exit: 2,
            ..Default::default()
        });
        assert
            .success()
            .stderr(predicate::str::contains("exited with Some(2)"));

        let calls = invocations(dir.path());
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], "-sC -sV -p22 203.0.113.5 -Pn");
        assert!(scan_folder(dir.path()).join("scan_result.html").is_file());
    }

    #[test]
    fn test_non_utf8_scan_output_still_reports() {
        let (dir, assert) = run_scenario(&FakeScan {
            greppable: "Host: 203.0.113.5 ()\tPorts: 8080/open/tcp//http-proxy///",
            enrichment_extra: r"printf '8080/tcp open http-proxy \377\376\n'",
            ..Default::default()
        });
        assert.success();

        let html = std::fs::read_to_string(scan_folder(dir.path()).join("scan_result.html")).unwrap();
        assert!(html.contains("http-proxy \u{FFFD}\u{FFFD}"));
    }

    #[test]
    fn test_full_template_is_scaffolded() {
        let (dir, assert) = run_scenario(&FakeScan::default());
        assert.success();

        let root = dir.path().join("Pentest-demo");
        for rel in [
            "Pre-Engagement",
            "Linux/Information-Gathering",
            "Linux/Lateral-Movement",
            "Windows/Vulnerability-Assessment",
            "Windows/Post-Exploitation",
            "Reporting",
            "Results/Scan-Folder",
            "Results/Discovered-Information/New-IPs",
            "Results/Discovered-Information/Source-Code",
        ] {
            assert!(root.join(rel).is_dir(), "missing {}", rel);
        }
    }
}
