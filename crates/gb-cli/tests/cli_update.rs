use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gridbayes"))
}

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("gridbayes_cli_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn assert_summary_contract(v: &serde_json::Value) {
    let evidence = v.get("evidence").and_then(|x| x.as_f64()).expect("evidence should be a number");
    assert!(evidence.is_finite() && evidence > 0.0, "evidence must be positive");

    for key in
        ["posterior_theta_mode", "posterior_theta_mean", "posterior_mu_mode", "posterior_mu_mean"]
    {
        let x = v.get(key).and_then(|x| x.as_f64()).unwrap_or_else(|| panic!("{} missing", key));
        assert!((0.0..1.0).contains(&x), "{}={} must lie in (0,1)", key, x);
    }
}

#[test]
fn update_writes_summary_json() {
    let out = tmp_path("update.json");
    let r = run(&[
        "update",
        "--n",
        "50",
        "--heads",
        "9",
        "--tails",
        "3",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(r.status.success(), "stderr: {}", String::from_utf8_lossy(&r.stderr));

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_summary_contract(&v);

    // 9/12 heads pulls the mu posterior above the Beta(2,2) prior mode.
    let prior_mode = v["prior_mu_mode"].as_f64().unwrap();
    let post_mode = v["posterior_mu_mode"].as_f64().unwrap();
    assert!(post_mode > prior_mode, "{} vs {}", post_mode, prior_mode);

    std::fs::remove_file(&out).ok();
}

#[test]
fn update_defaults_to_stdout() {
    let r = run(&["update", "--n", "20", "--heads", "0", "--tails", "0"]);
    assert!(r.status.success(), "stderr: {}", String::from_utf8_lossy(&r.stderr));
    let v: serde_json::Value = serde_json::from_slice(&r.stdout).unwrap();
    assert_summary_contract(&v);
    // Constant likelihood: evidence is the prior's unit mass.
    let evidence = v["evidence"].as_f64().unwrap();
    assert!((evidence - 1.0).abs() < 1e-9, "evidence={}", evidence);
}

#[test]
fn report_emits_full_artifact() {
    let out = tmp_path("report.json");
    let r = run(&[
        "report",
        "--n",
        "25",
        "--heads",
        "9",
        "--tails",
        "3",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(r.status.success(), "stderr: {}", String::from_utf8_lossy(&r.stderr));

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();

    for key in ["prior", "likelihood", "posterior"] {
        let z = v[key]["z"].as_array().unwrap_or_else(|| panic!("{}.z missing", key));
        assert_eq!(z.len(), 25, "{}.z should have 25 rows", key);
        assert_eq!(z[0].as_array().unwrap().len(), 25);
    }
    assert_eq!(v["prior"]["normalized"], serde_json::json!(true));
    assert_eq!(v["likelihood"]["normalized"], serde_json::json!(false));

    for key in ["prior_theta", "prior_mu", "posterior_theta", "posterior_mu"] {
        let density = v[key]["density"].as_array().unwrap();
        let total: f64 = density.iter().map(|x| x.as_f64().unwrap()).sum();
        assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", key, total);
    }

    std::fs::remove_file(&out).ok();
}

#[test]
fn invalid_resolution_fails() {
    let r = run(&["update", "--n", "0", "--heads", "1", "--tails", "1"]);
    assert!(!r.status.success());
    let stderr = String::from_utf8_lossy(&r.stderr);
    assert!(stderr.contains("resolution"), "stderr: {}", stderr);
}

#[test]
fn invalid_hyperprior_fails() {
    let r = run(&["update", "--n", "10", "--heads", "1", "--tails", "1", "--hyper-a=-1.0"]);
    assert!(!r.status.success());
}
