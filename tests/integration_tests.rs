// Integration tests for bottleneck-solver
//
// These tests drive the library end to end over the reference catalog and
// run the compiled binary for the non-interactive commands.

use std::fs;
use std::process::Command;

use bottleneck_solver::types::ComponentKind;
use bottleneck_solver::{
    estimate_selection, report, AppConfig, BottleneckError, Catalog, LimitingComponent,
    ProcessorRecord,
};
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bottleneck-solver"));
    // Keep the binary quiet and independent of the caller's environment
    cmd.env_remove("RUST_LOG");
    cmd
}

fn calculate(cpu: &str, gpu: &str, resolution: &str) -> bottleneck_solver::BottleneckResult {
    let catalog = Catalog::reference();
    let selection = catalog.resolve(cpu, gpu, resolution).unwrap();
    estimate_selection(&selection).unwrap()
}

// =============================================================================
// Library: reference catalog end to end
// =============================================================================

#[test]
fn test_reference_cpu_bound_pairing() {
    let result = calculate("i5-12400f", "rtx4090", "1080p");
    assert_eq!(result.percentage(), 28.6);
    assert_eq!(result.limiting_component(), LimitingComponent::Cpu);
    assert!(!result.is_balanced());
}

#[test]
fn test_reference_balanced_pairing() {
    // 95 * 0.85 = 80.75 vs 85: 4.25 / 82.875
    let result = calculate("i7-13700k", "rtx3080", "1440p");
    assert_eq!(result.percentage(), 5.1);
    assert!(result.is_balanced());
    assert_eq!(result.limiting_component(), LimitingComponent::None);
}

#[test]
fn test_reference_gpu_bound_pairing() {
    // 100 vs 65: 35 / 82.5
    let result = calculate("i9-13900k", "rtx3060", "1080p");
    assert_eq!(result.percentage(), 42.4);
    assert_eq!(result.limiting_component(), LimitingComponent::Gpu);
}

#[test]
fn test_higher_resolution_flips_limiting_side() {
    // 72 vs 65 is GPU-bound at 1080p; at 4K the effective CPU score is 50.4
    let hd = calculate("r5-5600x", "rtx3060", "1080p");
    let uhd = calculate("r5-5600x", "rtx3060", "2160p");
    assert_eq!(hd.limiting_component(), LimitingComponent::Gpu);
    assert_eq!(hd.percentage(), 10.2);
    assert_eq!(uhd.limiting_component(), LimitingComponent::Cpu);
    assert_eq!(uhd.percentage(), 25.3);
}

#[test]
fn test_every_reference_combination_is_consistent() {
    let catalog = Catalog::reference();
    for p in catalog.processors() {
        for g in catalog.graphics() {
            for r in catalog.resolutions() {
                let selection = catalog.resolve(&p.id, &g.id, &r.id).unwrap();
                let result = estimate_selection(&selection).unwrap();
                assert!(result.percentage() >= 0.0);
                assert_eq!(
                    result.is_balanced(),
                    result.limiting_component() == LimitingComponent::None,
                    "{} / {} / {}",
                    p.id,
                    g.id,
                    r.id
                );
            }
        }
    }
}

#[test]
fn test_unknown_ids_report_first_missing_kind() {
    let catalog = Catalog::reference();

    match catalog.resolve("i3-2100", "rtx9999", "8k") {
        Err(BottleneckError::NotFound { kind, id }) => {
            assert_eq!(kind, ComponentKind::Processor);
            assert_eq!(id, "i3-2100");
        }
        other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
    }

    match catalog.resolve("i5-12400f", "rtx4090", "8k") {
        Err(BottleneckError::NotFound { kind, .. }) => {
            assert_eq!(kind, ComponentKind::Resolution)
        }
        other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_text_report_for_reference_pairing() {
    let result = calculate("i5-12400f", "rtx4090", "1080p");
    let text = report::render_text(&result);
    assert!(text.contains("28.6%"));
    assert!(text.contains("Your CPU is the bottleneck by 28.6% at 1080p (Full HD)."));
    assert!(text.contains("Intel Core i5-12400F"));
}

#[test]
fn test_config_catalog_override_round_trip() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");

    let custom = Catalog::new(
        vec![ProcessorRecord::new("x1", "Custom CPU", 60.0)],
        Catalog::reference().graphics().to_vec(),
        Catalog::reference().resolutions().to_vec(),
    )
    .unwrap();
    custom.save_to_file(&catalog_path).unwrap();

    let config = AppConfig {
        catalog_path: Some(catalog_path.clone()),
        ..AppConfig::default()
    };
    let loaded = config.load_catalog(None).unwrap();
    assert_eq!(loaded.processors().len(), 1);
    assert!(loaded.processor("x1").is_some());
}

// =============================================================================
// Binary: non-interactive commands
// =============================================================================

#[test]
fn test_cli_calculate_text() {
    let output = bin()
        .args(["calculate", "--cpu", "i5-12400f", "--gpu", "rtx4090"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("28.6%"));
    assert!(stdout.contains("CPU is the bottleneck"));
}

#[test]
fn test_cli_calculate_json() {
    let output = bin()
        .args([
            "calculate",
            "--cpu",
            "i7-13700k",
            "--gpu",
            "rtx3080",
            "-r",
            "1440p",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["percentage"], 5.1);
    assert_eq!(json["limitingComponent"], "None");
    assert_eq!(json["isBalanced"], true);
    assert_eq!(json["graphics"]["id"], "rtx3080");
}

#[test]
fn test_cli_explain_failure_keeps_result_and_exit_code() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("settings.json");
    fs::write(
        &config_path,
        r#"{"explanation": {"api_key_env": "BOTTLENECK_SOLVER_KEY_THAT_IS_NEVER_SET"}}"#,
    )
    .unwrap();

    let output = bin()
        .env_remove("API_KEY")
        .arg("--config")
        .arg(&config_path)
        .args(["calculate", "--cpu", "i5-12400f", "--gpu", "rtx4090", "--explain"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("28.6%"));
    assert!(stdout.contains("CPU is the bottleneck"));
    assert!(!stdout.contains("✗"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("✗ AI analysis unavailable"));
    assert!(stderr.contains("BOTTLENECK_SOLVER_KEY_THAT_IS_NEVER_SET"));
}

#[test]
fn test_cli_export_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("base.json");
    let exported = dir.path().join("exported.json");
    fs::write(&base, r#"{"default_graphics": "rx7800xt"}"#).unwrap();

    let output = bin()
        .arg("--config")
        .arg(&base)
        .arg("export-config")
        .arg(&exported)
        .output()
        .unwrap();
    assert!(output.status.success());

    let loaded = AppConfig::load_from_file(&exported).unwrap();
    assert_eq!(loaded.default_graphics, "rx7800xt");
    assert_eq!(loaded.default_processor, AppConfig::default().default_processor);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_cli_calculate_unknown_id_fails() {
    let output = bin()
        .args(["calculate", "--cpu", "pentium4", "--gpu", "rtx4090"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pentium4"));
    assert!(stderr.contains("not found"));
}

#[test]
fn test_cli_list_resolutions() {
    let output = bin().args(["list", "resolutions"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1440p"));
    assert!(stdout.contains("4K (UHD)"));
    assert!(!stdout.contains("rtx4090"));
}

#[test]
fn test_cli_export_and_reload_catalog() {
    let dir = TempDir::new().unwrap();
    let exported = dir.path().join("exported.json");

    let output = bin()
        .arg("export-catalog")
        .arg(&exported)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        Catalog::load_from_file(&exported).unwrap(),
        Catalog::reference()
    );

    let output = bin()
        .arg("--catalog")
        .arg(&exported)
        .args(["list", "processors"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("r7-7800x3d"));
}

#[test]
fn test_cli_rejects_invalid_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{"processors": [], "graphics": [], "resolutions": []}"#,
    )
    .unwrap();

    let output = bin()
        .arg("--catalog")
        .arg(&path)
        .args(["list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
