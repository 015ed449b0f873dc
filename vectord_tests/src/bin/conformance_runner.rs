//! Conformance runner with JSON report output.
//!
//! Executes the numeric-contract checks for the vector types and writes a
//! machine-readable report.
//!
//! Usage:
//!   cargo run -p vectord_tests --bin conformance_runner -- [output-dir]

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;
use vectord_core::mathd;
use vectord_core::single::{Vec2, Vec3};
use vectord_core::test_report::{CheckResult, CheckStatus, ReportBuilder};
use vectord_core::vector2d::Vector2d;
use vectord_core::vector3d::Vector3d;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let output_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("conformance-reports"));

    std::fs::create_dir_all(&output_dir).expect("failed to create output directory");

    let mut builder = ReportBuilder::new("Vectord Conformance Checks");

    info!("running Vector2d checks");
    builder = run_vector2d_checks(builder);

    info!("running Vector3d checks");
    builder = run_vector3d_checks(builder);

    info!("running conversion checks");
    builder = run_conversion_checks(builder);

    info!("running scalar math checks");
    builder = run_mathd_checks(builder);

    let report = builder.build();
    let stats = report.overall_stats();

    println!();
    print!("{}", report.summary_text());

    for check in report.results.iter().filter(|c| c.status == CheckStatus::Failed) {
        println!(
            "{} {} {}: {}",
            check.status.icon(),
            check.id,
            check.name,
            check.error_message.as_deref().unwrap_or("")
        );
    }

    let json_path = output_dir.join("conformance.json");
    report.save_json(&json_path).expect("failed to save report");
    info!(path = %json_path.display(), "report saved");

    if stats.failed > 0 {
        std::process::exit(1);
    }
}

/// Helper to run a check and capture the result.
fn run_check<F>(id: &str, name: &str, category: &str, f: F) -> CheckResult
where
    F: FnOnce() -> Result<(), String>,
{
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();

    let check = CheckResult::new(id, name, category);
    match result {
        Ok(()) => check.pass(duration),
        Err(e) => check.fail(duration, &e),
    }
}

fn run_vector2d_checks(mut builder: ReportBuilder) -> ReportBuilder {
    const CATEGORY: &str = "Vector2d";

    builder = builder.add_check(run_check(
        "V2D-001",
        "Normalize fallback",
        CATEGORY,
        || {
            if Vector2d::ZERO.normalized() != Vector2d::ZERO {
                return Err("zero vector should normalize to zero".to_string());
            }
            if Vector2d::new(1e-6, -1e-6).normalized() != Vector2d::ZERO {
                return Err("sub-epsilon vector should normalize to zero".to_string());
            }
            let n = Vector2d::new(12.0, -5.0).normalized();
            if (n.magnitude() - 1.0).abs() > 1e-12 {
                return Err(format!("expected unit magnitude, got {}", n.magnitude()));
            }
            Ok(())
        },
    ));

    builder = builder.add_check(run_check(
        "V2D-002",
        "Lerp endpoints and clamping",
        CATEGORY,
        || {
            let a = Vector2d::new(1.0, 2.0);
            let b = Vector2d::new(-3.0, 4.0);
            if a.lerp(b, 0.0) != a || a.lerp(b, 1.0) != b {
                return Err("lerp endpoints must reproduce the operands".to_string());
            }
            if a.lerp(b, -5.0) != a || a.lerp(b, 5.0) != b {
                return Err("out-of-range t must clamp to the endpoints".to_string());
            }
            Ok(())
        },
    ));

    builder = builder.add_check(run_check(
        "V2D-003",
        "MoveTowards snap and step",
        CATEGORY,
        || {
            let current = Vector2d::ZERO;
            let target = Vector2d::new(10.0, 0.0);
            if current.move_towards(target, 20.0) != target {
                return Err("target within reach must be returned exactly".to_string());
            }
            let stepped = current.move_towards(target, 3.0);
            if (current.distance(stepped) - 3.0).abs() > 1e-12 {
                return Err(format!(
                    "step length should equal max delta, got {}",
                    current.distance(stepped)
                ));
            }
            if current.move_towards(current, 1.0) != current {
                return Err("zero-length delta must return the target".to_string());
            }
            Ok(())
        },
    ));

    builder = builder.add_check(run_check(
        "V2D-004",
        "ClampMagnitude bound",
        CATEGORY,
        || {
            let v = Vector2d::new(30.0, 40.0);
            let clamped = v.clamp_magnitude(5.0);
            if clamped.magnitude() > 5.0 + mathd::EPSILON {
                return Err(format!("magnitude {} exceeds bound", clamped.magnitude()));
            }
            let short = Vector2d::new(1.0, 1.0);
            if short.clamp_magnitude(5.0) != short {
                return Err("vector within bound must pass through unchanged".to_string());
            }
            Ok(())
        },
    ));

    builder = builder.add_check(run_check(
        "V2D-005",
        "Approximate equality non-transitivity",
        CATEGORY,
        || {
            let a = Vector2d::new(0.0, 0.0);
            let b = Vector2d::new(0.8e-5, 0.0);
            let c = Vector2d::new(1.6e-5, 0.0);
            if !a.approx_eq(b) || !b.approx_eq(c) {
                return Err("adjacent pairs should compare equal".to_string());
            }
            if a.approx_eq(c) {
                return Err("outer pair should not compare equal".to_string());
            }
            Ok(())
        },
    ));

    builder = builder.add_check(run_check(
        "V2D-006",
        "Perpendicular rotation",
        CATEGORY,
        || {
            if Vector2d::new(1.0, 0.0).perpendicular() != Vector2d::new(0.0, 1.0) {
                return Err("perpendicular of (1, 0) should be (0, 1)".to_string());
            }
            if Vector2d::new(0.0, 1.0).perpendicular() != Vector2d::new(-1.0, 0.0) {
                return Err("perpendicular of (0, 1) should be (-1, 0)".to_string());
            }
            Ok(())
        },
    ));

    builder = builder.add_check(run_check(
        "V2D-007",
        "Indexed access bounds",
        CATEGORY,
        || {
            let mut v = Vector2d::ZERO;
            v.set_component(1, 4.0).map_err(|e| e.to_string())?;
            if v.component(1) != Ok(4.0) {
                return Err("set then get should round-trip".to_string());
            }
            if v.component(2).is_ok() {
                return Err("index 2 should be rejected".to_string());
            }
            Ok(())
        },
    ));

    builder
}

fn run_vector3d_checks(mut builder: ReportBuilder) -> ReportBuilder {
    const CATEGORY: &str = "Vector3d";

    builder = builder.add_check(run_check("V3D-001", "Cross product axes", CATEGORY, || {
        if Vector3d::RIGHT.cross(Vector3d::UP) != Vector3d::FORWARD {
            return Err("right × up should be forward".to_string());
        }
        let a = Vector3d::new(1.0, 2.0, 3.0);
        let b = Vector3d::new(-2.0, 0.5, 4.0);
        let c = a.cross(b);
        if c.dot(a).abs() > 1e-12 || c.dot(b).abs() > 1e-12 {
            return Err("cross product should be orthogonal to operands".to_string());
        }
        Ok(())
    }));

    builder = builder.add_check(run_check(
        "V3D-002",
        "Normalize fallback",
        CATEGORY,
        || {
            if Vector3d::new(1e-6, 1e-6, -1e-6).normalized() != Vector3d::ZERO {
                return Err("sub-epsilon vector should normalize to zero".to_string());
            }
            let n = Vector3d::new(2.0, -3.0, 6.0).normalized();
            if (n.magnitude() - 1.0).abs() > 1e-12 {
                return Err(format!("expected unit magnitude, got {}", n.magnitude()));
            }
            Ok(())
        },
    ));

    builder = builder.add_check(run_check("V3D-003", "Angle extremes", CATEGORY, || {
        let v = Vector3d::new(1.0, -2.0, 0.5);
        if v.angle(v).abs() > 1e-4 {
            return Err("angle to self should be ~0 degrees".to_string());
        }
        if (v.angle(-v) - 180.0).abs() > 1e-4 {
            return Err(format!("angle to negation should be 180, got {}", v.angle(-v)));
        }
        Ok(())
    }));

    builder = builder.add_check(run_check(
        "V3D-004",
        "Indexed access bounds",
        CATEGORY,
        || {
            let mut v = Vector3d::ZERO;
            v.set_component(2, -1.0).map_err(|e| e.to_string())?;
            if v.component(2) != Ok(-1.0) {
                return Err("set then get should round-trip".to_string());
            }
            if v.component(3).is_ok() {
                return Err("index 3 should be rejected".to_string());
            }
            Ok(())
        },
    ));

    builder
}

fn run_conversion_checks(mut builder: ReportBuilder) -> ReportBuilder {
    const CATEGORY: &str = "Conversions";

    builder = builder.add_check(run_check(
        "CNV-001",
        "Single-precision roundtrip",
        CATEGORY,
        || {
            let original = Vec2::new(1.5, -2.25);
            let widened = Vector2d::from(original);
            if widened != Vector2d::new(1.5, -2.25) {
                return Err("widening should preserve exactly representable values".to_string());
            }
            if widened.to_vec2() != original {
                return Err("narrowing back should reproduce the original".to_string());
            }
            Ok(())
        },
    ));

    builder = builder.add_check(run_check(
        "CNV-002",
        "Dimension widening and narrowing",
        CATEGORY,
        || {
            let flat = Vector2d::new(3.0, 4.0);
            let lifted = Vector3d::from(flat);
            if lifted != Vector3d::new(3.0, 4.0, 0.0) {
                return Err("2D to 3D widening should set z to zero".to_string());
            }
            if lifted.to_vector2d() != flat {
                return Err("3D to 2D narrowing should drop z".to_string());
            }
            let from_single: Vector3d = Vec3::new(1.0, 2.0, 3.0).into();
            if from_single != Vector3d::new(1.0, 2.0, 3.0) {
                return Err("f32 3-vector should widen losslessly".to_string());
            }
            Ok(())
        },
    ));

    builder
}

fn run_mathd_checks(mut builder: ReportBuilder) -> ReportBuilder {
    const CATEGORY: &str = "Mathd";

    builder = builder.add_check(run_check("MTH-001", "Clamp01", CATEGORY, || {
        if mathd::clamp01(-1.0) != 0.0 || mathd::clamp01(2.0) != 1.0 {
            return Err("clamp01 should pin to the unit interval".to_string());
        }
        if mathd::clamp01(0.5) != 0.5 {
            return Err("clamp01 should pass in-range values".to_string());
        }
        Ok(())
    }));

    builder = builder.add_check(run_check(
        "MTH-002",
        "Acos domain guard",
        CATEGORY,
        || {
            // Parallel vectors whose normalized dot can overshoot 1.
            let v = Vector2d::new(0.1, 0.3);
            let angle = v.angle(v * 3.0);
            if angle.is_nan() {
                return Err("angle of parallel vectors should not be NaN".to_string());
            }
            if angle.abs() > 1e-5 {
                return Err(format!("angle of parallel vectors should be ~0, got {}", angle));
            }
            Ok(())
        },
    ));

    builder
}
