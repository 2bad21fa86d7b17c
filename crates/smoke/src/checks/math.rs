use glam::{Mat4, Vec3, Vec4};

const EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathReport {
    pub sum: Vec3,
    pub translated: Vec4,
    pub rotated: Vec4,
    pub scaled: Vec4,
}

/// Runs the basic vector and matrix operations and checks the results.
pub fn run_math_check() -> Result<MathReport, String> {
    let sum = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0);
    expect_close("vec3 add", sum.extend(0.0), Vec4::new(5.0, 7.0, 9.0, 0.0))?;

    let point = Vec4::new(1.0, 0.0, 0.0, 1.0);
    expect_close("identity", Mat4::IDENTITY * point, point)?;

    let translated = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)) * point;
    expect_close("translate", translated, Vec4::new(11.0, 0.0, 0.0, 1.0))?;

    // A quarter turn about +Y takes +X to -Z.
    let rotated = Mat4::from_rotation_y(90f32.to_radians()) * point;
    expect_close("rotate", rotated, Vec4::new(0.0, 0.0, -1.0, 1.0))?;

    let scaled = Mat4::from_scale(Vec3::splat(2.0)) * point;
    expect_close("scale", scaled, Vec4::new(2.0, 0.0, 0.0, 1.0))?;

    Ok(MathReport {
        sum,
        translated,
        rotated,
        scaled,
    })
}

fn expect_close(step: &str, actual: Vec4, expected: Vec4) -> Result<(), String> {
    if actual.abs_diff_eq(expected, EPSILON) {
        Ok(())
    } else {
        Err(format!("math: {step} gave {actual}, expected {expected}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_moves_point_along_x() {
        let report = run_math_check().expect("math check");

        assert_eq!(report.translated, Vec4::new(11.0, 0.0, 0.0, 1.0));
        assert_eq!(report.sum, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(report.scaled, Vec4::new(2.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn mismatch_names_the_failing_step() {
        let error = expect_close("translate", Vec4::ZERO, Vec4::ONE).expect_err("mismatch");
        assert!(error.contains("translate"));
    }
}
