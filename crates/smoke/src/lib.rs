use std::io::Write;
use std::path::PathBuf;

use tracing::info;

pub mod checks;

#[cfg(feature = "audio")]
pub use checks::{open_default_output, AudioReport};
pub use checks::{
    build_ground_world, decode_image, run_math_check, run_ui_frame, ImageLoad, MathReport,
    PhysicsReport, UiReport,
};

pub const DEFAULT_IMAGE_PATH: &str = "non_existent_image.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Window,
    Surface,
    Ui,
    Physics,
    Image,
    Math,
    /// Needs the `audio` feature and an output device.
    Audio,
    /// Every check that runs without a display.
    All,
}

impl CheckKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "window" => Some(Self::Window),
            "surface" => Some(Self::Surface),
            "ui" => Some(Self::Ui),
            "physics" => Some(Self::Physics),
            "image" => Some(Self::Image),
            "math" => Some(Self::Math),
            "audio" => Some(Self::Audio),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Surface => "surface",
            Self::Ui => "ui",
            Self::Physics => "physics",
            Self::Image => "image",
            Self::Math => "math",
            Self::Audio => "audio",
            Self::All => "all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub image_path: PathBuf,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
        }
    }
}

/// Parses `<check> [--image-path <path>]`.
pub fn parse_args(args: &[String]) -> Result<(CheckKind, CheckOptions), String> {
    let raw_kind = args.first().ok_or_else(|| "missing check name".to_string())?;
    let kind =
        CheckKind::parse(raw_kind).ok_or_else(|| format!("unknown check '{raw_kind}'"))?;

    let mut options = CheckOptions::default();
    let mut index = 1usize;
    while index < args.len() {
        match args[index].as_str() {
            "--image-path" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| "missing value for --image-path".to_string())?;
                options.image_path = PathBuf::from(value);
                index += 2;
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok((kind, options))
}

pub fn run<W: Write>(
    kind: CheckKind,
    options: &CheckOptions,
    stdout: &mut W,
) -> Result<(), String> {
    let outcome = match kind {
        CheckKind::Window => checks::open_window(false, stdout),
        CheckKind::Surface => checks::open_window(true, stdout),
        CheckKind::Ui => report_ui(stdout),
        CheckKind::Physics => report_physics(stdout),
        CheckKind::Image => report_image(options, stdout),
        CheckKind::Math => report_math(stdout),
        CheckKind::Audio => report_audio(stdout),
        CheckKind::All => {
            report_ui(stdout)?;
            report_physics(stdout)?;
            report_image(options, stdout)?;
            report_math(stdout)
        }
    };
    outcome?;
    info!(check = kind.name(), "check_passed");
    Ok(())
}

fn report_ui<W: Write>(stdout: &mut W) -> Result<(), String> {
    let report = run_ui_frame();
    emit(
        stdout,
        &format!(
            "ui: frame produced {} shapes, {} primitives, {} texture uploads",
            report.shape_count, report.primitive_count, report.texture_uploads
        ),
    )
}

fn report_physics<W: Write>(stdout: &mut W) -> Result<(), String> {
    let report = build_ground_world();
    emit(
        stdout,
        &format!(
            "physics: world created with gravity {} and {} body / {} collider (ground at y={})",
            report.gravity_y, report.body_count, report.collider_count, report.ground_y
        ),
    )
}

fn report_image<W: Write>(options: &CheckOptions, stdout: &mut W) -> Result<(), String> {
    let path = options.image_path.display();
    let line = match decode_image(&options.image_path) {
        ImageLoad::Loaded {
            width,
            height,
            channels,
        } => format!("image: loaded '{path}' ({width}x{height}, {channels} channels)"),
        ImageLoad::Unavailable { reason } => {
            format!("image: decoder linked; '{path}' not loaded: {reason}")
        }
    };
    emit(stdout, &line)
}

fn report_math<W: Write>(stdout: &mut W) -> Result<(), String> {
    let report = run_math_check()?;
    let t = report.translated;
    emit(
        stdout,
        &format!(
            "math: 5 operations ok; translate(10,0,0) * (1,0,0,1) = ({}, {}, {}, {})",
            t.x, t.y, t.z, t.w
        ),
    )
}

#[cfg(feature = "audio")]
fn report_audio<W: Write>(stdout: &mut W) -> Result<(), String> {
    let report = open_default_output()?;
    emit(
        stdout,
        &format!(
            "audio: opened '{}' on {} ({} Hz, {} channels)",
            report.device, report.host, report.sample_rate, report.channels
        ),
    )
}

#[cfg(not(feature = "audio"))]
fn report_audio<W: Write>(_stdout: &mut W) -> Result<(), String> {
    Err("audio: check not built in; rebuild with `--features audio`".to_string())
}

fn emit<W: Write>(stdout: &mut W, line: &str) -> Result<(), String> {
    writeln!(stdout, "{line}").map_err(|error| format!("failed to write output: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_args_accepts_check_with_image_path() {
        let (kind, options) =
            parse_args(&args(&["image", "--image-path", "icon.png"])).expect("parse");

        assert_eq!(kind, CheckKind::Image);
        assert_eq!(options.image_path, PathBuf::from("icon.png"));
    }

    #[test]
    fn parse_args_rejects_unknown_check_and_flags() {
        assert!(parse_args(&args(&["sound"])).is_err());
        assert!(parse_args(&args(&["ui", "--verbose"])).is_err());
        assert!(parse_args(&args(&["image", "--image-path"])).is_err());
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn check_names_round_trip_through_parse() {
        for kind in [
            CheckKind::Window,
            CheckKind::Surface,
            CheckKind::Ui,
            CheckKind::Physics,
            CheckKind::Image,
            CheckKind::Math,
            CheckKind::Audio,
            CheckKind::All,
        ] {
            assert_eq!(CheckKind::parse(kind.name()), Some(kind));
        }
    }

    #[test]
    fn headless_checks_write_one_line_each() {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = CheckOptions {
            image_path: dir.path().join(DEFAULT_IMAGE_PATH),
        };
        let mut stdout = Vec::new();

        run(CheckKind::All, &options, &mut stdout).expect("headless checks");

        let text = String::from_utf8(stdout).expect("utf8");
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ui:"));
        assert!(lines[1].starts_with("physics:"));
        assert!(lines[2].starts_with("image: decoder linked"));
        assert!(lines[3].starts_with("math:"));
        assert!(lines[3].ends_with("= (11, 0, 0, 1)"));
    }

    #[test]
    fn audio_and_math_parse_as_checks() {
        let (kind, _) = parse_args(&args(&["audio"])).expect("audio");
        assert_eq!(kind, CheckKind::Audio);
        assert_eq!(kind.name(), "audio");

        let (kind, _) = parse_args(&args(&["math"])).expect("math");
        assert_eq!(kind, CheckKind::Math);
    }

    #[cfg(not(feature = "audio"))]
    #[test]
    fn audio_without_feature_explains_how_to_enable_it() {
        let mut stdout = Vec::new();
        let error = run(CheckKind::Audio, &CheckOptions::default(), &mut stdout)
            .expect_err("feature off");

        assert!(error.contains("--features audio"));
        assert!(stdout.is_empty());
    }
}
