use std::process::ExitCode;

use engine::Application;
use tracing::error;

use super::bootstrap::AppWiring;

pub(crate) fn run(app: AppWiring) -> ExitCode {
    if let Err(err) = Application::new(app.config).run(app.game) {
        error!(error = %err, "application_failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
