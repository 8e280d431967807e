//! Check command

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::install;
use crate::domain::Install as _;

/// Run the check command.
///
/// # Errors
///
/// Returns an error if the deployment cannot be loaded or fails validation.
pub fn run(app: &AppContext) -> Result<()> {
    let service = app.load_service()?;
    let command = service.install(app.assets());
    install::check(command.as_ref(), &app.reporter())?;
    app.renderer().render_check(service.name())
}
