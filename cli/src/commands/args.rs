//! Args command: flag tokens passed to the service binary.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::install;
use crate::domain::{Install as _, service_args};

/// Run the args command. Services without flags print nothing (or
/// `"args": null` under `--json`).
///
/// # Errors
///
/// Returns an error if the deployment cannot be loaded or fails validation.
pub fn run(app: &AppContext) -> Result<()> {
    let service = app.load_service()?;
    install::check(service.install(app.assets()).as_ref(), &app.reporter())?;
    let args = service_args(&service);
    app.renderer().render_args(service.name(), args.as_deref())
}
