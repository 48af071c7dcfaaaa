use std::env;

use earthengine_diagnostic::diagnostic::config::{DEFAULT_PROFILE, DiagnosticConfig, PROJECT_ENV_VAR};

/// Configuration for live runs: the current user's credentials and a project
/// taken from `EE_PROJECT_ID`.
pub fn load_live_config() -> Result<DiagnosticConfig, String> {
    let mut config = DiagnosticConfig::from_environment(DEFAULT_PROFILE);

    let project = env::var(PROJECT_ENV_VAR)
        .map_err(|_| format!("Set {PROJECT_ENV_VAR} to run live tests"))?;
    if !config.credentials_path.exists() {
        return Err(format!(
            "No credentials at {}; run `earthengine authenticate`",
            config.credentials_path.display()
        ));
    }

    config.project_id = Some(project);
    config.interactive = false;
    Ok(config)
}
