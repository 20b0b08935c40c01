use crate::cli_types::ConfigAction;
use crate::error::CliError;
use crate::settings;

pub(crate) fn run_config(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            match settings::load_catalogue_path() {
                Some(p) => log::info!("Saved catalogue location: {}", p.display()),
                None => log::info!(
                    "No saved catalogue location (using {} in the current directory).",
                    settings::DEFAULT_CATALOGUE_FILE,
                ),
            }
            Ok(())
        }
        ConfigAction::Set { path } => {
            settings::save_catalogue_path(Some(&path))
                .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;
            log::info!("Saved catalogue location: {}", path.display());
            Ok(())
        }
        ConfigAction::Clear => {
            settings::save_catalogue_path(None)
                .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;
            log::info!("Cleared saved catalogue location.");
            Ok(())
        }
        ConfigAction::Path => {
            log::info!("{}", settings::settings_path().display());
            Ok(())
        }
    }
}
