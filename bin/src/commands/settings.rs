//! Settings commands (show, set, reset).

use crate::commands::SettingsOverrides;
use crate::display::{Format, render_settings};
use anyhow::{Context, Result, bail};
use inquire::Confirm;
use preflight_lib::prelude::*;

/// Print the stored settings.
pub(crate) fn show(store: &SettingsStore, format: Format) -> Result<()> {
    let settings = store.load()?;

    match format {
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?;
            println!("{json}");
        }
        Format::Text => {
            print!("{}", render_settings(&settings));
            println!("{:<16} {}", "Stored at:", store.settings_path().display());
        }
    }
    Ok(())
}

/// Apply overrides to the stored settings and save them.
pub(crate) fn set(store: &SettingsStore, overrides: &SettingsOverrides) -> Result<()> {
    if overrides.is_empty() {
        bail!("Nothing to set. Use --mode, --max-ram, --workers or --[no-]multiprocess.");
    }

    let settings = overrides.apply(store.load()?)?;
    let stored = store.save(&settings)?;
    tracing::info!(path = %store.settings_path().display(), "settings saved");

    print!("{}", render_settings(&stored.settings));
    println!("Saved {}.", stored.saved_at.format("%Y-%m-%d %H:%M:%S UTC"));
    Ok(())
}

/// Delete the stored settings after confirmation.
pub(crate) fn reset(store: &SettingsStore, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new("Reset performance settings to defaults?")
            .with_default(false)
            .prompt()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if store.reset()? {
        println!("Settings reset to defaults.");
    } else {
        println!("No stored settings; defaults already apply.");
    }
    Ok(())
}
