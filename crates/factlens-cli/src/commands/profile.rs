//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use factlens_sdk::ClientConfig;

/// Execute the profile command.
pub async fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => switch_profile(config, name, formatter),
        ProfileAction::Set { name, url } => set_profile(config, name, url, formatter),
        ProfileAction::Delete { name } => delete_profile(config, name, formatter),
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    println!("Available profiles:");
    for (name, profile) in &config.profiles {
        if name == &config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        println!("    URL: {}", profile.api_url);
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    println!("  URL: {}", profile.api_url);

    Ok(())
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    config.save()?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
fn set_profile(config: &mut Config, name: String, url: String, formatter: &Formatter) -> Result<()> {
    ClientConfig::new(url.clone()).validate()?;

    let action = if config.profiles.contains_key(&name) {
        "Updated"
    } else {
        "Created"
    };

    config.set_profile(name.clone(), Profile { api_url: url });
    config.save()?;

    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, name))
    );

    Ok(())
}

/// Delete a profile.
fn delete_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    if name == config.active_profile {
        return Err(CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(&name).is_some() {
        config.save()?;
        println!(
            "{}",
            formatter.success(&format!("Deleted profile '{}'", name))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn temp_config(dir: &tempfile::TempDir) -> Config {
        Config::load_from(&dir.path().join("config.toml")).unwrap()
    }

    #[test]
    fn test_set_and_switch_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_profile(
            &mut config,
            "staging".to_string(),
            "https://staging.example.com".to_string(),
            &formatter,
        )
        .unwrap();
        assert!(config.profiles.contains_key("staging"));

        switch_profile(&mut config, "staging".to_string(), &formatter).unwrap();
        assert_eq!(config.active_profile, "staging");

        let reloaded = temp_config(&dir);
        assert_eq!(reloaded.active_profile, "staging");
    }

    #[test]
    fn test_set_profile_rejects_bad_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = set_profile(&mut config, "bad".to_string(), "nope".to_string(), &formatter);
        assert!(result.is_err());
        assert!(!config.profiles.contains_key("bad"));
    }

    #[test]
    fn test_delete_active_profile() {
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = delete_profile(&mut config, "default".to_string(), &formatter);
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
    }
}
