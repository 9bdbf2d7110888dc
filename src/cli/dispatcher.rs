use crate::cli::main_types::{Commands, ConfigCommands, WorkCodeCommands};
use crate::cli::work_code_handler::WorkCodeHandler;
use crate::error::{AppError, CliError, ConfigError};
use crate::storage::config::{Config, Profile};
use crate::utils::validation::validate_url;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    profile_name: String,
    verbose: bool,
    api_key: Option<String>,
}

impl Dispatcher {
    // Static helper function for verbose logging (used before self exists)
    fn print_verbose(verbose: bool, msg: &str) {
        if verbose {
            println!("Verbose: {}", msg);
        }
    }

    // Instance method for verbose logging
    fn log_verbose(&self, msg: &str) {
        Self::print_verbose(self.verbose, msg);
    }

    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        profile_name: String,
        verbose: bool,
        api_key: Option<String>,
    ) -> Self {
        Self::print_verbose(verbose, &format!("Using profile: {}", profile_name));

        Self {
            config,
            config_path,
            profile_name,
            verbose,
            api_key,
        }
    }

    pub async fn dispatch(&mut self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::WorkCode { command } => self.handle_work_code_command(command).await,
            Commands::Config { command } => self.handle_config_command(command).await,
        }
    }

    fn active_profile(&self) -> Result<&Profile, AppError> {
        self.config.get_profile(&self.profile_name).ok_or_else(|| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Profile '{}' not found. Please configure a profile first.",
                self.profile_name
            )))
        })
    }

    async fn handle_work_code_command(
        &self,
        command: WorkCodeCommands,
    ) -> Result<(), AppError> {
        self.log_verbose(&format!("Attempting work-code command: {:?}", command));

        let profile = self.active_profile()?;
        let handler = WorkCodeHandler::new(profile, self.api_key.clone(), self.verbose)?;
        handler.handle(command).await
    }

    async fn handle_config_command(&mut self, commands: ConfigCommands) -> Result<(), AppError> {
        match commands {
            ConfigCommands::Show => {
                self.log_verbose("Attempting config show command");

                println!("Current Configuration:");
                println!("=====================");

                if let Some(default_profile) = &self.config.default_profile {
                    println!("Default Profile: {}", default_profile);
                } else {
                    println!("Default Profile: (not set)");
                }

                println!("\nProfiles:");
                if self.config.profiles.is_empty() {
                    println!("  No profiles configured");
                } else {
                    for (name, profile) in &self.config.profiles {
                        println!("  [{}]", name);
                        println!("    API URL: {}", profile.api_url);
                        if let Some(timeout) = profile.timeout_seconds {
                            println!("    Timeout: {} seconds", timeout);
                        }
                    }
                }

                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.log_verbose(&format!(
                    "Attempting config set - key: {}, value: {}",
                    key, value
                ));

                self.apply_config_value(&key, &value)?;
                self.config.save(self.config_path.clone())?;
                println!("✅ Set {} = {}", key, value);
                Ok(())
            }
        }
    }

    fn apply_config_value(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        match key {
            "default_profile" => {
                self.config.default_profile = Some(value.to_string());
                Ok(())
            }
            "api_url" => {
                validate_url(value)?;
                let profile = self
                    .config
                    .profiles
                    .entry(self.profile_name.clone())
                    .or_insert_with(|| Profile {
                        api_url: String::new(),
                        timeout_seconds: None,
                    });
                profile.api_url = value.to_string();
                Ok(())
            }
            "timeout_seconds" => {
                let timeout: u64 = value.parse().map_err(|_| {
                    AppError::Config(ConfigError::InvalidValue {
                        field: "timeout_seconds".to_string(),
                        value: value.to_string(),
                        reason: "expected a positive integer".to_string(),
                    })
                })?;
                let profile = self
                    .config
                    .profiles
                    .entry(self.profile_name.clone())
                    .or_insert_with(|| Profile {
                        api_url: String::new(),
                        timeout_seconds: None,
                    });
                profile.timeout_seconds = Some(timeout);
                Ok(())
            }
            _ => Err(AppError::Cli(CliError::InvalidArguments(format!(
                "Unknown configuration key: {}",
                key
            )))),
        }
    }
}
