use crate::api::client::WorkCodeClient;
use crate::api::models::WorkCodeDraft;
use crate::cli::main_types::WorkCodeCommands;
use crate::core::notify::ChangeNotifier;
use crate::core::services::types::ListParams;
use crate::core::services::work_code_service::WorkCodeService;
use crate::core::services::{CreateService, DeleteService, GetService, ListService, UpdateService};
use crate::display::TableDisplay;
use crate::error::{AppError, CliError};
use crate::storage::config::Profile;
use crate::utils::logging::VerboseLogger;
use crate::utils::validation::{validate_api_key, validate_url};
use std::io::{BufRead, Write};

/// Handler for `work-code` subcommands: builds the client and service from
/// the active profile and renders results as tables.
pub struct WorkCodeHandler {
    service: WorkCodeService,
    display: TableDisplay,
    logger: VerboseLogger,
}

impl WorkCodeHandler {
    pub fn new(
        profile: &Profile,
        api_key: Option<String>,
        verbose: bool,
    ) -> Result<Self, AppError> {
        validate_url(&profile.api_url)?;

        let client = match api_key {
            Some(key) => {
                validate_api_key(&key)?;
                WorkCodeClient::with_api_key(profile.api_url.clone(), key)?
            }
            None => WorkCodeClient::new(profile.api_url.clone())?,
        };

        let mut notifier = ChangeNotifier::new();
        if verbose {
            notifier.subscribe(|event| println!("Verbose: record change: {:?}", event));
        }

        let use_colors = atty::is(atty::Stream::Stdout);

        Ok(Self {
            service: WorkCodeService::new(client, notifier),
            display: TableDisplay::new().with_colors(use_colors),
            logger: VerboseLogger::new(verbose),
        })
    }

    pub async fn handle(&self, command: WorkCodeCommands) -> Result<(), AppError> {
        match command {
            WorkCodeCommands::List {
                search,
                limit,
                full,
            } => self.handle_list(search, limit, full).await,
            WorkCodeCommands::Get { id } => self.handle_get(id).await,
            WorkCodeCommands::Create {
                short_code,
                cost_code,
                project_code,
                name,
                description,
                status,
            } => {
                let draft = WorkCodeDraft {
                    short_work_code: short_code,
                    cost_code,
                    project_code,
                    name,
                    description,
                    status,
                };
                self.handle_create(draft).await
            }
            WorkCodeCommands::Update {
                id,
                short_code,
                cost_code,
                project_code,
                name,
                description,
                status,
            } => {
                self.handle_update(id, short_code, cost_code, project_code, name, description, status)
                    .await
            }
            WorkCodeCommands::Delete { id, yes } => self.handle_delete(id, yes).await,
        }
    }

    async fn handle_list(
        &self,
        search: Option<String>,
        limit: u32,
        full: bool,
    ) -> Result<(), AppError> {
        self.logger.log(&format!(
            "Listing work codes - search: {:?}, limit: {}, full: {}",
            search, limit, full
        ));

        let is_filtered = search.as_deref().is_some_and(|s| !s.trim().is_empty());
        let records = self
            .service
            .list(ListParams {
                search,
                limit: None,
            })
            .await?;

        if is_filtered {
            println!("🔍 Filter applied: {} matching work codes", records.len());
        }

        let display_limit = if full { None } else { Some(limit as usize) };
        let table = self
            .display
            .render_work_code_list_with_limit(&records, display_limit)?;
        println!("{}", table);
        Ok(())
    }

    async fn handle_get(&self, id: u32) -> Result<(), AppError> {
        self.logger.log(&format!("Fetching work code {}", id));
        let record = self.service.get(id).await?;
        let table = self.display.render_work_code_details(&record)?;
        println!("{}", table);
        Ok(())
    }

    async fn handle_create(&self, draft: WorkCodeDraft) -> Result<(), AppError> {
        self.logger.log("Creating work code");
        let created = self.service.create(draft).await?;
        println!(
            "✅ Created work code {} (ID: {})",
            created.short_work_code, created.id
        );
        let table = self.display.render_work_code_details(&created)?;
        println!("{}", table);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    async fn handle_update(
        &self,
        id: u32,
        short_code: Option<String>,
        cost_code: Option<String>,
        project_code: Option<String>,
        name: Option<String>,
        description: Option<String>,
        status: Option<i64>,
    ) -> Result<(), AppError> {
        self.logger.log(&format!("Updating work code {}", id));

        // Merge the provided flags over the current record
        let existing = self.service.get(id).await?;
        let mut draft = existing.to_draft();
        if let Some(v) = short_code {
            draft.short_work_code = v;
        }
        if let Some(v) = cost_code {
            draft.cost_code = v;
        }
        if let Some(v) = project_code {
            draft.project_code = v;
        }
        if let Some(v) = name {
            draft.name = v;
        }
        if let Some(v) = description {
            draft.description = v;
        }
        if let Some(v) = status {
            draft.status = v;
        }

        let updated = self.service.update(id, draft).await?;
        println!(
            "✅ Updated work code {} (ID: {})",
            updated.short_work_code, updated.id
        );
        let table = self.display.render_work_code_details(&updated)?;
        println!("{}", table);
        Ok(())
    }

    async fn handle_delete(&self, id: u32, yes: bool) -> Result<(), AppError> {
        if !yes && !Self::confirm(&format!("Delete work code {}? [y/N]: ", id))? {
            return Err(AppError::Cli(CliError::Cancelled));
        }

        self.logger.log(&format!("Deleting work code {}", id));
        self.service.delete(id).await?;
        println!("✅ Deleted work code {}", id);
        Ok(())
    }

    fn confirm(prompt: &str) -> Result<bool, AppError> {
        print!("{}", prompt);
        std::io::stdout().flush().map_err(|e| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Failed to write prompt: {}",
                e
            )))
        })?;

        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line).map_err(|e| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Failed to read confirmation: {}",
                e
            )))
        })?;

        let answer = line.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
