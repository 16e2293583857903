//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{Settings, SourceConfig};
use crate::error::{Error, Result};
use crate::filter::{check_unique_ids, fetch_by_organization, fetch_by_organization_paginated};
use crate::source::FolderSource;
use crate::types::{FetchFolderRequest, OrgId};
use serde_json::{json, Value};
use std::collections::HashSet;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its messages
    pub async fn run(&self) -> Result<()> {
        let settings = self.load_settings()?;
        let source = self.build_source(&settings)?;

        for msg in self.execute(&settings, source.as_ref()).await? {
            self.output_message(&msg);
        }
        Ok(())
    }

    /// Execute the CLI command against `source`, returning the messages to print
    pub async fn execute(
        &self,
        settings: &Settings,
        source: &dyn FolderSource,
    ) -> Result<Vec<Value>> {
        debug!(source = source.name(), "Running command");
        match &self.cli.command {
            Commands::Fetch { org_id } => self.fetch(source, *org_id).await,
            Commands::Page {
                org_id,
                page_size,
                page,
            } => {
                let page_size = page_size.unwrap_or(settings.page_size);
                self.page(source, *org_id, page_size, *page).await
            }
            Commands::Validate => self.validate(source).await,
        }
    }

    /// Load settings from the configured file, or defaults
    fn load_settings(&self) -> Result<Settings> {
        match &self.cli.config {
            Some(path) => Settings::from_file(path),
            None => Ok(Settings::default()),
        }
    }

    /// Pick the record source: command-line overrides win over settings
    fn build_source(&self, settings: &Settings) -> Result<Box<dyn FolderSource>> {
        let mut settings = settings.clone();
        if let Some(path) = &self.cli.data {
            settings.source = Some(SourceConfig::File { path: path.clone() });
        } else if let Some(url) = &self.cli.url {
            settings.source = Some(SourceConfig::Http { url: url.clone() });
        }
        settings.build_source()
    }

    /// Print every folder of an organization
    async fn fetch(&self, source: &dyn FolderSource, org_id: OrgId) -> Result<Vec<Value>> {
        let response = fetch_by_organization(source, &FetchFolderRequest::new(org_id)).await?;

        Ok(vec![json!({
            "type": "FOLDERS",
            "org_id": org_id,
            "count": response.len(),
            "folders": response.folders
        })])
    }

    /// Print folders page by page, or a single page when `page` is given
    async fn page(
        &self,
        source: &dyn FolderSource,
        org_id: OrgId,
        page_size: usize,
        page: Option<i64>,
    ) -> Result<Vec<Value>> {
        let (response, mut paginator) =
            fetch_by_organization_paginated(source, &FetchFolderRequest::new(org_id), page_size)
                .await?;

        let mut messages = Vec::new();
        let rounds = match page {
            Some(page) => {
                paginator.set_page(page)?;
                1
            }
            None => paginator.page_count(),
        };

        for _ in 0..rounds {
            let served = paginator.current_page();
            let (folders, next_page) = paginator.request_page();
            messages.push(json!({
                "type": "PAGE",
                "page": served,
                "next_page": next_page,
                "folders": folders
            }));
        }

        info!(
            org_id = %org_id,
            pages = paginator.page_count(),
            printed = messages.len(),
            "Paged folders"
        );

        messages.push(json!({
            "type": "SUMMARY",
            "org_id": org_id,
            "total_records": response.len(),
            "page_size": paginator.page_size(),
            "page_count": paginator.page_count()
        }));
        Ok(messages)
    }

    /// Check folder ids across the whole source
    async fn validate(&self, source: &dyn FolderSource) -> Result<Vec<Value>> {
        let records = source
            .fetch_all()
            .await
            .map_err(|e| Error::source_failure(source.name(), e))?;
        check_unique_ids(&records)?;

        let organizations: HashSet<OrgId> = records.iter().map(|f| f.org_id).collect();
        Ok(vec![json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Source '{}' is valid: {} folders across {} organizations, all ids unique",
                    source.name(),
                    records.len(),
                    organizations.len()
                )
            }
        })])
    }

    /// Output a message in the configured format
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
