//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the database pool, the repositories and the
//! `StandupService` on top of them.

use anyhow::Result;
use standup_core::{DatabaseConfig, Repos, StandupService};
use standup_db::CoreFactory;
use tracing::debug;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The standup service.
    pub service: StandupService,
    /// URL of the database the context is connected to.
    pub database_url: String,
}

impl CliContext {
    /// Access the standup service.
    pub const fn service(&self) -> &StandupService {
        &self.service
    }

    /// Access the repositories behind the service.
    pub const fn repos(&self) -> &Repos {
        self.service.repos()
    }
}

/// Bootstrap the CLI application.
///
/// Opens (and if needed creates) the database described by `config`,
/// applies the schema and assembles the service.
pub async fn bootstrap(config: &DatabaseConfig) -> Result<CliContext> {
    let pool = CoreFactory::create_pool(config).await?;
    debug!(url = %config.url, "database ready");

    Ok(CliContext {
        service: CoreFactory::build_service(pool),
        database_url: config.url.clone(),
    })
}

/// Bootstrap with custom repos (for testing).
pub fn bootstrap_with(repos: Repos, database_url: impl Into<String>) -> CliContext {
    CliContext {
        service: StandupService::new(repos),
        database_url: database_url.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standup_core::StandupUser;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_bootstrap_creates_database_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("standup.db");
        let config = DatabaseConfig::new(format!("sqlite://{}", path.display()));

        let ctx = bootstrap(&config).await.unwrap();
        assert!(path.exists());
        assert_eq!(ctx.database_url, config.url);

        let user = ctx
            .service()
            .join_channel(StandupUser::new("bob", "C1", "general"))
            .await
            .unwrap();
        assert_eq!(ctx.repos().users.find("bob").await.unwrap(), user);
    }
}
