//! Command handlers.
//!
//! Every handler returns a JSON value; `main` prints it. Handlers are
//! generic over the storage backend so tests can drive them in memory.

use std::path::{Path, PathBuf};

use academy_core::{AcademyConfig, Catalog, LearnerSession};
use academy_progress::{FileStorage, KeyValueStorage, ProgressStore};
use academy_types::{BadgeId, MentorId, NodeId, PathId};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::cli::{Command, MentorCommand};
use crate::error::CliError;

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "academy-config.yaml";

/// Load configuration from `explicit`, else the default file, else defaults.
///
/// Returns the config together with the file it came from, `None` when
/// defaults were used. Environment overrides apply in every case.
pub fn load_config(explicit: Option<&Path>) -> Result<(AcademyConfig, Option<PathBuf>), CliError> {
    if let Some(path) = explicit {
        return Ok((AcademyConfig::from_file(path)?, Some(path.to_path_buf())));
    }
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return Ok((
            AcademyConfig::from_file(default_path)?,
            Some(default_path.to_path_buf()),
        ));
    }
    let mut config = AcademyConfig::default();
    config.apply_env_overrides()?;
    Ok((config, None))
}

/// Open a file-backed session for `config`, honouring `--data-dir`.
pub fn open_session(
    config: AcademyConfig,
    data_dir: Option<PathBuf>,
) -> Result<LearnerSession<FileStorage>, CliError> {
    let data_dir = data_dir.unwrap_or_else(|| PathBuf::from(&config.storage.data_dir));
    let catalog = Catalog::from_config(config.catalog)?;
    let storage = FileStorage::open(data_dir)?;
    info!(
        data_dir = %storage.root().display(),
        key = config.progress.storage_key,
        "progress storage opened"
    );
    let store = ProgressStore::open(storage, config.progress);
    Ok(LearnerSession::new(store, catalog))
}

/// Run one command against `session`.
pub fn run<S: KeyValueStorage>(
    session: &mut LearnerSession<S>,
    command: Command,
) -> Result<Value, CliError> {
    let output = match command {
        Command::Status => serde_json::to_value(session.summary())?,
        Command::Catalog => {
            let catalog = session.catalog();
            json!({
                "defaultPath": catalog.default_path(),
                "paths": catalog.paths(),
                "badges": catalog.badges(),
                "nodes": catalog.nodes(),
                "mentors": catalog.mentors(),
            })
        }
        Command::SelectPath { id } => {
            serde_json::to_value(session.select_path(&PathId::new(id))?)?
        }
        Command::Start { node } => serde_json::to_value(session.start_node(&NodeId::new(node))?)?,
        Command::Complete { node } => {
            serde_json::to_value(session.complete_node(&NodeId::new(node))?)?
        }
        Command::Award { badge } => {
            let id = BadgeId::new(badge);
            let newly_awarded = session.award_badge(&id)?;
            json!({ "badge": id, "newlyAwarded": newly_awarded })
        }
        Command::Points { amount } => {
            let changed = session.add_points(amount);
            json!({ "changed": changed, "points": session.state().points() })
        }
        Command::Mentor(MentorCommand::Request { id }) => {
            serde_json::to_value(session.request_mentor(&MentorId::new(id))?)?
        }
        Command::Mentor(MentorCommand::End) => {
            let ended = session.end_mentorship();
            json!({ "ended": ended, "mentorStatus": session.state().mentor_status() })
        }
    };

    if !session.store().is_persisted() {
        warn!(
            status = ?session.store().save_status(),
            "progress kept in memory only; it will be lost when this command exits"
        );
    }
    Ok(output)
}
