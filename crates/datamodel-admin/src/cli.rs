//! datamodel-admin - edit table metadata from the terminal
//!
//! Loads a JSON catalog, drives the metadata table editor the way a user
//! would (type into an input and leave it, or click a visibility label), and
//! prints the rendered editor.

mod logging;
mod render;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;

use datamodel_core::{Catalog, DatabaseId, EntityStore, MemoryBackend, TableId, VisibilityType};
use datamodel_metadata_table::{MetadataTable, MetadataTableLoader, SaveStatus};

use crate::logging::LoggingConfig;
use crate::settings::AdminSettings;

#[derive(Parser, Debug)]
#[command(name = "datamodel-admin")]
#[command(version, about = "Edit table metadata in a data-model catalog", long_about = None)]
struct Cli {
    /// Catalog JSON file (defaults to the settings file, then the data directory)
    #[arg(long, env = "DATAMODEL_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Show a table's metadata
    Show {
        /// Database id
        db: i64,
        /// Table id
        table: i64,
    },

    /// Set a table's display name
    Rename { db: i64, table: i64, name: String },

    /// Set a table's description; an empty string clears it
    Describe { db: i64, table: i64, text: String },

    /// Set a table's visibility: queryable, hidden, technical or cruft
    Visibility {
        db: i64,
        table: i64,
        #[arg(value_parser = parse_visibility)]
        visibility: Visibility,
    },
}

/// Parsed visibility argument; queryable is `None`
#[derive(Debug, Clone, Copy, PartialEq)]
struct Visibility(Option<VisibilityType>);

fn parse_visibility(value: &str) -> Result<Visibility, String> {
    VisibilityType::parse_option(value)
        .map(Visibility)
        .map_err(|e| e.to_string())
}

impl Command {
    fn ids(&self) -> (DatabaseId, TableId) {
        let (db, table) = match self {
            Command::Show { db, table }
            | Command::Rename { db, table, .. }
            | Command::Describe { db, table, .. }
            | Command::Visibility { db, table, .. } => (*db, *table),
        };
        (DatabaseId(db), TableId(table))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = AdminSettings::load()?;

    let _guard = logging::init(LoggingConfig::from_settings(&settings.logging, cli.verbose))?;

    let catalog_path = settings.catalog_path(cli.catalog)?;
    let output = run(&catalog_path, &cli.command).await?;
    print!("{}", output);
    Ok(())
}

/// Execute `command` against the catalog at `catalog_path` and return the
/// rendered editor. The file is rewritten only when the catalog changed.
async fn run(catalog_path: &Path, command: &Command) -> Result<String> {
    let catalog = Catalog::load(catalog_path)
        .with_context(|| format!("Failed to load catalog from {:?}", catalog_path))?;
    let backend = Arc::new(MemoryBackend::new(catalog.clone()));
    let runtime = Handle::current();
    let loader = MetadataTableLoader::new(EntityStore::new(backend.clone(), runtime.clone()));

    let (database_id, table_id) = command.ids();
    let props = loader
        .load(database_id, table_id, loader.backend_callbacks(runtime.clone()))
        .await?;

    let mut editor = MetadataTable::new(props, runtime);
    editor.mount();
    loader.store().settle().await;
    let props = loader.reload(editor.props()).await?;
    editor.set_props(props);

    match command {
        Command::Show { .. } => {}
        Command::Rename { name, .. } => {
            editor.focus_name();
            editor.input_name(name.as_str());
            editor.blur_name();
        }
        Command::Describe { text, .. } => {
            editor.focus_description();
            editor.input_description(text.as_str());
            editor.blur_description();
        }
        Command::Visibility { visibility, .. } => {
            let target = visibility.0;
            // Reasons are only offered once the table is hidden
            if target.is_some_and(|v| v != VisibilityType::Hidden) && !editor.is_hidden() {
                editor.on_visibility_click(Some(VisibilityType::Hidden));
                editor.settle().await;
                let props = loader.reload(editor.props()).await?;
                editor.set_props(props);
            }
            anyhow::ensure!(
                editor.on_visibility_click(target),
                "Visibility {:?} is not available for table {}",
                target,
                table_id
            );
        }
    }

    editor.settle().await;
    if let SaveStatus::Failed(error) = editor.save_status() {
        anyhow::bail!("Failed to save table {}: {}", table_id, error);
    }

    // Rejected edits leave the catalog as it was; keep the file untouched
    let updated = backend.snapshot();
    if updated != catalog {
        updated
            .save(catalog_path)
            .with_context(|| format!("Failed to write catalog to {:?}", catalog_path))?;
        tracing::info!(table_id = %table_id, "catalog saved");
    }

    let props = loader.reload(editor.props()).await?;
    editor.set_props(props);
    let tree = editor
        .render()
        .with_context(|| format!("Table {} did not render", table_id))?;
    Ok(render::render_text(&tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const CATALOG: &str = indoc! {r#"
        {
          "databases": [{ "id": 1, "name": "Sample" }],
          "tables": [
            {
              "id": 10, "db_id": 1, "name": "ORDERS", "display_name": "Orders",
              "fields": [
                { "id": 100, "table_id": 10, "name": "ID", "display_name": "ID", "semantic_type": "type/PK" }
              ]
            }
          ]
        }
    "#};

    fn catalog_file() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, CATALOG).unwrap();
        (dir, path)
    }

    #[test]
    fn parses_visibility_arguments() {
        let cli = Cli::try_parse_from(["datamodel-admin", "visibility", "1", "10", "queryable"])
            .unwrap();
        assert_eq!(
            cli.command,
            Command::Visibility {
                db: 1,
                table: 10,
                visibility: Visibility(None)
            }
        );

        let cli = Cli::try_parse_from([
            "datamodel-admin",
            "--catalog",
            "c.json",
            "visibility",
            "1",
            "10",
            "Technical",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("c.json")));
        assert_eq!(
            cli.command,
            Command::Visibility {
                db: 1,
                table: 10,
                visibility: Visibility(Some(VisibilityType::Technical))
            }
        );

        assert!(Cli::try_parse_from(["datamodel-admin", "visibility", "1", "10", "secret"]).is_err());
    }

    #[tokio::test]
    async fn show_renders_without_writing() {
        let (_dir, path) = catalog_file();

        let output = run(&path, &Command::Show { db: 1, table: 10 }).await.unwrap();

        assert!(output.starts_with("# Orders\n(No table description yet)\n"), "{}", output);
        assert!(output.contains("[x] Queryable  [ ] Hidden"));
        assert!(output.contains("Columns"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CATALOG);
    }

    #[tokio::test]
    async fn rename_and_hide_persist_to_catalog() {
        let (_dir, path) = catalog_file();

        let output = run(
            &path,
            &Command::Rename {
                db: 1,
                table: 10,
                name: "Purchases".into(),
            },
        )
        .await
        .unwrap();
        assert!(output.starts_with("# Purchases\n"));

        run(
            &path,
            &Command::Visibility {
                db: 1,
                table: 10,
                visibility: Visibility(Some(VisibilityType::Cruft)),
            },
        )
        .await
        .unwrap();

        let saved = Catalog::load(&path).unwrap();
        assert_eq!(saved.tables[0].display_name, "Purchases");
        assert_eq!(saved.tables[0].visibility_type, Some(VisibilityType::Cruft));
    }

    #[tokio::test]
    async fn reason_hides_queryable_table_first() {
        let (_dir, path) = catalog_file();

        let output = run(
            &path,
            &Command::Visibility {
                db: 1,
                table: 10,
                visibility: Visibility(Some(VisibilityType::Technical)),
            },
        )
        .await
        .unwrap();

        assert!(output.contains("[ ] Queryable  [x] Hidden"), "{}", output);
        assert!(output.contains("  [x] Technical Data  [ ] Irrelevant/Cruft"), "{}", output);
        assert_eq!(
            Catalog::load(&path).unwrap().tables[0].visibility_type,
            Some(VisibilityType::Technical)
        );
    }

    #[tokio::test]
    async fn queryable_clears_visibility() {
        let (_dir, path) = catalog_file();
        let hide = Command::Visibility {
            db: 1,
            table: 10,
            visibility: Visibility(Some(VisibilityType::Hidden)),
        };
        run(&path, &hide).await.unwrap();

        let show = Command::Visibility {
            db: 1,
            table: 10,
            visibility: Visibility(None),
        };
        let output = run(&path, &show).await.unwrap();

        assert!(output.contains("[x] Queryable  [ ] Hidden"), "{}", output);
        assert!(!output.contains("WHY HIDE?"));
        assert_eq!(Catalog::load(&path).unwrap().tables[0].visibility_type, None);
    }

    #[tokio::test]
    async fn empty_rename_keeps_current_name() {
        let (_dir, path) = catalog_file();

        let output = run(
            &path,
            &Command::Rename {
                db: 1,
                table: 10,
                name: String::new(),
            },
        )
        .await
        .unwrap();

        assert!(output.starts_with("# Orders\n"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CATALOG);
    }
}
