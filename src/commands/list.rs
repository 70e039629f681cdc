use crate::core::error::PmanError;
use crate::core::output::{Cell, render_table};
use crate::core::schemas::{Bucket, LAST_REFRESH_TIME_KEY};
use crate::core::status::{filter_by_statuses, title_case};
use crate::core::store::Store;
use crate::core::time;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

const MAX_CELL_CHARS: usize = 60;

#[derive(clap::Args, Debug)]
pub struct ListCli {
    /// Only show projects with these statuses (comma separated or repeated)
    #[clap(short = 'f', long = "filter", value_delimiter = ',')]
    pub filter: Vec<String>,
    /// Emit rows as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectRow {
    pub name: String,
    pub aliases: Vec<String>,
    pub status: String,
    pub last_edited: String,
    pub last_edited_ts: i64,
    pub path: String,
}

/// Projects with their status, aliases and last-edited label, most recently
/// edited first. The last-edited cache is rebuilt once a day has passed since
/// the previous refresh.
pub fn list_projects(store: &Store, filter: &[String]) -> Result<Vec<ProjectRow>, PmanError> {
    let paths = store.get_all_records(Bucket::ProjectPaths)?;
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    let mut statuses = store.get_all_records(Bucket::Status)?;
    if !filter.is_empty() {
        statuses = filter_by_statuses(&statuses, filter);
    }

    let mut edited = if refresh_due(store)? {
        time::refresh_last_edited(store)?
    } else {
        store.get_all_records(Bucket::LastEdited)?
    };

    let aliases = aliases_by_project(store)?;

    let mut rows = Vec::with_capacity(statuses.len());
    for (name, status) in statuses {
        let last_edited = edited
            .remove(&name)
            .unwrap_or_else(|| time::get_last_modified_time(store, &name));
        let (label, ts) = time::parse_time(&last_edited);
        rows.push(ProjectRow {
            aliases: aliases.get(&name).cloned().unwrap_or_default(),
            path: paths.get(&name).cloned().unwrap_or_default(),
            name,
            status,
            last_edited: label,
            last_edited_ts: ts,
        });
    }
    rows.sort_by(|a, b| {
        b.last_edited_ts
            .cmp(&a.last_edited_ts)
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(rows)
}

fn refresh_due(store: &Store) -> Result<bool, PmanError> {
    match store.get_record(LAST_REFRESH_TIME_KEY, Bucket::Config) {
        Ok(t) => Ok(time::day_passed(&t)),
        Err(e) if e.is_not_found() => Ok(true),
        Err(e) => Err(e),
    }
}

fn aliases_by_project(store: &Store) -> Result<HashMap<String, Vec<String>>, PmanError> {
    let mut by_project: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (alias, project) in store.get_all_records(Bucket::ProjectAliases)? {
        by_project.entry(project).or_default().push(alias);
    }
    Ok(by_project
        .into_iter()
        .map(|(project, mut aliases)| {
            aliases.sort();
            (project, aliases)
        })
        .collect())
}

fn status_paint(status: &str) -> Option<fn(&str) -> ColoredString> {
    let paint: fn(&str) -> ColoredString = match status {
        "Completed" => |s| s.bright_green(),
        "Ongoing" | "Started" => |s| s.bright_cyan(),
        "Paused" => |s| s.bright_yellow(),
        "Aborted" => |s| s.bright_red(),
        "Idea" | "Not Started" => |s| s.bright_magenta(),
        _ => return None,
    };
    Some(paint)
}

pub fn run_list_cli(store: &Store, cli: ListCli) -> Result<(), PmanError> {
    let rows = list_projects(store, &cli.filter)?;

    if cli.json {
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|e| PmanError::ValidationError(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    if rows.is_empty() {
        if cli.filter.is_empty() {
            println!("No projects indexed yet. Run `pman init <dir>` to index a directory.");
        } else {
            println!("No projects with status {}", cli.filter.join(", "));
        }
        return Ok(());
    }

    let table: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            let status = title_case(&row.status);
            let status_cell = match status_paint(&status) {
                Some(paint) => Cell::painted(status, paint),
                None => Cell::plain(status),
            };
            vec![
                Cell::plain(row.name.as_str()),
                Cell::plain(row.aliases.join(", ")),
                status_cell,
                Cell::plain(row.last_edited.as_str()),
            ]
        })
        .collect();
    print!(
        "{}",
        render_table(
            &["Project", "Alias", "Status", "Last Edited"],
            &table,
            MAX_CELL_CHARS
        )
    );
    Ok(())
}
