use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use gqlfront::GraphQLError;
use gqlfront::ParseOptions;
use gqlfront::Source;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable reports with source excerpts.
    #[default]
    Text,

    /// One JSON object per failing file, in the GraphQL response error
    /// shape.
    Json,
}

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Parse without recording source locations on AST nodes.",
        long,
    )]
    no_location: bool,

    #[arg(
        default_value_t=ParseOptions::DEFAULT_MAX_NESTING_DEPTH,
        help="Maximum nesting depth of selection sets, list/object values \
             and list types.",
        long,
    )]
    max_nesting_depth: usize,

    #[arg(
        default_value_t,
        help="How to print diagnostics.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
struct DocumentStats {
    operations: usize,
    fragments: usize,
    type_system_definitions: usize,
}

#[derive(Debug)]
enum FileOutcome {
    Parsed(DocumentStats),
    Invalid(GraphQLError),
    Unreadable(anyhow::Error),
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let options = ParseOptions::default()
            .with_no_location(self.no_location)
            .with_max_nesting_depth(self.max_nesting_depth);

        let (file_paths, num_non_graphql_files, walk_errors) = self.collect_file_paths();
        if !walk_errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while searching for GraphQL files: {walk_errors:#?}",
                output_utils::RED_X,
            ));
        }

        log::debug!(
            "Found {} GraphQL files to be checked.",
            file_paths.len(),
        );

        let mut tasks = Vec::with_capacity(file_paths.len());
        for path in file_paths {
            tasks.push(tokio::task::spawn_blocking(move || {
                let outcome = check_file(&path, options);
                (path, outcome)
            }));
        }

        let mut reports = Vec::with_capacity(tasks.len());
        for task in tasks {
            match task.await {
                Ok(report) => reports.push(report),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} A check task failed to complete: {e}",
                    output_utils::RED_X,
                )),
            }
        }

        let num_failures = reports
            .iter()
            .filter(|(_, outcome)| !matches!(outcome, FileOutcome::Parsed(_)))
            .count();
        if num_failures > 0 {
            return match self.format {
                OutputFormat::Text => CommandResult::stderr(format_args!(
                    "{}\n\n{} {num_failures} of {} files failed to parse.",
                    text_report(&reports),
                    output_utils::RED_X,
                    reports.len(),
                )),
                OutputFormat::Json => CommandResult::failure_stdout(format_args!(
                    "{}",
                    json_report(&reports),
                )),
            };
        }

        let mut totals = DocumentStats::default();
        for (_, outcome) in &reports {
            if let FileOutcome::Parsed(stats) = outcome {
                totals.operations += stats.operations;
                totals.fragments += stats.fragments;
                totals.type_system_definitions += stats.type_system_definitions;
            }
        }
        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Parsed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} type system definitions.\n",
                "  * Found {} operations.\n",
                "  * Found {} fragments.",
            ),
            output_utils::GREEN_CHECK,
            reports.len(),
            num_non_graphql_files,
            totals.type_system_definitions,
            totals.operations,
            totals.fragments,
        ))
    }
}

impl CheckCmd {
    /// Finds all GraphQL files recursively located at or under each path
    /// passed as an arg.
    pub(super) fn collect_file_paths(&self) -> (Vec<PathBuf>, usize, Vec<anyhow::Error>) {
        let mut errors = vec![];

        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        let has_graphql_ext = path
                            .extension()
                            .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
                        if has_graphql_ext {
                            match std::fs::canonicalize(path) {
                                Ok(canonical) => file_paths.push(canonical),
                                Err(e) => errors.push(anyhow::Error::new(e).context(
                                    format!("Failed to resolve {path:#?}"),
                                )),
                            }
                        } else {
                            num_non_graphql_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        // A single file path given explicitly is checked even when its
        // extension isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_non_graphql_files = num_non_graphql_files.saturating_sub(1);
            file_paths.push(first_arg_path.clone());
        }

        (file_paths, num_non_graphql_files, errors)
    }
}

fn check_file(path: &Path, options: ParseOptions) -> FileOutcome {
    let body = match std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
    {
        Ok(body) => body,
        Err(e) => return FileOutcome::Unreadable(e),
    };

    let source = Source::new(path.display().to_string(), body);
    match gqlfront::parse(&source, options) {
        Ok(document) => {
            let operations = document.operations().count();
            let fragments = document.fragments().count();
            log::debug!(
                "Parsed {} definitions from {}.",
                document.definitions.len(),
                path.display(),
            );
            FileOutcome::Parsed(DocumentStats {
                operations,
                fragments,
                type_system_definitions: document.definitions.len() - operations - fragments,
            })
        },
        Err(e) => {
            log::debug!("Failed to parse {}: {e}", path.display());
            FileOutcome::Invalid(e)
        },
    }
}

fn text_report(reports: &[(PathBuf, FileOutcome)]) -> String {
    reports
        .iter()
        .filter_map(|(_, outcome)| match outcome {
            FileOutcome::Parsed(_) => None,
            FileOutcome::Invalid(e) => Some(e.format_detailed()),
            FileOutcome::Unreadable(e) => Some(format!("{e:#}")),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn json_report(reports: &[(PathBuf, FileOutcome)]) -> String {
    let failures: Vec<serde_json::Value> = reports
        .iter()
        .filter_map(|(path, outcome)| {
            let errors = match outcome {
                FileOutcome::Parsed(_) => return None,
                FileOutcome::Invalid(e) => serde_json::to_value(e.to_formatted())
                    .unwrap_or_else(|_| serde_json::json!({ "message": e.display_message() })),
                FileOutcome::Unreadable(e) => serde_json::json!({ "message": format!("{e:#}") }),
            };
            Some(serde_json::json!({
                "file": path.display().to_string(),
                "errors": [errors],
            }))
        })
        .collect();

    serde_json::to_string_pretty(&failures)
        .unwrap_or_else(|e| format!("{{\"message\": \"Failed to serialize report: {e}\"}}"))
}
