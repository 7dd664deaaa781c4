use crate::request_file::RequestFile;
use libgraphql_writer::Definition;
use libgraphql_writer::Document;
use libgraphql_writer::GraphQLRequest;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use walkdir::WalkDir;

const GREEN_CHECK: &str = "\u{2705}";
const RED_X: &str = "\u{274C}";

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// The GraphQL request text.
    Text,

    /// A JSON request payload (`query`, `operationName`, `variables`).
    Json,
}

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        default_value_t=OutputFormat::Text,
        help="What to print for each request file.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        default_values_t=[
            "json".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    request_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more request description files or directories \
             containing request description files to render.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl RenderCmd {
    pub(crate) async fn run(self) -> RenderReport {
        let mut errors: Vec<String> = vec![];
        let file_paths = self.collect_file_paths(&mut errors);
        log::debug!(
            "Found {} request files to be rendered.",
            file_paths.len(),
        );

        let mut rendered = vec![];
        for path in &file_paths {
            let result = match read_request_file(path).await {
                Ok(request_file) => self.render(request_file),
                Err(e) => Err(e),
            };
            match result {
                Ok(text) => {
                    log::debug!("Rendered {path:#?}.");
                    rendered.push(text);
                },
                Err(e) => errors.push(format!("{path:#?}: {e:#}")),
            }
        }

        RenderReport { errors, rendered }
    }

    /// Find all request files recursively located at or under each path
    /// passed as an arg.
    fn collect_file_paths(
        &self,
        errors: &mut Vec<String>,
    ) -> Vec<PathBuf> {
        let request_file_exts: HashSet<String> =
            self.request_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            // A file named explicitly is rendered whatever its extension.
            if path.is_file() {
                file_paths.push(path.to_owned());
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && request_file_exts.contains(&*ext) {
                            file_paths.push(path.to_owned());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(format!("{path:#?}: {e}"));
                    },
                }
            }
        }
        file_paths
    }

    fn render(&self, request_file: RequestFile) -> anyhow::Result<String> {
        let variables = request_file.variables.to_owned();
        let mut definitions = request_file.into_definitions()?;

        // A lone definition is rendered as-is; several are wrapped in a
        // document.
        let mut request = if definitions.len() == 1 {
            let definition: Definition = definitions.remove(0);
            match self.format {
                OutputFormat::Text => return Ok(definition.to_graphql()),
                OutputFormat::Json => GraphQLRequest::from_definition(&definition),
            }
        } else {
            let document = Document::new(definitions);
            match self.format {
                OutputFormat::Text => return Ok(document.to_graphql()),
                OutputFormat::Json => GraphQLRequest::new(&document),
            }
        };
        request.variables = variables;
        Ok(request.to_json()?)
    }
}

async fn read_request_file(path: &Path) -> anyhow::Result<RequestFile> {
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&contents)?)
}

/// What a `render` run produced: one rendering per request file, and one
/// message per file that failed.
#[derive(Debug, Default)]
pub(crate) struct RenderReport {
    pub errors: Vec<String>,
    pub rendered: Vec<String>,
}
impl RenderReport {
    /// The text for stdout, or the failure message for stderr. Any failed
    /// file fails the whole run.
    pub(crate) fn outcome(&self) -> Result<String, String> {
        if !self.errors.is_empty() {
            return Err(format!(
                "{RED_X} Failed to render {} request files:\n  * {}",
                self.errors.len(),
                self.errors.join("\n  * "),
            ));
        }
        if self.rendered.is_empty() {
            return Err(format!("{RED_X} No request files found."));
        }
        Ok(self.rendered.join("\n"))
    }

    pub(crate) fn report(self) -> ExitCode {
        match self.outcome() {
            Ok(stdout) => {
                log::info!(
                    "{GREEN_CHECK} Rendered {} request files.",
                    self.rendered.len(),
                );
                println!("{stdout}");
                ExitCode::SUCCESS
            },
            Err(stderr) => {
                eprintln!("{stderr}");
                ExitCode::FAILURE
            },
        }
    }
}
