use anstream::println;
use flexver::{Component, FlexVer};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::OutputFormat;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

type Result<T> = miette::Result<T, Error>;

#[derive(Serialize)]
struct Decomposition<'a> {
    version: &'a str,
    components: &'a [Component],
    build_metadata: Option<&'a str>,
}

fn render_component(component: &Component) -> String {
    match component {
        Component::Numeric(text) => text.cyan().to_string(),
        Component::Lexical(text) => text.magenta().to_string(),
        Component::SemverPrerelease(text) => text.red().to_string(),
    }
}

/// Components separated by spaces, followed by the ignored build metadata.
fn render(version: &FlexVer) -> String {
    let mut parts: Vec<String> = version.components().iter().map(render_component).collect();
    if let Some(metadata) = version.build_metadata() {
        parts.push(format!("+{metadata}").dimmed().to_string());
    }
    parts.join(" ")
}

pub fn decompose(version: &str, format: OutputFormat) -> Result<()> {
    let version = FlexVer::new(version);

    match format {
        OutputFormat::Text => println!("{}", render(&version)),
        OutputFormat::Json => {
            let decomposition = Decomposition {
                version: version.as_str(),
                components: version.components(),
                build_metadata: version.build_metadata(),
            };
            println!("{}", serde_json::to_string_pretty(&decomposition)?);
        }
    }

    Ok(())
}
