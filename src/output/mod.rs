//! Output generation for the hdevelop CLI application

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use hdevelop::formatting::{code_fragments, parameter_fragments, render, Render, Syntax};
use hdevelop::notebook::{CellRole, Cells};

static TEMPLATE: &str = r#"{{ for cell in cells }}{cell.heading}
{cell.content}
{{ endfor }}"#;

#[derive(Serialize)]
struct Cell {
    heading: String,
    content: String,
}

#[derive(Serialize)]
struct Context {
    cells: Vec<Cell>,
}

/// List the cells of a notebook one after the other, each under a heading
/// naming its role and language.
pub fn listing(cells: &Cells, renderer: &impl Render) -> Result<String, tinytemplate::error::Error> {
    let cells = cells
        .iter()
        .map(|(role, text)| {
            let fragments = match role {
                CellRole::Parameters(_) => parameter_fragments(text),
                CellRole::Code => code_fragments(text),
            };
            Cell {
                heading: renderer.style(
                    Syntax::Heading,
                    &format!("-- {} ({})", role, role.language()),
                ),
                content: render(renderer, fragments),
            }
        })
        .collect();

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("listing", TEMPLATE)?;

    let rendered = tt.render("listing", &Context { cells })?;
    debug!("Rendered listing of {} bytes", rendered.len());

    Ok(rendered)
}

/// The cells as a JSON object, for handing to another program.
pub fn json(cells: &Cells) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(cells)
}
