//! `clara personas` -- list the selectable personas.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use clara_types::config::GlobalConfig;
use clara_types::persona::Persona;

/// Print the persona table (or JSON with `--json`).
pub fn list_personas(config: &GlobalConfig, json: bool) -> Result<()> {
    if json {
        let personas: Vec<_> = Persona::ALL
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.to_string(),
                    "tagline": p.tagline(),
                    "default": *p == config.default_persona,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&personas)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Persona").fg(Color::White),
        Cell::new("Focus").fg(Color::White),
        Cell::new("Default").fg(Color::White),
    ]);

    for persona in Persona::ALL {
        let default_marker = if persona == config.default_persona {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(persona.to_string()).fg(Color::Cyan),
            Cell::new(persona.tagline()),
            Cell::new(default_marker),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {}",
        style("Start a session with: clara chat --persona <name>").dim()
    );
    println!();
    Ok(())
}
