//! Modules command implementation.

use miette::Result;

use shipkit_util::errors::ShipkitError;

pub fn exec(format: &str) -> Result<()> {
    let project_dir = super::project_root()?;

    let modules = shipkit_ops::ops_modules::list(&project_dir)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&modules).map_err(|e| {
                ShipkitError::Generic {
                    message: format!("Failed to serialize module list: {e}"),
                }
            })?;
            println!("{json}");
        }
        "plain" => {
            for m in &modules {
                let state = if m.enabled { "enabled" } else { "disabled" };
                let classpath = m.classpath.as_deref().unwrap_or("<missing classpath>");
                println!("{} [{state}] type={} {}", m.name, m.kind, classpath);
            }
        }
        other => {
            return Err(ShipkitError::Generic {
                message: format!("unknown format '{other}' (expected plain or json)"),
            }
            .into());
        }
    }

    Ok(())
}
