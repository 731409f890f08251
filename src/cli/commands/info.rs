//! CLI implementation for `camkit info`

use anyhow::Result;

use crate::core::scaffold;
use crate::infra::dirs::TemplateDirs;

/// Execute the info command
pub async fn execute(list_templates: bool) -> Result<()> {
    let templates = TemplateDirs::new();

    if list_templates {
        for name in scaffold::list_app_templates(&templates) {
            println!("{name}");
        }
    } else {
        println!("Templates root: {}", templates.root().display());
    }
    Ok(())
}
