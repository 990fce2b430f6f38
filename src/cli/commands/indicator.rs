use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::listview::ListViewRegistry;
use crate::models::{DocType, Document};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Indicator {
        doctype,
        record,
        json,
    } = cmd
    {
        let doctype: DocType = doctype.parse()?;
        let doc = Document::from_json(serde_json::from_str(record)?);

        let registry = ListViewRegistry::standard();
        let settings = registry
            .get(doctype)
            .ok_or_else(|| AppError::InvalidDocType(doctype.name().to_string()))?;

        let localizer = cfg.localizer()?;
        let indicator = settings.indicator(&doc, localizer.as_ref());

        if *json {
            println!("{}", serde_json::to_string(&indicator)?);
        } else {
            let label = if cfg.use_color() {
                indicator.color.paint(&indicator.label)
            } else {
                indicator.label.clone()
            };
            println!("{} | {} | {}", label, indicator.color, indicator.filter);
        }
    }

    Ok(())
}
