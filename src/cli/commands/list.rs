use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::listing::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::indicator::FilterExpr;
use crate::listview::{ListView, ListViewRegistry};
use crate::models::DocType;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        doctype,
        filter,
        json,
    } = cmd
    {
        let doctype: DocType = doctype.parse()?;
        let filter = filter.as_deref().map(str::parse::<FilterExpr>).transpose()?;

        let registry = ListViewRegistry::standard();
        let localizer = cfg.localizer()?;
        let pool = DbPool::open(&cfg.database)?;

        let rows = ListLogic::rows(
            &pool.conn,
            &registry,
            doctype,
            filter.as_ref(),
            localizer.as_ref(),
        )?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        match &filter {
            Some(f) => header(format!("📋 {} ({})", doctype, f)),
            None => header(format!("📋 {}", doctype)),
        }

        if rows.is_empty() {
            println!("No {} records.", doctype);
            return Ok(());
        }

        let settings = registry
            .get(doctype)
            .ok_or_else(|| AppError::InvalidDocType(doctype.name().to_string()))?;
        print!(
            "{}",
            ListView::to_table(settings, &rows, cfg.use_color(), cfg.separator())
        );
    }

    Ok(())
}
