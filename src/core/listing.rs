use crate::db::queries::load_documents;
use crate::errors::{AppError, AppResult};
use crate::i18n::Localizer;
use crate::indicator::FilterExpr;
use crate::listview::{ListRow, ListView, ListViewRegistry};
use crate::models::DocType;
use rusqlite::Connection;

pub struct ListLogic;

impl ListLogic {
    /// Fetch the doctype's rows with its `add_fields` and resolve one
    /// indicator per row.
    pub fn rows(
        conn: &Connection,
        registry: &ListViewRegistry,
        doctype: DocType,
        filter: Option<&FilterExpr>,
        localizer: &dyn Localizer,
    ) -> AppResult<Vec<ListRow>> {
        let settings = registry
            .get(doctype)
            .ok_or_else(|| AppError::InvalidDocType(doctype.name().to_string()))?;

        let mut fields: Vec<&str> = settings.add_fields().to_vec();
        if let Some(f) = filter {
            if !doctype.columns().contains(&f.field.as_str()) {
                return Err(AppError::InvalidFilter(format!(
                    "unknown field '{}' for {}",
                    f.field, doctype
                )));
            }
            if !fields.contains(&f.field.as_str()) {
                fields.push(f.field.as_str());
            }
        }

        let docs = load_documents(conn, doctype, &fields)?;
        Ok(ListView::render(settings, &docs, filter, localizer))
    }
}
