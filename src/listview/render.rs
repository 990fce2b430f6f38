use crate::i18n::Localizer;
use crate::indicator::{FilterExpr, Indicator};
use crate::listview::ListViewSettings;
use crate::models::Document;
use crate::models::document::value_text;
use crate::utils::table::{Column, Table};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRow {
    pub name: String,
    #[serde(flatten)]
    pub indicator: Indicator,
    pub fields: BTreeMap<String, Value>,
}

pub struct ListView;

impl ListView {
    /// Resolve one indicator per document, keeping input order and only
    /// the documents matching `filter`.
    pub fn render(
        settings: &dyn ListViewSettings,
        documents: &[Document],
        filter: Option<&FilterExpr>,
        localizer: &dyn Localizer,
    ) -> Vec<ListRow> {
        documents
            .iter()
            .filter(|doc| filter.is_none_or(|f| f.matches(doc)))
            .map(|doc| ListRow {
                name: doc.name.clone(),
                indicator: settings.indicator(doc, localizer),
                fields: doc.fields.clone(),
            })
            .collect()
    }

    /// Plain-text table: name, indicator, then each `add_fields` column.
    pub fn to_table(
        settings: &dyn ListViewSettings,
        rows: &[ListRow],
        color: bool,
        separator: char,
    ) -> String {
        let mut columns = vec![Column::new("NAME"), Column::new("STATUS")];
        columns.extend(settings.add_fields().iter().map(|f| Column::new(&f.to_uppercase())));

        let mut table = Table::new(columns).with_separator(separator);
        for row in rows {
            let label = if color {
                row.indicator.color.paint(&row.indicator.label)
            } else {
                row.indicator.label.clone()
            };

            let mut cells = vec![row.name.clone(), label];
            cells.extend(settings.add_fields().iter().map(|f| {
                let v = value_text(row.fields.get(*f));
                if v.is_empty() { "--".to_string() } else { v }
            }));
            table.add_row(cells);
        }

        table.render()
    }
}
