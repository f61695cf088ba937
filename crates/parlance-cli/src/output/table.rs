//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use parlance::CatalogWarning;

/// Format catalog warnings as an ASCII table.
pub fn format_warning_table(warnings: &[CatalogWarning]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Warning"]);

    for warning in warnings {
        table.add_row(vec![warning.kind().to_string(), warning.to_string()]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_warning() {
        let warnings = vec![
            CatalogWarning::MissingOtherForm {
                key: "%d files".to_string(),
            },
            CatalogWarning::MissingPluralId {
                key: "apples".to_string(),
            },
        ];
        let table = format_warning_table(&warnings);
        assert_eq!(table.row_count(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("missing_other_form"));
        assert!(rendered.contains("%d files"));
        assert!(rendered.contains("no 'other' variant"));
    }
}
