//! Bordered table rendering for report sections.

use comfy_table::{
    presets,
    Attribute,
    Cell,
    ContentArrangement,
    Table,
};

/// A section is an ordered list of label/value rows; display order is
/// declaration order and duplicate labels are allowed.
pub type StatsRows = Vec<(&'static str, String)>;

/// Draw a section as a bordered table with the title as a bold header cell.
pub fn render(title: &str, rows: &StatsRows) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new(title).add_attribute(Attribute::Bold)]);

    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(value),
        ]);
    }

    format!("{table}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_render_in_declaration_order() {
        let rows: StatsRows = vec![
            ("First", "1".to_string()),
            ("Second", "2".to_string()),
            ("First", "3".to_string()),
        ];
        let rendered = render("SECTION", &rows);

        let first = rendered.find("First").unwrap();
        let second = rendered.find("Second").unwrap();
        assert!(rendered.find("SECTION").unwrap() < first);
        assert!(first < second);
        // Duplicate labels are preserved, not collapsed.
        assert_eq!(rendered.matches("First").count(), 2);
    }
}
