use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qc_model::ModuleRegistry;
use qc_persistence::Preferences;
use qc_session::SessionController;

use crate::journey::JourneyOutcome;

pub fn print_summary(session: &SessionController, outcome: &JourneyOutcome) {
    println!();
    if session.user_name().is_empty() {
        println!("Learner: -");
    } else {
        println!("Learner: {}", session.user_name());
    }
    println!(
        "Commands: {} executed, {} rejected",
        outcome.executed, outcome.rejected
    );
    println!("{}", summary_table(session));
}

/// Modules with completion status, plus a total row.
pub fn summary_table(session: &SessionController) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Module"),
        header_cell("Theme"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let progress = session.progress();
    for module in session.registry().all() {
        let status = if progress.is_completed(module.id) {
            Cell::new("done").fg(Color::Green)
        } else {
            dim_cell("pending")
        };
        table.add_row(vec![
            Cell::new(module.id),
            Cell::new(&module.title),
            Cell::new(module.theme.label()),
            status,
        ]);
    }

    let unlocks = session.unlocks();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "lab {}, certificate {}",
            lock_word(unlocks.lab),
            lock_word(unlocks.certificate)
        ))
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{}/{}", progress.completed_count(), progress.total()))
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Module catalog.
pub fn modules_table(registry: &ModuleRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Module"),
        header_cell("Subtitle"),
        header_cell("Theme"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for module in registry.all() {
        table.add_row(vec![
            Cell::new(module.id),
            Cell::new(&module.title),
            Cell::new(&module.subtitle),
            Cell::new(module.theme.label()),
        ]);
    }
    table
}

pub fn preferences_table(prefs: &Preferences) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Preference"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("theme"), Cell::new(prefs.theme.label())]);
    table.add_row(vec![
        Cell::new("fontSize"),
        Cell::new(format!(
            "{} ({}px)",
            prefs.font_size.label(),
            prefs.font_size.pixels()
        )),
    ]);
    table.add_row(vec![
        Cell::new("showLibras"),
        Cell::new(if prefs.show_libras { "on" } else { "off" }),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn lock_word(unlocked: bool) -> &'static str {
    if unlocked { "open" } else { "locked" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_model::ModuleId;
    use std::sync::Arc;

    #[test]
    fn test_summary_lists_every_module() {
        let mut session =
            SessionController::new(Arc::new(ModuleRegistry::quebrada_conectada()));
        session.start("Ana").unwrap();
        session.select_module(ModuleId::new(2)).unwrap();
        session.go_back().unwrap();

        let table = summary_table(&session);
        // 4 modules plus the total row
        assert_eq!(table.row_iter().count(), 5);
        let text = table.to_string();
        assert!(text.contains("Infraestrutura da Vulnerabilidade"));
        assert!(text.contains("1/4"));
        assert!(text.contains("pending"));
    }

    #[test]
    fn test_preferences_table() {
        let text = preferences_table(&Preferences::default()).to_string();
        assert!(text.contains("dark"));
        assert!(text.contains("base (16px)"));
        assert!(text.contains("off"));
    }
}
