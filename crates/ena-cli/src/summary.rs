use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ena_model::{FieldCatalog, FieldRequirement};
use ena_submit::{SubmissionOutcome, Target};
use ena_validate::Issue;

use crate::commands::SamplesOutcome;

pub fn print_samples_summary(outcome: &SamplesOutcome) {
    let run = &outcome.run;
    println!(
        "Checklist: {} ({}){}",
        run.checklist_id,
        run.checklist_origin.label(),
        run.catalog
            .name()
            .map(|name| format!(" - {name}"))
            .unwrap_or_default()
    );
    println!("Samples: {}", run.outputs.samples.display());
    println!("Submission: {}", run.outputs.submission.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Renamed"),
        header_cell("Unmapped"),
        header_cell("Mandatory"),
        header_cell("Recommended"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(run.row_count).add_attribute(Attribute::Bold),
        count_cell(run.mapped.renamed.len(), Color::Green),
        count_cell(run.mapped.unmapped.len(), Color::DarkGrey),
        Cell::new(run.catalog.mandatory().len()),
        Cell::new(run.catalog.recommended().len()),
        count_cell(run.report.warning_count(), Color::Yellow),
    ]);
    println!("{table}");
    print_issue_table(&run.report.issues);

    if let Some((target, submission)) = &outcome.submission {
        print_receipt(*target, submission);
    }
}

pub fn print_release_summary(accession: &str, target: Target, outcome: &SubmissionOutcome) {
    println!("Release: {accession}");
    print_receipt(target, outcome);
}

pub fn print_catalog(catalog: &FieldCatalog) {
    println!(
        "Checklist: {}{}",
        catalog.checklist_id(),
        catalog
            .name()
            .map(|name| format!(" - {name}"))
            .unwrap_or_default()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Requirement"),
        header_cell("Unit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    let fields = catalog
        .mandatory()
        .iter()
        .chain(catalog.recommended())
        .chain(catalog.units().keys().filter(|field| {
            catalog.requirement(field.as_str()) == FieldRequirement::Optional
        }));
    let mut listed = 0usize;
    for field in fields {
        let unit = match catalog.unit_for(field) {
            Some(Some(unit)) => Cell::new(unit),
            Some(None) => dim_cell("(empty)"),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(field),
            requirement_cell(catalog.requirement(field)),
            unit,
        ]);
        listed += 1;
    }
    println!("{table}");
    println!(
        "{listed} of {} fields shown (optional fields without units are omitted)",
        catalog.field_count()
    );
}

fn print_issue_table(issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Warning"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    for issue in issues {
        table.add_row(vec![
            issue_cell(issue),
            Cell::new(issue.field()),
            Cell::new(issue.message()),
        ]);
    }
    println!();
    println!("Warnings:");
    println!("{table}");
}

fn print_receipt(target: Target, outcome: &SubmissionOutcome) {
    let receipt = &outcome.receipt;
    println!();
    println!(
        "Drop-box ({}): {}",
        target.label(),
        if receipt.success { "accepted" } else { "rejected" }
    );
    println!("Receipt: {}", outcome.receipt_path.display());
    if !receipt.samples.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Alias"),
            header_cell("Accession"),
            header_cell("BioSample"),
            header_cell("Status"),
        ]);
        apply_table_style(&mut table);
        for sample in &receipt.samples {
            table.add_row(vec![
                Cell::new(&sample.alias),
                Cell::new(&sample.accession)
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
                optional_cell(sample.biosample.as_deref()),
                optional_cell(sample.status.as_deref()),
            ]);
        }
        println!("{table}");
    }
    for accession in receipt.existing_accessions() {
        println!("Already registered: {accession}");
    }
    for message in &receipt.errors {
        eprintln!("- {message}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn requirement_cell(requirement: FieldRequirement) -> Cell {
    match requirement {
        FieldRequirement::Mandatory => Cell::new(requirement.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        FieldRequirement::Recommended => Cell::new(requirement.label()).fg(Color::Yellow),
        FieldRequirement::Optional => dim_cell(requirement.label()),
    }
}

fn issue_cell(issue: &Issue) -> Cell {
    match issue {
        Issue::MandatoryEmpty { .. } => Cell::new(issue.label()).fg(Color::Red),
        Issue::RecommendedMissing { .. } => Cell::new(issue.label()).fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
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
