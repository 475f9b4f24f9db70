use std::path::Path;

use crate::model::Store;

/// Export events to a CSV file for spreadsheet use.
///
/// Columns: Title ; Project ; Start ; End ; All Day
/// Returns the number of events written.
pub fn export_csv(store: &Store, path: &Path) -> Result<usize, String> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)
        .map_err(|e| format!("Failed to create CSV file: {}", e))?;

    wtr.write_record(["Title", "Project", "Start", "End", "All Day"])
        .map_err(|e| format!("Failed to write header: {}", e))?;

    for event in store.events() {
        let project = store
            .project(&event.project_id)
            .map(|p| p.name.as_str())
            .unwrap_or("");
        wtr.write_record([
            event.title.as_str(),
            project,
            &event.start.format("%Y-%m-%d %H:%M").to_string(),
            &event.end.format("%Y-%m-%d %H:%M").to_string(),
            if event.all_day { "yes" } else { "no" },
        ])
        .map_err(|e| format!("Failed to write event '{}': {}", event.title, e))?;
    }

    wtr.flush().map_err(|e| format!("Failed to flush CSV: {}", e))?;
    Ok(store.events().len())
}
