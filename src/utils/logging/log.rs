//! Logging utilities
//!
//! This module provides standardized logging functions for pipeline stages.

/// Log a stage start with consistent format
///
/// # Arguments
/// * `stage` - Name of the stage being entered
pub fn log_stage_start(stage: &str) {
    log::debug!("Entering stage {stage}");
}

/// Log a stage completion with consistent format
///
/// # Arguments
/// * `stage` - Name of the stage that finished
/// * `items` - Number of items the stage produced
/// * `elapsed` - Optional elapsed time
pub fn log_stage_complete(stage: &str, items: usize, elapsed: Option<std::time::Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Stage {stage} produced {items} items in {duration:?}");
    } else {
        log::info!("Stage {stage} produced {items} items");
    }
}

/// Log a warning with an optional row number
///
/// # Arguments
/// * `message` - Warning message
/// * `row` - Optional 1-based data row the warning concerns
pub fn log_warning(message: &str, row: Option<usize>) {
    if let Some(row) = row {
        log::warn!("{message} (row {row})");
    } else {
        log::warn!("{message}");
    }
}
