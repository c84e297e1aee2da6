use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use smartmem_lib::{SensorCatalog, SensorOrigin};

/// List the effective sensor catalog in resolution order.
pub(crate) fn run_sensors(catalog: &SensorCatalog) {
    if catalog.is_empty() {
        log::info!("No sensors configured.");
        return;
    }

    log::info!("Known sensors (tried in this order):");
    crate::log_blank();

    for (i, (candidate, origin)) in catalog.entries().enumerate() {
        log::info!(
            "  {:>2}. {} [{}]{}",
            i + 1,
            candidate.label.if_supports_color(Stdout, |t| t.bold()),
            candidate
                .registers
                .if_supports_color(Stdout, |t| t.cyan()),
            match origin {
                SensorOrigin::BuiltIn => String::new(),
                SensorOrigin::Settings => format!(
                    " {}",
                    "(settings)".if_supports_color(Stdout, |t| t.green())
                ),
            },
        );
    }
}
