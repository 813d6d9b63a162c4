pub mod category;
pub mod config;
pub mod expense;
pub mod income;
pub mod rent;
pub mod report;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let groups = [
        income::definitions(),
        expense::definitions(),
        rent::definitions(),
        report::definitions(),
        category::definitions(),
        config::definitions(),
        system::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}
