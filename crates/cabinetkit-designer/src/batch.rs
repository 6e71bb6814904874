//! Batch propagation to template siblings
//!
//! Each sibling is edited independently with `rayon`. Results keep the input
//! order, and since every edit is a pure function of its own module, the
//! outcome does not depend on evaluation order.

use crate::commands::{apply_piece_command, PieceCommand};
use crate::context::ConstructionContext;
use crate::edits::{apply_module_edit, ModuleEdit};
use crate::error::DesignResult;
use cabinetkit_core::ModuleSpec;
use rayon::prelude::*;
use tracing::info;

fn shares_template(module: &ModuleSpec, template_id: &str) -> bool {
    module.template_id.as_deref() == Some(template_id)
}

/// Apply a piece command to every module built from `template_id`.
///
/// Other modules are returned unchanged. Any sibling failure fails the batch.
pub fn propagate_command(
    modules: &[ModuleSpec],
    template_id: &str,
    command: &PieceCommand,
    ctx: &ConstructionContext,
) -> DesignResult<Vec<ModuleSpec>> {
    let result: Vec<ModuleSpec> = modules
        .par_iter()
        .map(|module| {
            if shares_template(module, template_id) {
                apply_piece_command(module, command, ctx)
            } else {
                Ok(module.clone())
            }
        })
        .collect::<DesignResult<_>>()?;

    info!(
        template = template_id,
        command = command.name(),
        siblings = modules.iter().filter(|m| shares_template(m, template_id)).count(),
        "Propagated piece command"
    );
    Ok(result)
}

/// Apply a module edit to every module built from `template_id`
pub fn propagate_edit(
    modules: &[ModuleSpec],
    template_id: &str,
    edit: &ModuleEdit,
) -> DesignResult<Vec<ModuleSpec>> {
    let result: Vec<ModuleSpec> = modules
        .par_iter()
        .map(|module| {
            if shares_template(module, template_id) {
                apply_module_edit(module, edit).map(|outcome| outcome.module)
            } else {
                Ok(module.clone())
            }
        })
        .collect::<DesignResult<_>>()?;

    info!(template = template_id, edit = edit.name(), "Propagated module edit");
    Ok(result)
}
