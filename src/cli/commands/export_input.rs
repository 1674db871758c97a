//! Export-input command - copy action inputs into INPUT_* variables

use crate::cli::args::ExportInputArgs;
use crate::error::ActionResult;
use crate::inputs::{exported_var_name, InputExporter};

/// Execute the export-input command
pub fn execute(args: ExportInputArgs) -> ActionResult<()> {
    let exporter = InputExporter::from_env();

    for (input, default_value) in &args.inputs {
        let value = exporter.export_variable_from_input(input, default_value)?;
        println!("{}={}", exported_var_name(input), value);
    }

    Ok(())
}
