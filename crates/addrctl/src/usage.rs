//! Usage text printed when no action is given

use std::fmt::Write;

use crate::actions::Action;

/// Render the program's usage text
pub fn render(executable_name: &str, version: &str, actions: &[Box<dyn Action>]) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = write_usage(&mut out, executable_name, version, actions);
    out
}

fn write_usage(
    out: &mut String,
    executable_name: &str,
    version: &str,
    actions: &[Box<dyn Action>],
) -> std::fmt::Result {
    writeln!(out, "{} updates DNS records via DNSimple.", executable_name)?;
    writeln!(out)?;
    writeln!(out, "Version: {}", version)?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    writeln!(out, "  {} <action> [arguments ...]", executable_name)?;
    writeln!(out)?;

    writeln!(out, "Actions:")?;
    for action in actions {
        writeln!(out, "{:>10}  {}", action.name(), action.description())?;
    }
    writeln!(out)?;

    for action in actions {
        writeln!(out, "Action: {}", action.name())?;
        writeln!(out, "{}", action.usage())?;
        writeln!(out)?;
    }

    Ok(())
}
