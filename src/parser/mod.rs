//! Line-oriented parser: classification and the first pass.

pub mod lexer;
pub mod machine;

pub use lexer::{classify, Line};
pub use machine::Machine;

use crate::ast::Draft;
use crate::config::Config;
use crate::error::Result;

/// Run the first pass over a complete document.
///
/// Stops at the line closing the outermost environment; anything after it
/// is ignored.
pub fn parse<S: AsRef<str>>(lines: &[S], config: &Config) -> Result<Draft> {
    let mut machine = Machine::new(config);

    for (line_num, line) in lines.iter().enumerate() {
        machine.feed(line_num, line.as_ref())?;
        if machine.is_finished() {
            break;
        }
    }

    Ok(machine.finish()?)
}
