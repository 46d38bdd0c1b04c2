//! Plan execution.

use printc_ir::{FormatError, Plan};

use crate::bind::{bind, Bound};
use crate::convert::render;
use crate::float::FloatRenderer;
use crate::Value;

/// Initial buffer bytes reserved per conversion.
const CONVERSION_ESTIMATE: usize = 8;

/// Apply a compiled plan to `args`.
///
/// On error nothing is returned; there is no partial output.
pub fn apply(
    plan: &Plan,
    args: &[Value],
    floats: &dyn FloatRenderer,
) -> Result<String, FormatError> {
    let bound = bind(plan, args)?;

    let estimate: usize = bound
        .iter()
        .map(|step| match step {
            Bound::Literal(text) => text.len(),
            Bound::Convert(_) => CONVERSION_ESTIMATE,
        })
        .sum();
    let mut out = String::with_capacity(estimate);

    for step in &bound {
        match step {
            Bound::Literal(text) => out.push_str(text),
            Bound::Convert(conversion) => render(conversion, floats, &mut out),
        }
    }

    tracing::trace!(steps = bound.len(), len = out.len(), "plan applied");
    Ok(out)
}
