//! Directive validation and slot assignment.

use printc_ir::{
    ArgRef, Conversion, ConvertStep, Directive, Flags, FormatError, NumberingMode, Plan, Step,
    Width,
};
use printc_lexer_core::{RawDirective, RawToken, ScanError, Scanner};

/// Compile a format string into a plan.
///
/// Never fails: the first error found poisons the plan, and the poisoned
/// plan carries that error for every later apply.
#[tracing::instrument(level = "debug", skip_all, fields(len = format.len()))]
pub fn compile_plan(format: &str) -> Plan {
    let mut planner = Planner::new();

    for token in Scanner::new(format) {
        let result = match token {
            Ok(token) => planner.token(token),
            Err(ScanError::Malformed { directive, .. }) => {
                Err(FormatError::MalformedFormat { directive })
            }
        };
        if let Err(error) = result {
            tracing::debug!(%error, "format string poisoned");
            return Plan::poisoned(error, planner.numbering_mode());
        }
    }

    planner.finish()
}

/// Left-to-right planning state for one format string.
struct Planner {
    steps: Vec<Step>,
    /// Literal text not yet pushed as a step.
    literal: String,
    /// `None` until the first argument-consuming reference.
    mode: Option<NumberingMode>,
    /// Sequential slots consumed so far.
    sequential: u32,
    /// Most recent `N$` position, for conflict messages.
    last_position: u32,
    max_slot: Option<usize>,
}

impl Planner {
    fn new() -> Self {
        Planner {
            steps: Vec::new(),
            literal: String::new(),
            mode: None,
            sequential: 0,
            last_position: 0,
            max_slot: None,
        }
    }

    fn numbering_mode(&self) -> NumberingMode {
        self.mode.unwrap_or_default()
    }

    fn token(&mut self, token: RawToken<'_>) -> Result<(), FormatError> {
        match token {
            RawToken::Literal(text) => {
                self.literal.push_str(text);
                Ok(())
            }
            RawToken::Directive(raw) => self.directive(&raw),
        }
    }

    fn directive(&mut self, raw: &RawDirective<'_>) -> Result<(), FormatError> {
        let conversion =
            Conversion::from_type_char(raw.conversion).ok_or_else(|| malformed(raw))?;

        if conversion == Conversion::PercentLiteral {
            if !raw.flags.is_empty() || raw.width.is_some() || raw.precision.is_some() {
                return Err(FormatError::IllegalDirective {
                    conversion: raw.conversion,
                });
            }
            self.literal.push('%');
            return Ok(());
        }

        let arg_ref = match raw.position {
            Some(digits) => ArgRef::Positional(parse_count(digits, raw)?),
            None => ArgRef::Sequential,
        };

        let (width, width_slot) = match raw.width {
            None => (Width::None, None),
            Some(stars) if stars.starts_with('*') => {
                // The width slot is claimed before the star count is checked,
                // so a numbering conflict on it wins.
                let slot = self.claim(arg_ref)?;
                if stars.len() > 1 {
                    return Err(FormatError::WidthGivenTwice);
                }
                (Width::FromArg(arg_ref), Some(slot))
            }
            Some(digits) => (Width::Literal(parse_count(digits, raw)?), None),
        };

        let value_slot = self.claim(arg_ref)?;

        let precision = match raw.precision {
            Some("") => Some(0),
            Some(digits) => Some(parse_count(digits, raw)?),
            None => match conversion {
                Conversion::Float(kind) => kind.default_precision(),
                _ => None,
            },
        };

        self.flush_literal();
        self.steps.push(Step::Convert(ConvertStep {
            directive: Directive {
                flags: Flags::parse(raw.flags),
                arg_ref,
                width,
                precision,
                conversion,
            },
            value_slot,
            width_slot,
        }));
        Ok(())
    }

    /// Assign the zero-based slot for one argument reference, enforcing a
    /// single numbering mode.
    fn claim(&mut self, arg_ref: ArgRef) -> Result<usize, FormatError> {
        let slot = match arg_ref {
            ArgRef::Positional(position) => {
                if self.mode == Some(NumberingMode::Sequential) {
                    self.mode = Some(NumberingMode::Conflict);
                    return Err(FormatError::MixedArgumentNumbering {
                        position,
                        sequential: self.sequential,
                        positional_first: false,
                    });
                }
                self.mode = Some(NumberingMode::Positional);
                self.last_position = position;
                (position - 1) as usize
            }
            ArgRef::Sequential => {
                if self.mode == Some(NumberingMode::Positional) {
                    self.mode = Some(NumberingMode::Conflict);
                    return Err(FormatError::MixedArgumentNumbering {
                        position: self.last_position,
                        sequential: self.sequential + 1,
                        positional_first: true,
                    });
                }
                self.mode = Some(NumberingMode::Sequential);
                let slot = self.sequential as usize;
                self.sequential += 1;
                slot
            }
        };
        self.max_slot = Some(self.max_slot.map_or(slot, |max| max.max(slot)));
        Ok(slot)
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            let text = std::mem::take(&mut self.literal);
            self.steps.push(Step::Literal(text.into_boxed_str()));
        }
    }

    fn finish(mut self) -> Plan {
        self.flush_literal();
        tracing::trace!(
            steps = self.steps.len(),
            max_slot = ?self.max_slot,
            "plan compiled"
        );
        let mode = self.numbering_mode();
        Plan::ready(self.steps, self.max_slot, mode)
    }
}

/// Parse a position, width or precision. Values beyond a C `int` are
/// malformed.
fn parse_count(digits: &str, raw: &RawDirective<'_>) -> Result<u32, FormatError> {
    digits
        .parse::<i32>()
        .ok()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| malformed(raw))
}

fn malformed(raw: &RawDirective<'_>) -> FormatError {
    FormatError::MalformedFormat {
        directive: raw.raw.to_owned(),
    }
}
