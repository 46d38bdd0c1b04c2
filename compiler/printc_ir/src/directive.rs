//! Parsed conversion directives.
//!
//! A [`Directive`] is the interpreted form of one `%...` occurrence: flags as
//! a set, argument reference, width, precision and conversion kind. The
//! planner builds these from raw scanner tokens; the binder and converters
//! only read them.

bitflags::bitflags! {
    /// Directive flag set. Duplicate flag characters are idempotent.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// `-`: pad on the right.
        const LEFT_JUSTIFY = 1 << 0;
        /// `0`: pad numeric conversions with zeros.
        const ZERO_PAD = 1 << 1;
        /// `+`: always emit a sign for non-negative numbers.
        const FORCE_SIGN = 1 << 2;
        /// ` `: emit a space in place of a `+` sign.
        const SPACE_SIGN = 1 << 3;
        /// `#`: alternate form (radix prefixes, kept decimal point).
        const ALTERNATE = 1 << 4;
    }
}

impl Flags {
    /// Map a flag character to its flag, if it is one.
    pub fn from_char(c: char) -> Option<Flags> {
        match c {
            '-' => Some(Flags::LEFT_JUSTIFY),
            '0' => Some(Flags::ZERO_PAD),
            '+' => Some(Flags::FORCE_SIGN),
            ' ' => Some(Flags::SPACE_SIGN),
            '#' => Some(Flags::ALTERNATE),
            _ => None,
        }
    }

    /// Parse a run of flag characters, ignoring anything else.
    pub fn parse(text: &str) -> Flags {
        text.chars()
            .filter_map(Flags::from_char)
            .fold(Flags::empty(), |acc, flag| acc | flag)
    }

    /// Sign prefix for a value, honouring `+` over ` `.
    pub fn sign_for(self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.contains(Flags::FORCE_SIGN) {
            "+"
        } else if self.contains(Flags::SPACE_SIGN) {
            " "
        } else {
            ""
        }
    }

    /// Whether an explicit sign was requested for non-negative values.
    pub fn wants_sign(self) -> bool {
        self.intersects(Flags::FORCE_SIGN | Flags::SPACE_SIGN)
    }
}

/// How a directive names its argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgRef {
    /// Next unclaimed sequential slot.
    Sequential,
    /// Explicit 1-based position (`N$`).
    Positional(u32),
}

/// Field width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Width {
    #[default]
    None,
    Literal(u32),
    /// `*`: taken from an argument at apply time.
    FromArg(ArgRef),
}

/// Radix of an integer conversion other than decimal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Hex,
}

impl Radix {
    #[inline]
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Hex => 16,
        }
    }

    /// Alternate-form prefix (`#` flag).
    pub const fn alternate_prefix(self, uppercase: bool) -> &'static str {
        match (self, uppercase) {
            (Radix::Binary, _) => "0b",
            (Radix::Octal, _) => "0",
            (Radix::Hex, false) => "0x",
            (Radix::Hex, true) => "0X",
        }
    }
}

/// Floating-point conversion family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FloatKind {
    /// `f`
    Fixed,
    /// `e` / `E`
    Exponent { upper: bool },
    /// `g` / `G`
    General { upper: bool },
}

impl FloatKind {
    /// The conversion character this kind was parsed from.
    pub const fn type_char(self) -> char {
        match self {
            FloatKind::Fixed => 'f',
            FloatKind::Exponent { upper: false } => 'e',
            FloatKind::Exponent { upper: true } => 'E',
            FloatKind::General { upper: false } => 'g',
            FloatKind::General { upper: true } => 'G',
        }
    }

    /// Precision used when the template gives none.
    ///
    /// `e`/`E` have no default here; the float renderer applies its own.
    pub const fn default_precision(self) -> Option<u32> {
        match self {
            FloatKind::Fixed => Some(6),
            FloatKind::General { .. } => Some(4),
            FloatKind::Exponent { .. } => None,
        }
    }
}

/// Conversion kind selected by the directive's type character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `s`
    String,
    /// `c`
    Char,
    /// `d` / `i`
    SignedDecimal,
    /// `b`, `o`, `x`, `X`
    Radix { radix: Radix, uppercase: bool },
    /// `f`, `e`, `E`, `g`, `G`
    Float(FloatKind),
    /// `p`
    Inspect,
    /// `%%`
    PercentLiteral,
}

impl Conversion {
    /// Map a type character to its conversion.
    pub fn from_type_char(c: char) -> Option<Conversion> {
        Some(match c {
            's' => Conversion::String,
            'c' => Conversion::Char,
            'd' | 'i' => Conversion::SignedDecimal,
            'b' => Conversion::Radix {
                radix: Radix::Binary,
                uppercase: false,
            },
            'o' => Conversion::Radix {
                radix: Radix::Octal,
                uppercase: false,
            },
            'x' => Conversion::Radix {
                radix: Radix::Hex,
                uppercase: false,
            },
            'X' => Conversion::Radix {
                radix: Radix::Hex,
                uppercase: true,
            },
            'f' => Conversion::Float(FloatKind::Fixed),
            'e' => Conversion::Float(FloatKind::Exponent { upper: false }),
            'E' => Conversion::Float(FloatKind::Exponent { upper: true }),
            'g' => Conversion::Float(FloatKind::General { upper: false }),
            'G' => Conversion::Float(FloatKind::General { upper: true }),
            'p' => Conversion::Inspect,
            '%' => Conversion::PercentLiteral,
            _ => return None,
        })
    }

    /// Conversions whose argument is coerced to an integer.
    pub fn takes_integer(self) -> bool {
        matches!(
            self,
            Conversion::Char | Conversion::SignedDecimal | Conversion::Radix { .. }
        )
    }

    /// Conversions that honour the `0` flag.
    pub fn allows_zero_pad(self) -> bool {
        matches!(
            self,
            Conversion::SignedDecimal | Conversion::Radix { .. } | Conversion::Float(_)
        )
    }

    /// Conversions where precision is a maximum output length.
    pub fn truncates(self) -> bool {
        matches!(self, Conversion::String | Conversion::Inspect)
    }
}

/// One interpreted `%...` directive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Directive {
    pub flags: Flags,
    pub arg_ref: ArgRef,
    pub width: Width,
    /// Digit count for floats, maximum length for `s`/`p`.
    pub precision: Option<u32>,
    pub conversion: Conversion,
}

impl Directive {
    /// Whether output goes on the left of the field (before any dynamic
    /// width flips it).
    #[inline]
    pub fn left_justified(&self) -> bool {
        self.flags.contains(Flags::LEFT_JUSTIFY)
    }
}
