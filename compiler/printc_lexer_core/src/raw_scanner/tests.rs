#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;

use super::{scan, Scanner};
use crate::token::{RawDirective, RawToken, ScanError, Span};

fn directive(source: &str) -> RawDirective<'_> {
    let tokens = scan(source).unwrap();
    match tokens.as_slice() {
        [RawToken::Directive(d)] => d.clone(),
        other => panic!("expected a single directive, got {other:?}"),
    }
}

// === Literals ===

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(scan("").unwrap(), vec![]);
}

#[test]
fn plain_text_is_one_literal() {
    assert_eq!(scan("kjasdkfj").unwrap(), vec![RawToken::Literal("kjasdkfj")]);
}

#[test]
fn text_around_directive() {
    let tokens = scan("alks %d jdfa").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], RawToken::Literal("alks "));
    assert!(matches!(&tokens[1], RawToken::Directive(d) if d.conversion == 'd'));
    assert_eq!(tokens[2], RawToken::Literal(" jdfa"));
}

#[test]
fn adjacent_directives_have_no_empty_literal() {
    let tokens = scan("%s%d").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| matches!(t, RawToken::Directive(_))));
}

// === Directive parts ===

#[test]
fn bare_conversion() {
    assert_eq!(
        directive("%x"),
        RawDirective {
            raw: "%x",
            flags: "",
            position: None,
            width: None,
            precision: None,
            conversion: 'x',
            span: Span::new(0, 2),
        }
    );
}

#[test]
fn flags_are_kept_in_source_order() {
    let d = directive("%-0 #+d");
    assert_eq!(d.flags, "-0 #+");
}

#[test]
fn zero_flag_then_width() {
    let d = directive("%05d");
    assert_eq!(d.flags, "0");
    assert_eq!(d.width, Some("5"));
}

#[test]
fn width_and_precision() {
    let d = directive("%6.3s");
    assert_eq!(d.width, Some("6"));
    assert_eq!(d.precision, Some("3"));
}

#[test]
fn precision_without_width() {
    let d = directive("%.2f");
    assert_eq!(d.width, None);
    assert_eq!(d.precision, Some("2"));
}

#[test]
fn bare_dot_is_empty_precision() {
    let d = directive("%.s");
    assert_eq!(d.precision, Some(""));
}

#[test]
fn positional_argument() {
    let d = directive("%2$s");
    assert_eq!(d.position, Some("2"));
    assert_eq!(d.width, None);
}

#[test]
fn multi_digit_position() {
    let d = directive("%12$5d");
    assert_eq!(d.position, Some("12"));
    assert_eq!(d.width, Some("5"));
    assert_eq!(d.raw, "%12$5d");
}

#[test]
fn flags_after_position_are_malformed() {
    assert!(scan("%1$-5d").is_err());
}

#[test]
fn digits_without_dollar_are_width() {
    let d = directive("%10s");
    assert_eq!(d.position, None);
    assert_eq!(d.width, Some("10"));
}

#[test]
fn position_then_width() {
    let d = directive("%1$10.4x");
    assert_eq!(d.position, Some("1"));
    assert_eq!(d.width, Some("10"));
    assert_eq!(d.precision, Some("4"));
}

#[test]
fn zero_led_width_after_position() {
    let d = directive("%1$05d");
    assert_eq!(d.flags, "");
    assert_eq!(d.position, Some("1"));
    assert_eq!(d.width, Some("05"));
    assert_eq!(d.conversion, 'd');
}

#[test]
fn zero_before_position_stays_a_flag() {
    let d = directive("%01$5d");
    assert_eq!(d.flags, "0");
    assert_eq!(d.position, Some("1"));
    assert_eq!(d.width, Some("5"));
}

#[test]
fn star_run_is_captured_whole() {
    assert_eq!(directive("%*d").width, Some("*"));
    assert_eq!(directive("%***s").width, Some("***"));
}

#[test]
fn percent_percent() {
    let d = directive("%%");
    assert_eq!(d.conversion, '%');
    assert_eq!(d.flags, "");
}

#[test]
fn percent_with_flags_still_scans() {
    let d = directive("% %");
    assert_eq!(d.flags, " ");
    assert_eq!(d.conversion, '%');
}

#[test]
fn span_is_relative_to_source() {
    let tokens = scan("ab%5dcd").unwrap();
    let RawToken::Directive(d) = &tokens[1] else {
        panic!("expected directive");
    };
    assert_eq!(d.span, Span::new(2, 5));
}

// === Lazy trailing literal ===

#[test]
fn trailing_percent_is_literal() {
    assert_eq!(scan("50%").unwrap(), vec![RawToken::Literal("50%")]);
}

#[test]
fn incomplete_directive_folds_into_literal() {
    let tokens = scan("%d and %5").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1], RawToken::Literal(" and %5"));
}

#[test]
fn incomplete_after_flags_and_precision() {
    assert_eq!(scan("x%-08.").unwrap(), vec![RawToken::Literal("x%-08.")]);
}

#[test]
fn incomplete_position() {
    assert_eq!(scan("%1$").unwrap(), vec![RawToken::Literal("%1$")]);
}

// === Malformed directives ===

#[test]
fn unknown_conversion_is_malformed() {
    assert_eq!(
        scan("abc %z").unwrap_err(),
        ScanError::Malformed {
            directive: "%z".to_owned(),
            span: Span::new(4, 6),
        }
    );
}

#[test]
fn malformed_includes_parsed_prefix() {
    let ScanError::Malformed { directive, .. } = scan("%-5.2q").unwrap_err();
    assert_eq!(directive, "%-5.2q");
}

#[test]
fn malformed_multibyte_character() {
    let ScanError::Malformed { directive, .. } = scan("%é").unwrap_err();
    assert_eq!(directive, "%é");
}

#[test]
fn zero_position_is_malformed() {
    // `0` is a flag, so `$` is the offending character.
    let ScanError::Malformed { directive, .. } = scan("%0$s").unwrap_err();
    assert_eq!(directive, "%0$");
}

#[test]
fn star_then_position_is_malformed() {
    assert!(scan("%*1$d").is_err());
}

#[test]
fn scanner_is_fused_after_error() {
    let mut scanner = Scanner::new("%q %d");
    assert!(matches!(scanner.next(), Some(Err(_))));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
}

#[test]
fn literal_before_error_is_not_emitted() {
    let mut scanner = Scanner::new("text %!");
    assert!(matches!(scanner.next(), Some(Err(_))));
}

// === Properties ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::super::scan;
    use proptest::prelude::*;

    fn format_char() -> impl Strategy<Value = char> {
        prop_oneof![
            Just('%'),
            Just('$'),
            Just('*'),
            Just('.'),
            Just('-'),
            Just('0'),
            Just('1'),
            Just('9'),
            Just(' '),
            Just('#'),
            Just('d'),
            Just('s'),
            Just('x'),
            Just('z'),
            Just('é'),
        ]
    }

    proptest! {
        #[test]
        fn text_without_percent_is_single_literal(text in "[^%]{1,64}") {
            let tokens = scan(&text).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].source_text(), text.as_str());
        }

        #[test]
        fn successful_scan_reassembles_source(
            chars in proptest::collection::vec(format_char(), 0..48)
        ) {
            let source: String = chars.into_iter().collect();
            if let Ok(tokens) = scan(&source) {
                let rebuilt: String = tokens.iter().map(|t| t.source_text()).collect();
                prop_assert_eq!(rebuilt, source);
            }
        }

        #[test]
        fn never_panics(source in "\\PC{0,64}") {
            let _ = scan(&source);
        }
    }
}
