//! Taxonomy tests
//!
//! Pins the frozen numbering shared with sibling libraries.

use ewf_error::{
    ArgumentCode, CompressionCode, ConversionCode, Domain, ErrorCode, InputCode, IoCode,
    MemoryCode, OutputCode, RuntimeCode, TaxonomyError, domain_of, is_valid,
};
use rstest::*;

// ============================================================================
// Domain numbering
// ============================================================================

#[rstest]
#[case(Domain::Arguments, 'a', "arguments")]
#[case(Domain::Conversion, 'c', "conversion")]
#[case(Domain::Compression, 'C', "compression")]
#[case(Domain::Io, 'I', "io")]
#[case(Domain::Input, 'i', "input")]
#[case(Domain::Memory, 'm', "memory")]
#[case(Domain::Output, 'o', "output")]
#[case(Domain::Runtime, 'r', "runtime")]
fn test_domain_numbering(#[case] domain: Domain, #[case] ch: char, #[case] name: &str) {
    assert_eq!(domain.as_raw(), ch as i32);
    assert_eq!(domain.as_char(), ch);
    assert_eq!(domain.to_string(), name);
    assert_eq!(Domain::try_from(ch as i32), Ok(domain));
}

#[rstest]
#[case(Domain::Arguments, 10)]
#[case(Domain::Conversion, 3)]
#[case(Domain::Compression, 3)]
#[case(Domain::Io, 6)]
#[case(Domain::Input, 7)]
#[case(Domain::Memory, 4)]
#[case(Domain::Output, 1)]
#[case(Domain::Runtime, 14)]
fn test_domain_code_sets(#[case] domain: Domain, #[case] count: i32) {
    let codes = domain.codes();
    assert_eq!(codes.len() as i32, count);
    for (value, code) in codes.iter().enumerate() {
        assert_eq!(code.raw(), value as i32);
        assert_eq!(domain_of(*code), domain);
        assert!(is_valid(domain, value as i32));
    }
    assert!(!is_valid(domain, count));
    assert!(!is_valid(domain, -1));
}

#[test]
fn test_every_domain_has_generic_zero() {
    for domain in Domain::ALL {
        assert!(is_valid(domain, 0));
        let generic = ErrorCode::generic(domain);
        assert!(generic.is_generic());
        assert_eq!(generic.raw(), 0);
        assert_eq!(generic.name(), "generic");
    }
}

// ============================================================================
// Code numbering
// ============================================================================

#[rstest]
#[case(ArgumentCode::ConflictingValue.into(), 'a', 9)]
#[case(ArgumentCode::ValueLessThanZero.into(), 'a', 2)]
#[case(ConversionCode::OutputFailed.into(), 'c', 2)]
#[case(CompressionCode::UncompressFailed.into(), 'C', 2)]
#[case(IoCode::ReadFailed.into(), 'I', 4)]
#[case(IoCode::WriteFailed.into(), 'I', 5)]
#[case(InputCode::CrcMismatch.into(), 'i', 3)]
#[case(InputCode::MissingLastSection.into(), 'i', 6)]
#[case(MemoryCode::SetFailed.into(), 'm', 3)]
#[case(OutputCode::Generic.into(), 'o', 0)]
#[case(RuntimeCode::RemoveFailed.into(), 'r', 10)]
#[case(RuntimeCode::UnsupportedValue.into(), 'r', 13)]
fn test_code_numbering(#[case] code: ErrorCode, #[case] domain: char, #[case] value: i32) {
    assert_eq!(code.to_raw(), (domain as i32, value));
    assert_eq!(ErrorCode::from_raw(domain as i32, value), Ok(code));
}

#[test]
fn test_from_raw_never_substitutes_generic() {
    assert_eq!(
        ErrorCode::from_raw('C' as i32, 99),
        Err(TaxonomyError::UnknownCode {
            domain: Domain::Compression,
            code: 99
        })
    );
    assert_eq!(
        ErrorCode::from_raw(0, 0),
        Err(TaxonomyError::UnknownDomain(0))
    );
}

#[test]
fn test_all_pairs_are_distinct() {
    let pairs: Vec<(i32, i32)> = ErrorCode::all().map(ErrorCode::to_raw).collect();
    let mut unique = pairs.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(pairs.len(), unique.len());
    assert_eq!(pairs.len(), 48);
}

#[test]
fn test_display_names() {
    assert_eq!(
        ErrorCode::from(InputCode::MissingLastSegmentFile).to_string(),
        "input/missing-last-segment-file"
    );
    assert_eq!(
        ErrorCode::from(ArgumentCode::ValueZeroOrLess).to_string(),
        "arguments/value-zero-or-less"
    );
}
