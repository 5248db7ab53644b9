//! Per-domain error codes
//!
//! Each domain owns a closed set of codes. Values are only meaningful inside
//! their domain, start at `Generic = 0` and are append-only: new codes go at
//! the end of a set, existing values are never renumbered or reused.

use std::fmt;

macro_rules! code_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Every code of the set, in numeric order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the frozen numeric value
            pub const fn as_raw(self) -> i32 {
                self as i32
            }

            /// Looks up a code by its numeric value
            pub const fn from_raw(raw: i32) -> Option<Self> {
                match raw {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Returns the kebab-case name used in logs and rendered identities
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

code_set! {
    /// Errors regarding arguments passed to a function
    ArgumentCode {
        Generic = 0 => "generic",
        /// The argument contains an invalid value
        InvalidValue = 1 => "invalid-value",
        /// The argument contains a value less than zero
        ValueLessThanZero = 2 => "value-less-than-zero",
        /// The argument contains a value zero or less
        ValueZeroOrLess = 3 => "value-zero-or-less",
        /// The argument exceeds the maximum for its type
        ValueExceedsMaximum = 4 => "value-exceeds-maximum",
        ValueTooSmall = 5 => "value-too-small",
        ValueTooLarge = 6 => "value-too-large",
        ValueOutOfRange = 7 => "value-out-of-range",
        UnsupportedValue = 8 => "unsupported-value",
        /// The argument conflicts with another argument
        ConflictingValue = 9 => "conflicting-value",
    }
}

code_set! {
    /// Errors regarding conversions
    ConversionCode {
        Generic = 0 => "generic",
        InputFailed = 1 => "input-failed",
        OutputFailed = 2 => "output-failed",
    }
}

code_set! {
    /// Errors regarding compression
    CompressionCode {
        Generic = 0 => "generic",
        CompressFailed = 1 => "compress-failed",
        UncompressFailed = 2 => "uncompress-failed",
    }
}

code_set! {
    /// Errors regarding input/output
    IoCode {
        Generic = 0 => "generic",
        OpenFailed = 1 => "open-failed",
        CloseFailed = 2 => "close-failed",
        SeekFailed = 3 => "seek-failed",
        ReadFailed = 4 => "read-failed",
        WriteFailed = 5 => "write-failed",
    }
}

code_set! {
    /// Errors regarding the handling of input data
    InputCode {
        Generic = 0 => "generic",
        /// The input contains invalid data
        InvalidData = 1 => "invalid-data",
        /// The input contains an unsupported signature
        SignatureMismatch = 2 => "signature-mismatch",
        /// A CRC in the input did not match
        CrcMismatch = 3 => "crc-mismatch",
        /// A value in the input did not match a previously read or calculated value
        ValueMismatch = 4 => "value-mismatch",
        /// The last segment file is missing from the input
        MissingLastSegmentFile = 5 => "missing-last-segment-file",
        /// The last section is missing from the input
        MissingLastSection = 6 => "missing-last-section",
    }
}

code_set! {
    /// Errors regarding memory
    MemoryCode {
        Generic = 0 => "generic",
        /// There is insufficient memory available
        Insufficient = 1 => "insufficient",
        CopyFailed = 2 => "copy-failed",
        SetFailed = 3 => "set-failed",
    }
}

code_set! {
    /// Errors regarding output
    OutputCode {
        Generic = 0 => "generic",
    }
}

code_set! {
    /// Errors regarding runtime processing of internal structures
    RuntimeCode {
        Generic = 0 => "generic",
        ValueMissing = 1 => "value-missing",
        ValueAlreadySet = 2 => "value-already-set",
        /// The creation or initialization of an internal structure failed
        InitializeFailed = 3 => "initialize-failed",
        ResizeFailed = 4 => "resize-failed",
        FreeFailed = 5 => "free-failed",
        /// The value could not be determined
        GetFailed = 6 => "get-failed",
        SetFailed = 7 => "set-failed",
        /// The value could not be appended or prepended
        AppendFailed = 8 => "append-failed",
        CopyFailed = 9 => "copy-failed",
        RemoveFailed = 10 => "remove-failed",
        ValueOutOfRange = 11 => "value-out-of-range",
        ValueExceedsMaximum = 12 => "value-exceeds-maximum",
        UnsupportedValue = 13 => "unsupported-value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_are_dense_from_zero() {
        fn check(raws: Vec<i32>) {
            let expected: Vec<i32> = (0..raws.len() as i32).collect();
            assert_eq!(raws, expected);
        }
        check(ArgumentCode::ALL.iter().map(|c| c.as_raw()).collect());
        check(ConversionCode::ALL.iter().map(|c| c.as_raw()).collect());
        check(CompressionCode::ALL.iter().map(|c| c.as_raw()).collect());
        check(IoCode::ALL.iter().map(|c| c.as_raw()).collect());
        check(InputCode::ALL.iter().map(|c| c.as_raw()).collect());
        check(MemoryCode::ALL.iter().map(|c| c.as_raw()).collect());
        check(OutputCode::ALL.iter().map(|c| c.as_raw()).collect());
        check(RuntimeCode::ALL.iter().map(|c| c.as_raw()).collect());
    }

    #[test]
    fn test_set_sizes() {
        assert_eq!(ArgumentCode::ALL.len(), 10);
        assert_eq!(ConversionCode::ALL.len(), 3);
        assert_eq!(CompressionCode::ALL.len(), 3);
        assert_eq!(IoCode::ALL.len(), 6);
        assert_eq!(InputCode::ALL.len(), 7);
        assert_eq!(MemoryCode::ALL.len(), 4);
        assert_eq!(OutputCode::ALL.len(), 1);
        assert_eq!(RuntimeCode::ALL.len(), 14);
    }

    #[test]
    fn test_from_raw_out_of_range() {
        assert_eq!(IoCode::from_raw(6), None);
        assert_eq!(IoCode::from_raw(-1), None);
        assert_eq!(CompressionCode::from_raw(3), None);
        assert_eq!(RuntimeCode::from_raw(13), Some(RuntimeCode::UnsupportedValue));
    }

    #[test]
    fn test_names() {
        assert_eq!(IoCode::ReadFailed.name(), "read-failed");
        assert_eq!(InputCode::MissingLastSegmentFile.to_string(), "missing-last-segment-file");
        assert_eq!(ArgumentCode::ValueLessThanZero.name(), "value-less-than-zero");
    }
}
