use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// All variants describe failures at the metadata-production boundary: building a
/// [`crate::metadata::record::ClassMetadataRecord`] from compiled class metadata, or reading
/// one through a [`crate::metadata::cache::MetadataSource`]. None of them ever escapes the
/// resolver: its public entry point absorbs every error into
/// [`crate::introspect::verdict::Requiredness::Unknown`], so the host framework always
/// receives a well-formed (possibly non-committal) verdict.
///
/// # Examples
///
/// ```rust
/// use reqscope::metadata::record::ClassMetadataBuilder;
/// use reqscope::metadata::signature::MemberSignature;
/// use reqscope::Error;
///
/// let sig = MemberSignature::new("value", "()I");
/// let result = ClassMetadataBuilder::new()
///     .property("a", Some(sig.clone()), None, None, false)
///     .property("b", Some(sig), None, None, true)
///     .build();
///
/// match result {
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed record: {} ({}:{})", message, file, line);
///     }
///     _ => unreachable!("duplicate field signatures must be rejected"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The compiled metadata for a class is damaged or internally inconsistent.
    ///
    /// Raised when a record violates its own invariants, e.g. two properties claiming the
    /// same field or accessor signature. The error includes the source location where the
    /// malformation was detected for debugging purposes.
    #[error("Malformed metadata - {message} - at {file}:{line}")]
    Malformed {
        /// Description of what is malformed
        message: String,
        /// Source file where the error was detected
        file: &'static str,
        /// Line number where the error was detected
        line: u32,
    },

    /// A parameter index does not fit the declared arity of its owner.
    #[error("Parameter index out of range, index: {index}, arity: {arity}")]
    OutOfBounds {
        /// The offending 0-based parameter index
        index: usize,
        /// The declared number of parameters
        arity: usize,
    },

    /// A [`crate::metadata::cache::MetadataSource`] implementation hit a reflective
    /// operation it cannot perform for the requested class.
    #[error("Unsupported metadata operation")]
    NotSupported,
}

/// Convenience `Result` type used throughout this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    #[test]
    fn malformed_error_captures_location() {
        let err = malformed_error!("duplicate signature {}", "getX:()I");
        match err {
            crate::Error::Malformed { message, file, .. } => {
                assert!(message.contains("getX:()I"));
                assert!(file.ends_with("error.rs"));
            }
            _ => panic!("expected Malformed"),
        }
    }
}
