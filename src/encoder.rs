//! Top-level encode pipeline.
//!
//! ```text
//! input → seed → Xorshift32 → select → shuffle → output
//! ```
//!
//! One generator is created per call and threaded through selection and
//! shuffling, so the same input and configuration always consume the same
//! draws and produce the same bytes.

use crate::alphabet::AlphabetError;
use crate::config::Configuration;
use crate::generator::Xorshift32;
use crate::seed::Seed;
use crate::selection::{self, SelectionError};
use thiserror::Error;

/// Errors returned by [`encode`].
///
/// None of these are transient; retrying with the same arguments fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The char set cannot produce output.
    #[error(transparent)]
    Configuration(#[from] AlphabetError),

    /// The requested length cannot hold one character per required group.
    #[error("output length {requested} is too short; must be at least {minimum}")]
    Length {
        /// Requested output length.
        requested: usize,
        /// Number of required groups.
        minimum: usize,
    },
}

impl EncodeError {
    /// Returns true for char set problems.
    pub fn is_configuration(&self) -> bool {
        matches!(self, EncodeError::Configuration(_))
    }

    /// Returns true when the requested length was too short.
    pub fn is_length(&self) -> bool {
        matches!(self, EncodeError::Length { .. })
    }
}

impl From<SelectionError> for EncodeError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::Alphabet(e) => EncodeError::Configuration(e),
            SelectionError::LengthTooShort { requested, minimum } => {
                EncodeError::Length { requested, minimum }
            }
        }
    }
}

/// Derives `config.length` bytes from `input`.
///
/// Either returns exactly `config.length` bytes, containing at least one
/// character from every required group, or an error and no output.
pub fn encode(input: &[u8], config: &Configuration) -> Result<Vec<u8>, EncodeError> {
    let charset = &config.charset;

    tracing::debug!(
        length = config.length,
        groups = charset.groups.len(),
        required = charset.required_count(),
        union_len = charset.union_len(),
        "Encoding input"
    );

    let mut rng = Xorshift32::from_seed(Seed::from_input(input));

    let mut output = selection::select(charset, config.length, &mut rng).map_err(|e| {
        tracing::debug!(error = %e, "Encoding rejected");
        EncodeError::from(e)
    })?;

    selection::shuffle(&mut output, &mut rng);

    tracing::trace!(length = output.len(), "Encoding complete");

    Ok(output)
}

/// Reusable encoder bound to one configuration.
///
/// Holds no generator state between calls and can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: Configuration,
}

impl Encoder {
    /// Creates an encoder, rejecting char sets that can never succeed.
    pub fn new(config: Configuration) -> Result<Self, EncodeError> {
        config.charset.validate()?;
        Ok(Self { config })
    }

    /// Encodes `input` with the bound configuration.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>, EncodeError> {
        encode(input, &self.config)
    }

    /// Returns the bound configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{CharGroup, CharSet};

    fn custom_config() -> Configuration {
        Configuration::new(
            CharSet::new(vec![
                CharGroup::required("vowels", "aeiou"),
                CharGroup::required("consonants", "bcdfghjklmnpqrstvwxyz"),
                CharGroup::optional("numbers", "0123456789"),
            ]),
            10,
        )
    }

    fn assert_covers_required(output: &[u8], charset: &CharSet) {
        for group in charset.required_groups() {
            assert!(
                output.iter().any(|&b| group.contains(b)),
                "{:?} has no character from required group {:?}",
                String::from_utf8_lossy(output),
                group.name
            );
        }
    }

    #[test]
    fn test_default_configuration_vector() {
        let config = Configuration::default();
        let output = encode(b"test-input", &config).unwrap();

        assert_eq!(output, b"&voguHWb>4r$oJm/".to_vec());
        assert_covers_required(&output, &config.charset);
    }

    #[test]
    fn test_custom_groups_vector() {
        let config = custom_config();
        let output = encode(b"custom-test", &config).unwrap();

        assert_eq!(output, b"bek4x9wyih".to_vec());
        assert_covers_required(&output, &config.charset);
    }

    #[test]
    fn test_minimum_length_vector() {
        let config = Configuration::with_length(4);
        let output = encode(b"min-length", &config).unwrap();

        assert_eq!(output, b"d.V2".to_vec());
        assert_covers_required(&output, &config.charset);
    }

    #[test]
    fn test_empty_input_vector() {
        let output = encode(b"", &Configuration::default()).unwrap();

        assert_eq!(output, b"uY(!Wom7FmZ#VGmA".to_vec());
    }

    #[test]
    fn test_longer_output_vector() {
        let output = encode(b"test-input", &Configuration::with_length(32)).unwrap();

        assert_eq!(output, b"ou[Sk}bmF2uov>JS&UgH$r/i4W,uf8*b".to_vec());
    }

    #[test]
    fn test_deterministic() {
        let config = custom_config();

        let first = encode(b"same input", &config).unwrap();
        let second = encode(b"same input", &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_group_order_changes_output() {
        let config = custom_config();
        let mut reordered = config.clone();
        reordered.charset.groups.swap(0, 1);

        let original = encode(b"custom-test", &config).unwrap();
        let swapped = encode(b"custom-test", &reordered).unwrap();

        assert_ne!(original, swapped);
    }

    #[test]
    fn test_length_too_short() {
        let config = Configuration::with_length(3);
        let err = encode(b"test", &config).unwrap_err();

        assert_eq!(
            err,
            EncodeError::Length {
                requested: 3,
                minimum: 4
            }
        );
        assert!(err.is_length());
        assert_eq!(
            err.to_string(),
            "output length 3 is too short; must be at least 4"
        );
    }

    #[test]
    fn test_empty_required_group() {
        let config = Configuration::new(
            CharSet::new(vec![
                CharGroup::required("lowercase", ""),
                CharGroup::required("uppercase", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
            ]),
            6,
        );

        for length in [0, 6, 100] {
            let config = Configuration { length, ..config.clone() };
            let err = encode(b"test", &config).unwrap_err();

            assert!(err.is_configuration());
            assert_eq!(
                err.to_string(),
                "required group \"lowercase\" has no characters"
            );
        }
    }

    #[test]
    fn test_empty_union() {
        let config = Configuration::new(CharSet::new(vec![]), 10);
        let err = encode(b"anything", &config).unwrap_err();

        assert_eq!(err, EncodeError::Configuration(AlphabetError::EmptyUnion));
    }

    #[test]
    fn test_zero_length_without_required_groups() {
        let config = Configuration::new(CharSet::new(vec![CharGroup::optional("a", "ab")]), 0);

        assert_eq!(encode(b"x", &config).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encoder_rejects_invalid_charset() {
        let config = Configuration::new(CharSet::new(vec![]), 4);

        assert!(matches!(
            Encoder::new(config),
            Err(EncodeError::Configuration(AlphabetError::EmptyUnion))
        ));
    }

    #[test]
    fn test_encoder_matches_free_function() {
        let encoder = Encoder::new(custom_config()).unwrap();

        assert_eq!(
            encoder.encode(b"custom-test").unwrap(),
            encode(b"custom-test", encoder.config()).unwrap()
        );
    }

    #[test]
    fn test_parallel_calls_agree() {
        let encoder = Encoder::default();
        let expected = encoder.encode(b"test-input").unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| encoder.encode(b"test-input").unwrap()))
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
