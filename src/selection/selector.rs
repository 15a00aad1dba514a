//! Builds the unshuffled output sequence.

use super::SelectionError;
use crate::alphabet::CharSet;
use crate::generator::Draw;

/// Selects `length` bytes from `charset`.
///
/// The result is the required picks, one per required group in
/// configuration order, followed by filler picks from the union pool.
/// Draws happen strictly in that order. Validation runs before the first
/// draw, so a rejected call leaves `rng` untouched.
pub fn select<D: Draw>(
    charset: &CharSet,
    length: usize,
    rng: &mut D,
) -> Result<Vec<u8>, SelectionError> {
    charset.validate()?;

    let minimum = charset.required_count();
    if length < minimum {
        return Err(SelectionError::LengthTooShort {
            requested: length,
            minimum,
        });
    }

    let mut output = Vec::with_capacity(length);

    for group in charset.required_groups() {
        let pool = group.pool();
        output.push(pool[rng.draw(pool.len())]);
    }

    let union = charset.union();
    let filler = length - output.len();
    tracing::trace!(
        mandatory = output.len(),
        filler,
        union_len = union.len(),
        "Drawing filler characters"
    );

    for _ in 0..filler {
        output.push(union[rng.draw(union.len())]);
    }

    Ok(output)
}
