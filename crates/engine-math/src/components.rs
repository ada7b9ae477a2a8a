//! Component extraction shared by the vector types' `FromStr` and `TryFrom<&[T]>` impls

use crate::error::{MathError, MathResult};
use crate::scalar::Scalar;

/// Parses `N` components from the `Display` form of a vector, e.g. `"(1.00, -2.50)"`
///
/// Whitespace around the parentheses and around each component is ignored.
pub(crate) fn parse_components<T: Scalar, const N: usize>(input: &str) -> MathResult<[T; N]> {
    let result = parse_tuple(input);
    if let Err(error) = &result {
        log::debug!("failed to parse {N}-component vector from {input:?}: {error}");
    }
    result
}

fn parse_tuple<T: Scalar, const N: usize>(input: &str) -> MathResult<[T; N]> {
    let inner = input
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| MathError::MissingDelimiters {
            input: input.to_string(),
        })?;

    let found = inner.split(',').count();
    if found != N {
        return Err(MathError::ComponentCount { expected: N, found });
    }

    let mut components = [T::zero(); N];
    for (index, (component, text)) in components.iter_mut().zip(inner.split(',')).enumerate() {
        *component = text
            .trim()
            .parse()
            .map_err(|source| MathError::InvalidComponent { index, source })?;
    }
    Ok(components)
}

/// Copies exactly `N` components out of `slice`
pub(crate) fn components_from_slice<T: Copy, const N: usize>(slice: &[T]) -> MathResult<[T; N]> {
    <[T; N]>::try_from(slice).map_err(|_| MathError::ComponentCount {
        expected: N,
        found: slice.len(),
    })
}
