/// Coordinate-wise arithmetic mean of a sequence of vectors.
///
/// Consumes the sequence once. Returns `None` if it yields nothing or if
/// the vectors are not all the same length.
pub fn mean<'a, I>(vectors: I) -> Option<Vec<f32>>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut iter = vectors.into_iter();
    let first = iter.next()?;

    let dim = first.len();
    let mut out = first.to_vec();
    let mut count = 1usize;

    for v in iter {
        if v.len() != dim {
            return None;
        }
        for (acc, x) in out.iter_mut().zip(v.iter()) {
            *acc += x;
        }
        count += 1;
    }

    let n = count as f32;
    for x in out.iter_mut() {
        *x /= n;
    }

    Some(out)
}
