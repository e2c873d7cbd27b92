/// Whether `pattern` occurs in `transaction` in order, not necessarily
/// contiguously.
///
/// Greedy earliest match: one forward scan over `transaction`, consuming the
/// next wanted item whenever it shows up. The empty pattern matches anything.
pub fn is_subsequence<I: PartialEq>(pattern: &[I], transaction: &[I]) -> bool {
    if pattern.len() > transaction.len() {
        return false;
    }

    let mut items = transaction.iter();
    pattern
        .iter()
        .all(|wanted| items.any(|item| item == wanted))
}
