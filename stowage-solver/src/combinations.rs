//! Index-based enumeration of the non-empty subsets of a listing group.

/// Streams every non-empty subset of `0..len` as a sorted slice of positions.
///
/// Subsets come out by increasing size, and lexicographically within one
/// size, so cheap small subsets are seen before the large ones that price
/// pruning usually discards. The current subset is lent out of an internal
/// buffer that is updated in place; nothing is allocated per subset.
///
/// # Examples
/// ```
/// use stowage_solver::combinations::CombinationEnumerator;
///
/// let mut subsets = Vec::new();
/// let mut enumerator = CombinationEnumerator::new(3);
/// while let Some(subset) = enumerator.advance() {
///     subsets.push(subset.to_vec());
/// }
/// assert_eq!(
///     subsets,
///     vec![
///         vec![0], vec![1], vec![2],
///         vec![0, 1], vec![0, 2], vec![1, 2],
///         vec![0, 1, 2],
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CombinationEnumerator {
    len: usize,
    positions: Vec<usize>,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Exhausted,
}

impl CombinationEnumerator {
    /// Prepare an enumeration over `len` items.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            positions: Vec::with_capacity(len),
            state: State::Fresh,
        }
    }

    /// Number of subsets the enumeration yields, `2^len - 1`, if it fits.
    #[must_use]
    pub fn subset_count(len: usize) -> Option<u128> {
        let exponent = u32::try_from(len).ok()?;
        1_u128.checked_shl(exponent).map(|total| total - 1)
    }

    /// Move to the next subset and lend it, or return `None` when done.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Exhausted => return None,
            State::Fresh => {
                if self.len == 0 {
                    self.state = State::Exhausted;
                    return None;
                }
                self.state = State::Running;
                self.reset_to_size(1);
            }
            State::Running => {
                if !self.step_within_size() {
                    let size = self.positions.len() + 1;
                    if size > self.len {
                        self.state = State::Exhausted;
                        return None;
                    }
                    self.reset_to_size(size);
                }
            }
        }
        Some(&self.positions)
    }

    fn reset_to_size(&mut self, size: usize) {
        self.positions.clear();
        self.positions.extend(0..size);
    }

    /// Advance to the lexicographic successor of the same size.
    fn step_within_size(&mut self) -> bool {
        let size = self.positions.len();
        let len = self.len;
        // Slot `k` of a size-`s` subset of `0..n` tops out at `n - s + k`.
        let Some(pivot) = self
            .positions
            .iter()
            .enumerate()
            .rposition(|(slot, &position)| position < len - size + slot)
        else {
            return false;
        };
        let Some(&start) = self.positions.get(pivot) else {
            return false;
        };
        for (offset, position) in self.positions.iter_mut().skip(pivot).enumerate() {
            *position = start + 1 + offset;
        }
        true
    }
}
