//! Run-length grouping of ink rows and columns

/// Group set flags into runs `[start, end)`
///
/// Blank gaps of at most `max_gap` entries are absorbed into the
/// surrounding run; longer gaps split runs. Leading and trailing blank
/// entries never belong to a run.
pub(crate) fn ink_runs(flags: &[bool], max_gap: usize) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for (i, &ink) in flags.iter().enumerate() {
        if !ink {
            continue;
        }
        match runs.last_mut() {
            Some((_, end)) if i - *end <= max_gap => *end = i + 1,
            _ => runs.push((i, i + 1)),
        }
    }
    runs
}

/// Length of the longest run of consecutive set flags
pub(crate) fn longest_run(flags: &[bool]) -> usize {
    flags
        .split(|&ink| !ink)
        .map(<[bool]>::len)
        .max()
        .unwrap_or(0)
}
