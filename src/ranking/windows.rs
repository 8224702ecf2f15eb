/// Overlapping comparison windows over an indexed name list.
///
/// The provider only compares a handful of names per request, so the list
/// is cut into windows of at most `cap` names. Consecutive windows share
/// exactly one boundary element, which chains the per-window orderings into
/// one connected relation.
#[derive(Debug, Clone)]
pub struct Windows {
    len: usize,
    cap: usize,
    next_start: Option<usize>,
}

impl Windows {
    /// Windows over `len` names with at most `cap` names each.
    ///
    /// `cap` is clamped to 2, the smallest batch that still compares
    /// anything. Zero names yield no windows.
    pub fn new(len: usize, cap: usize) -> Self {
        Self {
            len,
            cap: cap.max(2),
            next_start: if len == 0 { None } else { Some(0) },
        }
    }
}

impl Iterator for Windows {
    /// Half-open `(start, end)` index pair
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        let start = self.next_start?;
        let end = (start + self.cap).min(self.len);

        self.next_start = if end == self.len {
            None
        } else {
            // overlap: the last element of this window opens the next
            Some(end - 1)
        };

        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_count(len: usize, cap: usize) -> usize {
        if len <= 1 {
            len
        } else {
            (len - 2) / (cap - 1) + 1
        }
    }

    #[test]
    fn test_empty_list_has_no_windows() {
        assert_eq!(Windows::new(0, 5).count(), 0);
    }

    #[test]
    fn test_single_name_single_window() {
        let windows: Vec<_> = Windows::new(1, 5).collect();
        assert_eq!(windows, vec![(0, 1)]);
    }

    #[test]
    fn test_list_shorter_than_cap() {
        let windows: Vec<_> = Windows::new(3, 5).collect();
        assert_eq!(windows, vec![(0, 3)]);
    }

    #[test]
    fn test_windows_overlap_by_one() {
        let windows: Vec<_> = Windows::new(10, 5).collect();
        assert_eq!(windows, vec![(0, 5), (4, 9), (8, 10)]);

        for pair in windows.windows(2) {
            let (_, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            assert_eq!(next_start, prev_end - 1);
        }
    }

    #[test]
    fn test_last_window_ends_at_len() {
        for len in 1..40 {
            for cap in 2..8 {
                let windows: Vec<_> = Windows::new(len, cap).collect();
                assert_eq!(windows.last().unwrap().1, len, "len={} cap={}", len, cap);
            }
        }
    }

    #[test]
    fn test_window_count_formula() {
        // ceil((len-1)/(cap-1)) windows for len > 1
        for len in 0..40 {
            for cap in 2..8 {
                assert_eq!(
                    Windows::new(len, cap).count(),
                    expected_count(len, cap),
                    "len={} cap={}",
                    len,
                    cap
                );
            }
        }
    }

    #[test]
    fn test_every_window_within_cap() {
        for (start, end) in Windows::new(23, 4) {
            assert!(end - start <= 4);
            assert!(end > start);
        }
    }

    #[test]
    fn test_restartable() {
        let windows = Windows::new(10, 5);
        let first: Vec<_> = windows.clone().collect();
        let second: Vec<_> = windows.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_cap_is_clamped() {
        let windows: Vec<_> = Windows::new(3, 1).collect();
        assert_eq!(windows, vec![(0, 2), (1, 3)]);
    }
}
