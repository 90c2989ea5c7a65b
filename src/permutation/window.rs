use ahash::AHashMap;
use itertools::Itertools;

/// A source string split into characters, remembering where each character
/// starts so that windows can be handed back as `&str` slices.
#[derive(Debug, Clone)]
pub(crate) struct Windows<'a> {
    source: &'a str,
    chars: Vec<char>,
    /// Byte offset of every character, plus `source.len()` as a sentinel.
    bounds: Vec<usize>,
}

impl<'a> Windows<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let (mut bounds, chars): (Vec<usize>, Vec<char>) = source.char_indices().unzip();
        bounds.push(source.len());
        Windows {
            source,
            chars,
            bounds,
        }
    }

    /// Number of characters in the source.
    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The literal window of `len` characters starting at character `start`.
    ///
    /// Returns `None` if the window runs past the end of the source.
    pub(crate) fn slice(&self, start: usize, len: usize) -> Option<&'a str> {
        let end = start.checked_add(len)?;
        let from = *self.bounds.get(start)?;
        let to = *self.bounds.get(end)?;
        self.source.get(from..to)
    }
}

/// Decides which windows of a source carry the same character multiset as a target.
///
/// `scan` reports the character offset of every matching window, in increasing order.
pub(crate) trait WindowMatcher {
    fn window_len(&self) -> usize;

    fn scan(&mut self, windows: &Windows<'_>, on_match: impl FnMut(usize));
}

/// Compares each window by sorting a copy of it against the sorted target.
pub(crate) struct SortedMatcher {
    key: Vec<char>,
    buffer: Vec<char>,
}

impl SortedMatcher {
    pub(crate) fn new(target: &str) -> Self {
        let key = target.chars().sorted_unstable().collect_vec();
        let buffer = Vec::with_capacity(key.len());
        SortedMatcher { key, buffer }
    }
}

impl WindowMatcher for SortedMatcher {
    fn window_len(&self) -> usize {
        self.key.len()
    }

    fn scan(&mut self, windows: &Windows<'_>, mut on_match: impl FnMut(usize)) {
        let n = self.key.len();
        if n == 0 {
            return;
        }
        // `windows(n)` yields nothing when the target is longer than the source.
        for (i, window) in windows.chars().windows(n).enumerate() {
            self.buffer.clear();
            self.buffer.extend_from_slice(window);
            self.buffer.sort_unstable();
            if self.buffer == self.key {
                on_match(i);
            }
        }
    }
}

/// Slides a window over the source while keeping, per character, the
/// difference between its count in the window and its count in the target.
pub(crate) struct CountingMatcher {
    target: AHashMap<char, usize>,
    len: usize,
}

impl CountingMatcher {
    pub(crate) fn new(target: &str) -> Self {
        let mut counts = AHashMap::new();
        let mut len = 0;
        for c in target.chars() {
            *counts.entry(c).or_insert(0) += 1;
            len += 1;
        }
        CountingMatcher {
            target: counts,
            len,
        }
    }
}

impl WindowMatcher for CountingMatcher {
    fn window_len(&self) -> usize {
        self.len
    }

    fn scan(&mut self, windows: &Windows<'_>, mut on_match: impl FnMut(usize)) {
        let n = self.len;
        if n == 0 {
            return;
        }
        let mut balance = Balance::new(&self.target);
        let chars = windows.chars();
        for (i, &c) in chars.iter().enumerate() {
            balance.shift(c, 1);
            if i >= n {
                balance.shift(chars[i - n], -1);
            }
            if i + 1 >= n && balance.is_even() {
                on_match(i + 1 - n);
            }
        }
    }
}

/// Per character `window count - target count`, plus how many characters are nonzero.
struct Balance {
    diff: AHashMap<char, isize>,
    uneven: usize,
}

impl Balance {
    fn new(target: &AHashMap<char, usize>) -> Self {
        let diff: AHashMap<char, isize> = target
            .iter()
            .map(|(&c, &count)| (c, -(count as isize)))
            .collect();
        Balance {
            uneven: diff.len(),
            diff,
        }
    }

    fn shift(&mut self, c: char, delta: isize) {
        let count = self.diff.entry(c).or_insert(0);
        let was_even = *count == 0;
        *count += delta;
        match (was_even, *count == 0) {
            (true, false) => self.uneven += 1,
            (false, true) => self.uneven -= 1,
            _ => {}
        }
    }

    fn is_even(&self) -> bool {
        self.uneven == 0
    }
}
