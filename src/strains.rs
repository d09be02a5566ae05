use std::{
    iter::Copied,
    slice::{Iter, IterMut},
};

/// A list of strain peaks, one per section.
///
/// Used both for the raw peaks handed over by a strain skill and for the
/// working list that is filtered, sorted, and dampened during aggregation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrainsVec {
    inner: Vec<f64>,
}

impl StrainsVec {
    /// Constructs a new, empty [`StrainsVec`] with at least the specified
    /// capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of peaks.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether there are no peaks.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends a peak to the back.
    pub fn push(&mut self, value: f64) {
        self.inner.push(value);
    }

    /// Sorts the peaks in descending order.
    pub fn sort_desc(&mut self) {
        self.inner.sort_unstable_by(|a, b| b.total_cmp(a));
    }

    /// Removes all peaks that are not strictly positive and returns how
    /// many of them were negative.
    ///
    /// `NaN` peaks are removed as well.
    pub fn retain_positive(&mut self) -> usize {
        let mut negative = 0;

        self.inner.retain(|&peak| {
            negative += usize::from(peak < 0.0);

            peak > 0.0
        });

        negative
    }

    /// Removes all non-positive peaks and sorts the remaining ones in
    /// descending order.
    pub fn retain_positive_and_sort(&mut self) {
        self.retain_positive();
        self.sort_desc();
    }

    /// Iterator over the peaks in their current order.
    pub fn iter(&self) -> Copied<Iter<'_, f64>> {
        self.inner.iter().copied()
    }

    /// Iterator over mutable references to the peaks.
    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.inner.iter_mut()
    }

    /// Sum up all peaks.
    pub fn sum(&self) -> f64 {
        self.inner.iter().copied().sum()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.inner
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.inner
    }
}

impl From<Vec<f64>> for StrainsVec {
    fn from(inner: Vec<f64>) -> Self {
        Self { inner }
    }
}

impl From<&[f64]> for StrainsVec {
    fn from(peaks: &[f64]) -> Self {
        Self {
            inner: peaks.to_vec(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for StrainsVec {
    fn from(peaks: [f64; N]) -> Self {
        Self {
            inner: peaks.to_vec(),
        }
    }
}

impl FromIterator<f64> for StrainsVec {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<f64> for StrainsVec {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl IntoIterator for StrainsVec {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a StrainsVec {
    type Item = f64;
    type IntoIter = Copied<Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
