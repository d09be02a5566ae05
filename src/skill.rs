use crate::{config::StrainSkillConfig, strains::StrainsVec};

// Constants of the weighting curve
const A: f64 = 7.5;
const B: f64 = 1.4425;
const C: f64 = 1.0;

/// Anything that produces strain peaks, one per section.
///
/// Typically implemented by a strain skill after it processed all hit
/// objects. The peaks don't need to be in any particular order.
pub trait StrainPeakSource {
    /// Returns the peaks of all sections, including the current one.
    fn current_strain_peaks(&self) -> StrainsVec;

    /// Aggregate the peaks into a single difficulty value.
    fn difficulty_value(&self, config: &StrainSkillConfig) -> f64 {
        difficulty_value(self.current_strain_peaks(), config)
    }
}

impl StrainPeakSource for [f64] {
    fn current_strain_peaks(&self) -> StrainsVec {
        StrainsVec::from(self)
    }
}

impl StrainPeakSource for Vec<f64> {
    fn current_strain_peaks(&self) -> StrainsVec {
        StrainsVec::from(self.as_slice())
    }
}

impl StrainPeakSource for StrainsVec {
    fn current_strain_peaks(&self) -> StrainsVec {
        self.clone()
    }
}

/// Aggregate strain peaks into the difficulty value of a skill.
///
/// The highest peaks are dampened, all peaks are then summed up with a
/// weight that decays per rank, and the sum is scaled by the config's
/// difficulty multiplier.
///
/// ```
/// use rosu_strain::{difficulty_value, StrainSkillConfig};
///
/// let value = difficulty_value(vec![100.0], &StrainSkillConfig::new());
///
/// assert!((value - 100.0 * 0.75 * 1.4425 * 1.06).abs() < 1e-10);
/// ```
pub fn difficulty_value(peaks: impl Into<StrainsVec>, config: &StrainSkillConfig) -> f64 {
    let mut peaks = filter_peaks(peaks.into());

    #[cfg(feature = "tracing")]
    let count = peaks.len();

    reduce_peaks(&mut peaks, config);
    let difficulty = scale_difficulty(weighted_sum(&mut peaks), config);

    #[cfg(feature = "tracing")]
    tracing::trace!(peaks = count, difficulty, "aggregated strain peaks");

    difficulty
}

/// Discard all peaks that are not strictly positive.
///
/// Sections with zero strain would not contribute anything but they could
/// blow up the following sort on maps with long breaks.
pub fn filter_peaks(mut peaks: StrainsVec) -> StrainsVec {
    let negative = peaks.retain_positive();

    #[cfg(feature = "tracing")]
    if negative > 0 {
        tracing::warn!(count = negative, "discarded negative strain peaks");
    }

    #[cfg(not(feature = "tracing"))]
    let _ = negative;

    peaks
}

/// Sort the peaks descendingly and dampen the highest ones to account for
/// extreme difficulty spikes.
pub fn reduce_peaks(peaks: &mut StrainsVec, config: &StrainSkillConfig) {
    peaks.sort_desc();

    let count = config.reduced_section_count;
    let baseline = config.reduced_strain_baseline;

    for (i, strain) in peaks.iter_mut().take(count).enumerate() {
        *strain *= reduction_factor(i, count, baseline);
    }
}

/// The factor by which the peak at rank `i` is dampened.
///
/// Starts at `reduced_strain_baseline` for the highest peak and approaches
/// `1.0` towards the end of the reduced window.
pub fn reduction_factor(
    i: usize,
    reduced_section_count: usize,
    reduced_strain_baseline: f64,
) -> f64 {
    // Division and clamp happen in single precision
    let clamped = f64::from((i as f32 / reduced_section_count as f32).clamp(0.0, 1.0));
    let scale = f64::log10(lerp(1.0, 10.0, clamped));

    lerp(reduced_strain_baseline, 1.0, scale)
}

/// Sort the peaks descendingly and sum them up with [`strain_weight`].
///
/// The sort is required again because dampening may have moved a
/// previously higher peak below others.
pub fn weighted_sum(peaks: &mut StrainsVec) -> f64 {
    peaks.sort_desc();

    let mut difficulty = 0.0;

    for (index, strain) in peaks.iter().enumerate() {
        difficulty += strain * strain_weight(index);
    }

    difficulty
}

/// The weight of the peak at the given rank.
///
/// Harmonic scaling which makes the summation logarithmic rather than
/// geometric.
pub fn strain_weight(index: usize) -> f64 {
    let index = index as f64;
    let term = f64::powf(A / (1.0 + index), C);

    B * ((1.0 + term) / (index + 1.0 + term))
}

/// Apply the final multiplier.
pub fn scale_difficulty(difficulty: f64, config: &StrainSkillConfig) -> f64 {
    difficulty * config.difficulty_multiplier
}

pub(crate) fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}
