use crate::{
    config::StrainSkillConfig,
    skill::{filter_peaks, reduction_factor, scale_difficulty, strain_weight},
    strains::StrainsVec,
};

/// A single peak after it has been ranked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RankedPeak {
    /// The peak as it was handed in.
    pub raw: f64,
    /// The peak after dampening; equal to `raw` outside of the reduced
    /// window.
    pub reduced: f64,
    /// The weight of the peak's final rank.
    pub weight: f64,
}

impl RankedPeak {
    /// How much the peak adds to the weighted sum.
    pub fn contribution(&self) -> f64 {
        self.reduced * self.weight
    }
}

/// The difficulty value of a skill with all its intermediate steps.
///
/// Intended for debugging; [`difficulty_value`](crate::difficulty_value)
/// should be preferred because it doesn't need to keep track of the raw
/// peaks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DifficultyBreakdown {
    /// All positive peaks in the order they were summed up.
    pub peaks: Vec<RankedPeak>,
    /// The weighted sum before the final multiplier.
    pub weighted_sum: f64,
    /// The final difficulty value.
    pub value: f64,
}

impl DifficultyBreakdown {
    /// Perform the same calculation as [`difficulty_value`](crate::difficulty_value)
    /// but keep every intermediate value.
    pub fn new(peaks: impl Into<StrainsVec>, config: &StrainSkillConfig) -> Self {
        let peaks = filter_peaks(peaks.into());

        let mut pairs: Vec<_> = peaks.into_iter().map(|peak| (peak, peak)).collect();
        pairs.sort_unstable_by(|(a, _), (b, _)| b.total_cmp(a));

        let count = config.get_reduced_section_count();
        let baseline = config.get_reduced_strain_baseline();

        for (i, (_, reduced)) in pairs.iter_mut().take(count).enumerate() {
            *reduced *= reduction_factor(i, count, baseline);
        }

        pairs.sort_unstable_by(|(_, a), (_, b)| b.total_cmp(a));

        let mut weighted_sum = 0.0;

        let peaks: Vec<_> = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (raw, reduced))| {
                let peak = RankedPeak {
                    raw,
                    reduced,
                    weight: strain_weight(index),
                };

                weighted_sum += peak.contribution();

                peak
            })
            .collect();

        Self {
            peaks,
            weighted_sum,
            value: scale_difficulty(weighted_sum, config),
        }
    }

    /// Amount of peaks whose value was dampened.
    pub fn reduced_count(&self) -> usize {
        self.peaks
            .iter()
            .filter(|peak| peak.reduced < peak.raw)
            .count()
    }
}
