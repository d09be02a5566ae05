/// Tunable values of a single skill's strain aggregation.
///
/// Every skill variant owns one instance which stays unchanged for the
/// whole calculation. Use [`StrainSkillConfig::new`] for the defaults and
/// the builder-like setters to adjust single values.
///
/// ```
/// use rosu_strain::StrainSkillConfig;
///
/// let config = StrainSkillConfig::new()
///     .reduced_section_count(5)
///     .difficulty_multiplier(1.04);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrainSkillConfig {
    pub(crate) reduced_section_count: usize,
    pub(crate) reduced_strain_baseline: f64,
    pub(crate) difficulty_multiplier: f64,
}

impl StrainSkillConfig {
    /// The number of sections with the highest strains which the peak
    /// strain reductions will apply to.
    pub const DEFAULT_REDUCED_SECTION_COUNT: usize = 10;

    /// The baseline multiplier applied to the section with the biggest
    /// strain.
    pub const DEFAULT_REDUCED_STRAIN_BASELINE: f64 = 0.75;

    /// The final multiplier applied to the difficulty value after all other
    /// calculations.
    pub const DEFAULT_DIFFICULTY_MULTIPLIER: f64 = 1.06;

    /// Create a new config with default values.
    pub const fn new() -> Self {
        Self {
            reduced_section_count: Self::DEFAULT_REDUCED_SECTION_COUNT,
            reduced_strain_baseline: Self::DEFAULT_REDUCED_STRAIN_BASELINE,
            difficulty_multiplier: Self::DEFAULT_DIFFICULTY_MULTIPLIER,
        }
    }

    /// Create a new config and check that its values are within range.
    pub fn try_new(
        reduced_section_count: usize,
        reduced_strain_baseline: f64,
        difficulty_multiplier: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            reduced_section_count,
            reduced_strain_baseline,
            difficulty_multiplier,
        };

        config.validate().map(|()| config)
    }

    /// Config of the aim skill; all defaults.
    pub const fn aim() -> Self {
        Self::new()
    }

    /// Config of the speed skill.
    pub const fn speed() -> Self {
        Self::new()
            .reduced_section_count(5)
            .difficulty_multiplier(1.04)
    }

    /// Config of the flashlight skill which does not reduce any peaks.
    pub const fn flashlight() -> Self {
        Self::new()
            .reduced_section_count(0)
            .reduced_strain_baseline(1.0)
    }

    /// Specify the amount of highest peaks that will be dampened.
    ///
    /// A value of `0` disables dampening.
    pub const fn reduced_section_count(mut self, reduced_section_count: usize) -> Self {
        self.reduced_section_count = reduced_section_count;

        self
    }

    /// Specify the factor applied to the highest peak.
    ///
    /// Should be within `(0, 1]`.
    pub const fn reduced_strain_baseline(mut self, reduced_strain_baseline: f64) -> Self {
        self.reduced_strain_baseline = reduced_strain_baseline;

        self
    }

    /// Specify the final multiplier.
    ///
    /// Should be positive.
    pub const fn difficulty_multiplier(mut self, difficulty_multiplier: f64) -> Self {
        self.difficulty_multiplier = difficulty_multiplier;

        self
    }

    pub const fn get_reduced_section_count(&self) -> usize {
        self.reduced_section_count
    }

    pub const fn get_reduced_strain_baseline(&self) -> f64 {
        self.reduced_strain_baseline
    }

    pub const fn get_difficulty_multiplier(&self) -> f64 {
        self.difficulty_multiplier
    }

    /// Check whether the values are within their expected range.
    ///
    /// The calculation itself never validates; out-of-range values simply
    /// propagate through the arithmetic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let baseline = self.reduced_strain_baseline;

        if !(baseline > 0.0 && baseline <= 1.0) {
            return Err(ConfigError::ReducedStrainBaseline(baseline));
        }

        let multiplier = self.difficulty_multiplier;

        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(ConfigError::DifficultyMultiplier(multiplier));
        }

        Ok(())
    }
}

impl Default for StrainSkillConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// All the ways that a [`StrainSkillConfig`] can be out of range.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("reduced strain baseline must be within (0, 1], got {0}")]
    ReducedStrainBaseline(f64),
    #[error("difficulty multiplier must be finite and positive, got {0}")]
    DifficultyMultiplier(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StrainSkillConfig::default();

        assert_eq!(config.get_reduced_section_count(), 10);
        assert_eq!(config.get_reduced_strain_baseline(), 0.75);
        assert_eq!(config.get_difficulty_multiplier(), 1.06);
        assert_eq!(config, StrainSkillConfig::aim());
    }

    #[test]
    fn presets_are_valid() {
        for config in [
            StrainSkillConfig::aim(),
            StrainSkillConfig::speed(),
            StrainSkillConfig::flashlight(),
        ] {
            assert_eq!(config.validate(), Ok(()));
        }

        assert_eq!(StrainSkillConfig::speed().get_reduced_section_count(), 5);
        assert_eq!(StrainSkillConfig::flashlight().get_reduced_section_count(), 0);
    }

    #[test]
    fn zero_section_count_is_valid() {
        assert!(StrainSkillConfig::try_new(0, 0.75, 1.0).is_ok());
    }

    #[test]
    fn baseline_out_of_range() {
        for baseline in [0.0, -0.5, 1.5, f64::NAN] {
            let res = StrainSkillConfig::try_new(10, baseline, 1.06);

            assert!(
                matches!(res, Err(ConfigError::ReducedStrainBaseline(_))),
                "{baseline}: {res:?}"
            );
        }

        assert!(StrainSkillConfig::try_new(10, 1.0, 1.06).is_ok());
    }

    #[test]
    fn multiplier_out_of_range() {
        for multiplier in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            let err = StrainSkillConfig::new()
                .difficulty_multiplier(multiplier)
                .validate()
                .unwrap_err();

            assert!(matches!(err, ConfigError::DifficultyMultiplier(_)));
        }
    }

    #[test]
    fn error_message() {
        let err = StrainSkillConfig::new()
            .reduced_strain_baseline(2.0)
            .validate()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "reduced strain baseline must be within (0, 1], got 2"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize() {
        let json = r#"{
            "reduced_section_count": 5,
            "reduced_strain_baseline": 0.75,
            "difficulty_multiplier": 1.04
        }"#;

        let config: StrainSkillConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config, StrainSkillConfig::speed());
    }
}
