//! Aggregation of osu!standard strain peaks into a skill's difficulty value.
//!
//! ## Description
//!
//! Strain skills track the momentary difficulty of a map and store the
//! highest strain of each 400ms section. This crate takes those peaks and
//! turns them into the single difficulty value of the skill, matching
//! [osu!lazer]'s `OsuStrainSkill` to the last bit:
//!
//! 1. Peaks that are not positive are discarded.
//! 2. The remaining peaks are sorted descendingly and the highest ones are
//!    dampened to soften the impact of difficulty spikes.
//! 3. After sorting again, all peaks are summed up with a weight that
//!    decays harmonically per rank.
//! 4. The sum is scaled by a final multiplier.
//!
//! The amount of dampened peaks, the dampening baseline, and the final
//! multiplier differ per skill and are provided through a
//! [`StrainSkillConfig`].
//!
//! ## Usage
//!
//! ```
//! use rosu_strain::{difficulty_value, StrainPeakSource, StrainSkillConfig};
//!
//! let peaks = vec![0.0, 112.4, 98.7, 0.0, 143.2, 120.9];
//!
//! let aim = difficulty_value(peaks.clone(), &StrainSkillConfig::aim());
//! let speed = peaks.difficulty_value(&StrainSkillConfig::speed());
//!
//! println!("Aim: {aim} | Speed: {speed}");
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `serde` | Implement `Serialize` and `Deserialize` for [`StrainSkillConfig`]. | [`serde`]
//! | `tracing` | Discarded negative peaks are logged through `tracing::warn` and each calculated value through `tracing::trace`. If this feature is not enabled, nothing is logged. | [`tracing`]
//!
//! [osu!lazer]: https://github.com/ppy/osu
//! [`serde`]: https://docs.rs/serde
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]

#[doc(inline)]
pub use self::{
    config::{ConfigError, StrainSkillConfig},
    inspect::{DifficultyBreakdown, RankedPeak},
    skill::{difficulty_value, StrainPeakSource},
    strains::StrainsVec,
};

/// Configuration of a strain skill.
pub mod config;

/// Detailed view on a calculation.
pub mod inspect;

/// The individual steps of aggregating strain peaks.
pub mod skill;

/// Container for strain peaks.
pub mod strains;
