//! Catalog of the built-in wheels.
//!
//! Every preset provides:
//! - A wheel (labels, board colors, probabilities)
//! - A payout table and a default bet target
//! - Metadata for result captions (name, description, category)
//!
//! # Example
//! ```rust
//! use spinlab_execution::presets::{PresetInfo, PresetCategory};
//! use spinlab_types::Preset;
//!
//! let info = PresetInfo::of(Preset::ColorsTweaked);
//! assert_eq!(info.category, PresetCategory::Colors);
//! assert!(info.tweaked);
//! ```

use spinlab_types::roulette::{
    BetSpec, BetTarget, Color, Label, PayoutTable, Pocket, Preset, Wheel, DEFAULT_TARGET_NUMBER,
    EUROPEAN_POCKETS, EVEN_MONEY_PAYOUT, STRAIGHT_PAYOUT, TWEAKED_COLOR_PROBABILITY,
    TWEAKED_GREEN_PAYOUT, TWEAKED_STRAIGHT_PAYOUT, TWEAKED_ZERO_PROBABILITY,
};

/// What the wheel's labels are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetCategory {
    /// Numbers 0-36 with board colors.
    Numbers,
    /// Three color categories.
    Colors,
}

/// Display metadata for a preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetInfo {
    pub preset: Preset,
    pub name: &'static str,
    pub description: &'static str,
    pub category: PresetCategory,
    /// Whether the wheel carries a built-in house edge beyond the single zero.
    pub tweaked: bool,
}

impl PresetInfo {
    const fn new(
        preset: Preset,
        name: &'static str,
        description: &'static str,
        category: PresetCategory,
        tweaked: bool,
    ) -> Self {
        Self {
            preset,
            name,
            description,
            category,
            tweaked,
        }
    }

    pub fn of(preset: Preset) -> Self {
        match preset {
            Preset::EuropeanFair => Self::new(
                preset,
                "European (fair)",
                "Single-zero wheel, every number 1/37, straight bets pay 35:1.",
                PresetCategory::Numbers,
                false,
            ),
            Preset::EuropeanTweaked => Self::new(
                preset,
                "European (house edge)",
                "Zero weighted 5%, other numbers share the rest, straight bets pay 34.8:1.",
                PresetCategory::Numbers,
                true,
            ),
            Preset::ColorsFair => Self::new(
                preset,
                "Colors (fair)",
                "RED and BLACK 18/37 each, GREEN 1/37; colors pay 1:1, GREEN pays 35:1.",
                PresetCategory::Colors,
                false,
            ),
            Preset::ColorsTweaked => Self::new(
                preset,
                "Colors (house edge)",
                "RED and BLACK 47% each, GREEN 6%; colors pay 1:1, GREEN pays 14:1.",
                PresetCategory::Colors,
                true,
            ),
        }
    }

    /// Caption shown next to results.
    pub fn caption(&self) -> String {
        if self.tweaked {
            format!("{} - results include a built-in house edge", self.name)
        } else {
            format!("{} - fair probabilities", self.name)
        }
    }
}

/// Metadata for every preset, in declaration order.
pub fn all_presets_info() -> Vec<PresetInfo> {
    Preset::ALL.into_iter().map(PresetInfo::of).collect()
}

/// Presets in a category.
pub fn presets_by_category(category: PresetCategory) -> Vec<Preset> {
    Preset::ALL
        .into_iter()
        .filter(|preset| PresetInfo::of(*preset).category == category)
        .collect()
}

/// Number wheel with `zero` on 0 and the remaining mass split evenly.
fn number_wheel(zero: f64) -> Wheel {
    let others = (1.0 - zero) / f64::from(EUROPEAN_POCKETS - 1);
    (0..EUROPEAN_POCKETS)
        .map(|number| Pocket::number(number, if number == 0 { zero } else { others }))
        .collect()
}

fn color_wheel(red: f64, black: f64, green: f64) -> Wheel {
    Wheel::new(vec![
        Pocket::category(Color::Red, red),
        Pocket::category(Color::Black, black),
        Pocket::category(Color::Green, green),
    ])
}

/// Wheel for a preset.
pub fn wheel(preset: Preset) -> Wheel {
    let pockets = f64::from(EUROPEAN_POCKETS);
    match preset {
        Preset::EuropeanFair => number_wheel(1.0 / pockets),
        Preset::EuropeanTweaked => number_wheel(TWEAKED_ZERO_PROBABILITY),
        Preset::ColorsFair => color_wheel(18.0 / pockets, 18.0 / pockets, 1.0 / pockets),
        Preset::ColorsTweaked => color_wheel(
            TWEAKED_COLOR_PROBABILITY,
            TWEAKED_COLOR_PROBABILITY,
            1.0 - 2.0 * TWEAKED_COLOR_PROBABILITY,
        ),
    }
}

/// Payout table for a bet on `target` under a preset.
///
/// Number wheels pay by bet type: a RED or BLACK target is an even-money bet,
/// while a number or GREEN (the lone zero) pays like a straight bet.
pub fn payout(preset: Preset, target: BetTarget) -> PayoutTable {
    let even_money = matches!(target, BetTarget::Color(Color::Red | Color::Black));
    match preset {
        Preset::EuropeanFair | Preset::EuropeanTweaked if even_money => {
            PayoutTable::flat(EVEN_MONEY_PAYOUT)
        }
        Preset::EuropeanFair => PayoutTable::flat(STRAIGHT_PAYOUT),
        Preset::EuropeanTweaked => PayoutTable::flat(TWEAKED_STRAIGHT_PAYOUT),
        Preset::ColorsFair => {
            PayoutTable::with_special(EVEN_MONEY_PAYOUT, Color::Green, STRAIGHT_PAYOUT)
        }
        Preset::ColorsTweaked => {
            PayoutTable::with_special(EVEN_MONEY_PAYOUT, Color::Green, TWEAKED_GREEN_PAYOUT)
        }
    }
}

/// Target used when none is configured.
pub fn default_target(preset: Preset) -> BetTarget {
    match PresetInfo::of(preset).category {
        PresetCategory::Numbers => BetTarget::Label(Label::Number(DEFAULT_TARGET_NUMBER)),
        PresetCategory::Colors => BetTarget::Color(Color::Red),
    }
}

/// Bet on `target` with the preset's payout for that kind of target.
pub fn bet(preset: Preset, target: BetTarget, stake: f64) -> BetSpec {
    BetSpec::new(target, stake, payout(preset, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::house_edge;
    use crate::validation::{validate_bet, validate_wheel};
    use spinlab_types::roulette::{DEFAULT_STAKE, RED_NUMBERS};

    #[test]
    fn test_every_preset_is_valid() {
        for preset in Preset::ALL {
            let wheel = wheel(preset);
            assert_eq!(validate_wheel(&wheel), Ok(()), "{preset}");
            let bet = bet(preset, default_target(preset), DEFAULT_STAKE);
            assert_eq!(validate_bet(&wheel, &bet), Ok(()), "{preset}");
        }
    }

    #[test]
    fn test_number_wheels_use_board_colors() {
        for preset in presets_by_category(PresetCategory::Numbers) {
            let wheel = wheel(preset);
            assert_eq!(wheel.len(), 37);
            for pocket in wheel.pockets() {
                let Label::Number(number) = pocket.label else {
                    panic!("unexpected label {}", pocket.label);
                };
                let expected = if number == 0 {
                    Color::Green
                } else if RED_NUMBERS.contains(&number) {
                    Color::Red
                } else {
                    Color::Black
                };
                assert_eq!(pocket.color, expected);
            }
        }
    }

    #[test]
    fn test_tweaked_zero_weight() {
        let wheel = wheel(Preset::EuropeanTweaked);
        assert_eq!(wheel.pockets()[0].probability, TWEAKED_ZERO_PROBABILITY);
        assert!((wheel.pockets()[17].probability - 0.95 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            presets_by_category(PresetCategory::Colors),
            vec![Preset::ColorsFair, Preset::ColorsTweaked]
        );
        assert_eq!(all_presets_info().len(), Preset::ALL.len());
        assert_eq!(
            default_target(Preset::ColorsFair),
            BetTarget::Color(Color::Red)
        );
        assert_eq!(
            default_target(Preset::EuropeanTweaked),
            BetTarget::Label(Label::Number(17))
        );
    }

    #[test]
    fn test_info_matches_preset() {
        for info in all_presets_info() {
            assert_eq!(info.tweaked, info.preset.is_tweaked());
            assert!(!info.description.is_empty());
        }
        assert!(PresetInfo::of(Preset::ColorsTweaked)
            .caption()
            .contains("house edge"));
        assert!(PresetInfo::of(Preset::EuropeanFair)
            .caption()
            .contains("fair"));
    }

    #[test]
    fn test_tweaked_presets_favor_the_house() {
        for preset in Preset::ALL.into_iter().filter(|p| !p.is_tweaked()) {
            let tweaked = preset.counterpart();
            let target = default_target(preset);
            let fair_edge = house_edge(&wheel(preset), &bet(preset, target, 100.0)).unwrap();
            let tweaked_edge = house_edge(&wheel(tweaked), &bet(tweaked, target, 100.0)).unwrap();
            assert!((fair_edge - 1.0 / 37.0).abs() < 1e-9, "{preset}: {fair_edge}");
            assert!(tweaked_edge > fair_edge, "{tweaked}: {tweaked_edge}");
        }
    }

    #[test]
    fn test_fair_green_pays_thirty_five() {
        let preset = Preset::ColorsFair;
        let green = Pocket::category(Color::Green, 1.0 / 37.0);
        let bet = bet(preset, BetTarget::Color(Color::Green), 10.0);
        assert_eq!(bet.delta_for(&green), 350.0);
    }

    #[test]
    fn test_color_bets_on_number_wheels_pay_even_money() {
        let fair_edge = 1.0 / 37.0;
        for (preset, edge) in [
            (Preset::EuropeanFair, fair_edge),
            (Preset::EuropeanTweaked, TWEAKED_ZERO_PROBABILITY),
        ] {
            let wheel = wheel(preset);
            for color in [Color::Red, Color::Black] {
                let bet = bet(preset, BetTarget::Color(color), 100.0);
                assert_eq!(bet.payout, PayoutTable::flat(EVEN_MONEY_PAYOUT));
                assert_eq!(validate_bet(&wheel, &bet), Ok(()));

                let hit = wheel
                    .pockets()
                    .iter()
                    .find(|pocket| pocket.color == color)
                    .unwrap();
                assert_eq!(bet.delta_for(hit), 100.0);
                assert_eq!(bet.delta_for(&wheel.pockets()[0]), -100.0);

                let actual = house_edge(&wheel, &bet).unwrap();
                assert!((actual - edge).abs() < 1e-9, "{preset} {color}: {actual}");
            }
        }
    }

    #[test]
    fn test_number_wheel_payout_by_target() {
        let number = BetTarget::Label(Label::Number(17));
        let green = BetTarget::Color(Color::Green);
        assert_eq!(payout(Preset::EuropeanFair, number), PayoutTable::flat(STRAIGHT_PAYOUT));
        assert_eq!(payout(Preset::EuropeanFair, green), PayoutTable::flat(STRAIGHT_PAYOUT));
        assert_eq!(
            payout(Preset::EuropeanTweaked, number),
            PayoutTable::flat(TWEAKED_STRAIGHT_PAYOUT)
        );
        assert_eq!(
            payout(Preset::ColorsFair, BetTarget::Color(Color::Red)),
            payout(Preset::ColorsFair, green)
        );
    }
}
