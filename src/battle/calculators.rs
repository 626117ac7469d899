use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleEvent, EventBus, Side};
use crate::pokemon::PokemonInst;
use schema::{MoveData, PokemonType};

/// Damage bonus per attacker level: level 5 hits 25% harder than the base roll.
const LEVEL_DAMAGE_BONUS: f64 = 0.05;

/// What a single resolved attack did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackOutcome {
    pub base_power: u16,
    pub multiplier: f32,
    pub damage: u16,
    pub defender_fainted: bool,
}

/// `floor(base_power * effectiveness * (1 + 0.05 * level))`, saturating at `u16::MAX`.
pub fn calculate_damage(base_power: u16, effectiveness: f32, attacker_level: u32) -> u16 {
    let level_scale = 1.0 + LEVEL_DAMAGE_BONUS * attacker_level as f64;
    let raw = base_power as f64 * effectiveness as f64 * level_scale;
    // Float-to-int casts saturate, and a non-positive product floors to zero.
    raw.max(0.0).floor() as u16
}

/// Roll the move's power and apply the resulting damage to `defender`.
///
/// Pushes `MoveUsed`, then `AttackTypeEffectiveness` if the multiplier is not neutral,
/// then `DamageDealt`. Fainting is left for the caller to announce.
pub fn resolve_attack(
    attacker: &PokemonInst,
    attacker_side: Side,
    defender: &mut PokemonInst,
    move_data: &MoveData,
    rng: &mut dyn BattleRng,
    bus: &mut EventBus,
) -> AttackOutcome {
    let base_power = rng.roll(
        move_data.power.min as u32,
        move_data.power.max as u32,
        "base power",
    ) as u16;
    let multiplier = PokemonType::type_effectiveness(move_data.move_type, defender.pokemon_type);
    let damage = calculate_damage(base_power, multiplier, attacker.level);

    bus.push(BattleEvent::MoveUsed {
        side: attacker_side,
        pokemon: attacker.name.clone(),
        move_used: move_data.name.clone(),
    });
    if multiplier != 1.0 {
        bus.push(BattleEvent::AttackTypeEffectiveness { multiplier });
    }

    defender.take_damage(damage);
    bus.push(BattleEvent::DamageDealt {
        side: attacker_side.other(),
        target: defender.name.clone(),
        damage,
        remaining_hp: defender.current_hp(),
        max_hp: defender.max_hp(),
    });

    AttackOutcome {
        base_power,
        multiplier,
        damage,
        defender_fainted: defender.is_fainted(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::ScriptedRng;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("super effective at level 5", 30, 2.0, 5, 75)]
    #[case("neutral at level 1", 20, 1.0, 1, 21)]
    #[case("resisted at level 5", 25, 0.5, 5, 15)]
    #[case("immune", 40, 0.0, 50, 0)]
    #[case("zero power", 0, 2.0, 10, 0)]
    fn test_damage_formula(
        #[case] desc: &str,
        #[case] base_power: u16,
        #[case] effectiveness: f32,
        #[case] level: u32,
        #[case] expected: u16,
    ) {
        assert_eq!(
            calculate_damage(base_power, effectiveness, level),
            expected,
            "{}",
            desc
        );
    }

    #[test]
    fn test_damage_saturates_instead_of_wrapping() {
        assert_eq!(calculate_damage(u16::MAX, 2.0, 1000), u16::MAX);
    }

    #[test]
    fn test_resolve_attack_event_order() {
        let attacker = PokemonInst::new(
            "Charizard",
            PokemonType::Fire,
            5,
            120,
            vec![MoveData::new("Flamethrower", 25, 35, PokemonType::Fire)],
        );
        let mut defender = PokemonInst::new(
            "Oddish",
            PokemonType::Grass,
            1,
            100,
            vec![MoveData::new("Vine Whip", 15, 25, PokemonType::Grass)],
        );
        let flamethrower = attacker.moves()[0].clone();
        let mut rng = ScriptedRng::new(vec![30]);
        let mut bus = EventBus::new();

        let outcome = resolve_attack(
            &attacker,
            Side::Player,
            &mut defender,
            &flamethrower,
            &mut rng,
            &mut bus,
        );

        assert_eq!(outcome.damage, 75);
        assert!(!outcome.defender_fainted);
        assert_eq!(defender.current_hp(), 25);
        assert_eq!(
            bus.events(),
            &[
                BattleEvent::MoveUsed {
                    side: Side::Player,
                    pokemon: "Charizard".to_string(),
                    move_used: "Flamethrower".to_string(),
                },
                BattleEvent::AttackTypeEffectiveness { multiplier: 2.0 },
                BattleEvent::DamageDealt {
                    side: Side::Opponent,
                    target: "Oddish".to_string(),
                    damage: 75,
                    remaining_hp: 25,
                    max_hp: 100,
                },
            ]
        );
    }

    #[test]
    fn test_neutral_attack_has_no_effectiveness_event() {
        let attacker = PokemonInst::new(
            "Rattata",
            PokemonType::Normal,
            1,
            100,
            vec![MoveData::new("Tackle", 10, 20, PokemonType::Normal)],
        );
        let mut defender = attacker.clone();
        let tackle = attacker.moves()[0].clone();
        let mut bus = EventBus::new();

        resolve_attack(
            &attacker,
            Side::Opponent,
            &mut defender,
            &tackle,
            &mut ScriptedRng::new(vec![10]),
            &mut bus,
        );

        assert_eq!(bus.len(), 2);
        assert!(matches!(bus.events()[0], BattleEvent::MoveUsed { .. }));
        assert!(matches!(
            bus.events()[1],
            BattleEvent::DamageDealt {
                side: Side::Player,
                damage: 10,
                ..
            }
        ));
    }
}
