//! Coin events: a flat reward and a double-or-nothing gamble.

use qb_mechanics::percent_chance;
use serde::{Deserialize, Serialize};

use crate::context::EventContext;
use crate::error::EventResult;

/// Result of a coin event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinOutcome {
    /// Coins actually added (negative for losses).
    pub delta: i32,
    /// The player's coins afterwards.
    pub coins: i32,
}

/// Give the player the configured coin reward.
pub fn run_coin_reward(
    ctx: &mut EventContext<'_>,
    player_index: usize,
) -> EventResult<CoinOutcome> {
    let reward = ctx.config.coin_reward;
    let player = ctx.player_mut(player_index)?;
    let delta = player.adjust_coins(reward);
    let outcome = CoinOutcome {
        delta,
        coins: player.coins,
    };
    let text = format!("{} collects {delta} coins!", player.name);
    ctx.host.show_message(&text);
    Ok(outcome)
}

/// Wager up to the configured stake on an even-odds draw.
///
/// The stake is capped at the coins the player holds; a player with no coins
/// cannot play and nothing is drawn.
pub fn run_coin_gamble(
    ctx: &mut EventContext<'_>,
    player_index: usize,
) -> EventResult<CoinOutcome> {
    let stake = ctx.config.gamble_stake;
    let held = ctx.player(player_index)?.coins;
    let bet = stake.min(held);

    if bet <= 0 {
        let player = ctx.player(player_index)?;
        let text = format!("{} has no coins to wager.", player.name);
        let outcome = CoinOutcome {
            delta: 0,
            coins: player.coins,
        };
        ctx.host.show_message(&text);
        return Ok(outcome);
    }

    let won = percent_chance(ctx.rng, 50);
    let player = ctx.player_mut(player_index)?;
    let delta = player.adjust_coins(if won { bet } else { -bet });
    let outcome = CoinOutcome {
        delta,
        coins: player.coins,
    };
    let text = if won {
        format!("{} doubles the bet and wins {delta} coins!", player.name)
    } else {
        format!("{} loses {} coins.", player.name, -delta)
    };
    ctx.host.show_message(&text);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EventConfig;
    use crate::host::ScriptedHost;
    use crate::test_support::Fixture;

    #[test]
    fn reward_adds_configured_coins() {
        let mut fx = Fixture::new(EventConfig::default());
        let mut host = ScriptedHost::new();
        let outcome = run_coin_reward(&mut fx.ctx(&mut host), 0).unwrap();
        assert_eq!(outcome, CoinOutcome { delta: 5, coins: 15 });
        assert_eq!(fx.players[0].coins, 15);
        assert_eq!(host.last_message(), Some("Ana collects 5 coins!"));
    }

    #[test]
    fn reward_respects_coin_cap() {
        let mut fx = Fixture::new(EventConfig::default());
        fx.players[2].coins = 997;
        let mut host = ScriptedHost::new();
        let outcome = run_coin_reward(&mut fx.ctx(&mut host), 2).unwrap();
        assert_eq!(outcome.delta, 2);
        assert_eq!(outcome.coins, 999);
    }

    #[test]
    fn gamble_moves_exactly_the_bet() {
        let mut fx = Fixture::new(EventConfig::default());
        let mut host = ScriptedHost::new();
        let mut wins = 0;
        for _ in 0..200 {
            fx.players[1].coins = 50;
            let outcome = run_coin_gamble(&mut fx.ctx(&mut host), 1).unwrap();
            assert!(outcome.delta == 10 || outcome.delta == -10);
            assert_eq!(outcome.coins, 50 + outcome.delta);
            if outcome.delta > 0 {
                wins += 1;
            }
        }
        assert!((60..=140).contains(&wins), "wins {wins}");
    }

    #[test]
    fn gamble_caps_bet_at_held_coins() {
        let mut fx = Fixture::new(EventConfig::default());
        fx.players[0].coins = 3;
        let mut host = ScriptedHost::new();
        let outcome = run_coin_gamble(&mut fx.ctx(&mut host), 0).unwrap();
        assert_eq!(outcome.delta.abs(), 3);
    }

    #[test]
    fn broke_player_cannot_gamble() {
        let mut fx = Fixture::new(EventConfig::default());
        fx.players[3].coins = 0;
        let mut host = ScriptedHost::new();
        let outcome = run_coin_gamble(&mut fx.ctx(&mut host), 3).unwrap();
        assert_eq!(outcome, CoinOutcome { delta: 0, coins: 0 });
        assert_eq!(host.last_message(), Some("Dee has no coins to wager."));
    }

    #[test]
    fn invalid_player_is_reported() {
        let mut fx = Fixture::new(EventConfig::default());
        let mut host = ScriptedHost::new();
        assert!(run_coin_reward(&mut fx.ctx(&mut host), 4).is_err());
        assert!(run_coin_gamble(&mut fx.ctx(&mut host), 4).is_err());
    }
}
