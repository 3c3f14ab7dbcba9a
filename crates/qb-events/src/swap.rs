//! Swap events: trade controllers or turn-order positions with another player.
//!
//! The partner is drawn uniformly from every player except the one who
//! triggered the event. Only the swapped fields change hands.

use qb_core::PlayerRecord;
use qb_mechanics::next_below;
use serde::{Deserialize, Serialize};

use crate::context::EventContext;
use crate::error::{EventError, EventResult};

/// Which fields a swap exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapKind {
    /// Controller port, CPU flag, and difficulty.
    Control,
    /// Turn-order position.
    TurnOrder,
}

/// Result of a swap event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOutcome {
    /// What was swapped.
    pub kind: SwapKind,
    /// Index of the player who triggered the swap.
    pub player: usize,
    /// Index of the partner.
    pub partner: usize,
}

fn pick_partner(ctx: &mut EventContext<'_>, player_index: usize) -> EventResult<usize> {
    ctx.player(player_index)?;
    let others = ctx.players.len() - 1;
    if others == 0 {
        return Err(EventError::NotEnoughPlayers);
    }
    let bound = u32::try_from(others).unwrap_or(u32::MAX);
    let draw = match next_below(ctx.rng, bound) {
        Ok(draw) => usize::from(draw),
        Err(err) => {
            tracing::warn!(%err, "partner draw failed, using the first other player");
            0
        }
    };
    Ok(if draw >= player_index { draw + 1 } else { draw })
}

fn run_swap(
    ctx: &mut EventContext<'_>,
    player_index: usize,
    kind: SwapKind,
) -> EventResult<SwapOutcome> {
    let partner = pick_partner(ctx, player_index)?;
    let (a, b) = ctx.pair_mut(player_index, partner)?;
    match kind {
        SwapKind::Control => PlayerRecord::swap_control(a, b),
        SwapKind::TurnOrder => PlayerRecord::swap_turn_order(a, b),
    }
    let text = match kind {
        SwapKind::Control => format!("{} and {} swap controllers!", a.name, b.name),
        SwapKind::TurnOrder => format!("{} and {} swap turn order!", a.name, b.name),
    };
    ctx.board_ram.swap_count = ctx.board_ram.swap_count.wrapping_add(1);
    ctx.host.show_message(&text);
    tracing::debug!(player_index, partner, ?kind, "players swapped");
    Ok(SwapOutcome {
        kind,
        player: player_index,
        partner,
    })
}

/// Swap controller ownership with a random other player.
pub fn run_control_swap(
    ctx: &mut EventContext<'_>,
    player_index: usize,
) -> EventResult<SwapOutcome> {
    run_swap(ctx, player_index, SwapKind::Control)
}

/// Swap turn-order positions with a random other player.
pub fn run_turn_order_swap(
    ctx: &mut EventContext<'_>,
    player_index: usize,
) -> EventResult<SwapOutcome> {
    run_swap(ctx, player_index, SwapKind::TurnOrder)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use qb_core::Difficulty;

    use super::*;
    use crate::config::EventConfig;
    use crate::host::ScriptedHost;
    use crate::test_support::Fixture;

    #[test]
    fn control_swap_trades_control_fields() {
        let mut fx = Fixture::new(EventConfig::default());
        let before = fx.players.clone();
        let mut host = ScriptedHost::new();
        let outcome = run_control_swap(&mut fx.ctx(&mut host), 0).unwrap();

        let p = outcome.partner;
        assert_ne!(p, 0);
        assert!(fx.players[0].is_cpu);
        assert!(!fx.players[p].is_cpu);
        assert_eq!(fx.players[0].controller_port, before[p].controller_port);
        assert_eq!(fx.players[p].difficulty, Difficulty::Normal);
        assert_eq!(fx.players[0].difficulty, before[p].difficulty);
        assert_eq!(fx.players[0].name, "Ana");
        assert_eq!(fx.players[0].turn_order, 0);
        assert_eq!(fx.ram.swap_count, 1);
        assert!(host.last_message().unwrap().contains("swap controllers"));
    }

    #[test]
    fn turn_order_swap_trades_positions_only() {
        let mut fx = Fixture::new(EventConfig::default());
        let mut host = ScriptedHost::new();
        let outcome = run_turn_order_swap(&mut fx.ctx(&mut host), 2).unwrap();
        let p = outcome.partner;
        assert_ne!(p, 2);
        assert_eq!(fx.players[2].turn_order as usize, p);
        assert_eq!(fx.players[p].turn_order, 2);
        assert_eq!(fx.players[2].controller_port, 2);
        assert_eq!(outcome.kind, SwapKind::TurnOrder);
    }

    #[test]
    fn partner_never_self_and_all_reachable() {
        let mut fx = Fixture::new(EventConfig::default());
        let mut host = ScriptedHost::new();
        let mut partners = HashSet::new();
        for _ in 0..200 {
            let outcome = run_turn_order_swap(&mut fx.ctx(&mut host), 1).unwrap();
            assert_ne!(outcome.partner, 1);
            partners.insert(outcome.partner);
        }
        assert_eq!(partners, HashSet::from([0, 2, 3]));
        assert_eq!(fx.ram.swap_count, 200);
    }

    #[test]
    fn solo_player_cannot_swap() {
        let mut fx = Fixture::new(EventConfig::default());
        fx.players.truncate(1);
        let mut host = ScriptedHost::new();
        assert!(matches!(
            run_control_swap(&mut fx.ctx(&mut host), 0),
            Err(EventError::NotEnoughPlayers)
        ));
    }

    #[test]
    fn unknown_player_is_reported() {
        let mut fx = Fixture::new(EventConfig::default());
        let mut host = ScriptedHost::new();
        assert!(matches!(
            run_control_swap(&mut fx.ctx(&mut host), 7),
            Err(EventError::InvalidPlayer(7))
        ));
    }
}
