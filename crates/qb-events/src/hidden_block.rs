//! Hidden-block toggle event.

use crate::context::EventContext;

/// Flip whether hidden blocks can appear. Returns true if they are now disabled.
pub fn run_hidden_block_toggle(ctx: &mut EventContext<'_>) -> bool {
    let disabled = !ctx.board_ram.hidden_blocks_disabled;
    ctx.board_ram.hidden_blocks_disabled = disabled;
    let text = if disabled {
        "Hidden blocks have vanished from the board!"
    } else {
        "Hidden blocks are back on the board!"
    };
    ctx.host.show_message(text);
    disabled
}
