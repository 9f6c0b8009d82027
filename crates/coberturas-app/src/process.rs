//! Message processing
//!
//! Runs a message and every follow-up it produces through the TEA update
//! function, synchronously, before control returns to the event loop.

use std::collections::VecDeque;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use tracing::trace;

/// Process a message through the TEA update loop
pub fn process_message(state: &mut AppState, message: Message) {
    let mut pending = VecDeque::from([message]);

    while let Some(msg) = pending.pop_front() {
        trace!("Processing {:?}", msg);
        let result = handler::update(state, msg);
        pending.extend(result.messages);
    }
}
