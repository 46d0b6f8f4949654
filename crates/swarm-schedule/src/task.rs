//! The recharge task state machine.

/// Lifecycle of one agent's recharge task.
///
/// ```text
/// Idle/Done ──request──▶ WaitingForSlot ──SlotGranted──▶ Holding
///     ▲                        (slot free at request:  ──▶ Holding)
///     │                                                      │
///     └────────────────── HoldExpired ◀─────────────────────┘
///            (completes as Done; a later request starts over)
/// ```
///
/// `WaitingForSlot` has no queue entry — the wait is open-ended and ends
/// only when a release transfers the slot.  `Holding` always has exactly one
/// `HoldExpired` event pending.  There is no cancellation edge anywhere.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RechargeState {
    /// No recharge requested yet.
    #[default]
    Idle,
    /// Request issued, all slots busy; parked in the station's FIFO queue.
    WaitingForSlot,
    /// Slot occupied; hold expires at `grant + hold_duration`.
    Holding,
    /// Last recharge ran to completion.  Equivalent to `Idle` for admission.
    Done,
}

impl RechargeState {
    /// `true` when a new recharge request is admissible from this state.
    ///
    /// Mirrors the recharging flag guard: a task that is waiting or holding
    /// must never issue a second request.
    #[inline]
    pub fn can_request(self) -> bool {
        matches!(self, RechargeState::Idle | RechargeState::Done)
    }
}
