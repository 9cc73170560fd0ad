//! Tests for controller event values

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tileswap::interaction::{InteractionEvent, TimerToken};

    // Tests applied and settled events stay distinguishable
    #[test]
    fn test_applied_and_settled_are_distinct() {
        let applied = InteractionEvent::SwapApplied {
            source_slot: 0,
            target_slot: 1,
        };
        let settled = InteractionEvent::SwapSettled {
            source_slot: 0,
            target_slot: 1,
        };

        assert_ne!(applied, settled);
    }

    // Tests timer events carry the issuing token
    #[test]
    fn test_timer_events_carry_token() {
        let token = TimerToken::new(7);
        let schedule = InteractionEvent::ScheduleLongPress {
            token,
            delay: Duration::from_millis(200),
        };

        let InteractionEvent::ScheduleLongPress { token: scheduled, delay } = schedule else {
            unreachable!("constructed as ScheduleLongPress");
        };
        assert_eq!(scheduled, token);
        assert_eq!(delay.as_millis(), 200);
        assert_eq!(
            InteractionEvent::CancelLongPress { token },
            InteractionEvent::CancelLongPress {
                token: TimerToken::new(7)
            }
        );
    }
}
